//! Read-only sow simulation for look-ahead.
//!
//! Selectors never touch the real board. They work on a `BoardView`, a
//! copy of the pot counts plus the game's sowing direction, and trace a
//! single sow through it without relays.

use smallvec::SmallVec;

use crate::core::{Board, PotCounts, PotId, Side, SowDirection, POT_COUNT};

/// Snapshot of the pot counts that selectors reason about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardView {
    pub counts: PotCounts,
    pub direction: SowDirection,
}

impl BoardView {
    #[must_use]
    pub fn new(counts: PotCounts, direction: SowDirection) -> Self {
        Self { counts, direction }
    }

    /// Snapshot a live board.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        Self::new(board.counts(), board.direction())
    }

    /// Stones in a pot. Unknown pots hold nothing.
    #[must_use]
    pub fn count(&self, pot: PotId) -> usize {
        self.counts.get(pot.ring_index()).map_or(0, |&c| c as usize)
    }

    /// Non-empty pots a side controls, in ring order.
    #[must_use]
    pub fn candidates(&self, side: Side) -> Vec<PotId> {
        PotId::all()
            .filter(|p| p.default_owner() == side && self.count(*p) > 0)
            .collect()
    }
}

/// One simulated drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visit {
    pub pot: PotId,
    /// The pot's count before the stone landed.
    pub before: usize,
}

impl Visit {
    /// The drop brings the pot to exactly four.
    #[must_use]
    pub fn captures(&self) -> bool {
        self.before == 3
    }
}

/// Every pot a sow from `start` would drop into, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SowPath {
    pub start: PotId,
    pub visits: SmallVec<[Visit; POT_COUNT]>,
}

impl SowPath {
    /// Trace a sow from `start` on a copy of the view's counts.
    ///
    /// The origin pot is emptied first and each drop raises the copied
    /// count, so a long sow that laps the ring sees its own stones.
    /// Returns `None` when `start` is off the ring or empty.
    #[must_use]
    pub fn simulate(view: &BoardView, start: PotId) -> Option<Self> {
        if !start.is_valid() {
            return None;
        }
        let mut counts = view.counts;
        let in_hand = std::mem::take(&mut counts[start.ring_index()]);
        if in_hand == 0 {
            return None;
        }

        let mut visits = SmallVec::new();
        let mut ring = start.ring_index();
        for _ in 0..in_hand {
            ring = view.direction.step(ring);
            visits.push(Visit {
                pot: PotId::new(ring as u8),
                before: counts[ring] as usize,
            });
            counts[ring] = counts[ring].saturating_add(1);
        }

        Some(Self { start, visits })
    }

    /// The final drop.
    #[must_use]
    pub fn landing(&self) -> Option<Visit> {
        self.visits.last().copied()
    }

    /// Check if the final drop would capture.
    #[must_use]
    pub fn captures_on_last(&self) -> bool {
        self.landing().is_some_and(|v| v.captures())
    }

    /// Drops into pots controlled by the side across from `side`.
    pub fn far_side_visits(&self, side: Side) -> impl Iterator<Item = &Visit> + '_ {
        let far = side.other();
        self.visits.iter().filter(move |v| v.pot.default_owner() == far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(pairs: &[(usize, u8)]) -> BoardView {
        let mut counts = [0u8; POT_COUNT];
        for &(ring, count) in pairs {
            counts[ring] = count;
        }
        BoardView::new(counts, SowDirection::Forward)
    }

    #[test]
    fn test_simulate_path() {
        let view = view(&[(4, 3), (6, 2)]);
        let path = SowPath::simulate(&view, PotId::new(4)).unwrap();

        let pots: Vec<usize> = path.visits.iter().map(|v| v.pot.ring_index()).collect();
        assert_eq!(pots, vec![5, 6, 7]);
        assert_eq!(path.visits[1].before, 2);
        assert_eq!(path.landing().map(|v| v.pot), Some(PotId::new(7)));
        assert!(!path.captures_on_last());
        assert_eq!(path.far_side_visits(Side::Opponent).count(), 2);
    }

    #[test]
    fn test_simulate_does_not_touch_view() {
        let view = view(&[(0, 4)]);
        let before = view;
        let _ = SowPath::simulate(&view, PotId::new(0));
        assert_eq!(view, before);
    }

    #[test]
    fn test_simulate_laps_ring() {
        // 13 stones lap the ring; the origin was emptied, so the 12th drop
        // lands in it on 0 and the 13th sees the first lap's stone.
        let view = view(&[(0, 13)]);
        let path = SowPath::simulate(&view, PotId::new(0)).unwrap();

        assert_eq!(path.visits.len(), 13);
        assert_eq!(path.visits[11], Visit { pot: PotId::new(0), before: 0 });
        assert_eq!(path.visits[12], Visit { pot: PotId::new(1), before: 1 });
    }

    #[test]
    fn test_simulate_empty_or_unknown() {
        let view = view(&[]);
        assert!(SowPath::simulate(&view, PotId::new(3)).is_none());
        assert!(SowPath::simulate(&view, PotId::new(12)).is_none());
    }

    #[test]
    fn test_candidates() {
        let view = view(&[(0, 1), (3, 2), (7, 5)]);
        assert_eq!(view.candidates(Side::Opponent), vec![PotId::new(0), PotId::new(3)]);
        assert_eq!(view.candidates(Side::Human), vec![PotId::new(7)]);
    }
}
