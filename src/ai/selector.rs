//! Move selection strategies, one per difficulty tier.
//!
//! Strategies are trait-based so the controller can hold any of them:
//! - `EasySelector`: uniform random
//! - `MediumSelector`: takes a capture on the final drop when one exists
//! - `HardSelector`: scores the whole sow path

use tracing::trace;

use crate::core::{GameRng, PotId, Side};

use super::simulate::{BoardView, SowPath};

/// Picks the pot a side will sow.
pub trait MoveSelector: Send + Sync {
    /// Choose one of `candidates` for `side`.
    ///
    /// `candidates` are the side's non-empty pots in ring order. Returns
    /// `None` only when there is nothing to choose from.
    fn select(
        &self,
        view: &BoardView,
        side: Side,
        candidates: &[PotId],
        rng: &mut GameRng,
    ) -> Option<PotId>;
}

/// Uniform random choice.
#[derive(Clone, Copy, Debug, Default)]
pub struct EasySelector;

impl MoveSelector for EasySelector {
    fn select(
        &self,
        _view: &BoardView,
        _side: Side,
        candidates: &[PotId],
        rng: &mut GameRng,
    ) -> Option<PotId> {
        rng.choose(candidates)
    }
}

/// First candidate whose last stone captures, otherwise random.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediumSelector;

impl MoveSelector for MediumSelector {
    fn select(
        &self,
        view: &BoardView,
        side: Side,
        candidates: &[PotId],
        rng: &mut GameRng,
    ) -> Option<PotId> {
        let capturing = candidates.iter().copied().find(|&pot| {
            SowPath::simulate(view, pot).is_some_and(|path| path.captures_on_last())
        });

        match capturing {
            Some(pot) => {
                trace!(%side, %pot, "medium: capture available");
                Some(pot)
            }
            None => EasySelector.select(view, side, candidates, rng),
        }
    }
}

/// Path scoring. Highest score wins; ties go to the earlier candidate.
///
/// | Condition                                   | Score |
/// |---------------------------------------------|-------|
/// | final drop captures                         | +10   |
/// | each drop on the far side                   | +1    |
/// | each far-side drop into a pot holding 2     | -5    |
#[derive(Clone, Copy, Debug, Default)]
pub struct HardSelector;

impl HardSelector {
    pub const CAPTURE_BONUS: i32 = 10;
    pub const FAR_SIDE_BONUS: i32 = 1;
    pub const SETUP_PENALTY: i32 = -5;

    /// Score a sow path for `side`.
    #[must_use]
    pub fn score(path: &SowPath, side: Side) -> i32 {
        let mut score = 0;
        if path.captures_on_last() {
            score += Self::CAPTURE_BONUS;
        }
        for visit in path.far_side_visits(side) {
            score += Self::FAR_SIDE_BONUS;
            if visit.before == 2 {
                score += Self::SETUP_PENALTY;
            }
        }
        score
    }
}

impl MoveSelector for HardSelector {
    fn select(
        &self,
        view: &BoardView,
        side: Side,
        candidates: &[PotId],
        _rng: &mut GameRng,
    ) -> Option<PotId> {
        let mut best: Option<(PotId, i32)> = None;

        for &pot in candidates {
            let Some(path) = SowPath::simulate(view, pot) else {
                continue;
            };
            let score = Self::score(&path, side);
            trace!(%side, %pot, score, "hard: scored");
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((pot, score));
            }
        }

        best.map(|(pot, _)| pot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SowDirection, POT_COUNT};

    fn view(pairs: &[(usize, u8)]) -> BoardView {
        let mut counts = [0u8; POT_COUNT];
        for &(ring, count) in pairs {
            counts[ring] = count;
        }
        BoardView::new(counts, SowDirection::Forward)
    }

    #[test]
    fn test_easy_picks_a_candidate() {
        let view = view(&[(1, 2), (4, 1)]);
        let candidates = view.candidates(Side::Opponent);
        let mut rng = GameRng::new(42);

        for _ in 0..20 {
            let pot = EasySelector.select(&view, Side::Opponent, &candidates, &mut rng).unwrap();
            assert!(candidates.contains(&pot));
        }
    }

    #[test]
    fn test_empty_candidates() {
        let view = view(&[]);
        let mut rng = GameRng::new(1);

        assert_eq!(EasySelector.select(&view, Side::Opponent, &[], &mut rng), None);
        assert_eq!(MediumSelector.select(&view, Side::Opponent, &[], &mut rng), None);
        assert_eq!(HardSelector.select(&view, Side::Opponent, &[], &mut rng), None);
    }

    #[test]
    fn test_medium_prefers_capture() {
        // pot 0 (2 stones) ends on pot 2 holding 3; pot 4 ends on empty pot 5.
        let view = view(&[(0, 2), (2, 3), (4, 1)]);
        let candidates = [PotId::new(4), PotId::new(0)];

        for seed in 0..10 {
            let mut rng = GameRng::new(seed);
            let pot = MediumSelector.select(&view, Side::Opponent, &candidates, &mut rng);
            assert_eq!(pot, Some(PotId::new(0)));
        }
    }

    #[test]
    fn test_hard_scores_path() {
        // pot 5 (3 stones) drops into 6, 7 (holding 2) and 8: 3 - 5 = -2.
        let view = view(&[(3, 1), (5, 3), (7, 2)]);
        let path = SowPath::simulate(&view, PotId::new(5)).unwrap();
        assert_eq!(HardSelector::score(&path, Side::Opponent), -2);

        // pot 3 stays on its own side: 0.
        let mut rng = GameRng::new(0);
        let pot = HardSelector.select(&view, Side::Opponent, &view.candidates(Side::Opponent), &mut rng);
        assert_eq!(pot, Some(PotId::new(3)));
    }

    #[test]
    fn test_hard_capture_bonus_and_ties() {
        // pot 4 (3 stones) -> 5, 6, 7 where 7 holds 3: 10 + 2 = 12.
        let view = view(&[(0, 1), (1, 1), (4, 3), (7, 3)]);
        let path = SowPath::simulate(&view, PotId::new(4)).unwrap();
        assert_eq!(HardSelector::score(&path, Side::Opponent), 12);

        let mut rng = GameRng::new(0);
        let pot = HardSelector.select(&view, Side::Opponent, &view.candidates(Side::Opponent), &mut rng);
        assert_eq!(pot, Some(PotId::new(4)));

        // pots 0 and 1 both score 0; the first wins.
        let candidates = [PotId::new(0), PotId::new(1)];
        let pot = HardSelector.select(&view, Side::Opponent, &candidates, &mut rng);
        assert_eq!(pot, Some(PotId::new(0)));
    }

    #[test]
    fn test_human_side_scoring() {
        // Scoring is relative to the acting side: the far side of the human is 0..6.
        let view = view(&[(11, 2)]);
        let path = SowPath::simulate(&view, PotId::new(11)).unwrap();
        assert_eq!(HardSelector::score(&path, Side::Human), 2);
    }
}
