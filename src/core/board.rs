//! The ring of pots.
//!
//! The board owns every stone that is not in a hand or a captured pile.
//! Only the sowing engine and the controller's round bookkeeping mutate
//! it; every mutation checks the pot ID and signals
//! `EngineError::UnknownPot` rather than panicking.
//!
//! ## Conservation
//!
//! The board remembers how many stones the round started with.
//! `check_conservation` verifies that board + hand + captured piles still
//! add up to that figure.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::pot::{Pot, PotId, POT_COUNT};
use super::side::Side;
use super::stone::{Hand, Stone, StoneColor};

/// Stone counts of every pot, in ring order.
pub type PotCounts = [u8; POT_COUNT];

/// Direction stones travel around the ring.
///
/// Chosen once per game and used for both real sowing and look-ahead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SowDirection {
    /// Increasing ring index.
    #[default]
    Forward,
    /// Decreasing ring index.
    Backward,
}

impl SowDirection {
    /// The ring index one step after `ring_index`.
    #[must_use]
    pub const fn step(self, ring_index: usize) -> usize {
        match self {
            SowDirection::Forward => (ring_index + 1) % POT_COUNT,
            SowDirection::Backward => (ring_index + POT_COUNT - 1) % POT_COUNT,
        }
    }
}

/// Twelve pots in ring order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pots: Vec<Pot>,
    direction: SowDirection,
    /// Stones in play this round.
    stones_in_play: usize,
}

impl Board {
    /// Create a board with `stones_per_pot` stones in every pot.
    #[must_use]
    pub fn new(stones_per_pot: u8, direction: SowDirection) -> Self {
        Self::from_counts([stones_per_pot; POT_COUNT], direction)
    }

    /// Create a board with explicit per-pot counts.
    ///
    /// Stones are colored by the side that controls the pot they start in.
    #[must_use]
    pub fn from_counts(counts: PotCounts, direction: SowDirection) -> Self {
        let pots = PotId::all()
            .map(|id| {
                let owner = id.default_owner();
                let mut pot = Pot::new(id, owner);
                for _ in 0..counts[id.ring_index()] {
                    pot.add(Stone::new(StoneColor::for_side(owner)));
                }
                pot
            })
            .collect();

        Self {
            pots,
            direction,
            stones_in_play: counts.iter().map(|&c| c as usize).sum(),
        }
    }

    /// Count `captured` stones already sitting in captured piles as in play.
    #[must_use]
    pub fn with_captured(mut self, captured: usize) -> Self {
        self.stones_in_play += captured;
        self
    }

    /// Empty every pot and seed `stones_per_pot` stones into each.
    pub fn reseed(&mut self, stones_per_pot: u8) {
        *self = Self::new(stones_per_pot, self.direction);
    }

    /// Sowing direction for this board.
    #[must_use]
    pub fn direction(&self) -> SowDirection {
        self.direction
    }

    /// The pot after `id` in sowing direction.
    #[must_use]
    pub fn next_pot(&self, id: PotId) -> PotId {
        PotId::new(self.direction.step(id.ring_index()) as u8)
    }

    // === Queries ===

    /// Look up a pot.
    #[must_use]
    pub fn pot(&self, id: PotId) -> Option<&Pot> {
        self.pots.get(id.ring_index())
    }

    /// All pots in ring order.
    #[must_use]
    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    /// Stone count of a pot. Unknown pots hold nothing.
    #[must_use]
    pub fn count(&self, id: PotId) -> usize {
        self.pot(id).map_or(0, Pot::count)
    }

    /// Check if a pot holds no stones. Unknown pots are empty.
    #[must_use]
    pub fn is_empty(&self, id: PotId) -> bool {
        self.count(id) == 0
    }

    /// Stones currently sitting in pots.
    #[must_use]
    pub fn total_stones_on_board(&self) -> usize {
        self.pots.iter().map(Pot::count).sum()
    }

    /// Check if every pot on the ring is empty.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.pots.iter().all(Pot::is_empty)
    }

    /// Pots controlled by a side, in ring order.
    pub fn controlled_pots(&self, side: Side) -> impl Iterator<Item = PotId> + '_ {
        self.pots.iter().filter(move |p| p.owner == side).map(|p| p.id)
    }

    /// Non-empty pots controlled by a side, in ring order.
    #[must_use]
    pub fn playable_pots(&self, side: Side) -> Vec<PotId> {
        self.pots
            .iter()
            .filter(|p| p.owner == side && !p.is_empty())
            .map(|p| p.id)
            .collect()
    }

    /// Check if every pot a side controls is empty.
    #[must_use]
    pub fn all_controlled_pots_empty(&self, side: Side) -> bool {
        self.pots.iter().filter(|p| p.owner == side).all(Pot::is_empty)
    }

    /// Read-only snapshot of every pot's count.
    #[must_use]
    pub fn counts(&self) -> PotCounts {
        let mut counts = [0u8; POT_COUNT];
        for pot in &self.pots {
            counts[pot.ring_index()] = pot.count() as u8;
        }
        counts
    }

    /// Stones the round started with.
    #[must_use]
    pub fn stones_in_play(&self) -> usize {
        self.stones_in_play
    }

    /// Verify board + hand + captured piles equals the round's stones.
    pub fn check_conservation(&self, in_hand: usize, captured: usize) -> Result<(), EngineError> {
        let on_board = self.total_stones_on_board();
        let accounted = on_board + in_hand + captured;
        if accounted == self.stones_in_play {
            Ok(())
        } else {
            Err(EngineError::InvariantViolation(format!(
                "stone conservation: {on_board} on board + {in_hand} in hand + {captured} captured != {}",
                self.stones_in_play
            )))
        }
    }

    // === Mutations ===

    fn pot_mut(&mut self, id: PotId) -> Result<&mut Pot, EngineError> {
        self.pots.get_mut(id.ring_index()).ok_or(EngineError::UnknownPot(id))
    }

    /// Empty a pot into a new hand.
    pub fn lift_all(&mut self, id: PotId) -> Result<Hand, EngineError> {
        let pot = self.pot_mut(id)?;
        if pot.is_empty() {
            return Err(EngineError::EmptyPot(id));
        }
        Ok(pot.take_all().into_iter().collect())
    }

    /// Add one stone to a pot.
    pub fn drop_one(&mut self, id: PotId, stone: Stone) -> Result<(), EngineError> {
        self.pot_mut(id)?.add(stone);
        Ok(())
    }

    /// Empty a pot for transfer to a captured pile.
    pub fn capture_all(&mut self, id: PotId) -> Result<Vec<Stone>, EngineError> {
        let pot = self.pot_mut(id)?;
        if pot.is_empty() {
            return Err(EngineError::EmptyPot(id));
        }
        Ok(pot.take_all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new(4, SowDirection::Forward);

        assert_eq!(board.total_stones_on_board(), 48);
        assert_eq!(board.stones_in_play(), 48);
        assert_eq!(board.controlled_pots(Side::Human).count(), 6);
        assert_eq!(board.controlled_pots(Side::Opponent).count(), 6);
        assert_eq!(
            board.pot(PotId::new(0)).map(|p| p.stones()[0].color),
            Some(StoneColor::Blue)
        );
        assert_eq!(
            board.pot(PotId::new(11)).map(|p| p.stones()[0].color),
            Some(StoneColor::Black)
        );
    }

    #[test]
    fn test_direction_step() {
        assert_eq!(SowDirection::Forward.step(11), 0);
        assert_eq!(SowDirection::Forward.step(3), 4);
        assert_eq!(SowDirection::Backward.step(0), 11);
        assert_eq!(SowDirection::Backward.step(3), 2);

        let board = Board::new(4, SowDirection::Backward);
        assert_eq!(board.next_pot(PotId::new(0)), PotId::new(11));
    }

    #[test]
    fn test_lift_drop_capture() {
        let mut board = Board::new(4, SowDirection::Forward);
        let pot = PotId::new(7);

        let mut hand = board.lift_all(pot).unwrap();
        assert_eq!(hand.len(), 4);
        assert!(board.is_empty(pot));
        assert_eq!(board.check_conservation(hand.len(), 0), Ok(()));

        let stone = hand.take_front().unwrap();
        board.drop_one(PotId::new(8), stone).unwrap();
        assert_eq!(board.count(PotId::new(8)), 5);

        let captured = board.capture_all(PotId::new(8)).unwrap();
        assert_eq!(captured.len(), 5);
        assert_eq!(board.check_conservation(hand.len(), captured.len()), Ok(()));
    }

    #[test]
    fn test_invalid_pot_operations() {
        let mut board = Board::new(4, SowDirection::Forward);
        let bogus = PotId::new(12);

        assert_eq!(board.lift_all(bogus), Err(EngineError::UnknownPot(bogus)));
        assert_eq!(
            board.drop_one(bogus, Stone::new(StoneColor::Blue)),
            Err(EngineError::UnknownPot(bogus))
        );
        assert_eq!(board.capture_all(bogus), Err(EngineError::UnknownPot(bogus)));
        assert!(board.is_empty(bogus));

        board.lift_all(PotId::new(2)).unwrap();
        assert_eq!(board.lift_all(PotId::new(2)), Err(EngineError::EmptyPot(PotId::new(2))));
    }

    #[test]
    fn test_controlled_pots_empty() {
        let mut counts = [0u8; POT_COUNT];
        counts[0] = 2;
        let board = Board::from_counts(counts, SowDirection::Forward);

        assert!(board.all_controlled_pots_empty(Side::Human));
        assert!(!board.all_controlled_pots_empty(Side::Opponent));
        assert_eq!(board.playable_pots(Side::Opponent), vec![PotId::new(0)]);
        assert_eq!(board.stones_in_play(), 2);
    }

    #[test]
    fn test_conservation_violation() {
        let board = Board::new(4, SowDirection::Forward);
        assert!(matches!(
            board.check_conservation(1, 0),
            Err(EngineError::InvariantViolation(_))
        ));
    }
}
