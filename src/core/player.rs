//! Per-side player records.

use serde::{Deserialize, Serialize};

use super::pot::PotId;
use super::side::Side;
use super::stone::Stone;

/// One side's standing in the game.
///
/// `controlled_pots` is fixed when the game starts. Captured stones are
/// returned to the supply at every round boundary; `rounds_won` only grows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub side: Side,
    controlled_pots: Vec<PotId>,
    captured: Vec<Stone>,
    rounds_won: u32,
}

impl Player {
    /// Create a player controlling the given pots.
    #[must_use]
    pub fn new(side: Side, controlled_pots: impl IntoIterator<Item = PotId>) -> Self {
        Self {
            side,
            controlled_pots: controlled_pots.into_iter().collect(),
            captured: Vec::new(),
            rounds_won: 0,
        }
    }

    /// Pots this side may select.
    #[must_use]
    pub fn controlled_pots(&self) -> &[PotId] {
        &self.controlled_pots
    }

    /// Check if this side may select a pot.
    #[must_use]
    pub fn controls(&self, pot: PotId) -> bool {
        self.controlled_pots.contains(&pot)
    }

    /// Stones captured this round.
    #[must_use]
    pub fn captured_count(&self) -> usize {
        self.captured.len()
    }

    #[must_use]
    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    /// Take ownership of captured stones.
    pub fn capture(&mut self, stones: impl IntoIterator<Item = Stone>) {
        self.captured.extend(stones);
    }

    /// Return captured stones to the supply at a round boundary.
    pub fn clear_captured(&mut self) {
        self.captured.clear();
    }

    pub fn win_round(&mut self) {
        self.rounds_won += 1;
    }

    pub(crate) fn set_rounds_won(&mut self, rounds: u32) {
        self.rounds_won = rounds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stone::StoneColor;

    #[test]
    fn test_capture_and_clear() {
        let mut player = Player::new(Side::Human, (6..12).map(PotId::new));
        assert!(player.controls(PotId::new(6)));
        assert!(!player.controls(PotId::new(5)));

        player.capture(vec![Stone::new(StoneColor::Blue); 4]);
        assert_eq!(player.captured_count(), 4);

        player.win_round();
        player.clear_captured();
        assert_eq!(player.captured_count(), 0);
        assert_eq!(player.rounds_won(), 1);
    }
}
