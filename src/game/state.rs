//! Controller state and resumable positions.

use serde::{Deserialize, Serialize};

use crate::core::{GameRngState, PotCounts, Side, SideMap, POT_COUNT};

/// Where the controller is in the turn cycle.
///
/// ```text
/// AwaitingSelection -> TurnInProgress -> AwaitingSelection
///                                     -> RoundEnd -> AwaitingSelection
///                                                 -> GameOver
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for the active side to pick a pot.
    #[default]
    AwaitingSelection,
    /// A sow is running.
    TurnInProgress,
    /// Tallying a finished round.
    RoundEnd,
    /// Terminal until `new_game`.
    GameOver,
}

impl GameState {
    #[must_use]
    pub fn is_over(self) -> bool {
        self == GameState::GameOver
    }
}

/// A serializable snapshot of a game between turns.
///
/// `AyoGame::snapshot` produces one; `AyoGame::from_position` resumes
/// from one with `active` to move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Stones in each pot, in ring order.
    pub pots: PotCounts,
    /// Stones each side has captured this round.
    pub captured: SideMap<usize>,
    pub rounds_won: SideMap<u32>,
    /// 1-based round number.
    pub round: u32,
    /// The side to move.
    pub active: Side,
    /// The side that captured most recently this round.
    pub last_capturer: Option<Side>,
    /// Opponent RNG state. `None` reseeds from the config.
    pub rng: Option<GameRngState>,
}

impl Position {
    /// The opening position of round 1.
    #[must_use]
    pub fn opening(stones_per_pot: u8) -> Self {
        Self {
            pots: [stones_per_pot; POT_COUNT],
            captured: SideMap::with_value(0),
            rounds_won: SideMap::with_value(0),
            round: 1,
            active: Side::Human,
            last_capturer: None,
            rng: None,
        }
    }

    /// Stones on the board and in captured piles.
    #[must_use]
    pub fn total_stones(&self) -> usize {
        let on_board: usize = self.pots.iter().map(|&c| c as usize).sum();
        on_board + self.captured[Side::Human] + self.captured[Side::Opponent]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening() {
        let position = Position::opening(4);
        assert_eq!(position.total_stones(), 48);
        assert_eq!(position.active, Side::Human);
        assert_eq!(position.round, 1);
    }

    #[test]
    fn test_serialization() {
        let mut position = Position::opening(4);
        position.captured[Side::Opponent] = 8;
        position.last_capturer = Some(Side::Opponent);

        let json = serde_json::to_string(&position).unwrap();
        let deserialized: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(position, deserialized);
    }
}
