//! Round and game results.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Outcome of a round, from the human's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    Win,
    Lose,
    Draw,
}

impl RoundResult {
    /// More captured stones wins the round.
    #[must_use]
    pub fn from_captures(human: usize, opponent: usize) -> Self {
        match human.cmp(&opponent) {
            std::cmp::Ordering::Greater => RoundResult::Win,
            std::cmp::Ordering::Less => RoundResult::Lose,
            std::cmp::Ordering::Equal => RoundResult::Draw,
        }
    }

    /// The side that won, if any.
    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundResult::Win => Some(Side::Human),
            RoundResult::Lose => Some(Side::Opponent),
            RoundResult::Draw => None,
        }
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RoundResult::Win => "win",
            RoundResult::Lose => "lose",
            RoundResult::Draw => "draw",
        })
    }
}

/// Winner of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameWinner {
    Human,
    Opponent,
    Draw,
}

impl GameWinner {
    /// More rounds won wins the game.
    #[must_use]
    pub fn from_rounds(human: u32, opponent: u32) -> Self {
        match human.cmp(&opponent) {
            std::cmp::Ordering::Greater => GameWinner::Human,
            std::cmp::Ordering::Less => GameWinner::Opponent,
            std::cmp::Ordering::Equal => GameWinner::Draw,
        }
    }

    #[must_use]
    pub fn side(self) -> Option<Side> {
        match self {
            GameWinner::Human => Some(Side::Human),
            GameWinner::Opponent => Some(Side::Opponent),
            GameWinner::Draw => None,
        }
    }
}

impl std::fmt::Display for GameWinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.side() {
            Some(side) => write!(f, "{side} wins"),
            None => f.write_str("draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_result() {
        assert_eq!(RoundResult::from_captures(24, 20), RoundResult::Win);
        assert_eq!(RoundResult::from_captures(8, 40), RoundResult::Lose);
        assert_eq!(RoundResult::from_captures(24, 24), RoundResult::Draw);
        assert_eq!(RoundResult::Lose.winner(), Some(Side::Opponent));
        assert_eq!(RoundResult::Draw.winner(), None);
    }

    #[test]
    fn test_game_winner() {
        assert_eq!(GameWinner::from_rounds(3, 2), GameWinner::Human);
        assert_eq!(GameWinner::from_rounds(1, 2), GameWinner::Opponent);
        assert_eq!(GameWinner::from_rounds(2, 2), GameWinner::Draw);
        assert_eq!(GameWinner::Human.to_string(), "Player1 wins");
        assert_eq!(GameWinner::Draw.to_string(), "draw");
    }
}
