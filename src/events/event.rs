//! Game event types.
//!
//! Every discrete thing that happens during play is reported as a
//! `GameEvent`, in the order it happens. A presentation layer replays
//! them (e.g. as an animation queue) to stay in step with the engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Pacing, PotId, Side};
use crate::game::{GameWinner, RoundResult};
use crate::rules::EndReason;

/// A discrete game event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A round began with a freshly seeded board.
    RoundStarted { round: u32 },

    /// The computer picked the pot it is about to sow.
    OpponentSelected { pot: PotId },

    /// A pot was emptied into the acting side's hand.
    /// `relay` is set when the hand was refilled mid-turn.
    StonesLifted {
        side: Side,
        pot: PotId,
        count: usize,
        relay: bool,
    },

    /// One stone left the hand and landed in a pot.
    StoneDropped { pot: PotId, remaining_in_hand: usize },

    /// A pot reached four stones and was captured.
    PotCaptured { pot: PotId, side: Side, stones: usize },

    /// Few enough stones remained that one side swept the board.
    RemainingCaptured { side: Side, stones: usize },

    /// The acting side's turn is over.
    TurnEnded { side: Side, reason: EndReason },

    /// A side had no stones to play and lost its turn.
    TurnSkipped { side: Side },

    /// A round finished. `result` is from the human's point of view.
    RoundEnded {
        result: RoundResult,
        human_captured: usize,
        opponent_captured: usize,
        human_rounds_won: u32,
        opponent_rounds_won: u32,
    },

    /// The last round finished.
    GameOver { winner: GameWinner },
}

impl GameEvent {
    /// How long a presentation layer should dwell on this event.
    #[must_use]
    pub fn pacing(&self, pacing: &Pacing) -> Duration {
        match self {
            GameEvent::StonesLifted { .. } | GameEvent::PotCaptured { .. } => pacing.stone_pickup(),
            GameEvent::StoneDropped { .. } => pacing.stone_drop(),
            GameEvent::OpponentSelected { .. } => pacing.computer_think(),
            GameEvent::RoundEnded { .. } => pacing.round_result(),
            GameEvent::RoundStarted { .. } => pacing.round_start(),
            _ => Duration::ZERO,
        }
    }

    /// The side this event belongs to, if any.
    #[must_use]
    pub fn side(&self) -> Option<Side> {
        match self {
            GameEvent::StonesLifted { side, .. }
            | GameEvent::PotCaptured { side, .. }
            | GameEvent::RemainingCaptured { side, .. }
            | GameEvent::TurnEnded { side, .. }
            | GameEvent::TurnSkipped { side } => Some(*side),
            GameEvent::OpponentSelected { .. } => Some(Side::Opponent),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pacing() {
        let pacing = Pacing::default();

        let drop = GameEvent::StoneDropped { pot: PotId::new(3), remaining_in_hand: 2 };
        assert_eq!(drop.pacing(&pacing), Duration::from_millis(200));

        let started = GameEvent::RoundStarted { round: 2 };
        assert_eq!(started.pacing(&pacing), Duration::from_secs(3));

        let skipped = GameEvent::TurnSkipped { side: Side::Human };
        assert_eq!(skipped.pacing(&pacing), Duration::ZERO);

        assert_eq!(drop.pacing(&Pacing::instant()), Duration::ZERO);
    }

    #[test]
    fn test_side() {
        let captured = GameEvent::PotCaptured { pot: PotId::new(1), side: Side::Human, stones: 4 };
        assert_eq!(captured.side(), Some(Side::Human));
        assert_eq!(GameEvent::RoundStarted { round: 1 }.side(), None);
    }

    #[test]
    fn test_serialization() {
        let event = GameEvent::GameOver { winner: GameWinner::Draw };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
