//! The sowing engine: executes one turn.
//!
//! ## Algorithm
//!
//! Lift every stone from the chosen pot, then drop them one at a time into
//! the following pots in sowing direction. Each drop is classified by the
//! target pot's count *before* the stone lands:
//!
//! | Before | Last stone? | Result                                         |
//! |--------|-------------|------------------------------------------------|
//! | 0      | yes         | turn ends (`LandedInEmptyPot`)                 |
//! | 3      | any         | pot captured; turn ends if it was the last one |
//! | other  | yes         | relay: lift the whole pot and keep sowing      |
//! | other  | no          | keep sowing                                    |
//!
//! ## Relay cycles
//!
//! Some boards relay forever. Every relay point of the turn is remembered
//! as (pot counts, position); since that pair fully determines what
//! happens next, meeting it twice means the sow can never end. The engine
//! then leaves the last stone where it landed and ends the turn with
//! `EndReason::RelayCycle`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::{Board, EngineError, Player, PotCounts, PotId, Side};
use crate::events::GameEvent;

/// Why a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// The last stone landed in an empty pot.
    LandedInEmptyPot,
    /// The last stone completed a capture.
    CaptureOnLastStone,
    /// The sow returned to a relay point it had already passed.
    RelayCycle,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            EndReason::LandedInEmptyPot => "landed in empty pot",
            EndReason::CaptureOnLastStone => "capture on last stone",
            EndReason::RelayCycle => "relay cycle",
        };
        f.write_str(text)
    }
}

/// A pot emptied into the acting side's captured pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    pub pot: PotId,
    pub stones: usize,
}

/// Result of a completed turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The side that played the turn.
    pub acting_side: Side,
    pub end_reason: EndReason,
    /// Captures in the order they happened.
    pub captures: SmallVec<[Capture; 4]>,
    /// Times the hand was refilled from the pot it emptied into.
    pub relays: u32,
    /// Stones dropped, across all relays.
    pub drops: u32,
    /// Where the final stone landed.
    pub last_pot: PotId,
    /// Sub-events in the order they happened.
    pub events: Vec<GameEvent>,
}

impl TurnOutcome {
    /// Total stones captured this turn.
    #[must_use]
    pub fn stones_captured(&self) -> usize {
        self.captures.iter().map(|c| c.stones).sum()
    }

    /// Check if anything was captured this turn.
    #[must_use]
    pub fn captured_any(&self) -> bool {
        !self.captures.is_empty()
    }
}

/// Play one turn for `player` from the pot `start`.
///
/// The pot must be controlled by `player` and hold stones; the controller
/// guarantees both, so a violation is reported as an `EngineError`.
/// Captured stones go straight into `player`'s pile.
pub fn sow(board: &mut Board, player: &mut Player, start: PotId) -> Result<TurnOutcome, EngineError> {
    let side = player.side;
    if !player.controls(start) {
        return Err(EngineError::InvariantViolation(format!(
            "{side} does not control {start}"
        )));
    }

    let mut hand = board.lift_all(start)?;
    let mut events = vec![GameEvent::StonesLifted {
        side,
        pot: start,
        count: hand.len(),
        relay: false,
    }];
    debug!(%side, pot = %start, stones = hand.len(), "sowing");

    let mut captures = SmallVec::new();
    let mut relays = 0u32;
    let mut drops = 0u32;
    let mut position = start;
    let mut relay_points: FxHashSet<(PotCounts, PotId)> = FxHashSet::default();

    let end_reason = loop {
        let Some(stone) = hand.take_front() else {
            return Err(EngineError::InvariantViolation(
                "hand emptied without a terminal drop".into(),
            ));
        };
        position = board.next_pot(position);

        let before = board.count(position);
        let last = hand.is_empty();

        board.drop_one(position, stone)?;
        drops += 1;
        events.push(GameEvent::StoneDropped {
            pot: position,
            remaining_in_hand: hand.len(),
        });
        trace!(pot = %position, before, in_hand = hand.len(), "drop");

        if last && before == 0 {
            break EndReason::LandedInEmptyPot;
        }

        if before == 3 {
            let stones = board.capture_all(position)?;
            let count = stones.len();
            player.capture(stones);
            captures.push(Capture { pot: position, stones: count });
            events.push(GameEvent::PotCaptured {
                pot: position,
                side,
                stones: count,
            });
            debug!(%side, pot = %position, stones = count, "capture");

            if last {
                break EndReason::CaptureOnLastStone;
            }
            continue;
        }

        if last {
            if !relay_points.insert((board.counts(), position)) {
                warn!(%side, pot = %position, relays, "relay cycle detected, ending turn");
                break EndReason::RelayCycle;
            }
            hand = board.lift_all(position)?;
            relays += 1;
            events.push(GameEvent::StonesLifted {
                side,
                pot: position,
                count: hand.len(),
                relay: true,
            });
        }
    };

    events.push(GameEvent::TurnEnded {
        side,
        reason: end_reason,
    });
    debug!(%side, reason = %end_reason, drops, relays, "turn ended");

    Ok(TurnOutcome {
        acting_side: side,
        end_reason,
        captures,
        relays,
        drops,
        last_pot: position,
        events,
    })
}
