//! Turn rules.
//!
//! `sow` executes a single turn on the board: lift, distribute, capture,
//! relay. Round and game sequencing live in `game`.

pub mod sowing;

pub use sowing::{sow, Capture, EndReason, TurnOutcome};
