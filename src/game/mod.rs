//! Turn, round and game sequencing.
//!
//! `AyoGame` owns the board and both players, accepts pot selections,
//! runs the sowing engine, and walks the round/game state machine.

pub mod controller;
pub mod result;
pub mod state;

pub use controller::{AyoGame, MAX_TOTAL_STONES};
pub use result::{GameWinner, RoundResult};
pub use state::{GameState, Position};
