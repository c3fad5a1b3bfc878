//! Core building blocks: sides, players, stones, pots, the board, RNG,
//! configuration.
//!
//! These types carry no turn logic; the sowing engine in `rules` and the
//! controller in `game` drive them.

pub mod side;
pub mod player;
pub mod stone;
pub mod pot;
pub mod board;
pub mod rng;
pub mod config;
pub mod error;

pub use side::{Side, SideMap};
pub use player::Player;
pub use stone::{Hand, Stone, StoneColor};
pub use pot::{ParsePotIdError, Pot, PotId, POTS_PER_SIDE, POT_COUNT};
pub use board::{Board, PotCounts, SowDirection};
pub use rng::{GameRng, GameRngState};
pub use config::{AyoConfig, Pacing, MAX_STONES_PER_POT};
pub use error::{ConfigError, EngineError};
