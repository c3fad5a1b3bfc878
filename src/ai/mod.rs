//! Computer opponent.
//!
//! A `Difficulty` maps to one `MoveSelector`. Selectors see a `BoardView`
//! (a copy of the pot counts) and never mutate the live board.

pub mod difficulty;
pub mod selector;
pub mod simulate;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use selector::{EasySelector, HardSelector, MediumSelector, MoveSelector};
pub use simulate::{BoardView, SowPath, Visit};
