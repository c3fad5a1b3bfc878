//! # ayo-engine
//!
//! Rule engine for Ayo, the Yoruba member of the Oware family of mancala
//! games, played by one human against a computer opponent.
//!
//! ## The Game
//!
//! Twelve pots sit in a ring; each side controls six. On a turn the side
//! lifts every stone from one of its pots and drops them one by one into
//! the following pots:
//!
//! 1. **Capture**: a drop that brings a pot to exactly four captures it.
//! 2. **Relay**: a last stone landing in an occupied pot picks that pot up
//!    and keeps sowing.
//! 3. **Stop**: a last stone landing in an empty pot ends the turn.
//!
//! A round ends when the board empties or the last capturer sweeps the
//! final four or fewer stones. More captured stones wins the round; more
//! round wins takes the game.
//!
//! ## Architecture
//!
//! - **No presentation coupling**: the engine never animates or waits. It
//!   reports every step as a `GameEvent`, in order, with pacing hints.
//!
//! - **Pluggable collaborators**: observers, score sinks and move
//!   selectors are traits, injected at construction.
//!
//! - **Reproducible**: the computer's random choices come from a seeded
//!   ChaCha8 RNG.
//!
//! ## Modules
//!
//! - `core`: Sides, stones, pots, the board, RNG, configuration, errors
//! - `rules`: The sowing engine
//! - `ai`: Difficulty tiers and move selectors
//! - `events`: Game events and observers
//! - `score`: Point awards
//! - `game`: The turn/round/game controller

pub mod core;
pub mod rules;
pub mod ai;
pub mod events;
pub mod score;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap, Player,
    Stone, StoneColor, Hand,
    Pot, PotId, POT_COUNT, POTS_PER_SIDE,
    Board, PotCounts, SowDirection,
    GameRng, GameRngState,
    AyoConfig, Pacing,
    ConfigError, EngineError,
};

pub use crate::rules::{sow, Capture, EndReason, TurnOutcome};

pub use crate::ai::{
    Difficulty, MoveSelector, BoardView, SowPath,
    EasySelector, MediumSelector, HardSelector,
};

pub use crate::events::{GameEvent, GameObserver, EventLog, NullObserver};

pub use crate::score::{ScoreAward, ScoreSink, ScoreTally};

pub use crate::game::{AyoGame, GameState, GameWinner, Position, RoundResult};
