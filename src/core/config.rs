//! Game configuration.
//!
//! `AyoConfig` holds everything fixed for the length of a game: stones
//! per pot, round count, difficulty, sowing direction and RNG seed. It can
//! be built in code with the `with_*` methods or loaded from TOML:
//!
//! ```
//! use ayo_engine::core::AyoConfig;
//! use ayo_engine::ai::Difficulty;
//!
//! let config = AyoConfig::from_toml_str(r#"
//!     max_rounds = 3
//!     difficulty = "hard"
//! "#).unwrap();
//!
//! assert_eq!(config.max_rounds, 3);
//! assert_eq!(config.difficulty, Difficulty::Hard);
//! assert_eq!(config.stones_per_pot, 4);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::board::SowDirection;
use super::error::ConfigError;
use crate::ai::Difficulty;

/// Largest supported stones-per-pot value; keeps pot counts within `u8`.
pub const MAX_STONES_PER_POT: u8 = 20;

/// Game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AyoConfig {
    /// Stones seeded into every pot at the start of each round.
    pub stones_per_pot: u8,

    /// Rounds in a game. The game ends after this many rounds.
    pub max_rounds: u32,

    /// Computer opponent strength.
    pub difficulty: Difficulty,

    /// Sowing direction, shared by real sowing and look-ahead.
    pub direction: SowDirection,

    /// Seed for the opponent's random choices.
    pub seed: u64,

    /// Play opponent turns as soon as the opponent becomes active.
    /// When false, the caller drives them with `play_opponent_turn`.
    pub auto_play_opponent: bool,

    /// Presentation delays. The engine never waits on these.
    pub pacing: Pacing,
}

impl Default for AyoConfig {
    fn default() -> Self {
        Self {
            stones_per_pot: 4,
            max_rounds: 5,
            difficulty: Difficulty::Medium,
            direction: SowDirection::Forward,
            seed: 42,
            auto_play_opponent: true,
            pacing: Pacing::default(),
        }
    }
}

impl AyoConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: AyoConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::Invalid("max_rounds must be at least 1".into()));
        }
        if !(1..=MAX_STONES_PER_POT).contains(&self.stones_per_pot) {
            return Err(ConfigError::Invalid(format!(
                "stones_per_pot must be between 1 and {MAX_STONES_PER_POT}, got {}",
                self.stones_per_pot
            )));
        }
        Ok(())
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_stones_per_pot(mut self, stones: u8) -> Self {
        self.stones_per_pot = stones;
        self
    }

    pub fn with_direction(mut self, direction: SowDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_auto_play_opponent(mut self, auto: bool) -> Self {
        self.auto_play_opponent = auto;
        self
    }
}

/// Presentation delays, in milliseconds.
///
/// A presentation layer waits this long after the matching event before
/// processing the next one. See `GameEvent::pacing`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pacing {
    pub stone_drop_ms: u64,
    pub stone_pickup_ms: u64,
    pub computer_think_ms: u64,
    pub round_result_ms: u64,
    pub round_start_ms: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            stone_drop_ms: 200,
            stone_pickup_ms: 300,
            computer_think_ms: 1500,
            round_result_ms: 4000,
            round_start_ms: 3000,
        }
    }
}

impl Pacing {
    /// No delays at all, for headless play.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            stone_drop_ms: 0,
            stone_pickup_ms: 0,
            computer_think_ms: 0,
            round_result_ms: 0,
            round_start_ms: 0,
        }
    }

    #[must_use]
    pub fn stone_drop(&self) -> Duration {
        Duration::from_millis(self.stone_drop_ms)
    }

    #[must_use]
    pub fn stone_pickup(&self) -> Duration {
        Duration::from_millis(self.stone_pickup_ms)
    }

    #[must_use]
    pub fn computer_think(&self) -> Duration {
        Duration::from_millis(self.computer_think_ms)
    }

    #[must_use]
    pub fn round_result(&self) -> Duration {
        Duration::from_millis(self.round_result_ms)
    }

    #[must_use]
    pub fn round_start(&self) -> Duration {
        Duration::from_millis(self.round_start_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AyoConfig::default();
        assert_eq!(config.stones_per_pot, 4);
        assert_eq!(config.max_rounds, 5);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.direction, SowDirection::Forward);
        assert!(config.auto_play_opponent);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = AyoConfig::default()
            .with_difficulty(Difficulty::Easy)
            .with_max_rounds(3)
            .with_seed(7);

        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.max_rounds, 3);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_toml_partial() {
        let config = AyoConfig::from_toml_str(
            r#"
            seed = 99
            direction = "backward"

            [pacing]
            stone_drop_ms = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, 99);
        assert_eq!(config.direction, SowDirection::Backward);
        assert_eq!(config.pacing.stone_drop(), Duration::from_millis(50));
        assert_eq!(config.pacing.stone_pickup_ms, 300);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            AyoConfig::from_toml_str("max_rounds = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AyoConfig::from_toml_str("stones_per_pot = 21"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AyoConfig::from_toml_str("max_rounds = \"five\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let config = AyoConfig::default().with_seed(123);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AyoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
