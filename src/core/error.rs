//! Engine error types.
//!
//! Rejected selections are not errors: the controller treats them as
//! no-ops. `EngineError` signals a broken internal guarantee and ends the
//! turn that hit it.

use thiserror::Error;

use super::pot::PotId;

/// Internal consistency violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A pot ID outside the ring.
    #[error("unknown pot {0}")]
    UnknownPot(PotId),

    /// Lift or capture requested on a pot holding no stones.
    #[error("pot {0} is empty")]
    EmptyPot(PotId),

    /// A rule-engine invariant no longer holds.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
