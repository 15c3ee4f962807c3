//! # Effect Error Types
//!
//! All errors surface at startup, while loading and validating configuration.
//! Once an [`ExplosionField`](crate::ExplosionField) is constructed, the
//! simulation itself is total: every tick succeeds.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading effect configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read from disk.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`EffectConfig`](crate::EffectConfig).
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A dimension or duration that must be strictly positive and finite
    /// was not.
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// Value that was rejected.
        value: f64,
    },

    /// A per-tick fade rate outside `(0, 1]` would stall or skip the fade.
    #[error("{field} must be in (0, 1], got {value}")]
    FadeOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Value that was rejected.
        value: f32,
    },

    /// A speed range whose upper bound does not exceed its lower bound.
    #[error("{field} is empty: min {min} must be below max {max}")]
    EmptySpeedRange {
        /// Name of the offending field.
        field: &'static str,
        /// Lower bound of the rejected range.
        min: f32,
        /// Upper bound of the rejected range.
        max: f32,
    },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
