//! Error types
//!
//! Configuration is the only place the core can fail. Losing a run is a
//! normal phase transition, not an error.

use thiserror::Error;

/// Rejected or unreadable game configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid play-area dimension: {field} must be finite and positive, got {value}")]
    InvalidDimension { field: &'static str, value: f32 },

    #[error("Spawn probability must be within [0, 1], got {0}")]
    SpawnProbability(f64),

    #[error("Invalid obstacle size range: min {min} must be positive and range {range} non-negative")]
    InvalidObstacleSize { min: f32, range: f32 },

    #[error("Player margins {left} + {right} do not fit in play-area width {width}")]
    Margins { left: f32, right: f32, width: f32 },

    #[error("Tick period must be at least 1 ms")]
    ZeroTickPeriod,

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f32 },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
