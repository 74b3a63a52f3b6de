//! Game configuration
//!
//! Play-area geometry and tuning, supplied once at startup. Every field has a
//! default so a JSON file only needs to name what it overrides.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, Result};

/// Fixed configuration for a game instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Play area ===
    /// Play-area width (origin top-left)
    pub width: f32,
    /// Play-area height (y grows downward)
    pub height: f32,

    // === Timing ===
    /// Tick period in milliseconds
    pub tick_ms: u64,

    // === Obstacles ===
    /// Distance an obstacle falls per tick
    pub fall_step: f32,
    /// Chance of one spawn per tick
    pub spawn_probability: f64,
    /// Smallest obstacle side length
    pub min_obstacle_size: f32,
    /// Sizes are drawn from [min, min + range)
    pub obstacle_size_range: f32,
    /// Obstacles deeper than `height - collision_band` can hit the player
    pub collision_band: f32,

    // === Player ===
    pub margin_left: f32,
    pub margin_right: f32,
    pub player_radius: f32,
    /// Distance of the player's center above the bottom edge
    pub player_offset: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,

            tick_ms: TICK_MS,

            fall_step: FALL_STEP,
            spawn_probability: SPAWN_PROBABILITY,
            min_obstacle_size: MIN_OBSTACLE_SIZE,
            obstacle_size_range: OBSTACLE_SIZE_RANGE,
            collision_band: COLLISION_BAND,

            margin_left: PLAYER_MARGIN,
            margin_right: PLAYER_MARGIN,
            player_radius: PLAYER_RADIUS,
            player_offset: PLAYER_OFFSET,
        }
    }
}

impl GameConfig {
    /// Default tuning for a play area of the given size (not yet validated)
    pub fn for_play_area(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse a JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Tick period as a duration
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Fixed vertical position of the player's center
    pub fn player_y(&self) -> f32 {
        self.height - self.player_offset
    }

    /// Smallest allowed player x
    pub fn min_player_x(&self) -> f32 {
        self.margin_left
    }

    /// Largest allowed player x
    pub fn max_player_x(&self) -> f32 {
        self.width - self.margin_right
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { field, value });
            }
        }

        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }

        // NaN fails the range check too
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(ConfigError::SpawnProbability(self.spawn_probability));
        }

        let min = self.min_obstacle_size;
        let range = self.obstacle_size_range;
        if !min.is_finite() || min <= 0.0 || !range.is_finite() || range < 0.0 {
            return Err(ConfigError::InvalidObstacleSize { min, range });
        }
        // A range too small to register at this magnitude leaves nothing to sample
        if range > 0.0 && min + range <= min {
            return Err(ConfigError::InvalidObstacleSize { min, range });
        }

        if !self.fall_step.is_finite() || self.fall_step <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "fall_step",
                value: self.fall_step,
            });
        }

        for (field, value) in [
            ("collision_band", self.collision_band),
            ("margin_left", self.margin_left),
            ("margin_right", self.margin_right),
            ("player_radius", self.player_radius),
            ("player_offset", self.player_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }

        if self.margin_left + self.margin_right > self.width {
            return Err(ConfigError::Margins {
                left: self.margin_left,
                right: self.margin_right,
                width: self.width,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_period(), Duration::from_millis(100));
        assert_eq!(config.max_player_x(), config.width - 20.0);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let config = GameConfig::for_play_area(0.0, 800.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimension { field: "width", .. })
        ));

        let config = GameConfig::for_play_area(400.0, -1.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimension { field: "height", .. })
        ));

        let config = GameConfig::for_play_area(f32::NAN, 800.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_probability() {
        for p in [-0.1, 1.5, f64::NAN] {
            let config = GameConfig {
                spawn_probability: p,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::SpawnProbability(_))
            ));
        }

        // Bounds are inclusive
        for p in [0.0, 1.0] {
            let config = GameConfig {
                spawn_probability: p,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_rejects_margins_wider_than_area() {
        let config = GameConfig {
            margin_left: 30.0,
            margin_right: 30.0,
            ..GameConfig::for_play_area(50.0, 100.0)
        };
        assert!(matches!(config.validate(), Err(ConfigError::Margins { .. })));
    }

    #[test]
    fn test_rejects_vanishing_size_range() {
        let config = GameConfig {
            spawn_probability: 1.0,
            obstacle_size_range: 1e-7,
            ..GameConfig::for_play_area(400.0, 800.0)
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidObstacleSize { .. })
        ));

        // Zero still means a fixed size
        let config = GameConfig {
            obstacle_size_range: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_tick() {
        let config = GameConfig {
            tick_ms: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTickPeriod)));
    }

    #[test]
    fn test_from_json_partial() {
        let config = GameConfig::from_json(r#"{ "width": 360, "height": 640 }"#).unwrap();
        assert_eq!(config.width, 360.0);
        assert_eq!(config.height, 640.0);
        assert_eq!(config.spawn_probability, SPAWN_PROBABILITY);
        assert_eq!(config.player_y(), 540.0);
    }

    #[test]
    fn test_from_json_validates() {
        let err = GameConfig::from_json(r#"{ "spawn_probability": 2.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::SpawnProbability(_)));

        let err = GameConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
