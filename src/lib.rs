//! Infinite Dodge - hold, slide, survive
//!
//! Core modules:
//! - `sim`: Deterministic simulation (obstacles, collisions, game state)
//! - `ticker` / `runloop`: Fixed-period ticking and the single-threaded event queue
//! - `config`: Play-area geometry and tuning
//! - `gate`: Session and countdown gate in front of the game screen
//! - `autopilot`: Demo driver for headless runs

pub mod autopilot;
pub mod config;
pub mod error;
pub mod gate;
pub mod runloop;
pub mod sim;
pub mod ticker;

pub use config::GameConfig;
pub use error::{ConfigError, Result};
pub use runloop::{Event, RunLoop};
pub use ticker::Ticker;

/// Game configuration constants
pub mod consts {
    /// Tick period (10 Hz)
    pub const TICK_MS: u64 = 100;
    /// Maximum ticks a single clock advance may enqueue
    pub const MAX_CATCH_UP_TICKS: u32 = 8;

    // Default play area (portrait phone)
    pub const DEFAULT_WIDTH: f32 = 390.0;
    pub const DEFAULT_HEIGHT: f32 = 844.0;

    /// Obstacle defaults
    pub const FALL_STEP: f32 = 10.0;
    pub const SPAWN_PROBABILITY: f64 = 0.3;
    pub const MIN_OBSTACLE_SIZE: f32 = 30.0;
    pub const OBSTACLE_SIZE_RANGE: f32 = 40.0;
    /// Only obstacles this close to the bottom edge can hit
    pub const COLLISION_BAND: f32 = 120.0;

    /// Player defaults
    pub const PLAYER_MARGIN: f32 = 20.0;
    pub const PLAYER_RADIUS: f32 = 15.0;
    pub const PLAYER_OFFSET: f32 = 100.0;

    /// Autopilot tuning
    pub const AUTOPILOT_STEP: f32 = 12.0;
    pub const AUTOPILOT_LOOKAHEAD: f32 = 150.0;
    pub const AUTOPILOT_CLEARANCE: f32 = 10.0;
}
