//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = one fall step)
//! - Seeded RNG only, injected at construction
//! - Stable iteration order (obstacles by creation id)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod game;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{evaluate, should_end};
pub use field::ObstacleField;
pub use game::Game;
pub use player::PlayerController;
pub use state::{
    EndReason, Frame, GameOverReport, GamePhase, Obstacle, PlayerState, PlayerView,
};
pub use tick::{InputEvent, TickReport, tick};
