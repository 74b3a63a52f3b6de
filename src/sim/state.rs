//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first hold (or for a restart)
    #[default]
    Idle,
    /// Ticking: obstacles fall, score accrues
    Running,
    /// Run ended, score frozen until retry or acknowledge
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Player overlapped an obstacle inside the band
    Collision { obstacle_id: u64 },
    /// Control surface was let go
    Released,
    /// A panic escaped the tick pipeline
    Fault,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::Collision { .. } => "collision",
            EndReason::Released => "released",
            EndReason::Fault => "fault",
        }
    }
}

/// Shown by the host while in GameOver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverReport {
    pub final_score: u64,
    pub reason: EndReason,
}

/// A falling square obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Unique in creation order, never reused
    pub id: u64,
    /// Horizontal center and top-edge-relative depth
    pub pos: Vec2,
    /// Side length, fixed at spawn
    pub size: f32,
}

impl Obstacle {
    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }
}

/// Player marker state, mutated only by input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub x: f32,
    /// True while the control surface is held
    pub control_active: bool,
}

impl PlayerState {
    /// Centered, not holding
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.width / 2.0,
            control_active: false,
        }
    }
}

/// Player as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub radius: f32,
    pub control_active: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub phase: GamePhase,
    pub score: u64,
    pub player: PlayerView,
    pub obstacles: Vec<Obstacle>,
}
