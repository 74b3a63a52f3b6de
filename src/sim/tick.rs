//! Fixed timestep simulation tick
//!
//! One tick is always: advance + prune, then at most one spawn, then a single
//! collision evaluation against the updated set.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision;
use super::field::ObstacleField;
use super::state::{EndReason, PlayerState};
use crate::config::GameConfig;

/// Input notifications from the control surface or the host UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Press; starts a run from Idle
    HoldBegin,
    /// Drag delta since the previous move
    Move { dx: f32 },
    /// Release; fatal on the next tick
    HoldEnd,
    /// Start a fresh run from GameOver (or Idle)
    Retry,
    /// Dismiss the GameOver screen and return to Idle
    Acknowledge,
}

/// What one tick did, in the order it did it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Obstacles removed after crossing the bottom edge
    pub pruned: usize,
    /// Id of the obstacle spawned this tick
    pub spawned: Option<u64>,
    /// Set when this tick ends the run
    pub end: Option<EndReason>,
}

/// Run one tick of the obstacle pipeline against the current player state
pub fn tick<R: Rng>(
    field: &mut ObstacleField<R>,
    player: &PlayerState,
    config: &GameConfig,
) -> TickReport {
    let pruned = field.advance(config);
    let spawned = field.maybe_spawn(config);
    let end = collision::evaluate(field.obstacles(), player, config);

    TickReport {
        pruned,
        spawned,
        end,
    }
}
