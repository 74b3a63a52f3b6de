//! Collision detection
//!
//! Pure checks over a snapshot of the obstacle set and the player. Only
//! obstacles that have fallen into the band above the bottom edge can hit;
//! anything higher up is ignored no matter how well it lines up.

use super::state::{EndReason, Obstacle, PlayerState};
use crate::config::GameConfig;

/// True if the obstacle is deep enough to be collision-eligible
#[inline]
pub fn in_band(obstacle: &Obstacle, height: f32, band: f32) -> bool {
    obstacle.pos.y > height - band
}

/// Horizontal overlap between an obstacle's square and the player's center
#[inline]
pub fn overlaps_horizontally(obstacle: &Obstacle, player_x: f32) -> bool {
    (obstacle.pos.x - player_x).abs() < obstacle.size / 2.0
}

/// First obstacle (in creation order) that hits the player, if any
pub fn find_hit<'a>(
    obstacles: &'a [Obstacle],
    player: &PlayerState,
    config: &GameConfig,
) -> Option<&'a Obstacle> {
    obstacles.iter().find(|o| {
        in_band(o, config.height, config.collision_band) && overlaps_horizontally(o, player.x)
    })
}

/// Decide whether this tick ends the run.
///
/// A hit takes precedence over a released control when both hold.
pub fn evaluate(
    obstacles: &[Obstacle],
    player: &PlayerState,
    config: &GameConfig,
) -> Option<EndReason> {
    if let Some(hit) = find_hit(obstacles, player, config) {
        return Some(EndReason::Collision { obstacle_id: hit.id });
    }
    if !player.control_active {
        return Some(EndReason::Released);
    }
    None
}

/// Merged "should end" signal
pub fn should_end(obstacles: &[Obstacle], player: &PlayerState, config: &GameConfig) -> bool {
    evaluate(obstacles, player, config).is_some()
}
