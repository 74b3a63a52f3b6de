//! Demo autopilot
//!
//! Keeps the control held and sidesteps the deepest obstacle that is lined up
//! with the player. Used by the headless binary; not part of the simulation.

use std::cmp::Ordering;

use crate::config::GameConfig;
use crate::consts::{AUTOPILOT_CLEARANCE, AUTOPILOT_LOOKAHEAD, AUTOPILOT_STEP};
use crate::sim::{Frame, GamePhase, InputEvent, Obstacle};

pub struct Autopilot;

impl Autopilot {
    /// Most dangerous obstacle: lined up with the player and deepest among
    /// those inside the band or within the lookahead just above it
    pub fn threat<'a>(frame: &'a Frame, config: &GameConfig) -> Option<&'a Obstacle> {
        let px = frame.player.pos.x;
        let watch_from = config.height - config.collision_band - AUTOPILOT_LOOKAHEAD;

        frame
            .obstacles
            .iter()
            .filter(|o| o.pos.y > watch_from)
            .filter(|o| (o.pos.x - px).abs() < o.size / 2.0 + AUTOPILOT_CLEARANCE)
            .max_by(|a, b| a.pos.y.partial_cmp(&b.pos.y).unwrap_or(Ordering::Equal))
    }

    /// One bounded move away from the current threat, if there is one
    pub fn steer(frame: &Frame, config: &GameConfig) -> Option<InputEvent> {
        if frame.phase != GamePhase::Running {
            return None;
        }
        let threat = Self::threat(frame, config)?;

        let px = frame.player.pos.x;
        let mut dx = if px >= threat.pos.x {
            AUTOPILOT_STEP
        } else {
            -AUTOPILOT_STEP
        };

        // Pinned against a wall: go around the other side
        let target = px + dx;
        if target < config.min_player_x() || target > config.max_player_x() {
            dx = -dx;
        }
        Some(InputEvent::Move { dx })
    }
}
