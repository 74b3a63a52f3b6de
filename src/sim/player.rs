//! Player controller
//!
//! Turns hold/move/release notifications into a clamped horizontal position.
//! Move deltas are relative to the previous move, not to where the hold began.

use super::state::PlayerState;
use crate::config::GameConfig;

/// Mutates [`PlayerState`] in response to input
#[derive(Debug, Clone, Copy)]
pub struct PlayerController {
    min_x: f32,
    max_x: f32,
}

impl PlayerController {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            min_x: config.min_player_x(),
            max_x: config.max_player_x(),
        }
    }

    /// Control surface pressed
    pub fn hold_begin(&self, player: &mut PlayerState) {
        player.control_active = true;
    }

    /// Apply one drag delta. Non-finite deltas are dropped.
    pub fn move_by(&self, player: &mut PlayerState, dx: f32) {
        if !dx.is_finite() {
            log::debug!("Ignoring non-finite move delta {}", dx);
            return;
        }
        player.x = (player.x + dx).clamp(self.min_x, self.max_x);
    }

    /// Control surface let go
    pub fn hold_end(&self, player: &mut PlayerState) {
        player.control_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (PlayerController, PlayerState) {
        let config = GameConfig::for_play_area(400.0, 800.0);
        (PlayerController::new(&config), PlayerState::new(&config))
    }

    #[test]
    fn test_hold_cycle() {
        let (controller, mut player) = setup();
        controller.hold_begin(&mut player);
        assert!(player.control_active);
        controller.hold_end(&mut player);
        assert!(!player.control_active);
    }

    #[test]
    fn test_deltas_accumulate() {
        let (controller, mut player) = setup();
        controller.move_by(&mut player, 15.0);
        controller.move_by(&mut player, 15.0);
        controller.move_by(&mut player, -5.0);
        assert_eq!(player.x, 225.0);
    }

    #[test]
    fn test_clamps_to_right_bound() {
        let (controller, mut player) = setup();
        for _ in 0..10 {
            controller.move_by(&mut player, 50.0);
        }
        assert_eq!(player.x, 380.0);
        // Moving back starts from the bound, not from the overshoot
        controller.move_by(&mut player, -10.0);
        assert_eq!(player.x, 370.0);
    }

    #[test]
    fn test_clamps_to_left_bound() {
        let (controller, mut player) = setup();
        controller.move_by(&mut player, -1000.0);
        assert_eq!(player.x, 20.0);
    }

    #[test]
    fn test_non_finite_delta_ignored() {
        let (controller, mut player) = setup();
        controller.move_by(&mut player, f32::NAN);
        controller.move_by(&mut player, f32::INFINITY);
        assert_eq!(player.x, 200.0);
    }
}
