//! Obstacle field
//!
//! Owns every live obstacle. Each tick the field advances and prunes in one
//! pass, then rolls for at most one spawn at the top edge.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Obstacle;
use crate::config::GameConfig;

/// The set of falling obstacles plus the RNG that feeds it
#[derive(Debug, Clone)]
pub struct ObstacleField<R = Pcg32> {
    /// Kept in creation order (ascending id)
    obstacles: Vec<Obstacle>,
    rng: R,
    /// Never reset, so ids stay unique across runs
    next_id: u64,
}

impl ObstacleField<Pcg32> {
    /// Field driven by a seeded PCG stream
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> ObstacleField<R> {
    pub fn new(rng: R) -> Self {
        Self {
            obstacles: Vec::new(),
            rng,
            next_id: 1,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    fn next_obstacle_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Move every obstacle down one step and drop those past the bottom edge.
    ///
    /// Returns the number of obstacles pruned.
    pub fn advance(&mut self, config: &GameConfig) -> usize {
        let before = self.obstacles.len();
        for obstacle in &mut self.obstacles {
            obstacle.pos.y += config.fall_step;
        }
        self.obstacles.retain(|o| o.pos.y < config.height);

        let pruned = before - self.obstacles.len();
        if pruned > 0 {
            log::trace!("Pruned {} obstacles", pruned);
        }
        pruned
    }

    /// Roll once against the spawn probability; on success add one obstacle
    /// at the top edge and return its id.
    pub fn maybe_spawn(&mut self, config: &GameConfig) -> Option<u64> {
        if !self.rng.random_bool(config.spawn_probability) {
            return None;
        }

        let x = self.rng.random_range(0.0..config.width);
        let min = config.min_obstacle_size;
        let max = min + config.obstacle_size_range;
        let size = if max > min {
            self.rng.random_range(min..max)
        } else {
            min
        };

        let id = self.place(x, 0.0, size);
        log::debug!("Spawned obstacle {} at x={:.1} size={:.1}", id, x, size);
        Some(id)
    }

    /// Insert an obstacle at an explicit position (scripted scenarios)
    pub fn place(&mut self, x: f32, y: f32, size: f32) -> u64 {
        let id = self.next_obstacle_id();
        self.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(x, y),
            size,
        });
        id
    }

    /// Remove all obstacles (ids keep counting)
    pub fn reset(&mut self) {
        self.obstacles.clear();
    }
}
