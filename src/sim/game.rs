//! Game state machine
//!
//! Idle → Running → GameOver → (retry) Running, or (acknowledge) Idle.
//! The game owns the score, the obstacle field, the player and the ticker;
//! it is the only thing that starts or stops ticking.

use std::panic::{self, AssertUnwindSafe};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::field::ObstacleField;
use super::player::PlayerController;
use super::state::{
    EndReason, Frame, GameOverReport, GamePhase, Obstacle, PlayerState, PlayerView,
};
use super::tick::{self, InputEvent};
use crate::config::GameConfig;
use crate::error::Result;
use crate::ticker::Ticker;

/// A single-player dodge game instance
#[derive(Debug)]
pub struct Game<R = Pcg32> {
    config: GameConfig,
    phase: GamePhase,
    score: u64,
    field: ObstacleField<R>,
    player: PlayerState,
    controller: PlayerController,
    ticker: Ticker,
    /// Set on entering GameOver, cleared on leaving it
    report: Option<GameOverReport>,
}

impl Game<Pcg32> {
    /// Game whose obstacle stream is reproducible from `seed`
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Validate the config and build an Idle game around the given RNG
    pub fn new(config: GameConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            phase: GamePhase::Idle,
            score: 0,
            field: ObstacleField::new(rng),
            player: PlayerState::new(&config),
            controller: PlayerController::new(&config),
            ticker: Ticker::new(config.tick_period()),
            report: None,
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.field.obstacles()
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub(crate) fn ticker_mut(&mut self) -> &mut Ticker {
        &mut self.ticker
    }

    /// Mutable field access for scripted setups
    pub fn field_mut(&mut self) -> &mut ObstacleField<R> {
        &mut self.field
    }

    /// Final score and reason, only while in GameOver
    pub fn game_over_report(&self) -> Option<GameOverReport> {
        match self.phase {
            GamePhase::GameOver => self.report,
            _ => None,
        }
    }

    /// Snapshot for the renderer
    pub fn frame(&self) -> Frame {
        Frame {
            phase: self.phase,
            score: self.score,
            player: PlayerView {
                pos: glam::Vec2::new(self.player.x, self.config.player_y()),
                radius: self.config.player_radius,
                control_active: self.player.control_active,
            },
            obstacles: self.field.obstacles().to_vec(),
        }
    }

    /// Dispatch one input notification
    pub fn apply(&mut self, input: InputEvent) {
        match input {
            InputEvent::HoldBegin => self.hold_begin(),
            InputEvent::Move { dx } => self.move_by(dx),
            InputEvent::HoldEnd => self.hold_end(),
            InputEvent::Retry => {
                self.retry();
            }
            InputEvent::Acknowledge => self.acknowledge(),
        }
    }

    /// Press. From Idle this starts a run; while Running it only re-arms control.
    pub fn hold_begin(&mut self) {
        self.controller.hold_begin(&mut self.player);
        if self.phase == GamePhase::Idle {
            self.enter_running();
        }
    }

    /// Drag. Ignored while the GameOver screen is up.
    pub fn move_by(&mut self, dx: f32) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.controller.move_by(&mut self.player, dx);
    }

    /// Release. The next tick ends the run.
    pub fn hold_end(&mut self) {
        self.controller.hold_end(&mut self.player);
    }

    /// Start a fresh run from GameOver or Idle. No-op while Running.
    ///
    /// Returns whether a run was started.
    pub fn retry(&mut self) -> bool {
        if self.phase == GamePhase::Running {
            log::debug!("Retry ignored, already running");
            return false;
        }
        self.enter_running();
        true
    }

    /// Dismiss GameOver and return to Idle
    pub fn acknowledge(&mut self) {
        if self.phase != GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::Idle;
        self.score = 0;
        self.field.reset();
        self.report = None;
    }

    /// Run a tick if `registration` is still the live ticker registration
    pub fn on_tick(&mut self, registration: u64) -> Option<GameOverReport> {
        if !self.ticker.accepts(registration) {
            log::debug!("Dropping tick from cancelled registration {}", registration);
            return None;
        }
        self.tick()
    }

    /// Advance one tick. Returns the report if this tick ended the run.
    pub fn tick(&mut self) -> Option<GameOverReport> {
        if self.phase != GamePhase::Running {
            return None;
        }

        let field = &mut self.field;
        let player = &self.player;
        let config = &self.config;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| tick::tick(field, player, config)));

        match outcome {
            Ok(report) => match report.end {
                Some(reason) => Some(self.end(reason)),
                None => {
                    self.score += 1;
                    None
                }
            },
            Err(_) => {
                log::error!("Tick panicked, ending run");
                Some(self.end(EndReason::Fault))
            }
        }
    }

    fn enter_running(&mut self) {
        self.score = 0;
        self.field.reset();
        self.player.control_active = true;
        self.report = None;
        self.phase = GamePhase::Running;
        let registration = self.ticker.start();
        log::info!("Run started (tick registration {})", registration);
    }

    fn end(&mut self, reason: EndReason) -> GameOverReport {
        self.ticker.stop();
        self.phase = GamePhase::GameOver;
        let report = GameOverReport {
            final_score: self.score,
            reason,
        };
        self.report = Some(report);
        log::info!(
            "Game over: score {} ({})",
            report.final_score,
            reason.as_str()
        );
        report
    }
}
