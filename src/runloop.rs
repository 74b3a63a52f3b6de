//! Single-threaded run loop
//!
//! Ticks and input notifications share one FIFO queue and are applied in
//! arrival order, one at a time. Ticks are stamped with the ticker
//! registration that produced them; a tick that outlives its registration
//! (run ended or restarted) is dropped when dequeued.

use std::collections::VecDeque;
use std::time::Duration;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::sim::{Game, GameOverReport, InputEvent};

/// One queued unit of work
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Tick { registration: u64 },
    Input(InputEvent),
}

/// Drives a [`Game`] from a queue of ticks and input
#[derive(Debug)]
pub struct RunLoop<R = Pcg32> {
    game: Game<R>,
    queue: VecDeque<Event>,
}

impl<R: Rng> RunLoop<R> {
    pub fn new(game: Game<R>) -> Self {
        Self {
            game,
            queue: VecDeque::new(),
        }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn into_game(self) -> Game<R> {
        self.game
    }

    /// Number of events waiting to be processed
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn push_input(&mut self, input: InputEvent) {
        self.queue.push_back(Event::Input(input));
    }

    /// Let `elapsed` wall time pass and enqueue the ticks that fell due.
    ///
    /// Returns the number of ticks enqueued.
    pub fn advance_clock(&mut self, elapsed: Duration) -> u32 {
        let ticker = self.game.ticker_mut();
        let due = ticker.advance(elapsed);
        if let Some(registration) = ticker.registration() {
            for _ in 0..due {
                self.queue.push_back(Event::Tick { registration });
            }
        }
        due
    }

    /// Drain the queue in order; returns every run that ended along the way
    pub fn run_pending(&mut self) -> Vec<GameOverReport> {
        let mut reports = Vec::new();
        while let Some(event) = self.queue.pop_front() {
            match event {
                Event::Tick { registration } => {
                    if let Some(report) = self.game.on_tick(registration) {
                        reports.push(report);
                    }
                }
                Event::Input(input) => self.game.apply(input),
            }
        }
        reports
    }
}
