//! Fixed-period ticker
//!
//! Turns elapsed wall time into a count of due ticks. Each `start` issues a
//! new registration id and cancels the previous one; ticks stamped with a
//! cancelled id are refused, so a stop takes effect before any queued tick.

use std::time::Duration;

use crate::consts::MAX_CATCH_UP_TICKS;

#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    accumulator: Duration,
    /// Registration currently allowed to fire
    live: Option<u64>,
    /// Last registration id handed out
    issued: u64,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            accumulator: Duration::ZERO,
            live: None,
            issued: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_active(&self) -> bool {
        self.live.is_some()
    }

    pub fn registration(&self) -> Option<u64> {
        self.live
    }

    /// Whether a tick stamped with `registration` may still fire
    pub fn accepts(&self, registration: u64) -> bool {
        self.live == Some(registration)
    }

    /// Install a fresh registration, cancelling any previous one
    pub fn start(&mut self) -> u64 {
        if let Some(old) = self.live {
            log::debug!("Cancelling tick registration {}", old);
        }
        self.issued += 1;
        self.live = Some(self.issued);
        self.accumulator = Duration::ZERO;
        self.issued
    }

    pub fn stop(&mut self) {
        self.live = None;
        self.accumulator = Duration::ZERO;
    }

    /// Feed elapsed time; returns the number of ticks now due.
    ///
    /// At most `MAX_CATCH_UP_TICKS` per call; any larger backlog is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.live.is_none() {
            return 0;
        }

        self.accumulator += elapsed;
        let mut due = 0;
        while self.accumulator >= self.period && due < MAX_CATCH_UP_TICKS {
            self.accumulator -= self.period;
            due += 1;
        }

        if self.accumulator >= self.period {
            log::warn!(
                "Ticker fell behind, dropping {:?} of backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(100);

    #[test]
    fn test_inactive_ticker_never_fires() {
        let mut ticker = Ticker::new(PERIOD);
        assert_eq!(ticker.advance(Duration::from_secs(5)), 0);
        assert!(!ticker.is_active());
    }

    #[test]
    fn test_accumulates_partial_periods() {
        let mut ticker = Ticker::new(PERIOD);
        ticker.start();
        assert_eq!(ticker.advance(Duration::from_millis(60)), 0);
        assert_eq!(ticker.advance(Duration::from_millis(60)), 1);
        assert_eq!(ticker.advance(Duration::from_millis(80)), 1);
        assert_eq!(ticker.advance(Duration::from_millis(250)), 2);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut ticker = Ticker::new(PERIOD);
        ticker.start();
        assert_eq!(ticker.advance(Duration::from_secs(60)), MAX_CATCH_UP_TICKS);
        // Backlog was dropped
        assert_eq!(ticker.advance(Duration::from_millis(50)), 0);
    }

    #[test]
    fn test_restart_cancels_previous_registration() {
        let mut ticker = Ticker::new(PERIOD);
        let first = ticker.start();
        let second = ticker.start();
        assert_ne!(first, second);
        assert!(!ticker.accepts(first));
        assert!(ticker.accepts(second));
    }

    #[test]
    fn test_stop_refuses_queued_ticks() {
        let mut ticker = Ticker::new(PERIOD);
        let id = ticker.start();
        ticker.advance(Duration::from_millis(70));
        ticker.stop();
        assert!(!ticker.accepts(id));
        assert_eq!(ticker.registration(), None);

        // Restart begins from a clean accumulator
        ticker.start();
        assert_eq!(ticker.advance(Duration::from_millis(70)), 0);
    }
}
