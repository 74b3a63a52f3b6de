//! Start gate
//!
//! The game screen is only reachable with a signed-in session, and only once
//! the scheduled start time has passed. Both values come from the host; this
//! module just decides what to show and formats the countdown.

use serde::{Deserialize, Serialize};

/// Where the host should send the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Login,
    Game,
}

/// Session gate
pub fn route(session_present: bool) -> Route {
    if session_present {
        Route::Game
    } else {
        log::debug!("No session, routing to login");
        Route::Login
    }
}

/// Whole seconds until the next game opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Countdown {
    remaining: u64,
}

impl Countdown {
    /// Negative remaining time means the start has already passed
    pub fn new(remaining_secs: i64) -> Self {
        Self {
            remaining: remaining_secs.max(0) as u64,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// One second elapsed
    pub fn tick_second(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_open(&self) -> bool {
        self.remaining == 0
    }
}

/// Outcome of checking both gates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateDecision {
    Login,
    /// Seconds still to wait
    Wait(u64),
    Play,
}

pub struct StartGate;

impl StartGate {
    /// No countdown known yet means no scheduled start, so play is allowed
    pub fn check(session_present: bool, countdown: Option<&Countdown>) -> GateDecision {
        if route(session_present) == Route::Login {
            return GateDecision::Login;
        }
        match countdown {
            Some(c) if !c.is_open() => GateDecision::Wait(c.remaining()),
            _ => GateDecision::Play,
        }
    }
}

/// `HH:MM:SS`, hours unbounded; `--:--:--` when unknown
pub fn format_clock(secs: Option<u64>) -> String {
    match secs {
        None => "--:--:--".to_string(),
        Some(s) => format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60),
    }
}

/// `Dd HHh MMm SSs`; `--:--:--` when unknown
pub fn format_long(secs: Option<u64>) -> String {
    match secs {
        None => "--:--:--".to_string(),
        Some(s) => format!(
            "{}d {:02}h {:02}m {:02}s",
            s / 86_400,
            (s % 86_400) / 3600,
            (s % 3600) / 60,
            s % 60
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route() {
        assert_eq!(route(false), Route::Login);
        assert_eq!(route(true), Route::Game);
    }

    #[test]
    fn test_countdown_saturates() {
        let mut countdown = Countdown::new(2);
        countdown.tick_second();
        assert!(!countdown.is_open());
        countdown.tick_second();
        countdown.tick_second();
        assert_eq!(countdown.remaining(), 0);
        assert!(countdown.is_open());

        assert!(Countdown::new(-30).is_open());
    }

    #[test]
    fn test_start_gate() {
        let waiting = Countdown::new(90);
        assert_eq!(StartGate::check(false, Some(&waiting)), GateDecision::Login);
        assert_eq!(StartGate::check(true, Some(&waiting)), GateDecision::Wait(90));
        assert_eq!(
            StartGate::check(true, Some(&Countdown::new(0))),
            GateDecision::Play
        );
        assert_eq!(StartGate::check(true, None), GateDecision::Play);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(None), "--:--:--");
        assert_eq!(format_clock(Some(0)), "00:00:00");
        assert_eq!(format_clock(Some(3661)), "01:01:01");
        assert_eq!(format_clock(Some(100 * 3600)), "100:00:00");
    }

    #[test]
    fn test_format_long() {
        assert_eq!(format_long(None), "--:--:--");
        assert_eq!(format_long(Some(59)), "0d 00h 00m 59s");
        assert_eq!(format_long(Some(86_400 + 2 * 3600 + 3 * 60 + 4)), "1d 02h 03m 04s");
    }
}
