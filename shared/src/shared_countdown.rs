use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Timer not running; nothing changed.
    Idle,
    Ticked(u32),
    /// Reached zero on this tick. Emitted once per run.
    Expired,
}

/// Fixed-duration countdown driven by one tick per elapsed second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownTimer {
    initial_duration: u32,
    remaining: u32,
    running: bool,
}

impl CountdownTimer {
    pub fn new(initial_duration: u32) -> Self {
        Self {
            initial_duration,
            remaining: initial_duration,
            running: false,
        }
    }

    /// A timer that is already counting down, for display-only variants.
    pub fn running(initial_duration: u32) -> Self {
        let mut timer = Self::new(initial_duration);
        timer.start();
        timer
    }

    pub fn initial_duration(&self) -> u32 {
        self.initial_duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Starting an expired timer restarts it first. Returns whether the
    /// timer is now running and needs a tick source.
    pub fn start(&mut self) -> bool {
        if self.remaining == 0 {
            self.remaining = self.initial_duration;
        }
        self.running = self.remaining > 0;
        debug!("Countdown started at {}s", self.remaining);
        self.running
    }

    pub fn restart(&mut self) {
        self.running = false;
        self.remaining = self.initial_duration;
        debug!("Countdown reset to {}s", self.remaining);
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running || self.remaining == 0 {
            return TickOutcome::Idle;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
            info!("Countdown expired");
            TickOutcome::Expired
        } else {
            TickOutcome::Ticked(self.remaining)
        }
    }

    /// `MM:SS`, or `HH:MM:SS` for durations of an hour or more.
    pub fn formatted(&self) -> String {
        format_countdown(self.remaining, self.initial_duration >= 3600)
    }
}

pub fn format_countdown(seconds: u32, with_hours: bool) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if with_hours {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", hours * 60 + minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BUZZWIRE_SECONDS, SHOWCASE_SECONDS};

    #[test]
    fn test_full_run_expires_once() {
        let mut timer = CountdownTimer::new(BUZZWIRE_SECONDS);
        timer.start();
        let outcomes: Vec<_> = (0..BUZZWIRE_SECONDS).map(|_| timer.tick()).collect();

        assert_eq!(timer.remaining(), 0);
        assert!(!timer.is_running());
        assert_eq!(outcomes.iter().filter(|o| **o == TickOutcome::Expired).count(), 1);
        assert_eq!(outcomes.last(), Some(&TickOutcome::Expired));
        assert_eq!(timer.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_restart_resets_from_any_state() {
        let mut fresh = CountdownTimer::new(60);
        fresh.restart();
        assert_eq!((fresh.remaining(), fresh.is_running()), (60, false));

        let mut mid = CountdownTimer::new(60);
        mid.start();
        for _ in 0..17 {
            mid.tick();
        }
        mid.restart();
        assert_eq!((mid.remaining(), mid.is_running()), (60, false));

        let mut expired = CountdownTimer::new(60);
        expired.start();
        while expired.tick() != TickOutcome::Expired {}
        expired.restart();
        assert_eq!((expired.remaining(), expired.is_running()), (60, false));
    }

    #[test]
    fn test_ticks_ignored_while_stopped() {
        let mut timer = CountdownTimer::new(300);
        assert_eq!(timer.tick(), TickOutcome::Idle);
        timer.start();
        assert_eq!(timer.tick(), TickOutcome::Ticked(299));
        timer.restart();
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.remaining(), 300);
    }

    #[test]
    fn test_start_after_expiry_restarts() {
        let mut timer = CountdownTimer::new(3);
        timer.start();
        for _ in 0..3 {
            timer.tick();
        }
        assert!(timer.is_expired());
        timer.start();
        assert!(timer.is_running());
        assert_eq!(timer.remaining(), 3);
    }

    #[test]
    fn test_zero_duration_never_runs() {
        let mut timer = CountdownTimer::new(0);
        assert!(!timer.start());
        assert!(!timer.is_running());
        assert_eq!(timer.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(CountdownTimer::new(300).formatted(), "05:00");
        assert_eq!(CountdownTimer::new(59).formatted(), "00:59");
        assert_eq!(CountdownTimer::new(SHOWCASE_SECONDS).formatted(), "23:59:29");
        assert_eq!(format_countdown(3725, false), "62:05");
    }
}
