//! Repeating step timer.
//!
//! The timer is a scoped resource: whoever arms it must release it on every
//! exit path (game over, re-arm on restart, teardown).

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    next_due: Option<Instant>,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn from_millis(ms: u32) -> Self {
        Self::new(Duration::from_millis(ms as u64))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Arm the timer so it first fires one period after `now`.
    ///
    /// Re-arming an armed timer replaces the previous schedule.
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    /// Disarm the timer. Returns whether it was armed.
    pub fn release(&mut self) -> bool {
        self.next_due.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Fire if due and schedule the next firing.
    ///
    /// A poll that is late by less than a period keeps the fixed cadence
    /// (next firing at `due + period`). Later than that, the schedule restarts
    /// one period after `now`: at most one firing per call, missed periods
    /// are not replayed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                let next = if now - due < self.period {
                    due + self.period
                } else {
                    now + self.period
                };
                self.next_due = Some(next);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next firing, `None` while disarmed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
