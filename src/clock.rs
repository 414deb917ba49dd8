use core::fmt;

use embassy_time::Instant;

/// Monotonic millisecond source.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Milliseconds elapsed since the clock was created.
pub struct BootClock {
    started: Instant,
}

impl BootClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for BootClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for BootClock {
    fn now_millis(&self) -> u64 {
        self.started.elapsed().as_millis()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uptime {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Uptime {
    pub fn from_millis(millis: u64) -> Self {
        let total = millis / 1000;
        Self {
            days: total / 86_400,
            hours: (total / 3_600) % 24,
            minutes: (total / 60) % 60,
            seconds: total % 60,
        }
    }
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} days, {} hours {} minutes {} seconds",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
