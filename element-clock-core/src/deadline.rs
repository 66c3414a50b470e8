//! Alarm deadlines on a fixed grid
//!
//! Scheduling each alarm relative to the moment its interrupt runs adds
//! the interrupt latency to every period. Stepping from the previous
//! deadline instead keeps the long-run rate exact, the way a free-running
//! compare timer would.

/// Absolute time of the next alarm, in timer microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Deadline {
    at_us: u64,
}

impl Deadline {
    /// First deadline, `period_us` after `now_us`.
    pub const fn start(now_us: u64, period_us: u32) -> Self {
        Self {
            at_us: now_us + period_us as u64,
        }
    }

    pub fn at_us(&self) -> u64 {
        self.at_us
    }

    /// Steps one period past the previous deadline.
    ///
    /// If that is already behind `now_us` (the handler ran very late), the
    /// missed periods are dropped and the grid restarts from `now_us`.
    pub fn advance(&mut self, period_us: u32, now_us: u64) -> u64 {
        self.at_us += period_us as u64;
        if self.at_us <= now_us {
            self.at_us = now_us + period_us as u64;
        }
        self.at_us
    }

    /// Drops the current grid and starts a new one at `now_us`.
    pub fn restart(&mut self, period_us: u32, now_us: u64) -> u64 {
        *self = Self::start(now_us, period_us);
        self.at_us
    }
}
