//! Timekeeping

use crate::config::{COUNT_PERIOD_US, FAST_COMPARE, SLOW_COMPARE};

/// Wall-clock time of day, 24-hour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl ClockState {
    /// Fields must already be in range: `hours < 24`, `minutes < 60`,
    /// `seconds < 60`. [`Self::tick`] only keeps them there.
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        debug_assert!(hours < 24 && minutes < 60 && seconds < 60);
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Advances one second.
    ///
    /// Each field's carry is checked in turn, seconds first, so a value
    /// pushed out of range by the previous carry is folded back on the
    /// same tick.
    pub fn tick(&mut self) {
        self.seconds += 1;
        if self.seconds >= 60 {
            self.minutes += 1;
            self.seconds = 0;
        }

        if self.minutes >= 60 {
            self.hours += 1;
            self.minutes = 0;
        }

        if self.hours >= 24 {
            self.hours = 0;
        }
    }
}

/// Rate the time base counts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeedMode {
    /// One clock second per real second
    Normal,
    /// Fast forward for setting the time
    Fast,
}

impl SpeedMode {
    /// Counts between clock seconds at this rate.
    pub const fn compare(self) -> u16 {
        match self {
            SpeedMode::Normal => SLOW_COMPARE,
            SpeedMode::Fast => FAST_COMPARE,
        }
    }
}

/// Converts time-base counts to microseconds for scheduling an alarm.
pub const fn counts_to_us(counts: u16) -> u32 {
    counts as u32 * COUNT_PERIOD_US
}

/// Clear-on-compare counter driving a [`ClockState`].
///
/// The counter accumulates elapsed counts and ticks the clock when it
/// reaches the compare value of the current [`SpeedMode`], then restarts
/// from zero. The firmware doesn't interrupt on every count: it arms a
/// hardware alarm for the counts left ([`TimeBase::arm`]) and reports when
/// it fires ([`TimeBase::on_alarm`]).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeBase {
    clock: ClockState,
    speed: SpeedMode,
    counter: u16,
    armed: u16,
}

impl TimeBase {
    pub const fn new(clock: ClockState) -> Self {
        Self {
            clock,
            speed: SpeedMode::Normal,
            counter: 0,
            armed: 0,
        }
    }

    pub fn clock(&self) -> ClockState {
        self.clock
    }

    pub fn speed(&self) -> SpeedMode {
        self.speed
    }

    /// Counts accumulated toward the next clock second.
    pub fn counter(&self) -> u16 {
        self.counter
    }

    /// Adds elapsed counts. Returns true if the clock ticked.
    pub fn advance(&mut self, counts: u16) -> bool {
        self.counter = self.counter.saturating_add(counts);
        if self.counter >= self.speed.compare() {
            self.counter = 0;
            self.clock.tick();
            true
        } else {
            false
        }
    }

    /// Counts until the next compare match. Remembered for [`Self::on_alarm`].
    pub fn arm(&mut self) -> u16 {
        self.armed = self.speed.compare().saturating_sub(self.counter).max(1);
        self.armed
    }

    /// The alarm set from [`Self::arm`] has fired.
    pub fn on_alarm(&mut self) -> bool {
        self.advance(self.armed)
    }

    /// Samples the speed button. Returns the new mode on a change.
    ///
    /// Entering fast mode restarts the counter. Otherwise a counter already
    /// past the fast compare value would miss the match and stall the
    /// clock for a full counter wrap.
    pub fn check_speed_mode(&mut self, pressed: bool) -> Option<SpeedMode> {
        let next = if pressed {
            SpeedMode::Fast
        } else {
            SpeedMode::Normal
        };
        if next == self.speed {
            return None;
        }

        if next == SpeedMode::Fast {
            self.counter = 0;
        }
        self.speed = next;
        Some(next)
    }
}

impl Default for TimeBase {
    fn default() -> Self {
        Self::new(ClockState::default())
    }
}
