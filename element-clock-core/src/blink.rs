//! Blink phase generator
//!
//! The display blinks after power-up until the time has been set, since
//! a fresh power-up means the clock restarted from midnight.

/// Phases per blink cycle.
pub const PHASE_COUNT: u8 = 4;

/// Four-phase blink counter advanced by a periodic tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkPhase {
    phase: u8,
    enabled: bool,
}

impl BlinkPhase {
    /// Phase 0 with blinking enabled, the power-up state.
    pub const fn new() -> Self {
        Self {
            phase: 0,
            enabled: true,
        }
    }

    /// Advances one phase, wrapping after the last.
    pub fn tick(&mut self) {
        self.phase = (self.phase + 1) % PHASE_COUNT;
    }

    pub fn phase(&self) -> u8 {
        self.phase
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the display should be lit right now.
    ///
    /// Always true once blinking is stopped; otherwise lit for the first
    /// half of each cycle.
    pub fn is_visible(&self) -> bool {
        !self.enabled || self.phase < PHASE_COUNT / 2
    }

    /// Stops blinking for good. Returns true if it was still blinking.
    ///
    /// There is no way back short of a power cycle.
    pub fn stop(&mut self) -> bool {
        let was_enabled = self.enabled;
        self.enabled = false;
        was_enabled
    }
}

impl Default for BlinkPhase {
    fn default() -> Self {
        Self::new()
    }
}
