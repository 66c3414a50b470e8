//! Timing constants and pin assignments
//!
//! All timing is fixed at compile time; the clock has no storage to load
//! settings from. Keep the ratios in mind when tuning:
//! settle time << dwell time << blink phase << clock tick.

/// Hold time around every shift-register edge, in microseconds.
pub const SETTLE_US: u32 = 2;

/// How long each digit stays latched before the next one is drawn, in
/// milliseconds.
pub const DWELL_MS: u32 = 2;

/// Length of one blink phase, in microseconds. Four phases make one blink.
pub const BLINK_PHASE_US: u32 = 250_000;

/// Length of one time-base count, in microseconds.
pub const COUNT_PERIOD_US: u32 = 64;

/// Counts per clock second in normal running. 15625 * 64us = 1.000s.
pub const SLOW_COMPARE: u16 = 15_625;

/// Counts per clock second while the speed button is held, about 12.4
/// clock minutes per real second.
pub const FAST_COMPARE: u16 = 21;

/// GPIO numbers on the Pico.
///
/// These describe the board wiring for logs; they don't select anything.
/// The firmware's `init` takes the pins by name (`pins.gpio2` and so on)
/// and must be changed together with this table.
pub mod pins {
    /// Shift register serial data
    pub const SHIFT_DATA: u8 = 2;
    /// Shift register clock
    pub const SHIFT_CLOCK: u8 = 3;
    /// Shift register storage latch
    pub const SHIFT_LATCH: u8 = 4;
    /// Shift register clear, active low
    pub const SHIFT_CLEAR: u8 = 5;
    /// Element mode switch, active low
    pub const ELEMENT_MODE_SWITCH: u8 = 6;
    /// Speed button, active low
    pub const SPEED_BUTTON: u8 = 7;
}

#[cfg(test)]
mod tests {
    use super::pins::*;

    #[test]
    fn test_pin_map_is_distinct() {
        let map = [
            SHIFT_DATA,
            SHIFT_CLOCK,
            SHIFT_LATCH,
            SHIFT_CLEAR,
            ELEMENT_MODE_SWITCH,
            SPEED_BUTTON,
        ];
        for (i, a) in map.iter().enumerate() {
            // GP0..=GP28 are broken out on the Pico
            assert!(*a <= 28, "GP{}", a);
            for b in &map[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_pin_map_matches_wiring() {
        assert_eq!(
            [SHIFT_DATA, SHIFT_CLOCK, SHIFT_LATCH, SHIFT_CLEAR],
            [2, 3, 4, 5]
        );
        assert_eq!([ELEMENT_MODE_SWITCH, SPEED_BUTTON], [6, 7]);
    }
}
