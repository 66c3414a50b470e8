//! Front panel controls
//!
//! Both inputs are pulled up and switch to ground, so they read low when
//! asserted. Neither is debounced; they are sampled once per render pass.

use embedded_hal::digital::v2::InputPin;

use crate::symbols::DisplayMode;

/// Speed button and element mode switch.
pub struct Controls<SPEED, MODE> {
    speed: SPEED,
    mode: MODE,
}

impl<SPEED: InputPin, MODE: InputPin> Controls<SPEED, MODE> {
    pub fn new(speed: SPEED, mode: MODE) -> Self {
        Self { speed, mode }
    }

    /// Speed button held. A failed read counts as released.
    pub fn speed_pressed(&self) -> bool {
        self.speed.is_low().unwrap_or(false)
    }

    /// Element mode switch on. A failed read counts as off.
    pub fn element_mode_selected(&self) -> bool {
        self.mode.is_low().unwrap_or(false)
    }

    pub fn display_mode(&self) -> DisplayMode {
        if self.element_mode_selected() {
            DisplayMode::Elements
        } else {
            DisplayMode::Digits
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeInput<'a> {
        level: &'a Cell<bool>,
        fail: bool,
    }

    impl InputPin for FakeInput<'_> {
        type Error = ();

        fn is_high(&self) -> Result<bool, ()> {
            if self.fail {
                Err(())
            } else {
                Ok(self.level.get())
            }
        }

        fn is_low(&self) -> Result<bool, ()> {
            self.is_high().map(|high| !high)
        }
    }

    #[test]
    fn test_inputs_are_active_low() {
        let speed = Cell::new(true);
        let mode = Cell::new(true);
        let controls = Controls::new(
            FakeInput { level: &speed, fail: false },
            FakeInput { level: &mode, fail: false },
        );

        assert!(!controls.speed_pressed());
        assert_eq!(controls.display_mode(), DisplayMode::Digits);

        speed.set(false);
        mode.set(false);
        assert!(controls.speed_pressed());
        assert_eq!(controls.display_mode(), DisplayMode::Elements);
    }

    #[test]
    fn test_read_errors_count_as_released() {
        let low = Cell::new(false);
        let controls = Controls::new(
            FakeInput { level: &low, fail: true },
            FakeInput { level: &low, fail: true },
        );

        assert!(!controls.speed_pressed());
        assert!(!controls.element_mode_selected());
    }
}
