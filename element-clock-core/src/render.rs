//! One render pass: clock fields to four multiplexed digits

use crate::font::Glyph;
use crate::symbols::{select_symbols, DisplayMode};

/// Glyph per physical digit position.
///
/// Position 0 is the rightmost digit: minutes ones, minutes tens, hours
/// ones, hours tens.
pub type Frame = [Glyph; 4];

/// Something that can light one digit position at a time.
pub trait DigitDisplay {
    type Error;

    /// Shows `glyph` on position `digit`, replacing whatever was shown.
    fn draw_digit(&mut self, digit: u8, glyph: Glyph) -> Result<(), Self::Error>;

    /// Holds the current digit long enough to be seen.
    fn dwell(&mut self);
}

/// Builds the frame for a time of day.
pub fn compose_frame(hours: u8, minutes: u8, mode: DisplayMode, visible: bool) -> Frame {
    let minutes = select_symbols(minutes, mode, visible);
    let hours = select_symbols(hours, mode, visible);
    [minutes.right, minutes.left, hours.right, hours.left]
}

/// Draws every position of `frame` in turn, holding each one.
pub fn draw_frame<D: DigitDisplay>(display: &mut D, frame: &Frame) -> Result<(), D::Error> {
    for (digit, glyph) in (0u8..).zip(frame.iter()) {
        display.draw_digit(digit, *glyph)?;
        display.dwell();
    }
    Ok(())
}
