//! Bit-banged driver for the display's shift register chain
//!
//! Two chained 8-bit registers hold the fourteen segment lines and the two
//! digit-select lines. A frame is clocked in one bit at a time and then
//! latched, so the outputs change all at once.
//!
//! Wiring, in the order bits are shifted in:
//!
//! ```txt
//! C D J K L M E sel0 | B A N H G P F sel1
//! ```
//!
//! The segment lines sink current, so a lit segment is shifted as a 0.

use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use embedded_hal::digital::v2::OutputPin;

use crate::config::{DWELL_MS, SETTLE_US};
use crate::font::{
    Glyph, SEG_A, SEG_B, SEG_C, SEG_D, SEG_E, SEG_F, SEG_G, SEG_H, SEG_J, SEG_K, SEG_L, SEG_M,
    SEG_N, SEG_P,
};
use crate::render::DigitDisplay;

/// Bits shifted per digit.
pub const FRAME_BITS: usize = 16;

/// Number of digit positions the select lines can address.
pub const DIGIT_COUNT: u8 = 4;

#[derive(Clone, Copy)]
enum Slot {
    Segment(Glyph),
    Select(u8),
}

use Slot::{Segment, Select};

const SHIFT_ORDER: [Slot; FRAME_BITS] = [
    Segment(SEG_C),
    Segment(SEG_D),
    Segment(SEG_J),
    Segment(SEG_K),
    Segment(SEG_L),
    Segment(SEG_M),
    Segment(SEG_E),
    Select(0b01),
    Segment(SEG_B),
    Segment(SEG_A),
    Segment(SEG_N),
    Segment(SEG_H),
    Segment(SEG_G),
    Segment(SEG_P),
    Segment(SEG_F),
    Select(0b10),
];

/// Line levels to shift for `glyph` at position `digit`, first bit first.
pub fn frame_bits(digit: u8, glyph: Glyph) -> [bool; FRAME_BITS] {
    SHIFT_ORDER.map(|slot| match slot {
        Segment(seg) => glyph & seg == 0,
        Select(mask) => digit & mask != 0,
    })
}

/// Shift register on four GPIO lines.
///
/// `clear` is active low; the other lines are active high. All four pins
/// must share an error type.
pub struct ShiftRegister<DATA, CLOCK, LATCH, CLEAR, DELAY> {
    data: DATA,
    clock: CLOCK,
    latch: LATCH,
    clear: CLEAR,
    delay: DELAY,
}

impl<DATA, CLOCK, LATCH, CLEAR, DELAY, E> ShiftRegister<DATA, CLOCK, LATCH, CLEAR, DELAY>
where
    DATA: OutputPin<Error = E>,
    CLOCK: OutputPin<Error = E>,
    LATCH: OutputPin<Error = E>,
    CLEAR: OutputPin<Error = E>,
    DELAY: DelayUs<u32>,
{
    pub fn new(data: DATA, clock: CLOCK, latch: LATCH, clear: CLEAR, delay: DELAY) -> Self {
        Self {
            data,
            clock,
            latch,
            clear,
            delay,
        }
    }

    fn settle(&mut self) {
        self.delay.delay_us(SETTLE_US);
    }

    /// Zeroes the shift stage. The latched outputs are untouched.
    pub fn clear(&mut self) -> Result<(), E> {
        self.settle();
        self.clear.set_low()?;
        self.settle();
        self.clear.set_high()?;
        self.settle();
        Ok(())
    }

    /// Clocks one bit into the shift stage.
    pub fn shift_out_bit(&mut self, bit: bool) -> Result<(), E> {
        if bit {
            self.data.set_high()?;
        } else {
            self.data.set_low()?;
        }

        self.settle();
        self.clock.set_high()?;
        self.settle();
        self.clock.set_low()?;
        self.settle();
        Ok(())
    }

    /// Copies the shift stage to the outputs.
    pub fn latch(&mut self) -> Result<(), E> {
        self.settle();
        self.latch.set_high()?;
        self.settle();
        self.latch.set_low()?;
        self.settle();
        Ok(())
    }

    /// Shows `glyph` on position `digit` (0..4).
    pub fn draw_digit(&mut self, digit: u8, glyph: Glyph) -> Result<(), E> {
        self.clear()?;
        for bit in frame_bits(digit, glyph) {
            self.shift_out_bit(bit)?;
        }
        self.latch()
    }
}

impl<DATA, CLOCK, LATCH, CLEAR, DELAY, E> DigitDisplay
    for ShiftRegister<DATA, CLOCK, LATCH, CLEAR, DELAY>
where
    DATA: OutputPin<Error = E>,
    CLOCK: OutputPin<Error = E>,
    LATCH: OutputPin<Error = E>,
    CLEAR: OutputPin<Error = E>,
    DELAY: DelayUs<u32> + DelayMs<u32>,
{
    type Error = E;

    fn draw_digit(&mut self, digit: u8, glyph: Glyph) -> Result<(), E> {
        ShiftRegister::draw_digit(self, digit, glyph)
    }

    fn dwell(&mut self) {
        self.delay.delay_ms(DWELL_MS);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::font::{lookup, EMPTY_GLYPH, UNDEFINED_GLYPH};
    use core::convert::Infallible;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Line {
        Data,
        Clock,
        Latch,
        Clear,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Event {
        Set(Line, bool),
        DelayUs(u32),
        DelayMs(u32),
    }

    pub type Log = Rc<RefCell<Vec<Event>>>;

    pub struct FakePin {
        line: Line,
        log: Log,
    }

    impl OutputPin for FakePin {
        type Error = Infallible;

        fn set_low(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push(Event::Set(self.line, false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push(Event::Set(self.line, true));
            Ok(())
        }
    }

    pub struct FakeDelay {
        log: Log,
    }

    impl DelayUs<u32> for FakeDelay {
        fn delay_us(&mut self, us: u32) {
            self.log.borrow_mut().push(Event::DelayUs(us));
        }
    }

    impl DelayMs<u32> for FakeDelay {
        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Event::DelayMs(ms));
        }
    }

    pub type FakeRegister = ShiftRegister<FakePin, FakePin, FakePin, FakePin, FakeDelay>;

    pub fn fake_register() -> (FakeRegister, Log) {
        let log: Log = Rc::default();
        let pin = |line| FakePin {
            line,
            log: log.clone(),
        };
        let register = ShiftRegister::new(
            pin(Line::Data),
            pin(Line::Clock),
            pin(Line::Latch),
            pin(Line::Clear),
            FakeDelay { log: log.clone() },
        );
        (register, log)
    }

    /// Replays a pin log the way the register chip sees it.
    #[derive(Debug, Default)]
    pub struct Decoded {
        pub cleared: usize,
        /// Bits clocked in since the last clear, for each latch
        pub frames: Vec<Vec<bool>>,
    }

    pub fn decode(log: &[Event]) -> Decoded {
        let mut decoded = Decoded::default();
        let mut data = false;
        let mut shifted = Vec::new();
        for event in log {
            match *event {
                Event::Set(Line::Data, level) => data = level,
                Event::Set(Line::Clock, true) => shifted.push(data),
                Event::Set(Line::Clear, false) => {
                    decoded.cleared += 1;
                    shifted.clear();
                }
                Event::Set(Line::Latch, true) => decoded.frames.push(shifted.clone()),
                _ => {}
            }
        }
        decoded
    }

    #[test]
    fn test_frame_bits_blank_digit_zero() {
        // Nothing lit: every segment line high, both selects low
        let bits = frame_bits(0, EMPTY_GLYPH);
        let expected: Vec<bool> = (0..FRAME_BITS).map(|i| i != 7 && i != 15).collect();
        assert_eq!(bits.to_vec(), expected);
    }

    #[test]
    fn test_frame_bits_all_lit() {
        let bits = frame_bits(3, UNDEFINED_GLYPH);
        for (i, bit) in bits.iter().enumerate() {
            assert_eq!(*bit, i == 7 || i == 15, "bit {}", i);
        }
    }

    #[test]
    fn test_frame_bits_select_lines() {
        for digit in 0..DIGIT_COUNT {
            let bits = frame_bits(digit, lookup(b'8'));
            assert_eq!(bits[7], digit & 1 != 0);
            assert_eq!(bits[15], (digit >> 1) & 1 != 0);
        }
    }

    #[test]
    fn test_frame_bits_segment_order() {
        let order = [
            SEG_C, SEG_D, SEG_J, SEG_K, SEG_L, SEG_M, SEG_E, SEG_B, SEG_A, SEG_N, SEG_H, SEG_G,
            SEG_P, SEG_F,
        ];
        let positions = [0, 1, 2, 3, 4, 5, 6, 8, 9, 10, 11, 12, 13, 14];
        for (seg, pos) in order.iter().zip(positions) {
            let bits = frame_bits(0, *seg);
            for (i, bit) in bits.iter().enumerate() {
                let expected = i != pos && i != 7 && i != 15;
                assert_eq!(*bit, expected, "segment {:#06x} bit {}", seg, i);
            }
        }
    }

    #[test]
    fn test_draw_digit_protocol() {
        let (mut register, log) = fake_register();
        register.draw_digit(2, lookup(b'7')).unwrap();

        let log = log.borrow();
        let decoded = decode(&log);
        assert_eq!(decoded.cleared, 1);
        assert_eq!(decoded.frames.len(), 1);
        assert_eq!(decoded.frames[0], frame_bits(2, lookup(b'7')).to_vec());

        // Clear comes first, latch last, and the clear line ends released
        assert_eq!(log.first(), Some(&Event::DelayUs(SETTLE_US)));
        let clear_low = log
            .iter()
            .position(|e| *e == Event::Set(Line::Clear, false))
            .unwrap();
        let first_clock = log
            .iter()
            .position(|e| *e == Event::Set(Line::Clock, true))
            .unwrap();
        let latch_high = log
            .iter()
            .position(|e| *e == Event::Set(Line::Latch, true))
            .unwrap();
        assert!(clear_low < first_clock);
        assert!(log[first_clock..].iter().all(|e| *e != Event::Set(Line::Clear, false)));
        let clocks = log[..latch_high]
            .iter()
            .filter(|e| **e == Event::Set(Line::Clock, true))
            .count();
        assert_eq!(clocks, FRAME_BITS);
        assert_eq!(log[latch_high + 2], Event::Set(Line::Latch, false));
    }

    #[test]
    fn test_every_edge_settles() {
        let (mut register, log) = fake_register();
        register.draw_digit(1, lookup(b'A')).unwrap();

        let log = log.borrow();
        for (i, event) in log.iter().enumerate() {
            if let Event::Set(line, _) = event {
                if *line == Line::Data {
                    continue;
                }
                assert_eq!(log[i - 1], Event::DelayUs(SETTLE_US), "before {:?}", event);
                assert_eq!(log[i + 1], Event::DelayUs(SETTLE_US), "after {:?}", event);
            }
        }
        assert!(log.iter().all(|e| !matches!(e, Event::DelayMs(_))));
    }

    #[test]
    fn test_dwell_uses_millisecond_delay() {
        let (mut register, log) = fake_register();
        register.dwell();
        assert_eq!(*log.borrow(), vec![Event::DelayMs(DWELL_MS)]);
    }
}
