//! Symbol selection: clock value to a pair of glyphs

use crate::elements;
use crate::font::{self, Glyph};

/// What the two positions of a clock field show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Decimal tens and ones
    Digits,
    /// Chemical symbol of the element with that atomic number
    Elements,
}

/// Glyphs for the two positions of one clock field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SymbolPair {
    /// Tens digit, or first letter of the symbol
    pub left: Glyph,
    /// Ones digit, or second letter of the symbol
    pub right: Glyph,
}

/// Chooses the glyphs for a clock value in `0..60`.
///
/// When `visible` is false both positions are blanked, whatever the mode.
pub fn select_symbols(value: u8, mode: DisplayMode, visible: bool) -> SymbolPair {
    let [left, right] = match mode {
        DisplayMode::Digits => [b'0' + (value / 10) % 10, b'0' + value % 10],
        DisplayMode::Elements => elements::symbol(value),
    };

    let [left, right] = if visible { [left, right] } else { [b' ', b' '] };

    SymbolPair {
        left: font::lookup(left),
        right: font::lookup(right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{lookup, EMPTY_GLYPH};
    use proptest::prelude::*;

    #[test]
    fn test_digits() {
        let pair = select_symbols(42, DisplayMode::Digits, true);
        assert_eq!(pair.left, lookup(b'4'));
        assert_eq!(pair.right, lookup(b'2'));
    }

    #[test]
    fn test_single_digit_has_leading_zero() {
        let pair = select_symbols(7, DisplayMode::Digits, true);
        assert_eq!(pair.left, lookup(b'0'));
        assert_eq!(pair.right, lookup(b'7'));
    }

    #[test]
    fn test_hydrogen() {
        let pair = select_symbols(1, DisplayMode::Elements, true);
        assert_eq!(pair.left, lookup(b'H'));
        assert_eq!(pair.right, lookup(b' '));
    }

    #[test]
    fn test_hidden_blanks_both_modes() {
        for mode in [DisplayMode::Digits, DisplayMode::Elements] {
            let pair = select_symbols(38, mode, false);
            assert_eq!(pair.left, EMPTY_GLYPH);
            assert_eq!(pair.right, EMPTY_GLYPH);
        }
    }

    proptest! {
        #[test]
        fn prop_digit_mode_matches_decimal(value in 0u8..60) {
            let pair = select_symbols(value, DisplayMode::Digits, true);
            prop_assert_eq!(pair.left, lookup(b'0' + (value / 10) % 10));
            prop_assert_eq!(pair.right, lookup(b'0' + value % 10));
        }

        #[test]
        fn prop_element_mode_matches_table(value in 0u8..60) {
            let [first, second] = elements::ELEMENT_SYMBOLS[value as usize];
            let pair = select_symbols(value, DisplayMode::Elements, true);
            prop_assert_eq!(pair.left, lookup(first));
            prop_assert_eq!(pair.right, lookup(second));
        }

        #[test]
        fn prop_hidden_is_always_empty(value in 0u8..60, element_mode in any::<bool>()) {
            let mode = if element_mode { DisplayMode::Elements } else { DisplayMode::Digits };
            let pair = select_symbols(value, mode, false);
            prop_assert_eq!(pair, SymbolPair { left: EMPTY_GLYPH, right: EMPTY_GLYPH });
        }
    }
}
