//! 14-segment font
//!
//! ```txt
//!   ----A----
//!  |\   |   /|
//!  F H  G  P B
//!  |  \ | /  |
//!   -N-   -J-
//!  |  / | \  |
//!  E M  L  K C
//!  |/   |   \|
//!   ----D----
//! ```
//!
//! Segment letters follow the display datasheet; the bit each one occupies
//! in a [`Glyph`] is arbitrary and only has to agree with the shift order in
//! [`crate::shift_register`].

/// Segments lit for one display position. Only the low 14 bits are used.
pub type Glyph = u16;

pub const SEG_A: Glyph = 1 << 0;
pub const SEG_B: Glyph = 1 << 1;
pub const SEG_C: Glyph = 1 << 2;
pub const SEG_D: Glyph = 1 << 3;
pub const SEG_E: Glyph = 1 << 4;
pub const SEG_F: Glyph = 1 << 5;
pub const SEG_G: Glyph = 1 << 6;
pub const SEG_H: Glyph = 1 << 7;
pub const SEG_J: Glyph = 1 << 8;
pub const SEG_K: Glyph = 1 << 9;
pub const SEG_L: Glyph = 1 << 10;
pub const SEG_M: Glyph = 1 << 11;
pub const SEG_N: Glyph = 1 << 12;
pub const SEG_P: Glyph = 1 << 13;

/// Blank position.
pub const EMPTY_GLYPH: Glyph = 0;

/// Every segment lit. Used for characters the font can't show, so a bad
/// lookup is obvious on the display instead of silently blank.
pub const UNDEFINED_GLYPH: Glyph = SEG_A
    | SEG_B
    | SEG_C
    | SEG_D
    | SEG_E
    | SEG_F
    | SEG_G
    | SEG_H
    | SEG_J
    | SEG_K
    | SEG_L
    | SEG_M
    | SEG_N
    | SEG_P;

/// Glyphs for the 7-bit ASCII range, indexed by character code.
#[rustfmt::skip]
pub static FONT: [Glyph; 128] = [
    UNDEFINED_GLYPH,                                                     // NUL
    UNDEFINED_GLYPH,                                                     // SOH
    UNDEFINED_GLYPH,                                                     // STX
    UNDEFINED_GLYPH,                                                     // ETX
    UNDEFINED_GLYPH,                                                     // EOT
    UNDEFINED_GLYPH,                                                     // ENQ
    UNDEFINED_GLYPH,                                                     // ACK
    UNDEFINED_GLYPH,                                                     // BEL
    UNDEFINED_GLYPH,                                                     // BS
    UNDEFINED_GLYPH,                                                     // TAB
    UNDEFINED_GLYPH,                                                     // LF
    UNDEFINED_GLYPH,                                                     // VT
    UNDEFINED_GLYPH,                                                     // FF
    UNDEFINED_GLYPH,                                                     // CR
    UNDEFINED_GLYPH,                                                     // SO
    UNDEFINED_GLYPH,                                                     // SI
    UNDEFINED_GLYPH,                                                     // DLE
    UNDEFINED_GLYPH,                                                     // DC1
    UNDEFINED_GLYPH,                                                     // DC2
    UNDEFINED_GLYPH,                                                     // DC3
    UNDEFINED_GLYPH,                                                     // DC4
    UNDEFINED_GLYPH,                                                     // NAK
    UNDEFINED_GLYPH,                                                     // SYN
    UNDEFINED_GLYPH,                                                     // ETB
    UNDEFINED_GLYPH,                                                     // CAN
    UNDEFINED_GLYPH,                                                     // EM
    UNDEFINED_GLYPH,                                                     // SUB
    UNDEFINED_GLYPH,                                                     // ESC
    UNDEFINED_GLYPH,                                                     // FS
    UNDEFINED_GLYPH,                                                     // GS
    UNDEFINED_GLYPH,                                                     // RS
    UNDEFINED_GLYPH,                                                     // US

    EMPTY_GLYPH,                                                         // space
    SEG_E | SEG_F,                                                       // !
    SEG_G | SEG_H,                                                       // "
    SEG_B | SEG_C | SEG_D | SEG_N | SEG_J | SEG_G | SEG_H,               // #
    SEG_A | SEG_F | SEG_N | SEG_J | SEG_C | SEG_D | SEG_G | SEG_L,       // $
    SEG_F | SEG_M | SEG_H | SEG_C,                                       // %
    SEG_A | SEG_H | SEG_N | SEG_E | SEG_D | SEG_K | SEG_P,               // &
    SEG_H,                                                               // '
    SEG_A | SEG_F | SEG_E | SEG_D,                                       // (
    SEG_A | SEG_B | SEG_C | SEG_D,                                       // )
    SEG_P | SEG_G | SEG_H | SEG_M | SEG_L | SEG_K,                       // *
    SEG_G | SEG_L | SEG_N | SEG_J,                                       // +
    SEG_M,                                                               // ,
    SEG_N | SEG_J,                                                       // -
    SEG_K,                                                               // .
    SEG_M | SEG_H,                                                       // /
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_M | SEG_H,       // 0
    SEG_B | SEG_C | SEG_H,                                               // 1
    SEG_A | SEG_B | SEG_D | SEG_E | SEG_N | SEG_J,                       // 2
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_J,                               // 3
    SEG_B | SEG_C | SEG_F | SEG_N | SEG_J,                               // 4
    SEG_A | SEG_C | SEG_D | SEG_F | SEG_N | SEG_J,                       // 5
    SEG_A | SEG_C | SEG_D | SEG_E | SEG_F | SEG_N | SEG_J,               // 6
    SEG_A | SEG_H | SEG_L,                                               // 7
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_N | SEG_J,       // 8
    SEG_A | SEG_B | SEG_C | SEG_F | SEG_N | SEG_J,                       // 9
    SEG_F | SEG_E,                                                       // :
    SEG_F | SEG_E,                                                       // ;
    SEG_H | SEG_K,                                                       // <
    SEG_A | SEG_D,                                                       // =
    SEG_P | SEG_M,                                                       // >
    SEG_F | SEG_A | SEG_H | SEG_L | SEG_D,                               // ?

    SEG_L | SEG_K | SEG_C | SEG_B | SEG_J | SEG_A,                       // @
    SEG_A | SEG_B | SEG_C | SEG_E | SEG_F | SEG_N | SEG_J,               // A
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_G | SEG_L | SEG_J,               // B
    SEG_A | SEG_D | SEG_E | SEG_F,                                       // C
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_G | SEG_L,                       // D
    SEG_A | SEG_D | SEG_E | SEG_F | SEG_N | SEG_J,                       // E
    SEG_A | SEG_E | SEG_F | SEG_N | SEG_J,                               // F
    SEG_A | SEG_C | SEG_D | SEG_E | SEG_F | SEG_J,                       // G
    SEG_B | SEG_C | SEG_E | SEG_F | SEG_N | SEG_J,                       // H
    SEG_A | SEG_D | SEG_G | SEG_L,                                       // I
    SEG_B | SEG_C | SEG_D | SEG_E,                                       // J
    SEG_H | SEG_K | SEG_E | SEG_F | SEG_N,                               // K
    SEG_D | SEG_E | SEG_F,                                               // L
    SEG_H | SEG_B | SEG_C | SEG_E | SEG_F | SEG_P,                       // M
    SEG_B | SEG_C | SEG_E | SEG_F | SEG_P | SEG_K,                       // N
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,                       // O
    SEG_A | SEG_B | SEG_E | SEG_F | SEG_N | SEG_J,                       // P
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_K,               // Q
    SEG_A | SEG_B | SEG_K | SEG_E | SEG_F | SEG_N | SEG_J,               // R
    SEG_A | SEG_P | SEG_J | SEG_C | SEG_D,                               // S
    SEG_A | SEG_G | SEG_L,                                               // T
    SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,                               // U
    SEG_H | SEG_M | SEG_F | SEG_E,                                       // V
    SEG_B | SEG_C | SEG_K | SEG_M | SEG_E | SEG_F,                       // W
    SEG_P | SEG_H | SEG_M | SEG_K,                                       // X
    SEG_P | SEG_H | SEG_L,                                               // Y
    SEG_A | SEG_H | SEG_M | SEG_D,                                       // Z
    SEG_A | SEG_F | SEG_E | SEG_D,                                       // [
    SEG_P | SEG_K,                                                       // \
    SEG_A | SEG_B | SEG_C | SEG_D,                                       // ]
    SEG_G | SEG_A | SEG_B,                                               // ^
    SEG_D,                                                               // _

    SEG_P,                                                               // `
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_N | SEG_J,               // a
    SEG_F | SEG_E | SEG_D | SEG_N | SEG_K,                               // b
    SEG_N | SEG_J | SEG_E | SEG_D,                                       // c
    SEG_B | SEG_C | SEG_D | SEG_M | SEG_J,                               // d
    SEG_N | SEG_E | SEG_M | SEG_D,                                       // e
    SEG_A | SEG_F | SEG_E | SEG_N,                                       // f
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_P | SEG_J,               // g
    SEG_F | SEG_E | SEG_N | SEG_J | SEG_C,                               // h
    SEG_L,                                                               // i
    SEG_B | SEG_C | SEG_D,                                               // j
    SEG_G | SEG_L | SEG_K | SEG_H,                                       // k
    SEG_G | SEG_L,                                                       // l
    SEG_E | SEG_L | SEG_C | SEG_N | SEG_J,                               // m
    SEG_E | SEG_N | SEG_K,                                               // n
    SEG_N | SEG_J | SEG_C | SEG_D | SEG_E,                               // o
    SEG_A | SEG_F | SEG_E | SEG_N | SEG_H,                               // p
    SEG_A | SEG_B | SEG_N | SEG_J | SEG_F | SEG_K,                       // q
    SEG_E | SEG_N,                                                       // r
    SEG_A | SEG_P | SEG_J | SEG_C | SEG_D,                               // s
    SEG_F | SEG_E | SEG_D | SEG_N,                                       // t
    SEG_E | SEG_D | SEG_C,                                               // u
    SEG_E | SEG_M,                                                       // v
    SEG_E | SEG_M | SEG_K | SEG_C,                                       // w
    SEG_P | SEG_H | SEG_M | SEG_K,                                       // x
    SEG_G | SEG_B | SEG_J | SEG_C | SEG_D,                               // y
    SEG_A | SEG_H | SEG_M | SEG_D,                                       // z
    SEG_A | SEG_P | SEG_N | SEG_M | SEG_D,                               // {
    SEG_G | SEG_L,                                                       // |
    SEG_A | SEG_H | SEG_J | SEG_K | SEG_D,                               // }
    SEG_M | SEG_J,                                                       // ~
    UNDEFINED_GLYPH,                                                     // DEL
];

/// Looks up the glyph for an ASCII code.
///
/// Codes outside the 7-bit range have no entry and come back as
/// [`UNDEFINED_GLYPH`].
pub fn lookup(code: u8) -> Glyph {
    FONT.get(code as usize).copied().unwrap_or(UNDEFINED_GLYPH)
}
