//! Chemical element symbols shown in element mode

/// Two-character symbol for each clock value, indexed by atomic number.
///
/// There is no element zero, so value 0 shows underscores. Single-letter
/// symbols are padded with a trailing space.
#[rustfmt::skip]
pub static ELEMENT_SYMBOLS: [[u8; 2]; 60] = [
    *b"__", // 0
    *b"H ", // 1
    *b"He", // 2
    *b"Li", // 3
    *b"Be", // 4
    *b"B ", // 5
    *b"C ", // 6
    *b"N ", // 7
    *b"O ", // 8
    *b"F ", // 9
    *b"Ne", // 10
    *b"Na", // 11
    *b"Mg", // 12
    *b"Al", // 13
    *b"Si", // 14
    *b"P ", // 15
    *b"S ", // 16
    *b"Cl", // 17
    *b"Ar", // 18
    *b"K ", // 19
    *b"Ca", // 20
    *b"Sc", // 21
    *b"Ti", // 22
    *b"V ", // 23
    *b"Cr", // 24
    *b"Mn", // 25
    *b"Fe", // 26
    *b"Co", // 27
    *b"Ni", // 28
    *b"Cu", // 29
    *b"Zn", // 30
    *b"Ga", // 31
    *b"Ge", // 32
    *b"As", // 33
    *b"Se", // 34
    *b"Br", // 35
    *b"Kr", // 36
    *b"Rb", // 37
    *b"Sr", // 38
    *b"Y ", // 39
    *b"Zr", // 40
    *b"Nb", // 41
    *b"Mo", // 42
    *b"Tc", // 43
    *b"Ru", // 44
    *b"Rh", // 45
    *b"Pd", // 46
    *b"Ag", // 47
    *b"Cd", // 48
    *b"In", // 49
    *b"Sn", // 50
    *b"Sb", // 51
    *b"Te", // 52
    *b"I ", // 53
    *b"Xe", // 54
    *b"Cs", // 55
    *b"Ba", // 56
    *b"La", // 57
    *b"Ce", // 58
    *b"Pr", // 59
];

/// Symbol for a clock value in `0..60`.
///
/// Larger values can't come from the clock; they get the same placeholder
/// as value 0.
pub fn symbol(value: u8) -> [u8; 2] {
    ELEMENT_SYMBOLS
        .get(value as usize)
        .copied()
        .unwrap_or(ELEMENT_SYMBOLS[0])
}
