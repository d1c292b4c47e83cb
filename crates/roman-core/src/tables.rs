//! Constant symbol tables shared by the encoder and decoder.
//!
//! All tables are plain `static` data. Every symbol that appears in
//! [`NUMERAL_OPTIONS`], [`SUBTRACTIVE_NOTATION`] or [`ADDITIVE_NOTATION`] is a
//! key of [`VALUES`].

/// Literal used for zero.
pub const NULLA: &str = "NULLA";

/// Symbol to magnitude mapping, including the medieval alternates.
pub static VALUES: &[(&str, u16)] = &[
    ("I", 1),
    ("IV", 4),
    ("V", 5),
    ("IX", 9),
    ("X", 10),
    ("XIIX", 18),
    ("IIXX", 18),
    ("XL", 40),
    ("L", 50),
    ("XC", 90),
    ("C", 100),
    ("CD", 400),
    ("D", 500),
    ("CM", 900),
    ("M", 1000),
    // Middle Ages and Renaissance alternates
    ("O", 11),
    ("F", 40),
    ("P", 400),
    ("G", 400),
    ("Q", 500),
];

/// Greedy decode order. Earlier entries win when several match.
pub static NUMERAL_OPTIONS: [&str; 20] = [
    "M", "CM", "D", "Q", "CD", "P", "G", "C", "XC", "L", "F", "XL", "IIXX", "XIIX", "O", "X", "IX",
    "V", "IV", "I",
];

/// Encoding order for standard subtractive numerals.
pub static SUBTRACTIVE_NOTATION: [&str; 13] = [
    "M", "CM", "D", "CD", "C", "XC", "L", "XL", "X", "IX", "V", "IV", "I",
];

/// Encoding order for purely additive numerals.
pub static ADDITIVE_NOTATION: [&str; 7] = ["M", "D", "C", "L", "X", "V", "I"];

/// Letters rejected in decode input after normalization.
pub static NON_ROMAN_NUMERALS: [char; 19] = [
    'A', 'B', 'E', 'F', 'G', 'H', 'J', 'K', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'W', 'Y', 'Z',
];

/// Numerals that may never appear twice in a row.
pub(crate) const NEVER_REPEATED: [char; 3] = ['V', 'L', 'D'];

/// Longest allowed run of a single repeatable numeral.
pub(crate) const MAX_REPEAT: usize = 3;

/// Look up the magnitude of a symbol.
pub fn value_of(symbol: &str) -> Option<u16> {
    VALUES
        .iter()
        .find(|(key, _)| *key == symbol)
        .map(|(_, value)| *value)
}

/// Returns true if `symbol` is a key of [`VALUES`].
pub fn is_symbol(symbol: &str) -> bool {
    value_of(symbol).is_some()
}

/// Magnitude of a symbol known to be in [`VALUES`].
///
/// Only called with entries of the static lists above, which are all keys,
/// so the zero fallback is unreachable. A zero magnitude would stall the
/// encoder on that symbol.
pub(crate) fn symbol_value(symbol: &str) -> u16 {
    let value = value_of(symbol);
    debug_assert!(value.is_some(), "{symbol} missing from VALUES");
    value.unwrap_or(0)
}
