//! Integer to numeral encoding.

use crate::error::Result;
use crate::notation::Notation;
use crate::numeral::Numeral;
use crate::tables::{NULLA, symbol_value};

/// Encode an integer as a Roman numeral.
///
/// # Errors
///
/// Returns [`NumeralError::OutOfRange`](crate::NumeralError::OutOfRange) if
/// `value` is outside `0..=4000`.
///
/// # Example
///
/// ```
/// use roman_core::{Notation, encode_roman};
///
/// assert_eq!(encode_roman(1993, Notation::Subtractive).unwrap(), "MCMXCIII");
/// assert_eq!(encode_roman(9, Notation::Additive).unwrap(), "VIIII");
/// ```
pub fn encode_roman(value: i64, notation: Notation) -> Result<String> {
    Ok(Numeral::new(value)?.to_roman(notation))
}

/// Greedy encoding over the notation's symbol list.
///
/// A compound symbol is used at most once before the cursor moves past it,
/// so sequences like `IVIV` cannot occur.
pub(crate) fn encode(value: u16, notation: Notation) -> String {
    if value == 0 {
        return NULLA.to_string();
    }

    let symbols = notation.symbols();
    let mut out = String::new();
    let mut remaining = value;
    let mut position = 0;

    while remaining != 0 {
        let Some(symbol) = symbols.get(position) else {
            break;
        };
        let magnitude = symbol_value(symbol);
        if remaining >= magnitude {
            remaining -= magnitude;
            out.push_str(symbol);
            if symbol.len() > 1 {
                position += 1;
            }
            continue;
        }
        position += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_subtractive_values() {
        assert_eq!(encode(1110, Notation::Subtractive), "MCX");
        assert_eq!(encode(1993, Notation::Subtractive), "MCMXCIII");
        assert_eq!(encode(8, Notation::Subtractive), "VIII");
        assert_eq!(encode(3999, Notation::Subtractive), "MMMCMXCIX");
        assert_eq!(encode(4000, Notation::Subtractive), "MMMM");
    }

    #[test]
    fn test_zero_is_nulla() {
        assert_eq!(encode(0, Notation::Subtractive), "NULLA");
        assert_eq!(encode(0, Notation::Additive), "NULLA");
    }

    #[test]
    fn test_additive_repeats_units() {
        assert_eq!(encode(4, Notation::Additive), "IIII");
        assert_eq!(encode(9, Notation::Additive), "VIIII");
        assert_eq!(encode(40, Notation::Additive), "XXXX");
        assert_eq!(encode(90, Notation::Additive), "LXXXX");
        assert_eq!(encode(400, Notation::Additive), "CCCC");
        assert_eq!(encode(900, Notation::Additive), "DCCCC");
        assert_eq!(encode(1994, Notation::Additive), "MDCCCCLXXXXIIII");
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(encode_roman(-1, Notation::Subtractive).is_err());
        assert!(encode_roman(4001, Notation::Additive).is_err());
        assert_eq!(
            encode_roman(0, Notation::Subtractive).as_deref(),
            Ok("NULLA")
        );
    }
}
