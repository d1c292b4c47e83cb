//! Numeral to integer decoding.
//!
//! Decoding normalizes the input, rejects disallowed letters, and then tries
//! two strategies in order:
//!
//! 1. **Exact match**: the original, un-normalized input is a key of
//!    [`VALUES`](crate::VALUES).
//! 2. **Greedy scan**: after repetition checks, walk
//!    [`NUMERAL_OPTIONS`] left to right, consuming matching prefixes.
//!
//! A scan that runs out of options before consuming the whole string yields
//! [`Decoded::Incomplete`], which is a result rather than an error.

use tracing::{debug, trace};

use crate::error::{NumeralError, Result};
use crate::numeral::Numeral;
use crate::tables::{
    MAX_REPEAT, NEVER_REPEATED, NON_ROMAN_NUMERALS, NULLA, NUMERAL_OPTIONS, symbol_value, value_of,
};

/// Outcome of a decode that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// The whole string was consumed.
    Complete(Numeral),
    /// The greedy scan stopped with characters left over.
    Incomplete {
        /// Normalized text that could not be consumed.
        remainder: String,
    },
}

impl Decoded {
    /// The decoded numeral, if the string was fully consumed.
    pub fn numeral(&self) -> Option<Numeral> {
        match self {
            Decoded::Complete(numeral) => Some(*numeral),
            Decoded::Incomplete { .. } => None,
        }
    }

    /// Returns true if the whole string was consumed.
    pub fn is_complete(&self) -> bool {
        matches!(self, Decoded::Complete(_))
    }
}

/// Decode possibly-absent numeral text. `None` decodes to `NULLA`.
///
/// # Errors
///
/// Same as [`parse_roman`].
pub fn parse_roman_opt(input: Option<&str>) -> Result<Decoded> {
    parse_roman(input.unwrap_or_default())
}

/// Decode Roman numeral text.
///
/// Empty input and `NULLA` (any case) decode to zero. A trailing `J` reads
/// as `I` and every `U` reads as `V`. Only ASCII letters are case-folded;
/// other characters are left as they are and end the scan.
///
/// # Errors
///
/// - [`NumeralError::NonRomanCharacter`] if the normalized text contains a
///   letter from [`NON_ROMAN_NUMERALS`].
/// - [`NumeralError::ExcessiveRepetition`] if V, L or D repeat, or any
///   numeral appears more than three times in a row.
/// - [`NumeralError::OutOfRange`] if the decoded total exceeds 4000.
///
/// # Example
///
/// ```
/// use roman_core::{Decoded, parse_roman};
///
/// let decoded = parse_roman("cmj").unwrap();
/// assert_eq!(decoded.numeral().map(|n| n.value()), Some(901));
/// assert!(matches!(parse_roman("IIIV").unwrap(), Decoded::Incomplete { .. }));
/// ```
pub fn parse_roman(input: &str) -> Result<Decoded> {
    if input.is_empty() {
        return Ok(Decoded::Complete(Numeral::NULLA));
    }

    let mut normalized = input.to_ascii_uppercase();
    if normalized == NULLA {
        return Ok(Decoded::Complete(Numeral::NULLA));
    }

    // Medical notation writes a final I as J.
    if normalized.ends_with('J') {
        normalized.pop();
        normalized.push('I');
    }
    let normalized = normalized.replace('U', "V");
    trace!(%input, %normalized, "normalized numeral input");

    if normalized.chars().any(|c| NON_ROMAN_NUMERALS.contains(&c)) {
        return Err(NumeralError::non_roman_character(normalized));
    }

    if let Some(value) = exact_match(input) {
        debug!(%input, value, "numeral matched symbol table");
        return Numeral::new(i64::from(value)).map(Decoded::Complete);
    }

    check_repetition(&normalized)?;

    let (total, remainder) = greedy_scan(&normalized);
    if remainder.is_empty() {
        return Numeral::new(i64::from(total)).map(Decoded::Complete);
    }

    debug!(%input, %remainder, "numeral scan stopped before end of input");
    Ok(Decoded::Incomplete {
        remainder: remainder.to_string(),
    })
}

/// Returns true if `input` is non-empty and decodes completely without error.
pub fn is_numeral(input: &str) -> bool {
    !input.is_empty() && matches!(parse_roman(input), Ok(Decoded::Complete(_)))
}

/// Strategy 1: the untouched input is itself a table symbol.
fn exact_match(input: &str) -> Option<u16> {
    value_of(input)
}

/// Reject runs of V, L, D longer than one and any run longer than three.
fn check_repetition(normalized: &str) -> Result<()> {
    let mut chars = normalized.chars().peekable();
    while let Some(numeral) = chars.next() {
        let mut count = 1;
        while chars.next_if_eq(&numeral).is_some() {
            count += 1;
        }
        let repeated_once_too_often = count > 1 && NEVER_REPEATED.contains(&numeral);
        if repeated_once_too_often || count > MAX_REPEAT {
            return Err(NumeralError::excessive_repetition(
                normalized, numeral, count,
            ));
        }
    }
    Ok(())
}

/// Strategy 2: greedy left-to-right scan over [`NUMERAL_OPTIONS`].
///
/// Single-letter options stay selected after a match so they can repeat;
/// compound options are used at most once. Returns the accumulated total and
/// whatever could not be consumed.
fn greedy_scan(normalized: &str) -> (u32, &str) {
    let mut rest = normalized;
    let mut total: u32 = 0;
    let mut position = 0;

    while !rest.is_empty() && position < NUMERAL_OPTIONS.len() {
        let option = NUMERAL_OPTIONS[position];
        let Some(tail) = rest.strip_prefix(option) else {
            position += 1;
            continue;
        };
        total += u32::from(symbol_value(option));
        rest = tail;
        if option.len() > 1 {
            position += 1;
        }
    }

    (total, rest)
}
