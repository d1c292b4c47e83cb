//! Error types for numeral construction and decoding.

use thiserror::Error;

use crate::numeral::{MAX_VALUE, MIN_VALUE};

/// Hard failures raised while building or decoding a numeral.
///
/// A decode that simply cannot consume the whole string is not an error;
/// see [`Decoded::Incomplete`](crate::Decoded::Incomplete).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    /// Integer outside the representable range.
    #[error(
        "number out of range (must be {min}..={max}): {value}",
        min = MIN_VALUE,
        max = MAX_VALUE
    )]
    OutOfRange { value: i64 },

    /// Numeric-string construction was given non-numeric text.
    #[error("input must be an integer, got {input:?}")]
    InputType { input: String },

    /// Decode input contains a letter outside the numeral alphabet.
    #[error("string can only contain roman numerals: {input}")]
    NonRomanCharacter { input: String },

    /// Decode input repeats a numeral more often than allowed.
    #[error(
        "too many repeated numerals in {input}: '{numeral}' appears {count} times in a row \
         (I, X, C, M repeat at most 3 times; V, L, D never repeat)"
    )]
    ExcessiveRepetition {
        input: String,
        numeral: char,
        count: usize,
    },
}

/// Result type alias for numeral operations.
pub type Result<T> = std::result::Result<T, NumeralError>;

impl NumeralError {
    /// Create an OutOfRange error.
    pub fn out_of_range(value: i64) -> Self {
        Self::OutOfRange { value }
    }

    /// Create an InputType error.
    pub fn input_type(input: impl Into<String>) -> Self {
        Self::InputType {
            input: input.into(),
        }
    }

    /// Create a NonRomanCharacter error.
    pub fn non_roman_character(input: impl Into<String>) -> Self {
        Self::NonRomanCharacter {
            input: input.into(),
        }
    }

    /// Create an ExcessiveRepetition error.
    pub fn excessive_repetition(input: impl Into<String>, numeral: char, count: usize) -> Self {
        Self::ExcessiveRepetition {
            input: input.into(),
            numeral,
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NumeralError::out_of_range(5000);
        assert_eq!(
            format!("{err}"),
            "number out of range (must be 0..=4000): 5000"
        );

        let err = NumeralError::non_roman_character("NCIS");
        assert_eq!(
            format!("{err}"),
            "string can only contain roman numerals: NCIS"
        );

        let err = NumeralError::input_type("one");
        assert_eq!(format!("{err}"), "input must be an integer, got \"one\"");
    }

    #[test]
    fn test_repetition_message_names_numeral() {
        let err = NumeralError::excessive_repetition("MMMM", 'M', 4);
        let message = format!("{err}");
        assert!(message.starts_with("too many repeated numerals in MMMM"));
        assert!(message.contains("'M' appears 4 times"));
    }
}
