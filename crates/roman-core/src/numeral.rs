//! The validated numeral value object.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::decode::{Decoded, parse_roman, parse_roman_opt};
use crate::encode::encode;
use crate::error::{NumeralError, Result};
use crate::notation::Notation;

/// Smallest value a [`Numeral`] can hold (`NULLA`).
pub const MIN_VALUE: u16 = 0;

/// Largest value a [`Numeral`] can hold.
pub const MAX_VALUE: u16 = 4000;

/// An integer in `MIN_VALUE..=MAX_VALUE` that renders as a Roman numeral.
///
/// The integer is the only state; the numeral text is derived on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeral(u16);

impl Numeral {
    /// Zero, rendered as `NULLA`.
    pub const NULLA: Numeral = Numeral(0);

    /// Build a numeral from an integer.
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::OutOfRange`] for negative values or values
    /// above [`MAX_VALUE`].
    pub fn new(value: i64) -> Result<Self> {
        u16::try_from(value)
            .ok()
            .filter(|v| (MIN_VALUE..=MAX_VALUE).contains(v))
            .map(Numeral)
            .ok_or_else(|| NumeralError::out_of_range(value))
    }

    /// Build a numeral from decimal text such as `"1993"`.
    ///
    /// The whole string must be an integer; Roman text belongs in
    /// [`Numeral::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`NumeralError::InputType`] if the text is not an integer, or
    /// [`NumeralError::OutOfRange`] if it is but falls outside the range.
    pub fn from_number_str(input: &str) -> Result<Self> {
        let value: i64 = input
            .parse()
            .map_err(|_| NumeralError::input_type(input))?;
        Self::new(value)
    }

    /// Decode Roman numeral text. See [`parse_roman`].
    ///
    /// # Errors
    ///
    /// Returns an error for disallowed letters or excessive repetition.
    pub fn parse(input: &str) -> Result<Decoded> {
        parse_roman(input)
    }

    /// Decode possibly-absent Roman numeral text; `None` yields `NULLA`.
    ///
    /// # Errors
    ///
    /// Same as [`Numeral::parse`].
    pub fn parse_opt(input: Option<&str>) -> Result<Decoded> {
        parse_roman_opt(input)
    }

    /// The integer value.
    pub fn value(self) -> u16 {
        self.0
    }

    /// Returns true for zero, which renders as `NULLA`.
    pub fn is_nulla(self) -> bool {
        self.0 == 0
    }

    /// Render in the given notation.
    pub fn to_roman(self, notation: Notation) -> String {
        encode(self.0, notation)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_roman(Notation::Subtractive))
    }
}

impl TryFrom<i64> for Numeral {
    type Error = NumeralError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Numeral> for u16 {
    fn from(numeral: Numeral) -> Self {
        numeral.0
    }
}

impl Serialize for Numeral {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}
