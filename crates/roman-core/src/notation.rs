//! Notation styles for encoding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::tables::{ADDITIVE_NOTATION, SUBTRACTIVE_NOTATION};

/// Which symbol list drives encoding.
///
/// - **Subtractive**: standard numerals with two-letter forms (IV, IX, XL, ...)
/// - **Additive**: only repeated single letters, so 4 is `IIII`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    #[default]
    Subtractive,
    Additive,
}

impl Notation {
    /// All notations, in declaration order.
    pub const ALL: [Notation; 2] = [Notation::Subtractive, Notation::Additive];

    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Notation::Subtractive => "subtractive",
            Notation::Additive => "additive",
        }
    }

    /// Encoding symbols for this notation, highest value first.
    pub fn symbols(&self) -> &'static [&'static str] {
        match self {
            Notation::Subtractive => &SUBTRACTIVE_NOTATION,
            Notation::Additive => &ADDITIVE_NOTATION,
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Notation {
    type Err = String;

    /// Parse a notation name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "SUBTRACTIVE" => Ok(Notation::Subtractive),
            "ADDITIVE" => Ok(Notation::Additive),
            _ => Err(format!("Unknown notation: {s}")),
        }
    }
}
