//! Conversion results as printed by the CLI.

use serde::Serialize;

use roman_core::{Decoded, Notation, Numeral};

/// Which way a conversion went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    ToRoman,
    FromRoman,
}

/// Result of a single conversion, ready for text or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub direction: Direction,
    pub input: String,
    /// Integer value; `None` when the decode was incomplete.
    pub value: Option<u16>,
    pub roman: Option<String>,
    pub notation: Notation,
    /// Unconsumed text of an incomplete decode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remainder: Option<String>,
}

impl ConversionReport {
    /// Report for an integer rendered in `notation`.
    pub fn encoded(input: impl Into<String>, numeral: Numeral, notation: Notation) -> Self {
        Self {
            direction: Direction::ToRoman,
            input: input.into(),
            value: Some(numeral.value()),
            roman: Some(numeral.to_roman(notation)),
            notation,
            remainder: None,
        }
    }

    /// Report for decoded text; `roman` holds the canonical spelling.
    pub fn decoded(input: impl Into<String>, decoded: &Decoded) -> Self {
        let input = input.into();
        match decoded {
            Decoded::Complete(numeral) => Self {
                direction: Direction::FromRoman,
                input,
                value: Some(numeral.value()),
                roman: Some(numeral.to_string()),
                notation: Notation::Subtractive,
                remainder: None,
            },
            Decoded::Incomplete { remainder } => Self {
                direction: Direction::FromRoman,
                input,
                value: None,
                roman: None,
                notation: Notation::Subtractive,
                remainder: Some(remainder.clone()),
            },
        }
    }

    /// Returns false only for a decode that left a remainder.
    pub fn is_complete(&self) -> bool {
        self.value.is_some()
    }

    /// One-line human-readable summary.
    pub fn to_text(&self) -> String {
        match (self.direction, self.value, &self.roman) {
            (Direction::ToRoman, _, Some(roman)) => {
                format!("{} becomes {roman} in roman numerals", self.input)
            }
            (Direction::FromRoman, Some(value), _) => {
                format!("{} becomes {value} in integers", self.input.to_uppercase())
            }
            _ => match &self.remainder {
                Some(remainder) => format!(
                    "{} is not a valid roman numeral (could not read {remainder:?})",
                    self.input.to_uppercase()
                ),
                None => format!("{} is not a valid roman numeral", self.input.to_uppercase()),
            },
        }
    }

    /// Compact single-line JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_text() {
        let numeral = Numeral::new(1110).expect("in range");
        let report = ConversionReport::encoded("1110", numeral, Notation::Subtractive);
        assert_eq!(report.to_text(), "1110 becomes MCX in roman numerals");
        assert!(report.is_complete());
    }

    #[test]
    fn test_decoded_text_uppercases_input() {
        let decoded = roman_core::parse_roman("cmj").expect("decode");
        let report = ConversionReport::decoded("cmj", &decoded);
        assert_eq!(report.to_text(), "CMJ becomes 901 in integers");
        assert_eq!(report.roman.as_deref(), Some("CMI"));
    }

    #[test]
    fn test_incomplete_text_names_remainder() {
        let decoded = Decoded::Incomplete {
            remainder: "V".to_string(),
        };
        let report = ConversionReport::decoded("iiiv", &decoded);
        assert!(!report.is_complete());
        assert_eq!(
            report.to_text(),
            "IIIV is not a valid roman numeral (could not read \"V\")"
        );
    }
}
