//! Roman numeral encoder and decoder.
//!
//! Converts integers in `0..=4000` to Roman numerals and back, in standard
//! subtractive notation as well as historical variants:
//!
//! - Additive notation (`IIII` for 4, `VIIII` for 9)
//! - Medieval single-letter alternates (`O`, `F`, `P`, `G`, `Q`)
//! - `XIIX` and `IIXX` for 18
//! - `U` read as `V`, and a trailing `J` read as `I`
//! - `NULLA` for zero
//!
//! # Example
//!
//! ```
//! use roman_core::{Decoded, Notation, Numeral, parse_roman};
//!
//! let numeral = Numeral::new(1993).unwrap();
//! assert_eq!(numeral.to_string(), "MCMXCIII");
//! assert_eq!(numeral.to_roman(Notation::Additive), "MDCCCCLXXXXIII");
//!
//! match parse_roman("MCMXCIII").unwrap() {
//!     Decoded::Complete(n) => assert_eq!(n.value(), 1993),
//!     Decoded::Incomplete { remainder } => panic!("stopped at {remainder}"),
//! }
//! ```

mod decode;
mod encode;
mod error;
mod notation;
mod numeral;
pub mod tables;

pub use decode::{Decoded, is_numeral, parse_roman, parse_roman_opt};
pub use encode::encode_roman;
pub use error::{NumeralError, Result};
pub use notation::Notation;
pub use numeral::{MAX_VALUE, MIN_VALUE, Numeral};
pub use tables::{
    ADDITIVE_NOTATION, NON_ROMAN_NUMERALS, NULLA, NUMERAL_OPTIONS, SUBTRACTIVE_NOTATION, VALUES,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
