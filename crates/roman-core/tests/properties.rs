//! Property tests for the decoder and encoder.

use proptest::prelude::*;

use roman_core::{Notation, Numeral, encode_roman, parse_roman};

proptest! {
    #[test]
    fn decoding_ignores_case(input in "[IVXLCDMivxlcdm]{1,12}") {
        let upper = parse_roman(&input.to_uppercase());
        let lower = parse_roman(&input.to_lowercase());
        prop_assert_eq!(upper.is_err(), lower.is_err());
        prop_assert_eq!(
            upper.ok().and_then(|d| d.numeral()),
            lower.ok().and_then(|d| d.numeral())
        );
    }

    #[test]
    fn trailing_j_matches_trailing_i(prefix in "[IVXLCDM]{0,10}") {
        let with_j = parse_roman(&format!("{prefix}J"));
        let with_i = parse_roman(&format!("{prefix}I"));
        prop_assert_eq!(with_j.ok().and_then(|d| d.numeral()), with_i.ok().and_then(|d| d.numeral()));
    }

    #[test]
    fn subtractive_never_repeats_four_times(value in 1i64..4000) {
        let roman = encode_roman(value, Notation::Subtractive).expect("in range");
        let bytes = roman.as_bytes();
        prop_assert!(bytes.windows(4).all(|w| !(w[0] == w[1] && w[1] == w[2] && w[2] == w[3])));
        for never in ["VV", "LL", "DD"] {
            prop_assert!(!roman.contains(never));
        }
    }

    #[test]
    fn additive_uses_single_letters(value in 1i64..=4000) {
        let numeral = Numeral::new(value).expect("in range");
        let roman = numeral.to_roman(Notation::Additive);
        prop_assert!(roman.chars().all(|c| "MDCLXVI".contains(c)));
    }

    #[test]
    fn arbitrary_text_never_panics(input in "\\PC{0,16}") {
        let _ = parse_roman(&input);
    }
}
