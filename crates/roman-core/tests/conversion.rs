//! Integration tests for encoding and decoding through the public API.

use roman_core::{Decoded, Notation, Numeral, NumeralError, encode_roman, parse_roman};
use roman_core::{parse_roman_opt, tables};

fn decode_value(input: &str) -> u16 {
    match parse_roman(input).expect("decode") {
        Decoded::Complete(numeral) => numeral.value(),
        Decoded::Incomplete { remainder } => panic!("{input} stopped at {remainder}"),
    }
}

#[test]
fn test_known_values_to_roman() {
    for (value, expected) in [(1110, "MCX"), (1993, "MCMXCIII"), (8, "VIII")] {
        let numeral = Numeral::new(value).expect("in range");
        assert_eq!(numeral.to_string(), expected);
    }
}

#[test]
fn test_known_values_from_roman() {
    for (input, expected) in [("MCX", 1110), ("MCMXCIII", 1993), ("VIII", 8)] {
        assert_eq!(decode_value(input), expected);
    }
}

#[test]
fn test_round_trip_subtractive() {
    for value in 1..4000 {
        let roman = encode_roman(value, Notation::Subtractive).expect("encode");
        let decoded = decode_value(&roman);
        assert_eq!(i64::from(decoded), value, "{roman}");
    }
}

#[test]
fn test_additive_notation() {
    assert_eq!(encode_roman(4, Notation::Additive).expect("encode"), "IIII");
    assert_eq!(encode_roman(9, Notation::Additive).expect("encode"), "VIIII");
    assert_eq!(
        encode_roman(3888, Notation::Additive).expect("encode"),
        "MMMDCCCLXXXVIII"
    );
}

#[test]
fn test_end_with_j() {
    assert_eq!(decode_value("CMJ"), 901);
}

#[test]
fn test_empty_and_absent_input() {
    assert_eq!(decode_value(""), 0);
    let absent = parse_roman_opt(None).expect("decode");
    assert_eq!(absent, Decoded::Complete(Numeral::NULLA));
}

#[test]
fn test_range_errors() {
    assert!(matches!(
        Numeral::new(-100),
        Err(NumeralError::OutOfRange { value: -100 })
    ));
    assert!(matches!(
        Numeral::new(5000),
        Err(NumeralError::OutOfRange { value: 5000 })
    ));
    assert!(matches!(
        Numeral::from_number_str("one"),
        Err(NumeralError::InputType { .. })
    ));
}

#[test]
fn test_non_roman_numerals() {
    let err = parse_roman("NCJS").expect_err("should reject");
    assert!(matches!(err, NumeralError::NonRomanCharacter { .. }));
    assert!(err.to_string().contains("NCJS"));
}

#[test]
fn test_too_many_repeated_numerals() {
    for input in ["IIII", "DDD", "CCCC", "MMMM"] {
        let err = parse_roman(input).expect_err(input);
        assert!(
            matches!(err, NumeralError::ExcessiveRepetition { .. }),
            "{input}: {err}"
        );
    }
}

#[test]
fn test_historical_eighteens() {
    assert_eq!(decode_value("XIIX"), 18);
    assert_eq!(decode_value("IIXX"), 18);
}

#[test]
fn test_every_table_symbol_with_roman_letters_decodes_to_its_value() {
    for (symbol, value) in tables::VALUES {
        let roman_letters = !symbol
            .chars()
            .any(|c| tables::NON_ROMAN_NUMERALS.contains(&c));
        if roman_letters {
            assert_eq!(decode_value(symbol), *value, "{symbol}");
        }
    }
}
