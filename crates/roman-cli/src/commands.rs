use std::io;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use roman_cli::menu::run_menu;
use roman_cli::report::ConversionReport;
use roman_core::{Notation, Numeral, is_numeral, parse_roman_opt};

use crate::cli::{CheckArgs, FromRomanArgs, MenuArgs, ToRomanArgs};

pub fn run_to_roman(args: &ToRomanArgs) -> Result<ConversionReport> {
    let notation = Notation::from(args.notation);
    let span = info_span!("to_roman", input = %args.number, %notation);
    let _guard = span.enter();

    let numeral = Numeral::from_number_str(&args.number)
        .with_context(|| format!("convert {:?} to a roman numeral", args.number))?;
    let report = ConversionReport::encoded(&args.number, numeral, notation);
    info!(value = numeral.value(), roman = ?report.roman, "converted to roman");
    Ok(report)
}

pub fn run_from_roman(args: &FromRomanArgs) -> Result<ConversionReport> {
    let input = args.numeral.as_deref();
    let span = info_span!("from_roman", input = input.unwrap_or_default());
    let _guard = span.enter();

    let decoded = parse_roman_opt(input)
        .with_context(|| format!("read {:?} as a roman numeral", input.unwrap_or_default()))?;
    let report = ConversionReport::decoded(input.unwrap_or_default(), &decoded);
    match report.value {
        Some(value) => info!(value, "converted from roman"),
        None => warn!(remainder = ?report.remainder, "numeral could not be fully read"),
    }
    Ok(report)
}

pub fn run_check(args: &CheckArgs) -> bool {
    let _guard = info_span!("check", input = %args.numeral).entered();
    let valid = is_numeral(&args.numeral);
    info!(valid, "checked numeral");
    valid
}

pub fn run_menu_loop(args: &MenuArgs) -> Result<()> {
    let notation = Notation::from(args.notation);
    let _guard = info_span!("menu", %notation).entered();
    let stdin = io::stdin();
    run_menu(stdin.lock(), io::stdout().lock(), notation).context("run interactive menu")
}
