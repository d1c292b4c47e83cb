//! CLI argument definitions for the Roman numeral converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use roman_core::Notation;

#[derive(Parser)]
#[command(
    name = "roman",
    version,
    about = "Convert between integers and Roman numerals",
    long_about = "Convert between integers and Roman numerals.\n\n\
                  Supports subtractive and additive notation, medieval variants \
                  (XIIX, IIXX, U for V, trailing J for I) and NULLA for zero.\n\
                  Values range from 0 to 4000."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Result output format.
    #[arg(long = "output", value_enum, default_value = "text", global = true)]
    pub output: OutputFormatArg,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert an integer (0..=4000) to a Roman numeral.
    ToRoman(ToRomanArgs),

    /// Convert a Roman numeral to an integer.
    FromRoman(FromRomanArgs),

    /// Check whether text is a complete, valid Roman numeral.
    Check(CheckArgs),

    /// Print the symbol value table, or one notation's encoding list.
    Symbols(SymbolsArgs),

    /// Run the interactive conversion menu on stdin/stdout.
    Menu(MenuArgs),
}

#[derive(Parser)]
pub struct ToRomanArgs {
    /// Integer to convert, as decimal text.
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    pub number: String,

    /// Notation used for the numeral.
    #[arg(long = "notation", value_enum, default_value = "subtractive")]
    pub notation: NotationArg,
}

#[derive(Parser)]
pub struct FromRomanArgs {
    /// Numeral to decode; omitted means NULLA (0).
    #[arg(value_name = "NUMERAL")]
    pub numeral: Option<String>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Text to check.
    #[arg(value_name = "NUMERAL")]
    pub numeral: String,
}

#[derive(Parser)]
pub struct SymbolsArgs {
    /// Show the encoding list for this notation instead of the full table.
    #[arg(long = "notation", value_enum)]
    pub notation: Option<NotationArg>,
}

#[derive(Parser)]
pub struct MenuArgs {
    /// Notation used when converting to Roman numerals.
    #[arg(long = "notation", value_enum, default_value = "subtractive")]
    pub notation: NotationArg,
}

/// CLI notation choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum NotationArg {
    Subtractive,
    Additive,
}

impl From<NotationArg> for Notation {
    fn from(arg: NotationArg) -> Self {
        match arg {
            NotationArg::Subtractive => Notation::Subtractive,
            NotationArg::Additive => Notation::Additive,
        }
    }
}

/// CLI result output choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
