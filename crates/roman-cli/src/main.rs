//! Roman numeral converter CLI.

use clap::{ColorChoice, Parser};
use roman_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg};
use crate::commands::{run_check, run_from_roman, run_menu_loop, run_to_roman};
use crate::summary::{print_check, print_report, print_symbols};

/// Exit code for a decode that stopped before the end of its input.
const EXIT_INCOMPLETE: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    std::process::exit(exit_code(&cli.command, cli.output));
}

/// Run a subcommand, print its result, and return the process exit code.
///
/// 0 on success, 1 on a hard error or a failed `check`, 2 when a decode
/// stopped before the end of its input.
fn exit_code(command: &Command, output: OutputFormatArg) -> i32 {
    match command {
        Command::ToRoman(args) => match run_to_roman(args)
            .and_then(|report| print_report(&report, output))
        {
            Ok(()) => 0,
            Err(error) => report_error(&error),
        },
        Command::FromRoman(args) => match run_from_roman(args) {
            Ok(report) => match print_report(&report, output) {
                Ok(()) if report.is_complete() => 0,
                Ok(()) => EXIT_INCOMPLETE,
                Err(error) => report_error(&error),
            },
            Err(error) => report_error(&error),
        },
        Command::Check(args) => {
            let valid = run_check(args);
            print_check(&args.numeral, valid, output);
            if valid { 0 } else { 1 }
        }
        Command::Symbols(args) => match print_symbols(args.notation.map(Into::into), output) {
            Ok(()) => 0,
            Err(error) => report_error(&error),
        },
        Command::Menu(args) => match run_menu_loop(args) {
            Ok(()) => 0,
            Err(error) => report_error(&error),
        },
    }
}

fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exit_code_for(args: &[&str]) -> i32 {
        let cli = Cli::try_parse_from(args).expect("parse arguments");
        exit_code(&cli.command, cli.output)
    }

    #[test]
    fn test_incomplete_decode_exits_two() {
        assert_eq!(exit_code_for(&["roman", "from-roman", "IIIV"]), EXIT_INCOMPLETE);
    }

    #[test]
    fn test_hard_errors_exit_one() {
        assert_eq!(exit_code_for(&["roman", "from-roman", "NCJS"]), 1);
        assert_eq!(exit_code_for(&["roman", "to-roman", "one"]), 1);
        assert_eq!(exit_code_for(&["roman", "to-roman", "5000"]), 1);
    }

    #[test]
    fn test_check_exit_codes() {
        assert_eq!(exit_code_for(&["roman", "check", "IIII"]), 1);
        assert_eq!(exit_code_for(&["roman", "check", "XIV"]), 0);
    }

    #[test]
    fn test_successful_conversions_exit_zero() {
        assert_eq!(exit_code_for(&["roman", "to-roman", "1993"]), 0);
        assert_eq!(exit_code_for(&["roman", "from-roman", "xiix"]), 0);
        assert_eq!(exit_code_for(&["roman", "from-roman"]), 0);
        assert_eq!(exit_code_for(&["roman", "--output", "json", "symbols"]), 0);
    }
}
