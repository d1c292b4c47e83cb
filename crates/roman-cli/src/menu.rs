//! Interactive text menu over the converter.
//!
//! Reads a selection, prompts for a value, prints the conversion and loops.
//! Conversion errors are printed and the menu continues; end of input exits.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use roman_core::{Notation, Numeral};

use crate::report::ConversionReport;

/// A menu entry chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ToRoman,
    FromRoman,
    Exit,
}

impl MenuChoice {
    /// Map a selection line to a choice. Unknown selections exit, as "3" does.
    pub fn from_selection(selection: &str) -> Self {
        match selection.trim() {
            "1" => MenuChoice::ToRoman,
            "2" => MenuChoice::FromRoman,
            _ => MenuChoice::Exit,
        }
    }
}

/// Run the menu until the user exits or input ends.
///
/// # Errors
///
/// Returns an error only if reading or writing fails.
pub fn run_menu<R, W>(mut input: R, mut output: W, notation: Notation) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        write_header(&mut output)?;
        let Some(selection) = prompt(&mut input, &mut output, "\nSelect an option: ")? else {
            return Ok(());
        };
        let choice = MenuChoice::from_selection(&selection);
        debug!(?choice, "menu selection");

        let line = match choice {
            MenuChoice::Exit => return Ok(()),
            MenuChoice::ToRoman => {
                let Some(value) = prompt(&mut input, &mut output, "Number to convert: ")? else {
                    return Ok(());
                };
                to_roman_line(&value, notation)
            }
            MenuChoice::FromRoman => {
                let Some(text) = prompt(&mut input, &mut output, "Roman numeral to convert: ")?
                else {
                    return Ok(());
                };
                from_roman_line(&text)
            }
        };
        writeln!(output, "{line}")?;

        if prompt(&mut input, &mut output, "Press enter to return to menu\n")?.is_none() {
            return Ok(());
        }
    }
}

fn write_header<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "Choose an option:")?;
    writeln!(output, "1) To Roman")?;
    writeln!(output, "2) From roman")?;
    writeln!(output, "3) Exit")
}

/// Write `message`, then read one line without its terminator. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn to_roman_line(value: &str, notation: Notation) -> String {
    match Numeral::from_number_str(value) {
        Ok(numeral) => ConversionReport::encoded(value, numeral, notation).to_text(),
        Err(error) => {
            warn!(%error, "menu conversion to roman failed");
            format!("error: {error}")
        }
    }
}

fn from_roman_line(text: &str) -> String {
    match Numeral::parse(text) {
        Ok(decoded) => ConversionReport::decoded(text, &decoded).to_text(),
        Err(error) => {
            warn!(%error, "menu conversion from roman failed");
            format!("error: {error}")
        }
    }
}
