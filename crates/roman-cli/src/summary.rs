use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use roman_core::Notation;
use roman_core::tables::{NON_ROMAN_NUMERALS, NUMERAL_OPTIONS, VALUES, value_of};

use crate::cli::OutputFormatArg;
use roman_cli::report::ConversionReport;

/// One row of the symbol listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolRow {
    pub symbol: &'static str,
    pub value: u16,
    /// 1-based position in the greedy decode order.
    pub decode_order: Option<usize>,
    /// Medieval alternate letter that raw input cannot contain.
    pub historical: bool,
}

pub fn print_report(report: &ConversionReport, format: OutputFormatArg) -> anyhow::Result<()> {
    match format {
        OutputFormatArg::Text => println!("{}", report.to_text()),
        OutputFormatArg::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

pub fn print_check(input: &str, is_numeral: bool, format: OutputFormatArg) {
    match format {
        OutputFormatArg::Text if is_numeral => println!("{input} is a roman numeral"),
        OutputFormatArg::Text => println!("{input} is not a roman numeral"),
        OutputFormatArg::Json => println!(
            "{}",
            serde_json::json!({ "input": input, "is_numeral": is_numeral })
        ),
    }
}

pub fn print_symbols(notation: Option<Notation>, format: OutputFormatArg) -> anyhow::Result<()> {
    let rows = symbol_rows(notation);
    match format {
        OutputFormatArg::Text => println!("{}", symbols_table(&rows)),
        OutputFormatArg::Json => println!("{}", serde_json::to_string(&rows)?),
    }
    Ok(())
}

/// Rows for the full value table, or for one notation's encoding list.
pub fn symbol_rows(notation: Option<Notation>) -> Vec<SymbolRow> {
    let symbols: Vec<&'static str> = match notation {
        Some(notation) => notation.symbols().to_vec(),
        None => VALUES.iter().map(|(symbol, _)| *symbol).collect(),
    };
    symbols
        .into_iter()
        .map(|symbol| SymbolRow {
            symbol,
            value: value_of(symbol).unwrap_or_default(),
            decode_order: NUMERAL_OPTIONS
                .iter()
                .position(|option| *option == symbol)
                .map(|index| index + 1),
            historical: symbol.chars().any(|c| NON_ROMAN_NUMERALS.contains(&c)),
        })
        .collect()
}

pub fn symbols_table(rows: &[SymbolRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Symbol"),
        header_cell("Value"),
        header_cell("Decode order"),
        header_cell("Historical"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for row in rows {
        let symbol = if row.historical {
            Cell::new(row.symbol).fg(Color::Yellow)
        } else {
            Cell::new(row.symbol).add_attribute(Attribute::Bold)
        };
        let order = row
            .decode_order
            .map_or_else(|| dim_cell("-"), Cell::new);
        let historical = if row.historical {
            Cell::new("yes").fg(Color::Yellow)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![symbol, Cell::new(row.value), order, historical]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).add_attribute(Attribute::Dim)
}
