//! Rendering of command results as tables, plain text or JSON.

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use textfmt_text::TextComparison;

use crate::commands::PriceRow;

pub fn price_table(rows: &[PriceRow], explain: bool) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Input")];
    if explain {
        header.extend([
            header_cell("Cleaned"),
            header_cell("Rule"),
            header_cell("Normalized"),
        ]);
    }
    header.push(header_cell("Value"));
    table.set_header(header);
    apply_table_style(&mut table);
    let value_column = table.column_count().saturating_sub(1);
    align_column(&mut table, value_column, CellAlignment::Right);

    for row in rows {
        let mut cells = vec![Cell::new(&row.input)];
        if explain {
            cells.push(text_or_dash(&row.parse.cleaned));
            cells.push(match row.parse.rule {
                Some(rule) => Cell::new(rule).fg(Color::Blue),
                None => dim_cell("-"),
            });
            cells.push(text_or_dash(&row.parse.normalized));
        }
        cells.push(Cell::new(row.parse.value).add_attribute(Attribute::Bold));
        table.add_row(cells);
    }
    table
}

/// One line per input: the value, or tab-separated details when explaining.
pub fn price_plain(rows: &[PriceRow], explain: bool) -> String {
    rows.iter()
        .map(|row| {
            if explain {
                let rule = row.parse.rule.map_or("-", |rule| rule.as_str());
                format!(
                    "{}\t{}\t{}\t{}\t{}",
                    row.input, row.parse.cleaned, rule, row.parse.normalized, row.parse.value
                )
            } else {
                row.parse.value.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn comparison_plain(comparison: &TextComparison) -> String {
    match &comparison.diff {
        None => "equal".to_string(),
        Some(diff) => format!(
            "different at character {}\nexpected ({} chars): {}\nactual   ({} chars): {}",
            diff.first_mismatch, diff.expected_len, diff.expected, diff.actual_len, diff.actual
        ),
    }
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serialize output")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn text_or_dash(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
