use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mifir_cli::driver::BatchSummary;

pub fn print_summary(summary: &BatchSummary) {
    eprintln!("{}", summary_table(summary));
}

fn summary_table(summary: &BatchSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Converted"),
        count_cell(summary.succeeded, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Failed"),
        count_cell(summary.failed(), Color::Red),
    ]);
    for (kind, count) in &summary.failures {
        table.add_row(vec![
            Cell::new(format!("  -> {kind}")).fg(Color::DarkGrey),
            count_cell(*count, Color::Red),
        ]);
    }
    table.add_row(vec![Cell::new("Skipped (empty line)"), dim_cell(summary.skipped)]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.records).add_attribute(Attribute::Bold),
    ]);
    table
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

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn summary_lists_failures_by_kind() {
        let summary = BatchSummary {
            records: 4,
            succeeded: 2,
            skipped: 1,
            failures: BTreeMap::from([("field_count", 1), ("invalid_date", 1)]),
        };
        let rendered = summary_table(&summary).to_string();
        assert!(rendered.contains("-> field_count"));
        assert!(rendered.contains("-> invalid_date"));
        assert!(rendered.contains("TOTAL"));
    }
}
