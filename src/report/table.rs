//! Terminal table rendering.

use tabled::{
    Table,
    builder::Builder,
    settings::{
        Alignment, Color, Style, Width,
        object::{Columns, Rows},
    },
};

use super::{COLUMNS, Report};

const AMOUNT_COLUMNS: std::ops::Range<usize> = 5..10;

/// Render `report` as a titled box-drawn table with a bold header row. Cells wider than their
/// column are truncated.
pub fn render(report: &Report<'_>) -> String {
    let mut builder = Builder::default();

    builder.push_record(COLUMNS.iter().map(|column| column.heading));

    for row in report.rows() {
        builder.push_record(row);
    }

    let table = build_table(builder);

    format!("{}\n{table}\n", report.title())
}

fn build_table(builder: Builder) -> Table {
    let mut table = builder.build();

    table.with(Style::modern_rounded());

    for (idx, column) in COLUMNS.iter().enumerate() {
        table.modify(Columns::new(idx..=idx), Width::truncate(column.width_chars));
        table.modify(Columns::new(idx..=idx), Width::increase(column.width_chars));
    }

    table.modify(Columns::new(AMOUNT_COLUMNS), Alignment::right());
    table.modify(Rows::first(), Color::BOLD);

    table
}
