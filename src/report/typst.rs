//! Typst Report Renderer
//!
//! Produces a standalone Typst document laid out on landscape A4. Compile it with
//! `typst compile inventory_report.typ` to get the PDF.

use super::{COLUMNS, Report};

/// Render `report` as Typst source.
pub fn render(report: &Report<'_>) -> String {
    let mut output = String::new();

    output.push_str("#set page(paper: \"a4\", flipped: true, margin: 15mm)\n");
    output.push_str("#set text(size: 7pt)\n\n");

    output.push_str("#align(center, text(size: 14pt, weight: \"bold\", ");
    output.push_str(&string_literal(report.title()));
    output.push_str("))\n\n");
    output.push_str("#v(10mm)\n\n");

    output.push_str("#table(\n");
    render_columns(&mut output);
    output.push_str("  align: (x, y) => if y == 0 { center } else { left },\n");
    render_header(&mut output);

    for row in report.rows() {
        output.push(' ');

        for cell in &row {
            output.push(' ');
            output.push_str(&string_literal(cell));
            output.push(',');
        }

        output.push('\n');
    }

    output.push_str(")\n");

    output
}

fn render_columns(output: &mut String) {
    let widths: Vec<String> = COLUMNS
        .iter()
        .map(|column| format!("{}mm", column.width_mm))
        .collect();

    output.push_str("  columns: (");
    output.push_str(&widths.join(", "));
    output.push_str("),\n");
}

fn render_header(output: &mut String) {
    output.push_str("  table.header(\n");

    for column in &COLUMNS {
        output.push_str("    text(size: 8pt, weight: \"bold\", ");
        output.push_str(&string_literal(column.heading));
        output.push_str("),\n");
    }

    output.push_str("  ),\n");
}

/// Quote `value` as a Typst string literal.
fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);

    literal.push('"');

    for ch in value.chars() {
        match ch {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            _ => literal.push(ch),
        }
    }

    literal.push('"');
    literal
}
