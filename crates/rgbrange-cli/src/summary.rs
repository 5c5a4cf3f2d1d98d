use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rgbrange_cli::pipeline::ConvertResult;

pub fn print_summary(result: &ConvertResult, preview_rows: usize) {
    let mapping = &result.mapping;
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![label_cell("Input"), Cell::new(result.input.display())]);
    table.add_row(vec![label_cell("Layout"), Cell::new(result.layout)]);
    table.add_row(vec![label_cell("Rows"), Cell::new(result.rows())]);
    table.add_row(vec![label_cell("Source"), Cell::new(mapping.source())]);
    table.add_row(vec![label_cell("Target"), Cell::new(mapping.target())]);
    table.add_row(vec![
        label_cell("Scale"),
        Cell::new(format!("{:.6}", mapping.scale())),
    ]);
    let output = if result.written {
        Cell::new(result.output.display()).fg(Color::Green)
    } else {
        dim_cell(format!("{} (dry run)", result.output.display()))
    };
    table.add_row(vec![label_cell("Output"), output]);
    println!("{table}");
    print_preview(result, preview_rows);
}

fn print_preview(result: &ConvertResult, preview_rows: usize) {
    if preview_rows == 0 || result.table.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(
        result
            .table
            .column_names()
            .iter()
            .copied()
            .map(header_cell)
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for column in 0..result.table.column_names().len() {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for row in result.table.rows.iter().take(preview_rows) {
        let mut cells = Vec::with_capacity(4);
        if let Some(index) = &row.index {
            cells.push(Cell::new(index));
        }
        cells.extend(row.rgb.iter().map(Cell::new));
        table.add_row(cells);
    }
    println!();
    println!(
        "Preview ({} of {} rows):",
        preview_rows.min(result.rows()),
        result.rows()
    );
    println!("{table}");
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}
