use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use recast_cli::pipeline::{CsvOutcome, YearsOutcome};

pub fn print_csv_summary(outcome: &CsvOutcome) {
    let mut table = summary_table();
    table.add_row(vec![label_cell("Input"), path_cell(&outcome.input)]);
    table.add_row(vec![label_cell("Output"), output_cell(outcome.output.as_deref())]);
    table.add_row(vec![label_cell("Encoding"), Cell::new(outcome.encoding)]);
    table.add_row(vec![label_cell("Rules"), Cell::new(outcome.rule_count)]);
    table.add_row(vec![label_cell("Rows"), Cell::new(outcome.stats.rows)]);
    table.add_row(vec![label_cell("Cells"), Cell::new(outcome.stats.cells)]);
    table.add_row(vec![
        label_cell("Cells changed"),
        count_cell(outcome.stats.cells_changed),
    ]);
    table.add_row(vec![
        label_cell("Replacements"),
        count_cell(outcome.stats.replacements),
    ]);
    align_column(&mut table, 1, CellAlignment::Left);
    println!("{table}");
    print_completion(outcome.output.as_deref());
}

pub fn print_years_summary(outcome: &YearsOutcome) {
    let mut table = summary_table();
    table.add_row(vec![label_cell("Input"), path_cell(&outcome.input)]);
    table.add_row(vec![label_cell("Output"), output_cell(outcome.output.as_deref())]);
    table.add_row(vec![label_cell("Encoding"), Cell::new(outcome.encoding)]);
    table.add_row(vec![label_cell("Pattern"), Cell::new(&outcome.pattern)]);
    table.add_row(vec![label_cell("Offset"), Cell::new(format!("{:+}", outcome.offset))]);
    table.add_row(vec![label_cell("Matches"), Cell::new(outcome.stats.matches)]);
    table.add_row(vec![label_cell("Changed"), count_cell(outcome.stats.changed)]);
    println!("{table}");
    print_completion(outcome.output.as_deref());
}

fn print_completion(output: Option<&Path>) {
    match output {
        Some(path) => println!("Transformation complete! Output saved to {}", path.display()),
        None => println!("Dry run complete. No output written."),
    }
}

fn summary_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn path_cell(path: &Path) -> Cell {
    Cell::new(path.display())
}

fn output_cell(path: Option<&Path>) -> Cell {
    match path {
        Some(path) => Cell::new(path.display())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        None => dim_cell("(dry run)"),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
