use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use member_cli::types::{FileSummary, RunResult};

pub fn print_summary(result: &RunResult) {
    if !result.files.is_empty() {
        println!("{}", summary_table(&result.files));
    }
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn summary_table(files: &[FileSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Read"),
        header_cell("Rejected"),
        header_cell("Emptied"),
        header_cell("Transformed"),
        header_cell("Inserted"),
    ]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut totals = FileSummary::default();
    for file in files {
        totals.read += file.read;
        totals.rejected += file.rejected;
        totals.emptied += file.emptied;
        totals.transformed += file.transformed;
        if let Some(inserted) = file.inserted {
            *totals.inserted.get_or_insert(0) += inserted;
        }
        table.add_row(vec![
            Cell::new(file.path.display()),
            Cell::new(file.read),
            count_cell(file.rejected, Color::Yellow),
            count_cell(file.emptied, Color::Yellow),
            Cell::new(file.transformed),
            inserted_cell(file),
        ]);
    }

    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(totals.read).add_attribute(Attribute::Bold),
        count_cell(totals.rejected, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(totals.emptied, Color::Yellow).add_attribute(Attribute::Bold),
        Cell::new(totals.transformed).add_attribute(Attribute::Bold),
        inserted_cell(&totals).add_attribute(Attribute::Bold),
    ]);
    table
}

fn inserted_cell(summary: &FileSummary) -> Cell {
    match summary.inserted {
        None => dim_cell("-"),
        Some(inserted) if summary.is_partial() => Cell::new(inserted).fg(Color::Red),
        Some(inserted) => Cell::new(inserted).fg(Color::Green),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
