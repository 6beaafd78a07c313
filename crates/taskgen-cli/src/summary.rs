use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use taskgen_cli::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Source: {}", result.input.display());
    if result.dry_run {
        println!("Output: {} (dry run, nothing written)", result.output_dir.display());
    } else {
        println!("Output: {}", result.output_dir.display());
    }
    if result.categories.is_empty() {
        println!("No tasks found; no files generated.");
        print_notes(result);
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("File"),
        header_cell("Tasks"),
        header_cell("First ID"),
        header_cell("Last ID"),
        header_cell("Written"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    for summary in &result.categories {
        table.add_row(vec![
            Cell::new(&summary.category)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&summary.file_name),
            Cell::new(summary.task_count),
            id_cell(summary.first_id.as_deref()),
            id_cell(summary.last_id.as_deref()),
            written_cell(summary.written.as_ref()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} files", result.categories.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.task_count()).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
    print_notes(result);
}

fn print_notes(result: &RunResult) {
    if result.skipped_rows > 0 {
        eprintln!("Skipped {} row(s) with fewer than 4 fields.", result.skipped_rows);
    }
    if result.filename_collisions > 0 {
        let verb = if result.dry_run { "would overwrite" } else { "overwrote" };
        eprintln!(
            "{} file name collision(s): later categories {verb} earlier ones.",
            result.filename_collisions
        );
    }
    if result.prefix_collisions > 0 {
        eprintln!(
            "{} id prefix collision(s): ids repeat across category files.",
            result.prefix_collisions
        );
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn written_cell(path: Option<&PathBuf>) -> Cell {
    match path {
        Some(_) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn id_cell(id: Option<&str>) -> Cell {
    match id {
        Some(id) => Cell::new(id),
        None => dim_cell("-"),
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
