use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use delim_ingest::{CandidateStats, FileStructure};
use delim_model::{Table as DataTable, Value};

use delim_cli::pipeline::{CleanOutcome, IdentifyReport};

/// Headers shown before the structure listing is elided.
const MAX_LISTED_HEADERS: usize = 5;

pub fn print_identify_report(report: &IdentifyReport, details: bool) {
    println!("File: {}", report.file.display());
    println!("Format: {}", report.format);
    println!("Delimiter: {}", report.delimiter);
    println!("Confidence: {}", format_confidence(report.confidence));

    if !details {
        return;
    }

    println!();
    println!("Candidates ({} lines sampled):", report.sampled_lines);
    println!("{}", candidate_table(&report.candidates));

    if let Some(structure) = &report.structure {
        println!();
        print_structure(structure);
    }
}

fn print_structure(structure: &FileStructure) {
    println!("Structure:");
    println!("  Columns: {}", structure.num_columns);
    println!("  Headers: {}", listed_headers(&structure.headers));
    println!("  Sample rows: {}", structure.sample_rows);
    println!(
        "  Consistent columns: {}",
        if structure.consistent_columns { "yes" } else { "no" }
    );
    if !structure.consistent_columns {
        let counts: Vec<String> = structure
            .column_counts
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("  Column counts: {}", counts.join(", "));
    }
}

fn candidate_table(candidates: &[CandidateStats]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Format"),
        header_cell("Total"),
        header_cell("Mode"),
        header_cell("Lines"),
        header_cell("Consistency"),
    ]);
    apply_table_style(&mut table);
    for stats in candidates {
        let format = if stats.total == 0 {
            dim_cell(stats.format)
        } else {
            Cell::new(stats.format)
        };
        table.add_row(vec![
            format,
            Cell::new(stats.total),
            Cell::new(stats.modal_count),
            Cell::new(stats.modal_lines),
            Cell::new(format_confidence(stats.consistency)),
        ]);
    }
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

/// Render the first `limit` cleaned rows, nulls dimmed.
pub fn print_sample_rows(data: &DataTable, limit: usize) {
    if limit == 0 || data.rows.is_empty() {
        return;
    }
    let shown = limit.min(data.row_count());
    println!("Sample of cleaned data ({shown} of {} rows):", data.row_count());

    let mut table = Table::new();
    table.set_header(data.headers.iter().map(|h| header_cell(h)));
    apply_table_style(&mut table);
    for row in data.rows.iter().take(limit) {
        table.add_row((0..data.column_count()).map(|index| match row.get(index) {
            None | Some(Value::Null) => dim_cell("NULL"),
            Some(value) => Cell::new(value),
        }));
    }
    println!("{table}");
}

pub fn print_clean_summary(outcome: &CleanOutcome) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Output"), header_cell("Path"), header_cell("Count")]);
    apply_table_style(&mut table);

    table.add_row(vec![
        Cell::new("CSV"),
        path_cell(outcome.csv_path.as_deref()),
        count_cell(outcome.csv_path.as_ref().map(|_| outcome.table.row_count()), "rows"),
    ]);
    table.add_row(vec![
        Cell::new("SQL"),
        path_cell(outcome.sql_path.as_deref()),
        count_cell(
            outcome.sql_path.as_ref().map(|_| outcome.statement_count),
            "statements",
        ),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Confidence ratio as a percentage with one decimal.
fn format_confidence(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

fn listed_headers(headers: &[String]) -> String {
    let mut listed = headers
        .iter()
        .take(MAX_LISTED_HEADERS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if headers.len() > MAX_LISTED_HEADERS {
        listed.push_str(", ...");
    }
    listed
}

fn path_cell(path: Option<&std::path::Path>) -> Cell {
    match path {
        Some(path) => Cell::new(path.display()).fg(Color::Green),
        None => dim_cell("skipped"),
    }
}

fn count_cell(count: Option<usize>, unit: &str) -> Cell {
    match count {
        Some(count) => Cell::new(format!("{count} {unit}")),
        None => dim_cell("-"),
    }
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
    Cell::new(value).fg(Color::DarkGrey)
}
