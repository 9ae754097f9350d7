//! Table rendering for inspect and clean results.

use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use feedclean_core::FeedSummary;

use crate::commands::CleanOutcome;

pub fn print_feed_summary(feed: &Path, summary: &FeedSummary) {
    println!("Feed: {}", feed.display());
    println!("{}", feed_summary_table(summary));
}

pub fn print_clean_outcome(outcome: &CleanOutcome) {
    println!(
        "Product: {} (GTIN {})",
        outcome.summary.title, outcome.summary.gtin
    );
    println!("Output: {}", outcome.output.display());
    println!("{}", clean_outcome_table(outcome));
}

fn feed_summary_table(summary: &FeedSummary) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("GTIN"),
        header_cell("Title"),
        header_cell("Lines"),
    ]);
    table.add_row(vec![
        Cell::new(&summary.gtin),
        Cell::new(&summary.title),
        Cell::new(summary.line_count),
    ]);
    align_right(&mut table, 2);
    table
}

fn clean_outcome_table(outcome: &CleanOutcome) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Processed"),
        header_cell("Cleaned"),
        header_cell("Unchanged"),
        header_cell("Elapsed"),
    ]);
    let unchanged = outcome.report.processed.saturating_sub(outcome.report.cleaned);
    table.add_row(vec![
        count_cell(outcome.report.processed),
        count_cell(outcome.report.cleaned),
        dim_cell(&unchanged.to_string()),
        dim_cell(&format!("{} ms", outcome.elapsed_ms)),
    ]);
    for column in 0..3 {
        align_right(&mut table, column);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_right(table: &mut Table, column: usize) {
    if let Some(column) = table.column_mut(column) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold).fg(Color::Cyan)
}

fn dim_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Dim)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Green)
    } else {
        dim_cell("0")
    }
}
