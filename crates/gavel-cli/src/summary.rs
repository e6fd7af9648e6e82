//! Terminal tables for command output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use gavel_core::{AppConfig, ConsentSummary};
use gavel_model::{ConsentFormEntry, RosterStudent};

pub fn roster_table(students: &[RosterStudent]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("ASURITE"),
        header_cell("Level"),
        header_cell("Units"),
        header_cell("Residency"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    for student in students {
        table.add_row(vec![
            Cell::new(&student.id),
            Cell::new(student.full_name()),
            Cell::new(&student.asurite),
            Cell::new(&student.academic_level),
            Cell::new(student.units),
            Cell::new(&student.residency),
            dim_cell(&student.status),
        ]);
    }
    table
}

pub fn print_roster(students: &[RosterStudent]) {
    println!("{}", roster_table(students));
    let units: i64 = students.iter().map(|s| s.units).sum();
    println!("{} students, {} units", students.len(), units);
}

pub fn consent_table(entries: &[&ConsentFormEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("SIS ID"),
        header_cell("Name"),
        header_cell("Attempt"),
        header_cell("Signed as"),
        header_cell("Consented"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for entry in entries {
        let signed = if entry.declined_to_sign() {
            dim_cell("-")
        } else {
            Cell::new(&entry.name_response)
        };
        table.add_row(vec![
            Cell::new(entry.sis_id),
            Cell::new(&entry.lms_name),
            Cell::new(entry.attempt),
            signed,
            consent_cell(entry.consented),
        ]);
    }
    table
}

pub fn summary_table(summary: &ConsentSummary) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows"), Cell::new(summary.rows)]);
    table.add_row(vec![Cell::new("Subjects"), Cell::new(summary.subjects)]);
    table.add_row(vec![
        Cell::new("Consenting rows"),
        Cell::new(summary.consenting_rows),
    ]);
    table.add_row(vec![
        Cell::new("Consenting subjects (latest attempt)")
            .add_attribute(Attribute::Bold),
        Cell::new(summary.consenting_subjects).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn print_consent(entries: &[&ConsentFormEntry], summary: &ConsentSummary) {
    println!("{}", consent_table(entries));
    println!("{}", summary_table(summary));
}

pub fn config_table(config: &AppConfig) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Setting"), header_cell("Value")]);
    apply_table_style(&mut table);
    let base_url = match &config.canvas.base_url {
        Some(url) => Cell::new(url),
        None => dim_cell("(not set)"),
    };
    let token = if config.canvas.token.is_some() {
        Cell::new("set")
    } else {
        dim_cell("(not set)")
    };
    let canvas = if config.canvas.is_configured() {
        Cell::new("configured").fg(Color::Green)
    } else {
        Cell::new("disabled").fg(Color::Yellow)
    };
    table.add_row(vec![Cell::new("Environment"), Cell::new(&config.environment)]);
    table.add_row(vec![Cell::new("Version"), Cell::new(&config.version)]);
    table.add_row(vec![Cell::new("Canvas base URL"), base_url]);
    table.add_row(vec![Cell::new("Canvas token"), token]);
    table.add_row(vec![Cell::new("Canvas"), canvas]);
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn consent_cell(consented: bool) -> Cell {
    if consented {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("no").fg(Color::Red)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
