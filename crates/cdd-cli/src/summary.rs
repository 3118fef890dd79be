use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use cdd_model::{Finding, Severity};

use crate::types::{ValidateResult, ValidationStatus};

pub fn print_summary(result: &ValidateResult) {
    println!("Source: {}", result.source);
    println!("Input: {}", result.input_dir.display());
    println!(
        "Config: {} (SPU {})",
        result.config_path.display(),
        result.spu_version
    );
    if let Some(path) = &result.report_path {
        println!("Validation report: {}", path.display());
    }
    println!("{}", sheet_table(result));

    let warnings = result.outcome.warnings();
    if !warnings.is_empty() {
        println!();
        println!("Warnings ({}):", warnings.len());
        println!("{}", finding_table(warnings));
    }
    let errors = result.outcome.errors();
    if !errors.is_empty() {
        println!();
        println!("Errors ({}):", errors.len());
        println!("{}", finding_table(errors));
    }

    println!();
    println!("{}", status_table(result.status()));
}

/// Loaded sheets with their row counts and finding counts.
pub fn sheet_table(result: &ValidateResult) -> Table {
    let counts = result.outcome.counts_by_sheet();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_rows = 0usize;
    for summary in &result.sheets {
        total_rows += summary.rows;
        let sheet_counts = counts
            .get(summary.sheet.as_str())
            .copied()
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(summary.sheet.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            count_cell(summary.rows, Color::Reset),
            dim_cell(summary.columns),
            count_cell(sheet_counts.errors, Color::Red),
            count_cell(sheet_counts.warnings, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(result.outcome.errors().len(), Color::Red).add_attribute(Attribute::Bold),
        count_cell(result.outcome.warnings().len(), Color::Yellow)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

/// Findings in emission order.
pub fn finding_table(findings: &[Finding]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Sheet"),
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for finding in findings {
        table.add_row(vec![
            severity_cell(finding.severity),
            Cell::new(&finding.sheet),
            finding.row.map_or_else(|| dim_cell("-"), Cell::new),
            finding
                .column
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(finding.kind.label()),
            Cell::new(&finding.message),
        ]);
    }
    table
}

fn status_table(status: ValidationStatus) -> Table {
    let cell = match status {
        ValidationStatus::Passed => Cell::new("Validation PASSED").fg(Color::Green),
        ValidationStatus::PassedWithWarnings => {
            Cell::new("Validation PASSED with warnings").fg(Color::Yellow)
        }
        ValidationStatus::Failed => Cell::new("Validation FAILED").fg(Color::Red),
    };
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);
    table.add_row(vec![cell.add_attribute(Attribute::Bold)]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Fixed(22)),
            ColumnConstraint::UpperBoundary(Width::Fixed(18)),
            ColumnConstraint::UpperBoundary(Width::Percentage(55)),
        ]);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
