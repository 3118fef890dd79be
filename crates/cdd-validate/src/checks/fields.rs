//! Cell coercion helpers shared by the row rules.

use cdd_model::RowView;

use crate::issue::Issue;

/// Integer value of a cell.
///
/// `Ok(None)` for a missing cell, `Err` with a type issue when the value
/// cannot be read as a number.
pub(crate) fn integer_cell(row: &RowView<'_>, column: &'static str) -> Result<Option<i64>, Issue> {
    let cell = row.cell(column);
    if cell.is_missing() {
        return Ok(None);
    }
    cell.to_integer().map(Some).ok_or_else(|| Issue::NotNumeric {
        column,
        value: cell.to_string(),
    })
}

/// Float value of a cell, with the same conventions as [`integer_cell`].
pub(crate) fn float_cell(row: &RowView<'_>, column: &'static str) -> Result<Option<f64>, Issue> {
    let cell = row.cell(column);
    if cell.is_missing() {
        return Ok(None);
    }
    cell.to_f64().map(Some).ok_or_else(|| Issue::NotNumeric {
        column,
        value: cell.to_string(),
    })
}

/// Bounds check on an integer cell.
pub(crate) fn ranged_integer(
    row: &RowView<'_>,
    column: &'static str,
    min: i64,
    max: i64,
) -> Option<Issue> {
    match integer_cell(row, column) {
        Ok(Some(value)) if !(min..=max).contains(&value) => Some(Issue::OutOfRange {
            column,
            value,
            min,
            max,
        }),
        Ok(_) => None,
        Err(issue) => Some(issue),
    }
}

/// Type check on an identifier that must be numeric.
pub(crate) fn numeric_id(row: &RowView<'_>, column: &'static str) -> Option<Issue> {
    integer_cell(row, column).err()
}
