//! The validated input: named sheets backed by Polars frames.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use polars::prelude::{AnyValue, DataFrame};

use cdd_common::{any_is_missing, any_to_f64, any_to_string, format_numeric, parse_f64};

use crate::sheet::SheetName;

/// Offset between a 0-based frame index and the 1-based workbook row.
///
/// Sheets start with one header row, so frame row 0 is workbook row 2.
pub const HEADER_ROW_OFFSET: usize = 2;

/// A single cell as seen by the rules.
///
/// Numeric coercion happens lazily through [`CellValue::to_f64`] and
/// [`CellValue::to_integer`]; a cell is never rejected at read time.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Missing,
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn from_any(value: AnyValue<'_>) -> Self {
        if any_is_missing(&value) {
            return Self::Missing;
        }
        match value {
            AnyValue::String(s) => Self::Text(s.to_string()),
            AnyValue::StringOwned(s) => Self::Text(s.to_string()),
            numeric @ (AnyValue::Int8(_)
            | AnyValue::Int16(_)
            | AnyValue::Int32(_)
            | AnyValue::Int64(_)
            | AnyValue::UInt8(_)
            | AnyValue::UInt16(_)
            | AnyValue::UInt32(_)
            | AnyValue::UInt64(_)
            | AnyValue::Float32(_)
            | AnyValue::Float64(_)) => any_to_f64(numeric).map_or(Self::Missing, Self::Number),
            other => Self::Text(any_to_string(other)),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Text form of the cell, `None` when missing.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Missing => None,
            Self::Number(n) => Some(format_numeric(*n)),
            Self::Text(s) => Some(s.clone()),
        }
    }

    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Missing => None,
            Self::Number(n) => Some(*n),
            Self::Text(s) => parse_f64(s),
        }
    }

    /// Integer coercion by truncation, so `"12.0"` and `12.7` both give 12.
    ///
    /// Fails for missing, non-numeric and non-finite values, and for values
    /// outside the `i64` range rather than saturating.
    pub fn to_integer(&self) -> Option<i64> {
        let value = self.to_f64()?.trunc();
        if !value.is_finite() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
            return None;
        }
        Some(value as i64)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Number(n) => f.write_str(&format_numeric(*n)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// All sheets of one CDD, keyed by sheet name.
#[derive(Debug, Clone, Default)]
pub struct TableSet {
    sheets: BTreeMap<SheetName, DataFrame>,
}

impl TableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a sheet, returning the frame it replaced.
    pub fn insert(&mut self, name: SheetName, frame: DataFrame) -> Option<DataFrame> {
        self.sheets.insert(name, frame)
    }

    #[must_use]
    pub fn with_sheet(mut self, name: SheetName, frame: DataFrame) -> Self {
        self.insert(name, frame);
        self
    }

    pub fn remove(&mut self, name: SheetName) -> Option<DataFrame> {
        self.sheets.remove(&name)
    }

    pub fn sheet(&self, name: SheetName) -> Option<SheetView<'_>> {
        self.sheets
            .get(&name)
            .map(|frame| SheetView { name, frame })
    }

    /// Present with at least one data row.
    pub fn sheet_with_rows(&self, name: SheetName) -> Option<SheetView<'_>> {
        self.sheet(name).filter(|sheet| !sheet.is_empty())
    }

    pub fn contains(&self, name: SheetName) -> bool {
        self.sheets.contains_key(&name)
    }

    pub fn iter(&self) -> impl Iterator<Item = SheetView<'_>> {
        self.sheets
            .iter()
            .map(|(name, frame)| SheetView { name: *name, frame })
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

/// Borrowed view of one sheet.
#[derive(Debug, Clone, Copy)]
pub struct SheetView<'a> {
    name: SheetName,
    frame: &'a DataFrame,
}

impl<'a> SheetView<'a> {
    pub fn name(&self) -> SheetName {
        self.name
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.frame.column(column).is_ok()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = RowView<'a>> + use<'a> {
        let sheet = self.name;
        let frame = self.frame;
        (0..frame.height()).map(move |index| RowView {
            sheet,
            frame,
            index,
        })
    }

    /// Distinct non-missing text values of a column; empty if the column is absent.
    pub fn distinct_text(&self, column: &str) -> BTreeSet<String> {
        self.rows()
            .filter_map(|row| row.cell(column).as_text())
            .collect()
    }
}

/// Borrowed view of one data row.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    sheet: SheetName,
    frame: &'a DataFrame,
    index: usize,
}

impl RowView<'_> {
    pub fn sheet(&self) -> SheetName {
        self.sheet
    }

    /// 1-based workbook row number, header included.
    pub fn number(&self) -> usize {
        self.index + HEADER_ROW_OFFSET
    }

    /// Cell value, or [`CellValue::Missing`] when the column is absent.
    pub fn cell(&self, column: &str) -> CellValue {
        self.frame
            .column(column)
            .ok()
            .and_then(|series| series.get(self.index).ok())
            .map_or(CellValue::Missing, CellValue::from_any)
    }
}
