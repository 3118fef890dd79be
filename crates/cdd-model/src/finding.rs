//! Validation findings and their severity/kind taxonomy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Finding severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks processing of the document.
    Error,
    /// Should be reviewed; blocking only under a caller's strict policy.
    Warning,
}

/// What kind of problem a finding describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingKind {
    ConfigLoadFailure,
    MissingSheet,
    EmptySheet,
    MissingColumn,
    FormatViolation,
    RangeViolation,
    TypeViolation,
    ReferentialViolation,
    ConfigReferenceViolation,
    StructuralViolation,
}

impl FindingKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ConfigLoadFailure => "Config Load",
            Self::MissingSheet => "Missing Sheet",
            Self::EmptySheet => "Empty Sheet",
            Self::MissingColumn => "Missing Column",
            Self::FormatViolation => "Format",
            Self::RangeViolation => "Range",
            Self::TypeViolation => "Type",
            Self::ReferentialViolation => "Cross Reference",
            Self::ConfigReferenceViolation => "Config Reference",
            Self::StructuralViolation => "Structure",
        }
    }
}

/// One validation result.
///
/// `row` is the 1-based workbook row (header included), `None` for
/// sheet-wide findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub kind: FindingKind,
    pub sheet: String,
    pub row: Option<usize>,
    pub column: Option<String>,
    pub message: String,
}

impl Finding {
    pub fn new(
        severity: Severity,
        kind: FindingKind,
        sheet: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            kind,
            sheet: sheet.into(),
            row: None,
            column: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// `[sheet] Row N Column 'c'` prefix of the rendered form.
    pub fn location(&self) -> String {
        let mut location = format!("[{}]", self.sheet);
        if let Some(row) = self.row {
            location.push_str(&format!(" Row {row}"));
        }
        if let Some(column) = &self.column {
            location.push_str(&format!(" Column '{column}'"));
        }
        location
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location(), self.message)
    }
}
