//! JSON validation report.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use cdd_model::{Finding, FindingKind, Severity};

use crate::outcome::ValidationOutcome;

pub const REPORT_FILE_NAME: &str = "validation_report.json";
const REPORT_SCHEMA: &str = "cdd-validator.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ValidationReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub source: String,
    pub error_count: usize,
    pub warning_count: usize,
    pub passed: bool,
    pub findings: Vec<FindingJson>,
}

#[derive(Debug, Serialize)]
pub struct FindingJson {
    pub severity: Severity,
    pub kind: FindingKind,
    pub sheet: String,
    pub row: Option<usize>,
    pub column: Option<String>,
    pub message: String,
}

impl From<&Finding> for FindingJson {
    fn from(finding: &Finding) -> Self {
        Self {
            severity: finding.severity,
            kind: finding.kind,
            sheet: finding.sheet.clone(),
            row: finding.row,
            column: finding.column.clone(),
            message: finding.message.clone(),
        }
    }
}

/// Writes `validation_report.json` into `output_dir` and returns its path.
pub fn write_validation_report_json(
    output_dir: &Path,
    source: &str,
    outcome: &ValidationOutcome,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(REPORT_FILE_NAME);
    let payload = ValidationReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        source: source.to_string(),
        error_count: outcome.errors().len(),
        warning_count: outcome.warnings().len(),
        passed: outcome.passes(false),
        findings: outcome.findings().map(FindingJson::from).collect(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
