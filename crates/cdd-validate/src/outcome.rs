//! Validation results partitioned by severity.

use std::collections::BTreeMap;

use cdd_model::{Finding, Severity};
use serde::Serialize;

use crate::issue::Issue;

/// Error and warning counts for one sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SheetCounts {
    pub errors: usize,
    pub warnings: usize,
}

/// Ordered findings of one validation pass.
///
/// Both lists keep the order the rules emitted them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    errors: Vec<Finding>,
    warnings: Vec<Finding>,
}

impl ValidationOutcome {
    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Pass/fail under the caller's policy; `strict` also fails on warnings.
    pub fn passes(&self, strict: bool) -> bool {
        !self.has_errors() && !(strict && self.has_warnings())
    }

    /// Errors followed by warnings.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.errors.iter().chain(self.warnings.iter())
    }

    pub fn counts_by_sheet(&self) -> BTreeMap<String, SheetCounts> {
        let mut counts: BTreeMap<String, SheetCounts> = BTreeMap::new();
        for finding in &self.errors {
            counts.entry(finding.sheet.clone()).or_default().errors += 1;
        }
        for finding in &self.warnings {
            counts.entry(finding.sheet.clone()).or_default().warnings += 1;
        }
        counts
    }
}

/// Accumulator owned by a single validation pass.
#[derive(Debug, Default)]
pub(crate) struct FindingLog {
    outcome: ValidationOutcome,
}

impl FindingLog {
    pub(crate) fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => self.outcome.errors.push(finding),
            Severity::Warning => self.outcome.warnings.push(finding),
        }
    }

    pub(crate) fn sheet_issue(&mut self, sheet: &str, issue: &Issue) {
        self.push(issue.on_sheet(sheet));
    }

    pub(crate) fn finish(self) -> ValidationOutcome {
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdd_model::SheetName;

    fn sample() -> ValidationOutcome {
        let mut log = FindingLog::default();
        log.sheet_issue(
            "RET",
            &Issue::OptionalSheetAbsent {
                sheet: SheetName::Ret,
            },
        );
        log.sheet_issue("IP", &Issue::RequiredSheetMissing { sheet: SheetName::Ip });
        log.finish()
    }

    #[test]
    fn partitions_by_severity() {
        let outcome = sample();
        assert_eq!(
            outcome.error_messages(),
            vec!["[IP]: Required sheet 'IP' is missing"]
        );
        assert_eq!(
            outcome.warning_messages(),
            vec!["[RET]: Optional sheet 'RET' is missing or empty"]
        );
        assert_eq!(outcome.findings().count(), 2);
        assert_eq!(outcome.findings().next().map(|f| f.sheet.as_str()), Some("IP"));
    }

    #[test]
    fn strict_policy() {
        let mut log = FindingLog::default();
        log.sheet_issue("Mapping", &Issue::MappingSheetAbsent);
        let outcome = log.finish();
        assert!(outcome.passes(false));
        assert!(!outcome.passes(true));
        assert!(!sample().passes(false));
        assert!(ValidationOutcome::default().passes(true));
    }

    #[test]
    fn counts_group_by_sheet() {
        let counts = sample().counts_by_sheet();
        assert_eq!(
            counts.get("IP"),
            Some(&SheetCounts {
                errors: 1,
                warnings: 0
            })
        );
        assert_eq!(counts.get("RET").map(|c| c.warnings), Some(1));
    }
}
