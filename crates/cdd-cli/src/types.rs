use std::path::PathBuf;

use cdd_model::SheetName;
use cdd_validate::ValidationOutcome;

#[derive(Debug, Clone)]
pub struct ValidateRequest {
    pub input_dir: PathBuf,
    pub config: Option<PathBuf>,
    pub spu_version: String,
    pub strict: bool,
    pub report_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ValidateResult {
    pub source: String,
    pub input_dir: PathBuf,
    pub config_path: PathBuf,
    pub spu_version: String,
    pub sheets: Vec<SheetSummary>,
    pub outcome: ValidationOutcome,
    pub report_path: Option<PathBuf>,
    pub strict: bool,
}

impl ValidateResult {
    pub fn status(&self) -> ValidationStatus {
        if !self.outcome.passes(self.strict) {
            ValidationStatus::Failed
        } else if self.outcome.has_warnings() {
            ValidationStatus::PassedWithWarnings
        } else {
            ValidationStatus::Passed
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.status() {
            ValidationStatus::Failed => 1,
            ValidationStatus::Passed | ValidationStatus::PassedWithWarnings => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    Passed,
    PassedWithWarnings,
    Failed,
}

#[derive(Debug, Clone)]
pub struct SheetSummary {
    pub sheet: SheetName,
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug, Clone)]
pub struct ConfigRequest {
    pub config: Option<PathBuf>,
    pub spu_version: String,
    pub show: ConfigSections,
}

/// Config sections selected with the `--show-*` flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigSections {
    pub rru_types: bool,
    pub earfcn: bool,
    pub mme: bool,
    pub amf: bool,
    pub baseband: bool,
}

impl ConfigSections {
    pub fn is_empty(&self) -> bool {
        !(self.rru_types || self.earfcn || self.mme || self.amf || self.baseband)
    }
}
