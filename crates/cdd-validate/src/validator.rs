//! Validation pass orchestration.

use std::borrow::Cow;
use std::path::Path;

use cdd_model::{ReferenceConfig, SheetName, SpuVersion, TableSet};
use cdd_standards::{DEFAULT_SPU_VERSION, load_reference_config};
use tracing::{info, info_span, warn};

use crate::checks::{self, CheckContext};
use crate::issue::Issue;
use crate::outcome::{FindingLog, ValidationOutcome};

/// Sheet label for config load failures.
pub const CONFIG_LOAD_SHEET: &str = "config";

/// Where the reference config comes from.
#[derive(Debug, Clone, Copy)]
pub enum ConfigSource<'a> {
    /// JSON file read at the start of every pass.
    Path(&'a Path),
    /// Config already loaded by the caller.
    Loaded(&'a ReferenceConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    /// SPU configuration version whose mapping tables are used.
    pub spu_version: String,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            spu_version: DEFAULT_SPU_VERSION.to_string(),
        }
    }
}

/// Runs every rule group over a borrowed [`TableSet`].
///
/// Holds no state between passes, so repeated calls to
/// [`validate`](Self::validate) give identical results.
#[derive(Debug, Clone)]
pub struct Validator<'a> {
    tables: &'a TableSet,
    config: ConfigSource<'a>,
    options: ValidationOptions,
}

impl<'a> Validator<'a> {
    pub fn new(tables: &'a TableSet, config: ConfigSource<'a>) -> Self {
        Self {
            tables,
            config,
            options: ValidationOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    /// Run all rule groups.
    ///
    /// Order: sheet presence, IP, Radio 4G, Radio 5G, Mapping structure,
    /// config structure. A failing group never stops the next one.
    pub fn validate(&self) -> ValidationOutcome {
        let span = info_span!("validate", sheets = self.tables.len());
        let _guard = span.enter();
        info!(spu_version = %self.options.spu_version, "starting CDD validation");

        let mut log = FindingLog::default();
        let config = self.load_config(&mut log);
        let empty_spu = SpuVersion::default();
        let ctx = CheckContext {
            config: &config,
            spu: config
                .spu_version(&self.options.spu_version)
                .unwrap_or(&empty_spu),
            spu_version: &self.options.spu_version,
            ip_names: checks::cross_sheet::ip_element_names(self.tables),
        };

        checks::presence::check(self.tables, &mut log);
        if let Some(sheet) = self.tables.sheet_with_rows(SheetName::Ip) {
            checks::ip::check(&sheet, &ctx, &mut log);
        }
        if let Some(sheet) = self.tables.sheet_with_rows(SheetName::Radio4G) {
            checks::radio_4g::check(&sheet, &ctx, &mut log);
        }
        if let Some(sheet) = self.tables.sheet_with_rows(SheetName::Radio5G) {
            checks::radio_5g::check(&sheet, &ctx, &mut log);
        }
        checks::structure::check_mapping(self.tables, &mut log);
        checks::structure::check_config(&ctx, &mut log);

        let outcome = log.finish();
        info!(
            errors = outcome.errors().len(),
            warnings = outcome.warnings().len(),
            "validation complete"
        );
        outcome
    }

    /// Resolve the config; a load failure becomes one finding and an empty config.
    fn load_config(&self, log: &mut FindingLog) -> Cow<'a, ReferenceConfig> {
        match self.config {
            ConfigSource::Loaded(config) => Cow::Borrowed(config),
            ConfigSource::Path(path) => match load_reference_config(path) {
                Ok(config) => Cow::Owned(config),
                Err(error) => {
                    warn!(path = %path.display(), %error, "reference config unavailable");
                    let file = path
                        .file_name()
                        .map_or_else(|| path.display().to_string(), |name| {
                            name.to_string_lossy().into_owned()
                        });
                    log.sheet_issue(
                        CONFIG_LOAD_SHEET,
                        &Issue::ConfigLoadFailed {
                            file,
                            cause: error.cause(),
                        },
                    );
                    Cow::Owned(ReferenceConfig::default())
                }
            },
        }
    }
}
