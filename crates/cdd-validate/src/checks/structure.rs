//! Mapping sheet and reference config structure rules.

use cdd_model::{SheetName, TableSet};

use crate::checks::CheckContext;
use crate::issue::Issue;
use crate::outcome::FindingLog;
use crate::schema::MAPPING_SCHEMA;

/// Sheet label for findings about the reference config contents.
pub const CONFIG_SHEET: &str = "config.json";

pub(crate) fn check_mapping(tables: &TableSet, log: &mut FindingLog) {
    let sheet_label = SheetName::Mapping.as_str();
    let Some(mapping) = tables.sheet_with_rows(SheetName::Mapping) else {
        log.sheet_issue(sheet_label, &Issue::MappingSheetAbsent);
        return;
    };

    for column in MAPPING_SCHEMA.missing_required(|c| mapping.has_column(c)) {
        log.sheet_issue(sheet_label, &Issue::MappingColumnMissing { column });
    }
}

pub(crate) fn check_config(ctx: &CheckContext<'_>, log: &mut FindingLog) {
    for section in ctx.config.missing_sections() {
        log.sheet_issue(CONFIG_SHEET, &Issue::ConfigSectionMissing { section });
    }

    if ctx.config.spu_version(ctx.spu_version).is_none() {
        let available = ctx
            .config
            .spu_versions()
            .into_iter()
            .map(str::to_string)
            .collect();
        log.sheet_issue(
            CONFIG_SHEET,
            &Issue::SpuVersionMissing {
                version: ctx.spu_version.to_string(),
                available,
            },
        );
    }
}
