//! Sheet presence rules.

use cdd_model::TableSet;

use crate::issue::Issue;
use crate::outcome::FindingLog;
use crate::schema::{REQUIRED_SHEETS, optional_sheets};

pub(crate) fn check(tables: &TableSet, log: &mut FindingLog) {
    for &sheet in REQUIRED_SHEETS {
        let issue = match tables.sheet(sheet) {
            None => Issue::RequiredSheetMissing { sheet },
            Some(view) if view.is_empty() => Issue::RequiredSheetEmpty { sheet },
            Some(_) => continue,
        };
        log.sheet_issue(sheet.as_str(), &issue);
    }

    for sheet in optional_sheets() {
        if tables.sheet_with_rows(sheet).is_none() {
            log.sheet_issue(sheet.as_str(), &Issue::OptionalSheetAbsent { sheet });
        }
    }
}
