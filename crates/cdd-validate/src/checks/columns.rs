//! Column presence against a sheet schema.

use cdd_model::SheetView;
use tracing::debug;

use crate::issue::Issue;
use crate::outcome::FindingLog;
use crate::schema::SheetSchema;

/// Reports each absent required column; absent optional columns are only logged.
pub(crate) fn check(sheet: &SheetView<'_>, schema: &SheetSchema, log: &mut FindingLog) {
    for column in schema.missing_required(|c| sheet.has_column(c)) {
        log.sheet_issue(sheet.name().as_str(), &Issue::RequiredColumnMissing { column });
    }

    for column in schema.optional {
        if !sheet.has_column(column) {
            debug!(sheet = %sheet.name(), column, "optional column absent");
        }
    }
}
