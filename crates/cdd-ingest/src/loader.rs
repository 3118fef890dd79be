//! Folder to [`TableSet`] loading.

use std::path::Path;

use cdd_model::TableSet;
use tracing::{debug, info, warn};

use crate::discovery::{list_csv_files, sheet_for_file};
use crate::error::Result;
use crate::reader::read_sheet_csv;

/// Loads every recognised sheet file in `dir`.
///
/// Files whose stem is not a known sheet name are skipped. When two files
/// map to the same sheet (`IP.csv` and `ip.csv`), the first in file-name
/// order is kept.
pub fn load_table_set(dir: &Path) -> Result<TableSet> {
    let mut tables = TableSet::new();

    for path in list_csv_files(dir)? {
        let Some(sheet) = sheet_for_file(&path) else {
            debug!(path = %path.display(), "skipping file with unknown sheet name");
            continue;
        };
        if tables.contains(sheet) {
            warn!(
                path = %path.display(),
                sheet = %sheet,
                "duplicate sheet file ignored"
            );
            continue;
        }

        let df = read_sheet_csv(&path)?;
        debug!(
            sheet = %sheet,
            rows = df.height(),
            columns = df.width(),
            "loaded sheet"
        );
        tables.insert(sheet, df);
    }

    info!(dir = %dir.display(), sheets = tables.len(), "loaded CDD sheets");
    Ok(tables)
}
