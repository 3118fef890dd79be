//! Sheet file discovery.

use std::path::{Path, PathBuf};

use cdd_model::SheetName;

use crate::error::{IngestError, Result};

/// Lists all CSV files in a directory, sorted by file name.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Sheet a file holds, from its stem (`Radio 4G.csv` -> `Radio 4G`).
pub fn sheet_for_file(path: &Path) -> Option<SheetName> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(SheetName::parse_loose)
}
