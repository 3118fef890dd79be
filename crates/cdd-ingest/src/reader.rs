//! CSV sheet reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

fn open_error(path: &Path, err: std::io::Error) -> IngestError {
    if err.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Rejects UTF-16 input; UTF-8 with or without BOM is accepted.
fn check_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }
    Ok(())
}

/// Reads one sheet CSV into a DataFrame.
///
/// The first line is the header. A header-only file gives a frame with
/// columns and no rows; a zero-byte file gives a frame with neither.
/// Types are inferred over the whole file, so a column that mixes numbers
/// and text is read as text and coerced later by the rules.
pub fn read_sheet_csv(path: &Path) -> Result<DataFrame> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;
    if metadata.len() == 0 {
        tracing::debug!(path = %path.display(), "zero-byte sheet file");
        return Ok(DataFrame::empty());
    }
    check_encoding(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    for name in df.get_column_names() {
        if name.trim().is_empty() {
            tracing::warn!(path = %path.display(), "sheet has a blank column header");
        }
    }

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_sheet_csv() {
        let file = create_temp_csv(b"NE_Name,eNBId,OAM_IP\ngCM00025Z,101,10.0.0.1\n");
        let df = read_sheet_csv(file.path()).unwrap();
        assert_eq!(df.height(), 1);
        assert_eq!(df.width(), 3);
    }

    #[test]
    fn test_header_only_file() {
        let file = create_temp_csv(b"Version,Sheet,Column\n");
        let df = read_sheet_csv(file.path()).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 3);
    }

    #[test]
    fn test_zero_byte_file() {
        let file = create_temp_csv(b"");
        let df = read_sheet_csv(file.path()).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 0);
    }

    #[test]
    fn test_utf16_rejected() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'A', 0x00]);
        let result = read_sheet_csv(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }
}
