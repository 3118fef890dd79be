//! JSON loader for the reference config.

use std::path::Path;

use cdd_model::ReferenceConfig;
use tracing::debug;

use crate::error::{Result, StandardsError};
use crate::paths::bundled_config_path;

/// Load a reference config from a JSON file.
pub fn load_reference_config(path: &Path) -> Result<ReferenceConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StandardsError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StandardsError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let config = parse_reference_config(&contents).map_err(|source| StandardsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        spu_versions = config.spu_versions().len(),
        "loaded reference config"
    );
    Ok(config)
}

/// Parse a reference config from JSON text.
pub fn parse_reference_config(contents: &str) -> serde_json::Result<ReferenceConfig> {
    serde_json::from_str(contents)
}

/// Load the sample config kept in `standards/` (tests and demos only).
pub fn load_bundled_config() -> Result<ReferenceConfig> {
    load_reference_config(&bundled_config_path())
}
