//! Config location resolution.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming the reference config file.
pub const CONFIG_ENV_VAR: &str = "CDD_CONFIG";

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// SPU configuration version used when the caller does not pick one.
pub const DEFAULT_SPU_VERSION: &str = "V1.70.26";

/// Sample config kept in `standards/` at the workspace root for tests.
///
/// Never used as a default: its registries are illustrative only.
pub fn bundled_config_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("standards")
        .join(CONFIG_FILE_NAME)
}

/// Resolve the config location from the process environment.
///
/// Precedence: explicit path, then `CDD_CONFIG`, then `config.json` in the
/// working directory. The result may not exist; loading reports that.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    resolve_config_path_in(explicit, std::env::var_os(CONFIG_ENV_VAR), Path::new("."))
}

/// [`resolve_config_path`] with the environment value and working directory
/// passed in.
pub fn resolve_config_path_in(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
    working_dir: &Path,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = env_value.filter(|value| !value.is_empty()) {
        return PathBuf::from(path);
    }
    working_dir.join(CONFIG_FILE_NAME)
}
