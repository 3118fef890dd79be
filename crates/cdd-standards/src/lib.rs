//! Reference config for CDD validation.
//!
//! The reference config is a JSON document holding the MCC/MNC, province
//! identifiers, the MME and AMF endpoint registries and one block of mapping
//! tables per SPU version:
//!
//! ```text
//! {
//!   "mcc": "452", "mnc": "04", "province": {...},
//!   "mme": {"MME01": ["10.0.0.1"]},
//!   "amf": {"AMF01": ["10.1.0.1"]},
//!   "SPU": {
//!     "V1.70.26": {
//!       "hwWorkScence_mapping": {...}, "earfcn_mapping": {...},
//!       "bandIndicator_mapping": {...}, "bandwidth_mapping": {...},
//!       "baseband_configs": {...}
//!     }
//!   }
//! }
//! ```

pub mod error;
pub mod loader;
pub mod paths;

pub use error::{Result, StandardsError};
pub use loader::{load_bundled_config, load_reference_config, parse_reference_config};
pub use paths::{
    CONFIG_ENV_VAR, CONFIG_FILE_NAME, DEFAULT_SPU_VERSION, bundled_config_path,
    resolve_config_path, resolve_config_path_in,
};
