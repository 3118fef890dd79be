//! Validation engine for Cell Design Documents.
//!
//! Checks sheet presence, column schemas, field formats and ranges,
//! NE_Name references between radio sheets and the IP sheet, lookups into
//! the reference config, and the structure of the Mapping sheet and the
//! config itself.
//!
//! ```ignore
//! use cdd_validate::{ConfigSource, Validator};
//!
//! let outcome = Validator::new(&tables, ConfigSource::Path(config_path)).validate();
//! for error in outcome.error_messages() {
//!     eprintln!("{error}");
//! }
//! ```

mod checks;
mod issue;
mod outcome;
mod patterns;
mod report;
mod schema;
mod validator;

pub use checks::structure::CONFIG_SHEET;
pub use issue::Issue;
pub use outcome::{SheetCounts, ValidationOutcome};
pub use patterns::{float_key, is_valid_ipv4, is_valid_ne_name};
pub use report::{
    FindingJson, REPORT_FILE_NAME, ValidationReportPayload, write_validation_report_json,
};
pub use schema::{
    IP_SCHEMA, MAPPING_SCHEMA, RADIO_4G_SCHEMA, RADIO_5G_SCHEMA, REQUIRED_SHEETS, SheetRequirement,
    SheetSchema, optional_sheets, requirement, schema_for,
};
pub use validator::{CONFIG_LOAD_SHEET, ConfigSource, ValidationOptions, Validator};
