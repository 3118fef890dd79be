//! Data model for Cell Design Document validation.
//!
//! - [`TableSet`] / [`SheetView`] / [`RowView`]: the sheets under validation
//! - [`ReferenceConfig`]: registries and SPU mapping tables
//! - [`Finding`]: one validation result with its [`Severity`] and [`FindingKind`]

pub mod config;
pub mod error;
pub mod finding;
pub mod sheet;
pub mod table;

pub use config::{
    CodeValue, ConfigSection, CoreRegistry, EndpointRegistry, ReferenceConfig, SpuVersion,
    value_label,
};
pub use error::{ModelError, Result};
pub use finding::{Finding, FindingKind, Severity};
pub use sheet::SheetName;
pub use table::{CellValue, HEADER_ROW_OFFSET, RowView, SheetView, TableSet};
