//! Validation issue types.
//!
//! Each rule produces an [`Issue`] variant carrying only the data its message
//! needs. The variant fixes the finding kind, severity and wording.

use cdd_model::{
    ConfigSection, CoreRegistry, Finding, FindingKind, RowView, Severity, SheetName,
};

/// Validation issue - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    // Config loading
    /// The reference config could not be read or parsed.
    ConfigLoadFailed { file: String, cause: String },

    // Sheet presence
    RequiredSheetMissing { sheet: SheetName },
    RequiredSheetEmpty { sheet: SheetName },
    /// Optional sheet is missing or has no rows.
    OptionalSheetAbsent { sheet: SheetName },

    // Column presence
    RequiredColumnMissing { column: &'static str },

    // Field rules
    /// NE_Name does not follow the naming convention.
    NeNameFormat { value: String },
    InvalidAddress { column: &'static str, value: String },
    NotNumeric { column: &'static str, value: String },
    OutOfRange {
        column: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    // Cross-sheet references
    /// Radio sheet element name absent from the IP sheet.
    UnknownElement { value: String },

    // Config references
    UnregisteredCoreNode { registry: CoreRegistry, name: String },
    UnknownRruType { value: String },
    UnknownEarfcn { value: String },
    UnknownBandwidth { value: String },

    // Structure
    MappingColumnMissing { column: &'static str },
    MappingSheetAbsent,
    ConfigSectionMissing { section: ConfigSection },
    SpuVersionMissing {
        version: String,
        available: Vec<String>,
    },
}

impl Issue {
    pub fn kind(&self) -> FindingKind {
        match self {
            Issue::ConfigLoadFailed { .. } => FindingKind::ConfigLoadFailure,
            Issue::RequiredSheetMissing { .. } => FindingKind::MissingSheet,
            Issue::RequiredSheetEmpty { .. } => FindingKind::EmptySheet,
            Issue::OptionalSheetAbsent { .. } => FindingKind::MissingSheet,
            Issue::RequiredColumnMissing { .. } => FindingKind::MissingColumn,
            Issue::NeNameFormat { .. } => FindingKind::FormatViolation,
            Issue::InvalidAddress { .. } => FindingKind::FormatViolation,
            Issue::NotNumeric { .. } => FindingKind::TypeViolation,
            Issue::OutOfRange { .. } => FindingKind::RangeViolation,
            Issue::UnknownElement { .. } => FindingKind::ReferentialViolation,
            Issue::UnregisteredCoreNode { .. }
            | Issue::UnknownRruType { .. }
            | Issue::UnknownEarfcn { .. }
            | Issue::UnknownBandwidth { .. } => FindingKind::ConfigReferenceViolation,
            Issue::MappingColumnMissing { .. }
            | Issue::MappingSheetAbsent
            | Issue::ConfigSectionMissing { .. }
            | Issue::SpuVersionMissing { .. } => FindingKind::StructuralViolation,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Issue::OptionalSheetAbsent { .. }
            | Issue::NeNameFormat { .. }
            | Issue::UnregisteredCoreNode { .. }
            | Issue::UnknownRruType { .. }
            | Issue::UnknownEarfcn { .. }
            | Issue::UnknownBandwidth { .. }
            | Issue::MappingSheetAbsent
            | Issue::SpuVersionMissing { .. } => Severity::Warning,
            Issue::ConfigLoadFailed { .. }
            | Issue::RequiredSheetMissing { .. }
            | Issue::RequiredSheetEmpty { .. }
            | Issue::RequiredColumnMissing { .. }
            | Issue::InvalidAddress { .. }
            | Issue::NotNumeric { .. }
            | Issue::OutOfRange { .. }
            | Issue::UnknownElement { .. }
            | Issue::MappingColumnMissing { .. }
            | Issue::ConfigSectionMissing { .. } => Severity::Error,
        }
    }

    /// Column the issue points at, if any.
    pub fn column(&self) -> Option<&'static str> {
        match self {
            Issue::RequiredColumnMissing { column }
            | Issue::MappingColumnMissing { column }
            | Issue::InvalidAddress { column, .. }
            | Issue::NotNumeric { column, .. }
            | Issue::OutOfRange { column, .. } => Some(*column),
            Issue::NeNameFormat { .. } | Issue::UnknownElement { .. } => Some("NE_Name"),
            Issue::UnregisteredCoreNode { registry, .. } => Some(registry.label()),
            Issue::UnknownRruType { .. } => Some("RRUname"),
            Issue::UnknownEarfcn { .. } => Some("arfcndl"),
            Issue::UnknownBandwidth { .. } => Some("dlChannelBandwidth"),
            Issue::ConfigLoadFailed { .. }
            | Issue::RequiredSheetMissing { .. }
            | Issue::RequiredSheetEmpty { .. }
            | Issue::OptionalSheetAbsent { .. }
            | Issue::MappingSheetAbsent
            | Issue::ConfigSectionMissing { .. }
            | Issue::SpuVersionMissing { .. } => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::ConfigLoadFailed { file, cause } => format!("Failed to load {file}: {cause}"),
            Issue::RequiredSheetMissing { sheet } => {
                format!("Required sheet '{sheet}' is missing")
            }
            Issue::RequiredSheetEmpty { sheet } => format!("Required sheet '{sheet}' is empty"),
            Issue::OptionalSheetAbsent { sheet } => {
                format!("Optional sheet '{sheet}' is missing or empty")
            }
            Issue::RequiredColumnMissing { column } => {
                format!("Required column '{column}' is missing")
            }
            Issue::NeNameFormat { value } => format!(
                "NE_Name '{value}' doesn't match expected format (e.g., gCM00025Z, eBL00123Z)"
            ),
            Issue::InvalidAddress { value, .. } => format!("Invalid IP address: '{value}'"),
            Issue::NotNumeric { column, value } => format!("{column} '{value}' must be numeric"),
            Issue::OutOfRange {
                column,
                value,
                min,
                max,
            } => format!("{column} {value} is out of range ({min}-{max})"),
            Issue::UnknownElement { value } => format!("NE_Name '{value}' not found in IP sheet"),
            Issue::UnregisteredCoreNode { registry, name } => {
                format!("{} '{name}' not found in config.json", registry.label())
            }
            Issue::UnknownRruType { value } => {
                format!("RRU type '{value}' not found in hwWorkScence_mapping")
            }
            Issue::UnknownEarfcn { value } => {
                format!("EARFCN {value} not found in bandIndicator_mapping")
            }
            Issue::UnknownBandwidth { value } => {
                format!("Bandwidth {value} not found in bandwidth_mapping")
            }
            Issue::MappingColumnMissing { column } => {
                format!("Required column '{column}' is missing from Mapping sheet")
            }
            Issue::MappingSheetAbsent => {
                "Mapping sheet is missing or empty. Using default mappings.".to_string()
            }
            Issue::ConfigSectionMissing { section } => format!(
                "Required section '{}' is missing from config.json",
                section.key()
            ),
            Issue::SpuVersionMissing { version, available } => format!(
                "SPU version {version} not found. Available versions: {}",
                available.join(", ")
            ),
        }
    }

    /// Sheet-level finding on `sheet`.
    pub fn on_sheet(&self, sheet: &str) -> Finding {
        let finding = Finding::new(self.severity(), self.kind(), sheet, self.message());
        match self.column() {
            Some(column) => finding.with_column(column),
            None => finding,
        }
    }

    /// Row-level finding located at `row`.
    pub fn at_row(&self, row: &RowView<'_>) -> Finding {
        self.on_sheet(row.sheet().as_str()).with_row(row.number())
    }
}
