//! Fixed set of sheet names a Cell Design Document may carry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A CDD sheet, identified by its workbook tab name.
///
/// Declaration order is the workbook order and drives the ordering of
/// [`TableSet`](crate::TableSet) iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SheetName {
    #[serde(rename = "IP")]
    Ip,
    #[serde(rename = "Radio 2G")]
    Radio2G,
    #[serde(rename = "Radio 3G")]
    Radio3G,
    #[serde(rename = "Radio 4G")]
    Radio4G,
    #[serde(rename = "Radio 5G")]
    Radio5G,
    #[serde(rename = "2G-2G")]
    Relation2G2G,
    #[serde(rename = "2G-3G")]
    Relation2G3G,
    #[serde(rename = "2G-4G")]
    Relation2G4G,
    #[serde(rename = "3G-2G")]
    Relation3G2G,
    #[serde(rename = "3G-3G")]
    Relation3G3G,
    #[serde(rename = "3G-4G")]
    Relation3G4G,
    #[serde(rename = "RET")]
    Ret,
    #[serde(rename = "Mapping")]
    Mapping,
}

impl SheetName {
    /// All known sheets in workbook order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Ip,
            Self::Radio2G,
            Self::Radio3G,
            Self::Radio4G,
            Self::Radio5G,
            Self::Relation2G2G,
            Self::Relation2G3G,
            Self::Relation2G4G,
            Self::Relation3G2G,
            Self::Relation3G3G,
            Self::Relation3G4G,
            Self::Ret,
            Self::Mapping,
        ]
    }

    /// Tab name as it appears in the workbook.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ip => "IP",
            Self::Radio2G => "Radio 2G",
            Self::Radio3G => "Radio 3G",
            Self::Radio4G => "Radio 4G",
            Self::Radio5G => "Radio 5G",
            Self::Relation2G2G => "2G-2G",
            Self::Relation2G3G => "2G-3G",
            Self::Relation2G4G => "2G-4G",
            Self::Relation3G2G => "3G-2G",
            Self::Relation3G3G => "3G-3G",
            Self::Relation3G4G => "3G-4G",
            Self::Ret => "RET",
            Self::Mapping => "Mapping",
        }
    }

    /// Exact tab-name lookup.
    pub fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|sheet| sheet.as_str() == name)
    }

    /// Case-insensitive lookup that also ignores surrounding whitespace.
    ///
    /// Used when sheet names come from file names rather than workbook tabs.
    pub fn parse_loose(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|sheet| sheet.as_str().eq_ignore_ascii_case(trimmed))
    }

    /// Short human description for listings.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Ip => "Element identity and addressing",
            Self::Radio2G => "2G radio cells",
            Self::Radio3G => "3G radio cells",
            Self::Radio4G => "4G radio cells",
            Self::Radio5G => "5G radio cells",
            Self::Relation2G2G => "2G to 2G neighbour relations",
            Self::Relation2G3G => "2G to 3G neighbour relations",
            Self::Relation2G4G => "2G to 4G neighbour relations",
            Self::Relation3G2G => "3G to 2G neighbour relations",
            Self::Relation3G3G => "3G to 3G neighbour relations",
            Self::Relation3G4G => "3G to 4G neighbour relations",
            Self::Ret => "Remote electrical tilt",
            Self::Mapping => "Field mapping directives",
        }
    }
}

impl fmt::Display for SheetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SheetName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ModelError::UnknownSheet {
            name: s.to_string(),
        })
    }
}
