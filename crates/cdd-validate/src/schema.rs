//! Sheet requirements and column schemas.

use cdd_model::SheetName;

/// Whether a sheet must be present with rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetRequirement {
    Required,
    Optional,
}

impl SheetRequirement {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Required => "Required",
            Self::Optional => "Optional",
        }
    }
}

/// Sheets that must be present and non-empty.
pub const REQUIRED_SHEETS: &[SheetName] = &[SheetName::Ip, SheetName::Radio4G];

pub fn requirement(sheet: SheetName) -> SheetRequirement {
    if REQUIRED_SHEETS.contains(&sheet) {
        SheetRequirement::Required
    } else {
        SheetRequirement::Optional
    }
}

/// Optional sheets in workbook order.
pub fn optional_sheets() -> impl Iterator<Item = SheetName> {
    SheetName::all()
        .iter()
        .copied()
        .filter(|sheet| requirement(*sheet) == SheetRequirement::Optional)
}

/// Expected columns of one sheet.
#[derive(Debug, Clone, Copy)]
pub struct SheetSchema {
    pub sheet: SheetName,
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
}

impl SheetSchema {
    /// Required columns for which `has_column` is false, in schema order.
    pub fn missing_required(&self, has_column: impl Fn(&str) -> bool) -> Vec<&'static str> {
        self.required
            .iter()
            .copied()
            .filter(|column| !has_column(column))
            .collect()
    }
}

pub const IP_SCHEMA: SheetSchema = SheetSchema {
    sheet: SheetName::Ip,
    required: &[
        "NE_Name",
        "eNBId",
        "OAM_IP",
        "OAM_Gateway",
        "LTE_IP",
        "LTE_Gateway",
    ],
    optional: &["gNBId", "NR_IP", "NR_Gateway", "MME", "AMF", "Baseband config"],
};

pub const RADIO_4G_SCHEMA: SheetSchema = SheetSchema {
    sheet: SheetName::Radio4G,
    required: &[
        "NE_Name",
        "CellName",
        "cellId",
        "PCI",
        "TAC",
        "arfcndl",
        "dlChannelBandwidth",
        "RRU",
        "RRUname",
        "rruPort",
    ],
    optional: &[
        "arfcnul",
        "ulChannelBandwidth",
        "RSI",
        "cpSpeRefSigPwr",
        "MIMO",
        "CellType",
        "RiPort Baseband",
        "RiPort RRU",
        "Relation 5G",
    ],
};

pub const RADIO_5G_SCHEMA: SheetSchema = SheetSchema {
    sheet: SheetName::Radio5G,
    required: &[
        "NE_Name",
        "nRCell",
        "gNBId",
        "cellLocalId",
        "nRPCI",
        "nRTAC",
        "arfcnDL",
        "bSChannelBwDL",
        "RRU",
        "RRUname",
        "rruPort",
    ],
    optional: &["arfcnUL", "bSChannelBwUL", "CellType", "Relation 4G"],
};

pub const MAPPING_SCHEMA: SheetSchema = SheetSchema {
    sheet: SheetName::Mapping,
    required: &["Version", "Sheet", "Column"],
    optional: &[],
};

/// Column schema for sheets that carry one.
pub fn schema_for(sheet: SheetName) -> Option<&'static SheetSchema> {
    match sheet {
        SheetName::Ip => Some(&IP_SCHEMA),
        SheetName::Radio4G => Some(&RADIO_4G_SCHEMA),
        SheetName::Radio5G => Some(&RADIO_5G_SCHEMA),
        SheetName::Mapping => Some(&MAPPING_SCHEMA),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_sheets_follow_workbook_order() {
        let sheets: Vec<_> = optional_sheets().map(|s| s.as_str()).collect();
        assert_eq!(
            sheets,
            vec![
                "Radio 2G", "Radio 3G", "Radio 5G", "2G-2G", "2G-3G", "2G-4G", "3G-2G", "3G-3G",
                "3G-4G", "RET", "Mapping",
            ]
        );
    }

    #[test]
    fn missing_required_keeps_schema_order() {
        let present = ["NE_Name", "OAM_IP", "LTE_IP"];
        let missing = IP_SCHEMA.missing_required(|c| present.contains(&c));
        assert_eq!(missing, vec!["eNBId", "OAM_Gateway", "LTE_Gateway"]);
    }
}
