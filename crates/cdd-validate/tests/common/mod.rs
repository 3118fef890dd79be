#![allow(dead_code)]

use cdd_model::{ReferenceConfig, SheetName, TableSet};
use cdd_standards::parse_reference_config;
use polars::prelude::{Column, DataFrame};

pub const CONFIG_JSON: &str = r#"{
    "mcc": "452",
    "mnc": "04",
    "province": {"CMU": "Ca Mau"},
    "mme": {"MME01": ["10.10.1.1"], "MME02": ["10.10.2.1"]},
    "amf": {"AMF01": ["10.20.1.1"]},
    "SPU": {
        "V1.70.26": {
            "hwWorkScence_mapping": {"RRU5258": {"4G": 1}, "AAU5613": {"5G": 4}},
            "earfcn_mapping": {"1850": 1842.5, "3050": 2660.0},
            "bandIndicator_mapping": {"1850": 3, "3050": 7},
            "bandwidth_mapping": {"1.4": "CELL_BW_N6", "20.0": "CELL_BW_N100"},
            "baseband_configs": {"BBU5900_UBBPg2": {}}
        },
        "V1.80.1": {}
    }
}"#;

pub const IP_ROW: &[(&str, &str)] = &[
    ("NE_Name", "gCM00025Z"),
    ("eNBId", "101"),
    ("OAM_IP", "10.0.0.2"),
    ("OAM_Gateway", "10.0.0.1"),
    ("LTE_IP", "10.1.0.2"),
    ("LTE_Gateway", "10.1.0.1"),
    ("gNBId", "201"),
    ("NR_IP", "10.2.0.2"),
    ("NR_Gateway", "10.2.0.1"),
    ("MME", "MME01 MME02"),
    ("AMF", "AMF01"),
    ("Baseband config", "BBU5900_UBBPg2"),
];

pub const RADIO_4G_ROW: &[(&str, &str)] = &[
    ("NE_Name", "gCM00025Z"),
    ("CellName", "CM00025_L1"),
    ("cellId", "1"),
    ("PCI", "100"),
    ("TAC", "12345"),
    ("arfcndl", "1850"),
    ("dlChannelBandwidth", "20"),
    ("RRU", "60"),
    ("RRUname", "RRU5258"),
    ("rruPort", "0"),
];

pub const RADIO_5G_ROW: &[(&str, &str)] = &[
    ("NE_Name", "gCM00025Z"),
    ("nRCell", "CM00025_N1"),
    ("gNBId", "201"),
    ("cellLocalId", "1"),
    ("nRPCI", "500"),
    ("nRTAC", "12345"),
    ("arfcnDL", "630000"),
    ("bSChannelBwDL", "100"),
    ("RRU", "70"),
    ("RRUname", "AAU5613"),
    ("rruPort", "0"),
];

pub const MAPPING_ROW: &[(&str, &str)] = &[
    ("Version", "V1.70.26"),
    ("Sheet", "Radio 4G"),
    ("Column", "PCI"),
];

/// Frame whose rows are `base` with each row's overrides applied.
pub fn rows(base: &[(&str, &str)], overrides: &[&[(&str, Option<&str>)]]) -> DataFrame {
    let columns = base
        .iter()
        .map(|(name, default)| {
            let values: Vec<Option<String>> = overrides
                .iter()
                .map(|row| {
                    row.iter()
                        .find(|(column, _)| column == name)
                        .map_or(Some((*default).to_string()), |(_, value)| {
                            value.map(str::to_string)
                        })
                })
                .collect();
            Column::new((*name).into(), values)
        })
        .collect();
    DataFrame::new(columns).expect("frame")
}

pub fn one_row(base: &[(&str, &str)]) -> DataFrame {
    rows(base, &[&[]])
}

pub fn without(df: DataFrame, column: &str) -> DataFrame {
    df.drop(column).expect("drop column")
}

pub fn config() -> ReferenceConfig {
    parse_reference_config(CONFIG_JSON).expect("config")
}

/// IP, Radio 4G, Radio 5G and Mapping, all valid.
pub fn valid_tables() -> TableSet {
    TableSet::new()
        .with_sheet(SheetName::Ip, one_row(IP_ROW))
        .with_sheet(SheetName::Radio4G, one_row(RADIO_4G_ROW))
        .with_sheet(SheetName::Radio5G, one_row(RADIO_5G_ROW))
        .with_sheet(SheetName::Mapping, one_row(MAPPING_ROW))
}
