mod common;

use std::fs;

use cdd_model::{FindingKind, SheetName};
use cdd_validate::{CONFIG_LOAD_SHEET, CONFIG_SHEET, ConfigSource, Validator};
use tempfile::TempDir;

use common::{CONFIG_JSON, valid_tables};

#[test]
fn config_file_is_loaded_from_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, CONFIG_JSON).unwrap();

    let tables = valid_tables();
    let outcome = Validator::new(&tables, ConfigSource::Path(&path)).validate();
    assert!(outcome.errors().is_empty(), "{:?}", outcome.error_messages());
}

#[test]
fn missing_config_is_one_finding_and_the_pass_continues() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");

    let tables = valid_tables();
    let outcome = Validator::new(&tables, ConfigSource::Path(&path)).validate();

    insta::assert_snapshot!(outcome.error_messages().join("\n"), @r"
    [config]: Failed to load missing.json: file not found
    [config.json]: Required section 'mcc' is missing from config.json
    [config.json]: Required section 'mnc' is missing from config.json
    [config.json]: Required section 'province' is missing from config.json
    [config.json]: Required section 'mme' is missing from config.json
    [config.json]: Required section 'amf' is missing from config.json
    [config.json]: Required section 'SPU' is missing from config.json
    ");

    let load_failures: Vec<_> = outcome
        .errors()
        .iter()
        .filter(|e| e.kind == FindingKind::ConfigLoadFailure)
        .collect();
    assert_eq!(load_failures.len(), 1);
    assert_eq!(load_failures[0].sheet, CONFIG_LOAD_SHEET);

    // Config-dependent lookups degrade to warnings.
    let warnings = outcome.warning_messages();
    assert!(warnings.contains(&"[IP] Row 2 Column 'MME': MME 'MME01' not found in config.json".to_string()));
    assert!(warnings.contains(
        &"[Radio 4G] Row 2 Column 'RRUname': RRU type 'RRU5258' not found in hwWorkScence_mapping"
            .to_string()
    ));
    assert_eq!(
        warnings.last().map(String::as_str),
        Some("[config.json]: SPU version V1.70.26 not found. Available versions: ")
    );
}

#[test]
fn malformed_config_reports_parse_cause() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ \"mcc\": ").unwrap();

    let tables = valid_tables();
    let outcome = Validator::new(&tables, ConfigSource::Path(&path)).validate();
    let first = &outcome.errors()[0];
    assert_eq!(first.kind, FindingKind::ConfigLoadFailure);
    assert!(first.message.starts_with("Failed to load config.json: "));
    assert!(first.message.len() > "Failed to load config.json: ".len());
}

#[test]
fn partial_config_reports_each_missing_section() {
    let config = cdd_standards::parse_reference_config(r#"{"mcc": "452", "mnc": "04"}"#).unwrap();
    let mut tables = valid_tables();
    tables.remove(SheetName::Radio5G);
    let outcome = Validator::new(&tables, ConfigSource::Loaded(&config)).validate();
    let sections: Vec<_> = outcome
        .errors()
        .iter()
        .filter(|e| e.sheet == CONFIG_SHEET)
        .map(|e| e.message.as_str())
        .collect();
    assert_eq!(
        sections,
        vec![
            "Required section 'province' is missing from config.json",
            "Required section 'mme' is missing from config.json",
            "Required section 'amf' is missing from config.json",
            "Required section 'SPU' is missing from config.json",
        ]
    );
}

#[test]
fn unconfigured_location_is_a_load_failure() {
    let workdir = TempDir::new().unwrap();
    let path = cdd_standards::resolve_config_path_in(None, None, workdir.path());
    assert_eq!(path, workdir.path().join("config.json"));

    let tables = valid_tables();
    let outcome = Validator::new(&tables, ConfigSource::Path(&path)).validate();
    let load_failures: Vec<_> = outcome
        .errors()
        .iter()
        .filter(|e| e.kind == FindingKind::ConfigLoadFailure)
        .map(|e| e.message.as_str())
        .collect();
    assert_eq!(load_failures, vec!["Failed to load config.json: file not found"]);
}

#[test]
fn quoted_frequency_does_not_reject_the_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let json = CONFIG_JSON.replace(r#""1850": 1842.5"#, r#""1850": "1842.5""#);
    assert_ne!(json, CONFIG_JSON);
    fs::write(&path, json).unwrap();

    let tables = valid_tables();
    let outcome = Validator::new(&tables, ConfigSource::Path(&path)).validate();
    assert!(outcome.errors().is_empty(), "{:?}", outcome.error_messages());
    assert!(
        outcome
            .warnings()
            .iter()
            .all(|w| w.kind != FindingKind::ConfigReferenceViolation),
        "{:?}",
        outcome.warning_messages()
    );
}
