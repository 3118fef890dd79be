mod common;

use cdd_model::SheetName;
use cdd_validate::{ConfigSource, REPORT_FILE_NAME, Validator, write_validation_report_json};
use tempfile::TempDir;

use common::{RADIO_4G_ROW, config, rows, valid_tables};

#[test]
fn json_report_lists_errors_before_warnings() {
    let tables = valid_tables().with_sheet(
        SheetName::Radio4G,
        rows(RADIO_4G_ROW, &[&[("PCI", Some("700"))]]),
    );
    let config = config();
    let outcome = Validator::new(&tables, ConfigSource::Loaded(&config)).validate();

    let dir = TempDir::new().unwrap();
    let report_dir = dir.path().join("reports");
    let path = write_validation_report_json(&report_dir, "site-001", &outcome).unwrap();
    assert_eq!(path, report_dir.join(REPORT_FILE_NAME));

    let content = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["schema"], "cdd-validator.validation-report");
    assert_eq!(json["schema_version"], 1);
    assert_eq!(json["source"], "site-001");
    assert_eq!(json["error_count"], 1);
    assert_eq!(json["warning_count"], 9);
    assert_eq!(json["passed"], false);
    assert!(json["generated_at"].as_str().is_some());

    let first = &json["findings"][0];
    assert_eq!(first["severity"], "error");
    assert_eq!(first["kind"], "RangeViolation");
    assert_eq!(first["sheet"], "Radio 4G");
    assert_eq!(first["row"], 2);
    assert_eq!(first["column"], "PCI");
    assert_eq!(first["message"], "PCI 700 is out of range (0-503)");
    assert_eq!(json["findings"][1]["severity"], "warning");
    assert!(json["findings"][1]["row"].is_null());
}
