//! Integration tests for the validate/config/sheets commands.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use cdd_cli::commands::{describe_config, run_validate, sheets_table};
use cdd_cli::types::{ConfigRequest, ConfigSections, ValidateRequest, ValidationStatus};
use cdd_model::{FindingKind, SheetName};
use cdd_standards::{DEFAULT_SPU_VERSION, bundled_config_path, load_bundled_config};
use cdd_validate::REPORT_FILE_NAME;

const IP_CSV: &str = "NE_Name,eNBId,OAM_IP,OAM_Gateway,LTE_IP,LTE_Gateway,gNBId,MME,AMF\n\
                      gCM00025Z,101,10.0.0.2,10.0.0.1,10.1.0.2,10.1.0.1,201,MME01 MME02,AMF01\n";

const RADIO_4G_CSV: &str = "NE_Name,CellName,cellId,PCI,TAC,arfcndl,dlChannelBandwidth,RRU,RRUname,rruPort\n\
                            gCM00025Z,CM00025_L1,1,100,12345,1850,20,60,RRU5258,0\n";

const RADIO_5G_CSV: &str = "NE_Name,nRCell,gNBId,cellLocalId,nRPCI,nRTAC,arfcnDL,bSChannelBwDL,RRU,RRUname,rruPort\n\
                            gCM00025Z,CM00025_N1,201,1,500,12345,630000,100,70,AAU5613,0\n";

const MAPPING_CSV: &str = "Version,Sheet,Column\nV1.70.26,Radio 4G,PCI\n";

fn cdd_folder(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

fn valid_folder() -> TempDir {
    cdd_folder(&[
        ("IP.csv", IP_CSV),
        ("Radio 4G.csv", RADIO_4G_CSV),
        ("Radio 5G.csv", RADIO_5G_CSV),
        ("Mapping.csv", MAPPING_CSV),
    ])
}

fn request(input_dir: &Path, strict: bool) -> ValidateRequest {
    ValidateRequest {
        input_dir: input_dir.to_path_buf(),
        config: Some(bundled_config_path()),
        spu_version: DEFAULT_SPU_VERSION.to_string(),
        strict,
        report_dir: None,
    }
}

#[test]
fn valid_folder_passes_with_optional_sheet_warnings() {
    let dir = valid_folder();
    let result = run_validate(&request(dir.path(), false)).unwrap();

    assert!(result.outcome.errors().is_empty(), "{:?}", result.outcome.errors());
    assert_eq!(result.outcome.warnings().len(), 9);
    assert_eq!(result.status(), ValidationStatus::PassedWithWarnings);
    assert_eq!(result.exit_code(), 0);
    assert_eq!(result.sheets.len(), 4);
    assert_eq!(result.sheets[0].sheet, SheetName::Ip);
    assert_eq!(result.sheets[0].rows, 1);
}

#[test]
fn strict_mode_fails_on_warnings() {
    let dir = valid_folder();
    let result = run_validate(&request(dir.path(), true)).unwrap();

    assert!(!result.outcome.has_errors());
    assert_eq!(result.status(), ValidationStatus::Failed);
    assert_eq!(result.exit_code(), 1);
}

#[test]
fn missing_required_sheet_fails() {
    let dir = cdd_folder(&[("IP.csv", IP_CSV)]);
    let result = run_validate(&request(dir.path(), false)).unwrap();

    let missing: Vec<_> = result
        .outcome
        .errors()
        .iter()
        .filter(|finding| finding.kind == FindingKind::MissingSheet)
        .map(|finding| finding.sheet.clone())
        .collect();
    assert_eq!(missing, vec!["Radio 4G".to_string()]);
    assert_eq!(result.exit_code(), 1);
}

#[test]
fn report_is_written_when_requested() {
    let dir = valid_folder();
    let out = TempDir::new().unwrap();
    let mut request = request(dir.path(), false);
    request.report_dir = Some(out.path().join("reports"));

    let result = run_validate(&request).unwrap();
    let path = result.report_path.expect("report path");
    assert_eq!(path, out.path().join("reports").join(REPORT_FILE_NAME));

    let payload: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(payload["error_count"], 0);
    assert_eq!(payload["warning_count"], 9);
    assert_eq!(payload["passed"], true);
}

#[test]
fn missing_input_folder_is_an_error() {
    let dir = TempDir::new().unwrap();
    let error = run_validate(&request(&dir.path().join("absent"), false)).unwrap_err();
    assert!(format!("{error:#}").contains("load sheets"));
}

#[test]
fn config_summary_lists_versions_and_codes() {
    let config = load_bundled_config().unwrap();
    let request = ConfigRequest {
        config: None,
        spu_version: DEFAULT_SPU_VERSION.to_string(),
        show: ConfigSections::default(),
    };

    let text = describe_config(&config, &request);
    assert!(text.contains("Config version: V1.70.26"));
    assert!(text.contains("MCC: 452"));
    assert!(text.contains("MNC: 04"));
    assert!(text.contains("Available SPU versions: V1.70.26"));
    assert!(text.contains("--show-rru-types"));
    assert!(!text.contains("not found"));
}

#[test]
fn config_summary_reports_unknown_version() {
    let config = load_bundled_config().unwrap();
    let request = ConfigRequest {
        config: None,
        spu_version: "V9.9".to_string(),
        show: ConfigSections::default(),
    };
    assert!(describe_config(&config, &request).contains("SPU version V9.9 not found"));
}

#[test]
fn config_sections_render_selected_tables() {
    let config = load_bundled_config().unwrap();
    let request = ConfigRequest {
        config: None,
        spu_version: DEFAULT_SPU_VERSION.to_string(),
        show: ConfigSections {
            earfcn: true,
            mme: true,
            ..ConfigSections::default()
        },
    };

    let text = describe_config(&config, &request);
    assert!(text.contains("EARFCN mappings - V1.70.26"));
    assert!(text.contains("1842.5"));
    assert!(text.contains("MME configurations"));
    assert!(text.contains("10.10.1.1, 10.10.1.2"));
    assert!(!text.contains("AMF configurations"));
    assert!(!text.contains("Baseband configurations"));

    let first = text.find("2120").unwrap();
    let last = text.find("881.5").unwrap();
    assert!(first < last, "EARFCN rows should be in numeric order");
}

#[test]
fn sheets_table_lists_every_sheet() {
    let rendered = sheets_table().to_string();
    for sheet in SheetName::all() {
        assert!(rendered.contains(sheet.as_str()), "{sheet} missing");
    }
    assert!(rendered.contains("Required"));
    assert!(rendered.contains("Optional"));
}
