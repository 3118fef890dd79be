use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info_span;

use cdd_ingest::load_table_set;
use cdd_model::{CoreRegistry, ReferenceConfig, SheetName, value_label};
use cdd_standards::{load_reference_config, resolve_config_path};
use cdd_validate::{
    ConfigSource, ValidationOptions, Validator, requirement, schema_for,
    write_validation_report_json,
};

use crate::summary::{apply_table_style, header_cell};
use crate::types::{ConfigRequest, SheetSummary, ValidateRequest, ValidateResult};

pub fn run_validate(request: &ValidateRequest) -> Result<ValidateResult> {
    let source = derive_source_name(&request.input_dir);
    let span = info_span!("cdd", source = %source);
    let _guard = span.enter();

    let tables = load_table_set(&request.input_dir)
        .with_context(|| format!("load sheets from {}", request.input_dir.display()))?;
    let config_path = resolve_config_path(request.config.as_deref());

    let outcome = Validator::new(&tables, ConfigSource::Path(&config_path))
        .with_options(ValidationOptions {
            spu_version: request.spu_version.clone(),
        })
        .validate();

    let report_path = match &request.report_dir {
        Some(dir) => Some(
            write_validation_report_json(dir, &source, &outcome)
                .context("write validation report")?,
        ),
        None => None,
    };

    let sheets = tables
        .iter()
        .map(|sheet| SheetSummary {
            sheet: sheet.name(),
            rows: sheet.height(),
            columns: sheet.column_names().len(),
        })
        .collect();

    Ok(ValidateResult {
        source,
        input_dir: request.input_dir.clone(),
        config_path,
        spu_version: request.spu_version.clone(),
        sheets,
        outcome,
        report_path,
        strict: request.strict,
    })
}

pub fn run_config(request: &ConfigRequest) -> Result<()> {
    let path = resolve_config_path(request.config.as_deref());
    let config = load_reference_config(&path)
        .with_context(|| format!("read config {}", path.display()))?;
    print!("{}", describe_config(&config, request));
    Ok(())
}

pub fn run_sheets() -> Result<()> {
    println!("{}", sheets_table());
    Ok(())
}

/// Known sheets with their requirement level and required columns.
pub fn sheets_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Requirement"),
        header_cell("Description"),
        header_cell("Required columns"),
    ]);
    apply_table_style(&mut table);
    for &sheet in SheetName::all() {
        let columns = schema_for(sheet)
            .map(|schema| schema.required.join(", "))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            sheet.as_str().to_string(),
            requirement(sheet).label().to_string(),
            sheet.description().to_string(),
            columns,
        ]);
    }
    table
}

/// Renders the requested config sections, or a summary when none is selected.
pub fn describe_config(config: &ReferenceConfig, request: &ConfigRequest) -> String {
    let version = request.spu_version.as_str();
    let spu = config.spu_version(version);
    let mut out = String::new();

    if request.show.is_empty() {
        let label = |value: Option<String>| value.unwrap_or_else(|| "N/A".to_string());
        out.push_str(&format!("Config version: {version}\n"));
        out.push_str(&format!(
            "MCC: {}\n",
            label(config.mcc.as_ref().map(ToString::to_string))
        ));
        out.push_str(&format!(
            "MNC: {}\n",
            label(config.mnc.as_ref().map(ToString::to_string))
        ));
        out.push_str(&format!(
            "Available SPU versions: {}\n",
            config.spu_versions().join(", ")
        ));
        if spu.is_none() {
            out.push_str(&format!("SPU version {version} not found\n"));
        }
        out.push_str("\nUse --show-* options to see specific configurations:\n");
        out.push_str("  --show-rru-types  RRU types and hwWorkScence mappings\n");
        out.push_str("  --show-earfcn     EARFCN to frequency and band mappings\n");
        out.push_str("  --show-mme        MME endpoints\n");
        out.push_str("  --show-amf        AMF endpoints\n");
        out.push_str("  --show-baseband   Baseband presets\n");
        return out;
    }

    if request.show.rru_types {
        let mut table = titled_table(&["RRU type", "Technology", "Value"]);
        for (rru, techs) in spu.map(|s| &s.hardware_types).into_iter().flatten() {
            for (tech, value) in techs {
                table.add_row(vec![rru.clone(), tech.clone(), value_label(value)]);
            }
        }
        push_section(&mut out, &format!("RRU types (hwWorkScence mapping) - {version}"), &table);
    }

    if request.show.earfcn {
        let mut table = titled_table(&["EARFCN", "Frequency (MHz)", "Band"]);
        if let Some(spu) = spu {
            let mut channels: Vec<&String> = spu
                .frequencies
                .keys()
                .chain(spu.band_indicators.keys())
                .collect();
            channels.sort_by_key(|channel| channel_sort_key(channel));
            channels.dedup();
            for channel in channels {
                let frequency = spu
                    .frequencies
                    .get(channel)
                    .map_or_else(|| "-".to_string(), value_label);
                let band = spu
                    .band_indicators
                    .get(channel)
                    .map_or_else(|| "-".to_string(), value_label);
                table.add_row(vec![channel.clone(), frequency, band]);
            }
        }
        push_section(&mut out, &format!("EARFCN mappings - {version}"), &table);
    }

    for (enabled, registry) in [
        (request.show.mme, CoreRegistry::Mme),
        (request.show.amf, CoreRegistry::Amf),
    ] {
        if !enabled {
            continue;
        }
        let mut table = titled_table(&[registry.label(), "Endpoints"]);
        for (name, endpoints) in config.registry(registry).into_iter().flatten() {
            table.add_row(vec![name.clone(), endpoints.join(", ")]);
        }
        push_section(
            &mut out,
            &format!("{} configurations", registry.label()),
            &table,
        );
    }

    if request.show.baseband {
        let mut table = titled_table(&["Baseband preset"]);
        for name in spu.map(|s| s.baseband_presets.keys()).into_iter().flatten() {
            table.add_row(vec![name.clone()]);
        }
        push_section(&mut out, &format!("Baseband configurations - {version}"), &table);
    }

    out
}

fn titled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_header(headers.iter().map(|h| header_cell(h)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    table
}

fn push_section(out: &mut String, title: &str, table: &Table) {
    out.push_str(&format!("\n{title}:\n{table}\n"));
}

/// Numeric channels first in numeric order, then anything else by text.
fn channel_sort_key(channel: &str) -> (bool, i64, String) {
    match channel.parse::<i64>() {
        Ok(n) => (false, n, String::new()),
        Err(_) => (true, 0, channel.to_string()),
    }
}

fn derive_source_name(input_dir: &Path) -> String {
    input_dir
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| input_dir.display().to_string())
}
