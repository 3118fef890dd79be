//! Reference configuration: core-network registries and per-version SPU
//! mapping tables.
//!
//! Fixed-shape sections are typed. The SPU block is keyed by version string
//! and its mapping tables by channel number / hardware name, so those layers
//! stay as maps. Every top-level section is optional so that a config missing
//! `amf` still loads and the structural rules can report it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Registry of core-network endpoints: name -> ordered endpoint addresses.
pub type EndpointRegistry = BTreeMap<String, Vec<String>>;

/// MCC/MNC values appear both quoted and bare in real configs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeValue {
    Text(String),
    Number(i64),
}

impl fmt::Display for CodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcc: Option<CodeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnc: Option<CodeValue>,
    /// Province identifiers; the shape belongs to the artifact generator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mme: Option<EndpointRegistry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amf: Option<EndpointRegistry>,
    #[serde(rename = "SPU", default, skip_serializing_if = "Option::is_none")]
    pub spu: Option<BTreeMap<String, SpuVersion>>,
}

/// Mapping tables for one SPU configuration version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpuVersion {
    /// RRU hardware name -> technology -> work-scene value.
    #[serde(rename = "hwWorkScence_mapping")]
    pub hardware_types: BTreeMap<String, BTreeMap<String, Value>>,
    /// EARFCN -> downlink frequency (MHz), number or numeric text.
    #[serde(rename = "earfcn_mapping")]
    pub frequencies: BTreeMap<String, Value>,
    /// EARFCN -> band label.
    #[serde(rename = "bandIndicator_mapping")]
    pub band_indicators: BTreeMap<String, Value>,
    /// Bandwidth in MHz (e.g. "20.0") -> bandwidth code.
    #[serde(rename = "bandwidth_mapping")]
    pub bandwidths: BTreeMap<String, Value>,
    /// Baseband preset name -> preset body.
    #[serde(rename = "baseband_configs")]
    pub baseband_presets: BTreeMap<String, Value>,
}

/// Required top-level config sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Mcc,
    Mnc,
    Province,
    Mme,
    Amf,
    Spu,
}

impl ConfigSection {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Mcc,
            Self::Mnc,
            Self::Province,
            Self::Mme,
            Self::Amf,
            Self::Spu,
        ]
    }

    /// JSON key of the section.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Mcc => "mcc",
            Self::Mnc => "mnc",
            Self::Province => "province",
            Self::Mme => "mme",
            Self::Amf => "amf",
            Self::Spu => "SPU",
        }
    }
}

/// Core-network registry referenced by name from the IP sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreRegistry {
    Mme,
    Amf,
}

impl CoreRegistry {
    /// Label used in messages and as the IP sheet column name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Mme => "MME",
            Self::Amf => "AMF",
        }
    }
}

impl ReferenceConfig {
    pub fn has_section(&self, section: ConfigSection) -> bool {
        match section {
            ConfigSection::Mcc => self.mcc.is_some(),
            ConfigSection::Mnc => self.mnc.is_some(),
            ConfigSection::Province => self.province.is_some(),
            ConfigSection::Mme => self.mme.is_some(),
            ConfigSection::Amf => self.amf.is_some(),
            ConfigSection::Spu => self.spu.is_some(),
        }
    }

    pub fn missing_sections(&self) -> Vec<ConfigSection> {
        ConfigSection::all()
            .iter()
            .copied()
            .filter(|section| !self.has_section(*section))
            .collect()
    }

    pub fn registry(&self, registry: CoreRegistry) -> Option<&EndpointRegistry> {
        match registry {
            CoreRegistry::Mme => self.mme.as_ref(),
            CoreRegistry::Amf => self.amf.as_ref(),
        }
    }

    /// Whether `name` is registered; an absent registry contains nothing.
    pub fn is_registered(&self, registry: CoreRegistry, name: &str) -> bool {
        self.registry(registry)
            .is_some_and(|entries| entries.contains_key(name))
    }

    pub fn spu_version(&self, version: &str) -> Option<&SpuVersion> {
        self.spu.as_ref().and_then(|versions| versions.get(version))
    }

    /// Available SPU versions in key order.
    pub fn spu_versions(&self) -> Vec<&str> {
        self.spu
            .as_ref()
            .map(|versions| versions.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// Renders a JSON scalar without quotes; other values use compact JSON.
pub fn value_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
