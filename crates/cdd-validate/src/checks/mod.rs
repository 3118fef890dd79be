//! Rule groups, one module per concern.

pub(crate) mod columns;
pub(crate) mod cross_sheet;
pub(crate) mod fields;
pub(crate) mod ip;
pub(crate) mod presence;
pub(crate) mod radio_4g;
pub(crate) mod radio_5g;
pub(crate) mod structure;

use std::collections::BTreeSet;

use cdd_model::{ReferenceConfig, SpuVersion};

/// Read-only inputs shared by the rule groups of one pass.
pub(crate) struct CheckContext<'a> {
    pub config: &'a ReferenceConfig,
    /// Mapping tables of the requested version, empty when it is absent.
    pub spu: &'a SpuVersion,
    pub spu_version: &'a str,
    /// IP sheet element names; `None` disables the cross-sheet check.
    pub ip_names: Option<BTreeSet<String>>,
}
