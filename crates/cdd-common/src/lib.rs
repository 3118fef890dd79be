//! Shared utilities for the CDD validator crates.
//!
//! Sheet cells arrive as Polars [`AnyValue`](::polars::prelude::AnyValue)s whose
//! dtype depends on what the reader inferred for the column. The helpers here
//! turn them into text or numbers at the point of use so the rule code never
//! has to care whether a PCI column was read as `Int64` or as `String`.

pub mod polars;

pub use crate::polars::{any_is_missing, any_to_f64, any_to_string, format_numeric, parse_f64};
