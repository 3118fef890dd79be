//! CLI library components for the CDD validator.

pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
