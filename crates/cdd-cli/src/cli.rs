//! CLI argument definitions for the CDD validator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use cdd_standards::DEFAULT_SPU_VERSION;

#[derive(Parser)]
#[command(
    name = "cdd-validator",
    version,
    about = "Validate Cell Design Documents against the reference config",
    long_about = "Validate Cell Design Documents (CDD) before site configuration.\n\n\
                  Reads one CSV file per workbook sheet, checks required sheets and\n\
                  columns, field formats and ranges, NE_Name references and lookups\n\
                  into the SPU mapping tables of the reference config."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a CDD folder containing one CSV file per sheet.
    Validate(ValidateArgs),

    /// Show the reference configuration.
    Config(ConfigArgs),

    /// List known CDD sheets and their required columns.
    Sheets,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Folder with the exported sheets (`IP.csv`, `Radio 4G.csv`, ...).
    #[arg(value_name = "CDD_FOLDER")]
    pub input_dir: PathBuf,

    /// Reference config file (default: $CDD_CONFIG, else ./config.json).
    #[arg(long = "config", short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// SPU configuration version used for lookups.
    #[arg(long = "spu-version", default_value = DEFAULT_SPU_VERSION)]
    pub spu_version: String,

    /// Treat warnings as failures.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Write a JSON validation report into this directory.
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Reference config file (default: $CDD_CONFIG, else ./config.json).
    #[arg(long = "config", short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// SPU configuration version to show.
    #[arg(long = "spu-version", default_value = DEFAULT_SPU_VERSION)]
    pub spu_version: String,

    /// Show RRU types and their hwWorkScence mappings.
    #[arg(long = "show-rru-types")]
    pub show_rru_types: bool,

    /// Show EARFCN to frequency and band mappings.
    #[arg(long = "show-earfcn")]
    pub show_earfcn: bool,

    /// Show MME endpoints.
    #[arg(long = "show-mme")]
    pub show_mme: bool,

    /// Show AMF endpoints.
    #[arg(long = "show-amf")]
    pub show_amf: bool,

    /// Show baseband presets.
    #[arg(long = "show-baseband")]
    pub show_baseband: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
