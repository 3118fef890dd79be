//! Cell Design Document validator CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use cdd_cli::commands::{run_config, run_sheets, run_validate};
use cdd_cli::logging::{LogConfig, LogFormat, init_logging};
use cdd_cli::summary::print_summary;
use cdd_cli::types::{ConfigRequest, ConfigSections, ValidateRequest};

mod cli;

use crate::cli::{Cli, Command, ConfigArgs, LogFormatArg, LogLevelArg, ValidateArgs};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Validate(args) => match run_validate(&validate_request(args)) {
            Ok(result) => {
                print_summary(&result);
                result.exit_code()
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Config(args) => match run_config(&config_request(args)) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Sheets => match run_sheets() {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn validate_request(args: ValidateArgs) -> ValidateRequest {
    ValidateRequest {
        input_dir: args.input_dir,
        config: args.config,
        spu_version: args.spu_version,
        strict: args.strict,
        report_dir: args.report_dir,
    }
}

fn config_request(args: ConfigArgs) -> ConfigRequest {
    ConfigRequest {
        config: args.config,
        spu_version: args.spu_version,
        show: ConfigSections {
            rru_types: args.show_rru_types,
            earfcn: args.show_earfcn,
            mme: args.show_mme,
            amf: args.show_amf,
            baseband: args.show_baseband,
        },
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
