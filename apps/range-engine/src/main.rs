//! Range Engine Binary
//!
//! Command-line front end for the range engine. Results are written to
//! stdout as JSON; logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin range-engine -- analyze --high 1.1650 --low 1.1620 --pair EURUSD --method cbdr
//! ```
//!
//! # Exit Codes
//!
//! - `0`: success
//! - `1`: configuration or I/O failure
//! - `2`: invalid range, pair or method
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (overrides config and `--log-level`)

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod cli;

use std::process::ExitCode;

use clap::Parser;
use range_engine::application::{AnalyzeRangeRequestDto, AnalyzeRangeUseCase};
use range_engine::config::{Config, load_config};
use range_engine::error::EngineError;
use range_engine::telemetry::{TelemetryError, init_telemetry};
use serde::Serialize;
use thiserror::Error;

use crate::cli::{AdviceArgs, AnalyzeArgs, BatchArgs, Cli, Command};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("failed to read '{path}': {source}")]
    Input {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    const fn exit_code(&self) -> u8 {
        match self {
            Self::Engine(error) => error.code().exit_code(),
            Self::Telemetry(_) | Self::Input { .. } | Self::Serialization(_) => 1,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            if let CliError::Engine(engine_error) = &error {
                if let Err(e) = emit(&engine_error.to_response(), cli.pretty) {
                    eprintln!("error: {e}");
                }
            }
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let mut config = match &cli.config {
        Some(path) => {
            load_config(Some(path.to_string_lossy().as_ref())).map_err(EngineError::from)?
        }
        None => Config::default(),
    };
    if let Some(level) = &cli.log_level {
        config.observability.logging.level.clone_from(level);
    }
    init_telemetry(&config.observability.logging)?;

    let use_case =
        AnalyzeRangeUseCase::new(config.policy_table().map_err(EngineError::from)?);

    match &cli.command {
        Command::Analyze(args) => analyze(&use_case, args, cli.pretty),
        Command::Batch(args) => batch(&use_case, args, cli.pretty),
        Command::Advice(args) => advice(&use_case, args, cli.pretty),
        Command::Policy => {
            emit(&use_case.policies(), cli.pretty)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn analyze(
    use_case: &AnalyzeRangeUseCase,
    args: &AnalyzeArgs,
    pretty: bool,
) -> Result<ExitCode, CliError> {
    let mut request =
        AnalyzeRangeRequestDto::new(args.high, args.low, args.pair.as_str(), args.method.as_str());
    if let Some(anchor) = args.anchor {
        request = request.with_anchor(anchor.as_str());
    }

    let analysis = use_case.execute(&request)?;
    emit(&analysis, pretty)?;
    Ok(ExitCode::SUCCESS)
}

/// One batch entry: either an analysis or an error body.
#[derive(Serialize)]
#[serde(untagged)]
enum BatchEntry {
    Ok(range_engine::application::RangeAnalysisDto),
    Err { error: range_engine::error::ErrorResponse },
}

fn batch(
    use_case: &AnalyzeRangeUseCase,
    args: &BatchArgs,
    pretty: bool,
) -> Result<ExitCode, CliError> {
    let contents = std::fs::read_to_string(&args.input).map_err(|e| CliError::Input {
        path: args.input.display().to_string(),
        source: e,
    })?;
    let requests: Vec<AnalyzeRangeRequestDto> = serde_json::from_str(&contents)?;

    let results = use_case.execute_batch(&requests);
    let exit = results
        .iter()
        .find_map(|r| r.as_ref().err())
        .map_or(ExitCode::SUCCESS, |e| ExitCode::from(e.code().exit_code()));

    let entries: Vec<BatchEntry> = results
        .into_iter()
        .map(|r| match r {
            Ok(analysis) => BatchEntry::Ok(analysis),
            Err(e) => BatchEntry::Err {
                error: e.to_response(),
            },
        })
        .collect();

    emit(&entries, pretty)?;
    Ok(exit)
}

fn advice(
    use_case: &AnalyzeRangeUseCase,
    args: &AdviceArgs,
    pretty: bool,
) -> Result<ExitCode, CliError> {
    let advice = use_case.advice(&args.pair, &args.method)?;
    emit(&advice, pretty)?;
    Ok(ExitCode::SUCCESS)
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<(), serde_json::Error> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
