//! CLI argument definitions for the range engine.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `analyze` | Project SD ladders and score one range |
//! | `batch` | Analyze a JSON array of ranges |
//! | `advice` | Pair notes for a method |
//! | `policy` | Print the active pip policy table |
//!
//! # Examples
//!
//! ```bash
//! range-engine analyze --high 1.1650 --low 1.1620 --pair EURUSD --method cbdr --pretty
//! range-engine advice --pair GBPJPY --method asian
//! range-engine --config range-engine.yaml policy
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Range & SD projection engine for BTMM/ICT forex sessions.
#[derive(Debug, Parser)]
#[command(
    name = "range-engine",
    author,
    version,
    about = "Project standard-deviation levels from a measured session range"
)]
pub struct Cli {
    /// YAML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level or filter directive; overrides the configured level.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Project SD ladders and score one range.
    Analyze(AnalyzeArgs),
    /// Analyze every request in a JSON array file.
    Batch(BatchArgs),
    /// Pair notes for a method.
    Advice(AdviceArgs),
    /// Print the active pip policy table.
    Policy,
}

/// Arguments for `analyze`.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Range high.
    #[arg(long, allow_negative_numbers = true)]
    pub high: f64,

    /// Range low.
    #[arg(long, allow_negative_numbers = true)]
    pub low: f64,

    /// Pair symbol, e.g. EURUSD or EUR/USD.
    #[arg(long)]
    pub pair: String,

    /// Method tag: cbdr, asian or flout.
    #[arg(long)]
    pub method: String,

    /// Primary ladder anchor; defaults to the method's own.
    #[arg(long, value_enum)]
    pub anchor: Option<AnchorArg>,
}

/// Arguments for `batch`.
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// JSON file holding an array of analyze requests.
    #[arg(long)]
    pub input: PathBuf,
}

/// Arguments for `advice`.
#[derive(Debug, Args)]
pub struct AdviceArgs {
    /// Pair symbol.
    #[arg(long)]
    pub pair: String,

    /// Method tag.
    #[arg(long)]
    pub method: String,
}

/// Ladder anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AnchorArg {
    /// From the high and the low.
    Extremity,
    /// From the midpoint.
    Equilibrium,
}

impl AnchorArg {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Extremity => "extremity",
            Self::Equilibrium => "equilibrium",
        }
    }
}
