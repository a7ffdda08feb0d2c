//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "textfmt",
    version,
    about = "Normalize, parse and compare scraped page text",
    long_about = "Normalize, parse and compare text extracted from web pages.\n\n\
                  Parses prices written in US (1,234.56) or European (1.234,56) style,\n\
                  cleans whitespace and HTML entities, and converts labels to identifiers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Parse prices written in either US or European style.
    Price(PriceArgs),

    /// Format numbers European style (1.234,56).
    Euro(EuroArgs),

    /// Collapse whitespace, optionally dropping soft hyphens and entities.
    Normalize(NormalizeArgs),

    /// Convert a label to camelCase or PascalCase.
    Case(CaseArgs),

    /// List the URLs found in a text.
    Urls(TextArg),

    /// Decode HTML entities.
    Decode(TextArg),

    /// Compare an expected text with an actual one (exit code 1 on mismatch).
    Compare(CompareArgs),

    /// Pick one of the given items at random.
    Pick(PickArgs),

    /// Pick distinct 1-based indexes at random.
    Indexes(IndexesArgs),
}

#[derive(Parser)]
pub struct PriceArgs {
    /// Price texts to parse, e.g. "€ 1.234,56".
    #[arg(value_name = "TEXT", required = true)]
    pub inputs: Vec<String>,

    /// Show the cleaned text and the rule that classified it.
    #[arg(long = "explain")]
    pub explain: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct EuroArgs {
    /// Numbers to format.
    #[arg(value_name = "NUMBER", required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Also remove soft hyphens (U+00AD).
    #[arg(long = "soft-hyphens")]
    pub soft_hyphens: bool,

    /// Decode HTML entities before normalizing.
    #[arg(long = "decode")]
    pub decode: bool,
}

#[derive(Parser)]
pub struct CaseArgs {
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Target case style.
    #[arg(long = "style", value_enum, default_value = "camel")]
    pub style: CaseStyleArg,
}

#[derive(Parser)]
pub struct TextArg {
    #[arg(value_name = "TEXT")]
    pub text: String,
}

#[derive(Parser)]
pub struct CompareArgs {
    #[arg(value_name = "EXPECTED")]
    pub expected: String,

    #[arg(value_name = "ACTUAL")]
    pub actual: String,

    /// Normalize whitespace and soft hyphens on both sides first.
    #[arg(long = "normalized")]
    pub normalized: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "plain")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct PickArgs {
    /// Items to choose from.
    #[arg(value_name = "ITEM")]
    pub items: Vec<String>,

    /// Seed for reproducible picks.
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

#[derive(Parser)]
pub struct IndexesArgs {
    /// Size of the range to pick from (1..=LENGTH).
    #[arg(long = "length")]
    pub length: usize,

    /// How many indexes to pick (clamped to LENGTH).
    #[arg(long = "count", default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible picks.
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Plain,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CaseStyleArg {
    Camel,
    Pascal,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
