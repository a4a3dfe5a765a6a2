//! CLI argument definitions for the ETD CrossRef converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use etd_model::DoiStrategyKind;

#[derive(Parser)]
#[command(
    name = "etd-crossref",
    version,
    about = "ETD CrossRef converter - Mint DOIs for dissertation exports",
    long_about = "Convert a university ETD CSV export into CrossRef DOI-registration \
                  batch XML plus a CSV audit report.\n\n\
                  Every record lacking a DOI is assigned one under the configured \
                  prefix; records already carrying a DOI URL are skipped, so a run \
                  over a partially annotated export registers nothing twice."
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
    /// Convert an export: validate rows, mint DOIs, write batch XML.
    Convert(ConvertArgs),

    /// List the available DOI assignment strategies.
    Strategies,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the ETD CSV export.
    #[arg(value_name = "EXPORT_CSV")]
    pub input: PathBuf,

    /// Batch XML output path (additional batches get -2, -3, ... suffixes).
    #[arg(long = "out", value_name = "PATH", default_value = "crossref.xml")]
    pub output: PathBuf,

    /// Audit report CSV output path.
    #[arg(long = "report", value_name = "PATH", default_value = "report.csv")]
    pub report: PathBuf,

    /// DOI prefix issued by the registration agency.
    #[arg(long = "prefix", value_name = "PREFIX")]
    pub prefix: String,

    /// Name under which the depositing organization is registered with
    /// CrossRef.
    #[arg(long = "depositor", value_name = "NAME")]
    pub depositor: String,

    /// Address batch success and error messages are sent to. Prefer a role
    /// address (doi@...) over a personal one.
    #[arg(long = "email", value_name = "ADDRESS")]
    pub email: String,

    /// Organization that owns the information being registered.
    #[arg(long = "registrant", value_name = "NAME")]
    pub registrant: String,

    /// DOI assignment strategy.
    #[arg(long = "strategy", value_enum, default_value = "random")]
    pub strategy: StrategyArg,

    /// Nanoseconds since the epoch used for batch ids, timestamps, and DOI
    /// entropy. Pin it to reproduce a run exactly.
    #[arg(long = "timestamp", value_name = "NANOS")]
    pub timestamp: Option<i64>,

    /// Offset added to line numbers (sequential strategy only).
    #[arg(long = "start-seq", value_name = "N", default_value_t = 0)]
    pub start_seq: u64,

    /// Records per batch; 0 keeps everything in one batch.
    #[arg(long = "batch-size", value_name = "N", default_value_t = 0)]
    pub batch_size: usize,

    /// Lowest approval year accepted.
    #[arg(long = "min-year", value_name = "YEAR", default_value_t = 1930)]
    pub min_year: i32,

    /// Highest approval year accepted.
    #[arg(long = "max-year", value_name = "YEAR", default_value_t = 2999)]
    pub max_year: i32,

    /// Base URL the source UUID is appended to.
    #[arg(
        long = "base-url",
        value_name = "URL",
        default_value = etd_model::DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// Institution name placed in every dissertation element.
    #[arg(
        long = "institution",
        value_name = "NAME",
        default_value = etd_model::DEFAULT_INSTITUTION_NAME
    )]
    pub institution: String,

    /// Institution place placed in every dissertation element.
    #[arg(
        long = "institution-place",
        value_name = "PLACE",
        default_value = etd_model::DEFAULT_INSTITUTION_PLACE
    )]
    pub institution_place: String,

    /// Accept every confirmation prompt (single-name records) without asking.
    #[arg(long = "assume-yes")]
    pub assume_yes: bool,

    /// Write the run summary as JSON to this path.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

/// CLI DOI strategy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    Random,
    Sequential,
    Derived,
}

impl StrategyArg {
    pub fn kind(self) -> DoiStrategyKind {
        match self {
            StrategyArg::Random => DoiStrategyKind::Random,
            StrategyArg::Sequential => DoiStrategyKind::Sequential,
            StrategyArg::Derived => DoiStrategyKind::Derived,
        }
    }
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
