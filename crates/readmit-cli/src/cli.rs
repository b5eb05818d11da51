//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use readmit_cli::selection::DimensionFlag;
use readmit_ingest::IngestOptions;

pub const DEFAULT_DATA_PATH: &str = "data/diabetic_data.csv";

#[derive(Parser)]
#[command(
    name = "readmit",
    version,
    about = "Diabetes care readmission analytics",
    long_about = "Filter inpatient diabetes encounters and report readmission KPIs.\n\n\
                  Computes the 30-day readmission rate, the length of stay and \
                  polypharmacy rate of readmitted encounters, their distributions, \
                  and the polypharmacy odds ratio."
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

    /// Allow patient identifiers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Headline KPIs, distributions, odds ratio and insights.
    Overview(DataArgs),

    /// Exploratory histograms and readmission rate by age group.
    Eda(DataArgs),

    /// Search the filtered rows and look up readmitted patients.
    Explore(ExploreArgs),

    /// Write the filtered data, KPI summary workbook and KPI report.
    Export(ExportArgs),

    /// List the values available for each filter.
    Filters(SourceArgs),
}

#[derive(Args)]
pub struct SourceArgs {
    /// Encounter dataset (CSV).
    #[arg(long = "data", value_name = "CSV", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Use the low memory mode of the large-file reader.
    #[arg(long = "low-memory")]
    pub low_memory: bool,
}

impl SourceArgs {
    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions::default().with_low_memory(self.low_memory)
    }
}

/// Filter flags. Omitting a flag selects every value of that dimension.
#[derive(Args)]
pub struct FilterArgs {
    /// Age group to keep, e.g. "[70-80)" (repeatable).
    #[arg(long = "age", value_name = "GROUP")]
    pub age: Vec<String>,

    /// Select no age group (every row is excluded).
    #[arg(long = "no-age", conflicts_with = "age")]
    pub no_age: bool,

    /// Gender to keep (repeatable).
    #[arg(long = "gender", value_name = "GENDER")]
    pub gender: Vec<String>,

    /// Select no gender (every row is excluded).
    #[arg(long = "no-gender", conflicts_with = "gender")]
    pub no_gender: bool,

    /// Admission type id or label to keep, e.g. 1 or Emergency (repeatable).
    #[arg(long = "admission-type", value_name = "TYPE")]
    pub admission_type: Vec<String>,

    /// Select no admission type (every row is excluded).
    #[arg(long = "no-admission-type", conflicts_with = "admission_type")]
    pub no_admission_type: bool,
}

impl FilterArgs {
    pub fn age(&self) -> DimensionFlag<'_> {
        DimensionFlag {
            values: &self.age,
            none: self.no_age,
        }
    }

    pub fn gender(&self) -> DimensionFlag<'_> {
        DimensionFlag {
            values: &self.gender,
            none: self.no_gender,
        }
    }

    pub fn admission_type(&self) -> DimensionFlag<'_> {
        DimensionFlag {
            values: &self.admission_type,
            none: self.no_admission_type,
        }
    }
}

#[derive(Args)]
pub struct DataArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub filters: FilterArgs,
}

#[derive(Args)]
pub struct ExploreArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Case-insensitive text to find in any column.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Show the readmitted encounters of one patient.
    #[arg(long = "patient", value_name = "NBR")]
    pub patient: Option<String>,

    /// Maximum rows to print.
    #[arg(long = "limit", value_name = "N", default_value_t = 20)]
    pub limit: usize,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Directory that receives the export files.
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Only export filtered rows containing this text (case-insensitive).
    /// The KPI summary and report still cover every filtered row.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,
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
