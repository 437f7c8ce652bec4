//! CLI argument definitions for the CONCAT generator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mifir-concat",
    version,
    about = "MiFIR CONCAT generator - derive national client identifiers",
    long_about = "Derive MiFIR CONCAT client identifiers from nationality, birth date and name.\n\n\
                  Records are read as COUNTRY|BIRTHDATE|FIRSTNAME|LASTNAME, one per line.\n\
                  Each record produces one 20-character CONCAT, or \"***FAIL***\"."
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

    /// Allow client names and birth dates to appear in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Include timestamps in pretty and compact log output.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Read pipe-delimited records and write one CONCAT per record.
    Parse(ParseArgs),

    /// Compute the CONCAT for a single client.
    Compute(ClientArgs),

    /// Show every normalization step behind a client's CONCAT.
    Explain(ClientArgs),

    /// List the accepted ISO 3166-1 alpha-2 country codes.
    Countries,
}

#[derive(Args)]
pub struct ParseArgs {
    /// Read records from a file instead of stdin.
    #[arg(long = "input", short = 'i', value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Write results to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format for results.
    ///
    /// `plain` writes the CONCAT or "***FAIL***" per record. `json` writes one
    /// object per record, including the failure reason.
    #[arg(long = "format", value_enum, default_value = "plain")]
    pub format: OutputFormatArg,

    /// Print a summary table of processed records to stderr.
    #[arg(long = "summary")]
    pub summary: bool,
}

#[derive(Args)]
pub struct ClientArgs {
    /// ISO 3166-1 alpha-2 nationality code, e.g. NO.
    #[arg(value_name = "COUNTRY")]
    pub country: String,

    /// Birth date as YYYYMMDD.
    #[arg(value_name = "BIRTHDATE")]
    pub birth_date: String,

    /// First name(s); quote names containing spaces.
    #[arg(value_name = "FIRSTNAME")]
    pub first_name: String,

    /// Last name(s); quote names containing spaces.
    #[arg(value_name = "LASTNAME")]
    pub last_name: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Plain,
    Json,
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
