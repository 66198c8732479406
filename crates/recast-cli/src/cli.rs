//! CLI argument definitions for recast.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use recast_model::TextEncoding;
use recast_transform::DEFAULT_YEAR_PATTERN;

use recast_cli::pipeline::{
    DEFAULT_CSV_INPUT, DEFAULT_CSV_OUTPUT, DEFAULT_TEXT_INPUT, DEFAULT_TEXT_OUTPUT,
};

#[derive(Parser)]
#[command(
    name = "recast",
    version,
    about = "Rule-driven text rewriting for CSV and plain-text files",
    long_about = "Rewrite files with an ordered rule table.\n\n\
                  `csv` applies literal substitutions to every cell of a CSV file.\n\
                  `years` shifts every four-digit year in a text file by a fixed offset."
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
    /// Apply literal substitutions to every cell of a CSV file.
    Csv(CsvArgs),

    /// Shift four-digit years in a text file.
    Years(YearsArgs),

    /// Print the literal rule table in application order.
    Rules(RulesArgs),
}

#[derive(Args)]
pub struct CsvArgs {
    /// CSV file to read.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CSV_INPUT)]
    pub input: PathBuf,

    /// CSV file to write (created or overwritten).
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CSV_OUTPUT)]
    pub output: PathBuf,

    /// Two-column CSV of `match,replacement` rules (default: built-in table).
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Encoding of the `--rules` file.
    #[arg(long = "rules-encoding", value_name = "LABEL", default_value = "utf-8")]
    pub rules_encoding: TextEncoding,

    /// Encoding used to read and write the CSV file.
    #[arg(long, value_name = "LABEL", default_value = "utf-8")]
    pub encoding: TextEncoding,

    /// End records with `\n` instead of `\r\n`.
    #[arg(long)]
    pub lf: bool,

    /// Rewrite and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct YearsArgs {
    /// Text file to read.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_TEXT_INPUT)]
    pub input: PathBuf,

    /// Text file to write (created or overwritten).
    #[arg(long, value_name = "FILE", default_value = DEFAULT_TEXT_OUTPUT)]
    pub output: PathBuf,

    /// Regular expression selecting the numerals to shift.
    #[arg(long, value_name = "REGEX", default_value = DEFAULT_YEAR_PATTERN)]
    pub pattern: String,

    /// Amount added to each matched number.
    #[arg(long, value_name = "N", default_value_t = 4, allow_negative_numbers = true)]
    pub offset: i64,

    /// Allow a shifted number to gain or lose digits instead of failing.
    #[arg(long = "allow-width-change")]
    pub allow_width_change: bool,

    /// Encoding used to read and write the text file.
    #[arg(long, value_name = "LABEL", default_value = "latin-1")]
    pub encoding: TextEncoding,

    /// Rewrite and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct RulesArgs {
    /// Rule file to list (default: built-in table).
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Encoding of the rule file.
    #[arg(long, value_name = "LABEL", default_value = "utf-8")]
    pub encoding: TextEncoding,
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
