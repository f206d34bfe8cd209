//! CLI argument definitions for the member loader.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use member_model::{DEFAULT_MONGODB_URL, MONGODB_URL_ENV};

#[derive(Parser)]
#[command(
    name = "member-etl",
    version,
    about = "Load pipe-delimited member files into a document store",
    long_about = "Cleanse and enrich pipe-delimited member files and load them into MongoDB.\n\n\
                  Each file is read, every record is normalized against the member schema,\n\
                  transformed, and the surviving records are written in one bulk insert."
)]
pub struct Cli {
    /// Member data files to load, processed in order.
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Where transformed records are written.
    #[arg(long = "sink", value_enum, default_value = "mongo")]
    pub sink: SinkArg,

    /// Output file for the jsonl sink.
    #[arg(long = "output", value_name = "PATH", required_if_eq("sink", "jsonl"))]
    pub output: Option<PathBuf>,

    /// MongoDB connection string.
    #[arg(
        long = "mongodb-url",
        value_name = "URL",
        env = MONGODB_URL_ENV,
        default_value = DEFAULT_MONGODB_URL
    )]
    pub mongodb_url: String,

    /// Field delimiter of the input files.
    #[arg(long = "delimiter", value_name = "CHAR", default_value_t = '|')]
    pub delimiter: char,

    /// Quote character of the input files.
    #[arg(long = "quote", value_name = "CHAR", default_value_t = '"')]
    pub quote: char,

    /// Date ages are computed against.
    #[arg(long = "reference-date", value_name = "YYYY-MM-DD", default_value = "2024-03-01")]
    pub reference_date: NaiveDate,

    /// Transform and report without writing to the sink.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI sink choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SinkArg {
    Mongo,
    Jsonl,
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

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["member-etl", "members.csv"]).unwrap();
        assert_eq!(cli.files, vec![PathBuf::from("members.csv")]);
        assert_eq!(cli.sink, SinkArg::Mongo);
        assert_eq!(cli.delimiter, '|');
        assert_eq!(cli.quote, '"');
        assert_eq!(
            cli.reference_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(!cli.dry_run);
    }

    #[test]
    fn jsonl_sink_requires_output() {
        assert!(Cli::try_parse_from(["member-etl", "--sink", "jsonl", "a.csv"]).is_err());
        let cli = Cli::try_parse_from([
            "member-etl",
            "--sink",
            "jsonl",
            "--output",
            "out.jsonl",
            "a.csv",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.jsonl")));
    }

    #[test]
    fn rejects_malformed_reference_date() {
        assert!(Cli::try_parse_from(["member-etl", "--reference-date", "1/3/2024"]).is_err());
    }
}
