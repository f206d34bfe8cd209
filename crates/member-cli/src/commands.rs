use anyhow::{Context, Result};
use tracing::error;

use member_cli::pipeline::{SinkTarget, process_file};
use member_cli::types::RunResult;
use member_model::{IngestOptions, PipelineConfig, SinkConfig, TransformOptions};

use crate::cli::{Cli, SinkArg};

/// Build the pipeline configuration once from CLI flags.
pub fn pipeline_config(cli: &Cli) -> Result<PipelineConfig> {
    let ingest = IngestOptions::new()
        .with_delimiter(cli.delimiter)
        .context("invalid --delimiter")?
        .with_quote(cli.quote)
        .context("invalid --quote")?;
    let transform = TransformOptions::default().with_reference_date(cli.reference_date);
    Ok(PipelineConfig::new()
        .with_ingest(ingest)
        .with_transform(transform))
}

pub fn sink_target(cli: &Cli) -> Result<SinkTarget> {
    if cli.dry_run {
        return Ok(SinkTarget::DryRun);
    }
    match cli.sink {
        SinkArg::Mongo => Ok(SinkTarget::Mongo(SinkConfig::new(cli.mongodb_url.clone()))),
        SinkArg::Jsonl => cli
            .output
            .clone()
            .map(SinkTarget::JsonLines)
            .context("--output is required with --sink jsonl"),
    }
}

/// Process every file in order, stopping at the first fatal error.
pub fn run_files(cli: &Cli) -> Result<RunResult> {
    let config = pipeline_config(cli)?;
    let target = sink_target(cli)?;
    let mut result = RunResult::default();

    for path in &cli.files {
        match process_file(path, &config, &target) {
            Ok(summary) => result.files.push(summary),
            Err(err) => {
                let message = format!("{err:#}");
                error!(path = %path.display(), error = %message, "stopping after failed file");
                result.errors.push(format!("{}: {message}", path.display()));
                result.has_errors = true;
                break;
            }
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("member-etl").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn pipeline_config_uses_flags() {
        let cli = parse(&["--delimiter", ";", "--reference-date", "2020-01-31", "a.csv"]);
        let config = pipeline_config(&cli).unwrap();
        assert_eq!(config.ingest.delimiter, b';');
        assert_eq!(
            config.transform.reference_date,
            chrono::NaiveDate::from_ymd_opt(2020, 1, 31).unwrap()
        );
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        let cli = parse(&["--delimiter", "¦", "a.csv"]);
        assert!(pipeline_config(&cli).is_err());
    }

    #[test]
    fn dry_run_wins_over_sink() {
        let cli = parse(&["--dry-run", "--sink", "jsonl", "--output", "o.jsonl", "a.csv"]);
        assert!(matches!(sink_target(&cli).unwrap(), SinkTarget::DryRun));
    }

    #[test]
    fn jsonl_target_uses_output() {
        let cli = parse(&["--sink", "jsonl", "--output", "o.jsonl", "a.csv"]);
        match sink_target(&cli).unwrap() {
            SinkTarget::JsonLines(path) => assert_eq!(path, PathBuf::from("o.jsonl")),
            other => panic!("unexpected target {other:?}"),
        }
    }

    #[test]
    fn stops_at_first_failed_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("missing.csv");
        let present = dir.path().join("present.csv");
        std::fs::write(&present, "").unwrap();
        let cli = parse(&[
            "--dry-run",
            missing.to_str().unwrap(),
            present.to_str().unwrap(),
        ]);
        let result = run_files(&cli).unwrap();
        assert!(result.has_errors);
        assert_eq!(result.errors.len(), 1);
        assert!(result.files.is_empty());
    }
}
