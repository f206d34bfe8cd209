//! Per-file pipeline: read, normalize, transform, load.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use member_ingest::read_raw_records;
use member_model::{PipelineConfig, SinkConfig};
use member_sink::{JsonLinesSink, RecordSink, load_records};
use member_transform::{BatchOutput, transform_batch};

use crate::types::FileSummary;

/// Where a run writes its records.
#[derive(Debug, Clone)]
pub enum SinkTarget {
    Mongo(SinkConfig),
    JsonLines(PathBuf),
    /// Transform only, nothing is written.
    DryRun,
}

/// Read and transform one file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn transform_file(path: &Path, config: &PipelineConfig) -> Result<BatchOutput> {
    let raws = read_raw_records(path, &config.ingest)
        .with_context(|| format!("read {}", path.display()))?;
    Ok(transform_batch(&raws, config))
}

/// Run the full pipeline for one file against `target`.
///
/// The sink is opened for this file only and closed before returning.
///
/// # Errors
///
/// Returns an error when the file cannot be read or the sink cannot be
/// opened or written.
pub fn process_file(
    path: &Path,
    config: &PipelineConfig,
    target: &SinkTarget,
) -> Result<FileSummary> {
    let span = info_span!("file", path = %path.display());
    let _guard = span.enter();
    info!("processing file");

    let batch = transform_file(path, config)?;
    let mut summary = FileSummary {
        path: path.to_path_buf(),
        read: batch.read,
        rejected: batch.rejected,
        emptied: batch.emptied,
        transformed: batch.records.len(),
        inserted: None,
    };

    if let Some(mut sink) = open_sink(target)? {
        let report = load_records(sink.as_mut(), &batch.records)
            .with_context(|| format!("load records from {}", path.display()))?;
        summary.inserted = Some(report.inserted);
    } else {
        info!(transformed = summary.transformed, "dry run, skipping sink");
    }

    info!("finished processing file");
    Ok(summary)
}

fn open_sink(target: &SinkTarget) -> Result<Option<Box<dyn RecordSink>>> {
    match target {
        SinkTarget::DryRun => Ok(None),
        SinkTarget::JsonLines(path) => {
            let sink = JsonLinesSink::open(path)
                .with_context(|| format!("open output {}", path.display()))?;
            Ok(Some(Box::new(sink)))
        }
        SinkTarget::Mongo(config) => open_mongo(config).map(Some),
    }
}

#[cfg(feature = "mongo")]
fn open_mongo(config: &SinkConfig) -> Result<Box<dyn RecordSink>> {
    let sink = member_sink::MongoSink::connect(config)
        .with_context(|| format!("connect to {}", config.url))?;
    Ok(Box::new(sink))
}

#[cfg(not(feature = "mongo"))]
fn open_mongo(_config: &SinkConfig) -> Result<Box<dyn RecordSink>> {
    anyhow::bail!(
        "built without MongoDB support; use --sink jsonl or enable the `mongo` feature"
    )
}
