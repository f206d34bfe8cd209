//! The sink contract and the single bulk-load call made per batch.

use member_model::Record;

use crate::error::Result;

/// Destination for a batch of transformed records.
///
/// Inserts are plain appends: there is no unique key, so loading the same
/// file twice stores every record twice. Documents carry their fields in
/// sorted key order, not in source column order.
pub trait RecordSink {
    /// Human-readable target, used in log lines.
    fn target(&self) -> String;

    /// Insert all records in one bulk call and return how many were stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the write itself fails.
    fn insert_many(&mut self, records: &[Record]) -> Result<usize>;
}

/// Outcome of loading one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub submitted: usize,
    pub inserted: usize,
}

impl LoadReport {
    /// True when the sink stored fewer records than were submitted.
    pub fn is_partial(&self) -> bool {
        self.inserted < self.submitted
    }
}

/// Write a batch to the sink with a single bulk insert.
///
/// An undercount is logged as a warning and otherwise left alone: no retry
/// and no rollback. Empty batches are not sent.
///
/// # Errors
///
/// Propagates any error returned by the sink.
pub fn load_records(sink: &mut dyn RecordSink, records: &[Record]) -> Result<LoadReport> {
    let submitted = records.len();
    if submitted == 0 {
        tracing::info!(target_sink = %sink.target(), "no records to insert");
        return Ok(LoadReport::default());
    }

    let inserted = sink.insert_many(records)?;
    let report = LoadReport {
        submitted,
        inserted,
    };
    if report.is_partial() {
        tracing::warn!(
            target_sink = %sink.target(),
            inserted,
            submitted,
            "sink inserted only part of the batch"
        );
    } else {
        tracing::info!(target_sink = %sink.target(), inserted, "inserted all records");
    }
    Ok(report)
}
