//! Batch driver: normalize then transform every raw record.

use member_ingest::normalize_record;
use member_model::{PipelineConfig, RawRecord, Record};

use crate::record::transform_record;

/// Records that survived a batch, with counts of what was dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutput {
    /// Transformed records in input order.
    pub records: Vec<Record>,
    /// Number of raw records seen.
    pub read: usize,
    /// Raw records rejected by the normalizer.
    pub rejected: usize,
    /// Records that were empty after transformation.
    pub emptied: usize,
}

/// Normalize and transform a batch of raw records.
///
/// Records that fail normalization or end up empty are left out; the
/// relative order of the remaining records is preserved.
pub fn transform_batch(raws: &[RawRecord], config: &PipelineConfig) -> BatchOutput {
    let mut output = BatchOutput {
        read: raws.len(),
        ..BatchOutput::default()
    };

    for raw in raws {
        let Some(mut record) = normalize_record(raw, &config.schema) else {
            output.rejected += 1;
            continue;
        };
        transform_record(&mut record, &config.transform);
        if record.is_empty() {
            tracing::debug!(line = raw.line, "dropping record that is empty after transformation");
            output.emptied += 1;
            continue;
        }
        output.records.push(record);
    }

    tracing::debug!(
        read = output.read,
        rejected = output.rejected,
        emptied = output.emptied,
        transformed = output.records.len(),
        "transformed batch"
    );
    output
}
