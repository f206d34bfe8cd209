//! Delimited flat-file reading.
//!
//! Source files have no header row. Every record becomes one [`RawRecord`]
//! and so does every blank line (with no fields), so the normalizer sees and
//! reports it. Field counts are not checked here.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use member_model::{IngestOptions, RawRecord};

use crate::error::{IngestError, Result};

/// Read every line of a source file into raw records.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a line cannot be decoded.
pub fn read_raw_records(path: &Path, options: &IngestOptions) -> Result<Vec<RawRecord>> {
    let file = File::open(path).map_err(|error| IngestError::open(path.to_path_buf(), error))?;
    let records = collect_records(BufReader::new(file), options, path)?;
    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        "read raw records"
    );
    Ok(records)
}

/// Read raw records from any byte source.
///
/// # Errors
///
/// Returns an error if a line cannot be decoded.
pub fn parse_raw_records<R: Read>(source: R, options: &IngestOptions) -> Result<Vec<RawRecord>> {
    collect_records(source, options, Path::new("<input>"))
}

fn collect_records<R: Read>(
    mut source: R,
    options: &IngestOptions,
    path: &Path,
) -> Result<Vec<RawRecord>> {
    let mut bytes = Vec::new();
    source
        .read_to_end(&mut bytes)
        .map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .quote(options.quote)
        .from_reader(bytes.as_slice());

    let mut records = Vec::new();
    let mut row = StringRecord::new();
    let mut line = 1_u64;
    loop {
        let start = byte_offset(reader.position(), bytes.len());
        let more = reader
            .read_record(&mut row)
            .map_err(|error| csv_error(error, path))?;
        let end = byte_offset(reader.position(), bytes.len());

        // The csv reader silently consumes blank lines ahead of a record.
        let consumed = bytes.get(start..end).unwrap_or_default();
        let previous = start.checked_sub(1).and_then(|idx| bytes.get(idx)).copied();
        let blank_len = consumed
            .iter()
            .take_while(|byte| matches!(byte, b'\r' | b'\n'))
            .count();
        let blank = line_breaks(&consumed[..blank_len], previous);
        for offset in 0..blank {
            records.push(RawRecord::new(Vec::new()).at_line(line + offset));
        }
        if more {
            let fields = row.iter().map(ToString::to_string).collect();
            records.push(RawRecord::new(fields).at_line(line + blank));
        }

        line += line_breaks(consumed, previous);
        if !more {
            return Ok(records);
        }
    }
}

fn byte_offset(position: &csv::Position, len: usize) -> usize {
    usize::try_from(position.byte()).map_or(len, |offset| offset.min(len))
}

/// Count line breaks, treating `\r\n` as one. `previous` is the byte just
/// before `bytes`, so a `\n` completing an earlier `\r` is not counted again.
fn line_breaks(bytes: &[u8], previous: Option<u8>) -> u64 {
    let mut count = 0;
    let mut previous = previous;
    for &byte in bytes {
        match byte {
            b'\r' => count += 1,
            b'\n' if previous != Some(b'\r') => count += 1,
            _ => {}
        }
        previous = Some(byte);
    }
    count
}

fn csv_error(error: csv::Error, path: &Path) -> IngestError {
    let line = error.position().map_or(0, csv::Position::line);
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        _ => IngestError::Parse {
            path: path.to_path_buf(),
            line,
            message,
        },
    }
}
