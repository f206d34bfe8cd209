//! JSON-lines file sink.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use member_model::Record;

use crate::error::{Result, SinkError};
use crate::sink::RecordSink;

/// Appends one JSON document per line to a file.
pub struct JsonLinesSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl JsonLinesSink {
    /// Open `path` for appending, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| SinkError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    fn write_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl RecordSink for JsonLinesSink {
    fn target(&self) -> String {
        self.path.display().to_string()
    }

    fn insert_many(&mut self, records: &[Record]) -> Result<usize> {
        for record in records {
            serde_json::to_writer(&mut self.writer, record)?;
            self.writer
                .write_all(b"\n")
                .map_err(|error| self.write_error(error))?;
        }
        self.writer.flush().map_err(|error| self.write_error(error))?;
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn appends_across_batches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("members.jsonl");
        let batch = vec![
            Record::from_iter([("FullName", "York Huang")]),
            Record::from_iter([("FullName", "George Adam")]),
        ];

        let mut sink = JsonLinesSink::open(&path).unwrap();
        assert_eq!(sink.insert_many(&batch).unwrap(), 2);
        drop(sink);
        let mut sink = JsonLinesSink::open(&path).unwrap();
        assert_eq!(sink.insert_many(&batch[..1]).unwrap(), 1);
        drop(sink);

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"FullName":"York Huang"}"#,
                r#"{"FullName":"George Adam"}"#,
                r#"{"FullName":"York Huang"}"#,
            ]
        );
    }

    #[test]
    fn missing_directory_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("members.jsonl");
        assert!(matches!(
            JsonLinesSink::open(&path),
            Err(SinkError::Open { .. })
        ));
    }
}
