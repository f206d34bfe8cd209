//! Error types for record sinks.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while opening a sink or writing a batch to it.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Failed to create or open the output file.
    #[error("failed to open output {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to the output file.
    #[error("failed to write output {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be encoded for the sink.
    #[error("failed to encode record: {message}")]
    Encode { message: String },

    /// The document store rejected the connection settings or is unreachable.
    #[cfg(feature = "mongo")]
    #[error("failed to connect to document store at {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: mongodb::error::Error,
    },

    /// The bulk insert failed.
    #[cfg(feature = "mongo")]
    #[error("bulk insert into {database}.{collection} failed: {source}")]
    Insert {
        database: String,
        collection: String,
        #[source]
        source: mongodb::error::Error,
    },
}

impl From<serde_json::Error> for SinkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode {
            message: err.to_string(),
        }
    }
}

/// Result type for sink operations.
pub type Result<T> = std::result::Result<T, SinkError>;
