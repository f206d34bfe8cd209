//! Sinks for transformed member records.
//!
//! Every sink implements [`RecordSink`]; [`load_records`] performs the one
//! bulk insert per batch and checks the inserted count.
//!
//! - [`JsonLinesSink`]: newline-delimited JSON file
//! - `MongoSink`: MongoDB collection (feature `mongo`, on by default)

mod error;
mod jsonl;
#[cfg(feature = "mongo")]
mod mongo;
mod sink;

pub use error::{Result, SinkError};
pub use jsonl::JsonLinesSink;
#[cfg(feature = "mongo")]
pub use mongo::{MongoSink, to_document};
pub use sink::{LoadReport, RecordSink, load_records};
