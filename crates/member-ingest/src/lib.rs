//! Member data ingestion.
//!
//! This crate reads pipe-delimited member files and turns each line into a
//! named-field [`Record`](member_model::Record):
//!
//! - **Reading**: split lines on a configurable delimiter and quote character
//! - **Normalization**: check field counts against the schema and trim values
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use member_ingest::{normalize_record, read_raw_records};
//! use member_model::{IngestOptions, Schema};
//!
//! let raws = read_raw_records(Path::new("member-data.csv"), &IngestOptions::default())?;
//! let records: Vec<_> = raws
//!     .iter()
//!     .filter_map(|raw| normalize_record(raw, &Schema::member()))
//!     .collect();
//! ```

mod error;
mod normalize;
mod reader;

pub use error::{IngestError, Result};
pub use normalize::normalize_record;
pub use reader::{parse_raw_records, read_raw_records};
