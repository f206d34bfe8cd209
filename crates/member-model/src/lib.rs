//! Member record model types.
//!
//! This crate holds the types shared by every stage of the member pipeline:
//!
//! - [`schema`]: Source file schema (field names and declared types)
//! - [`record`]: Raw source lines and the per-record field map
//! - [`options`]: Configuration threaded through ingest, transform, and load
//! - [`error`]: Shared error type for model-level failures

pub mod error;
pub mod options;
pub mod record;
pub mod schema;

pub use error::{ModelError, Result};
pub use options::{
    DEFAULT_DELIMITER, DEFAULT_MONGODB_URL, DEFAULT_QUOTE, IngestOptions, MONGO_COLLECTION,
    MONGO_DATABASE, MONGODB_URL_ENV, PipelineConfig, SinkConfig, TransformOptions,
    default_reference_date,
};
pub use record::{FieldValue, RawRecord, Record};
pub use schema::{FieldSpec, FieldType, Schema, fields};
