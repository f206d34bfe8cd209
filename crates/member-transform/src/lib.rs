//! Member record transformation.
//!
//! This crate turns normalized member records into their output form:
//!
//! - **fields**: pure per-field cleansing and derivation rules
//! - **record**: the fixed-order record transformer
//! - **batch**: the batch driver (normalize, transform, filter)

pub mod batch;
pub mod fields;
pub mod record;

pub use batch::{BatchOutput, transform_batch};
pub use fields::SalaryBucket;
pub use record::transform_record;
