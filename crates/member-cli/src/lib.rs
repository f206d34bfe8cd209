//! CLI library components for the member loader.

pub mod logging;
pub mod pipeline;
pub mod types;
