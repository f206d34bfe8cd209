use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid {field}: {reason}")]
    InvalidOption { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
