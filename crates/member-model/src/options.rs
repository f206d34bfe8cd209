//! Configuration options for member record processing.
//!
//! All options are built once at process start and passed down explicitly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::schema::{Schema, fields};

/// Field delimiter of the source files.
pub const DEFAULT_DELIMITER: char = '|';

/// Quote character of the source files.
pub const DEFAULT_QUOTE: char = '"';

/// Environment variable holding the document store connection string.
pub const MONGODB_URL_ENV: &str = "MONGODB_URL";

pub const DEFAULT_MONGODB_URL: &str = "mongodb://mongo:27017/";

pub const MONGO_DATABASE: &str = "revenue_db";

pub const MONGO_COLLECTION: &str = "member_data";

const REFERENCE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2024, 3, 1) {
    Some(date) => date,
    None => panic!("invalid reference date"),
};

/// Date that ages are computed against (1 March 2024).
pub fn default_reference_date() -> NaiveDate {
    REFERENCE_DATE
}

/// Options for splitting source lines into raw fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    pub delimiter: u8,
    pub quote: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER as u8,
            quote: DEFAULT_QUOTE as u8,
        }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    ///
    /// # Errors
    ///
    /// Returns an error if the delimiter is not a single ASCII character.
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        self.delimiter = ascii_byte("delimiter", delimiter)?;
        Ok(self)
    }

    /// Set the quote character.
    ///
    /// # Errors
    ///
    /// Returns an error if the quote is not a single ASCII character.
    pub fn with_quote(mut self, quote: char) -> Result<Self> {
        self.quote = ascii_byte("quote", quote)?;
        Ok(self)
    }
}

fn ascii_byte(field: &'static str, value: char) -> Result<u8> {
    if !value.is_ascii() || value == '\n' || value == '\r' {
        return Err(ModelError::InvalidOption {
            field,
            reason: format!("'{}' is not a usable ASCII character", value.escape_default()),
        });
    }
    Ok(value as u8)
}

/// Options for the record transformer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOptions {
    /// Reference date for age derivation.
    pub reference_date: NaiveDate,
    /// Source fields removed after all transformers have run.
    pub unused_fields: Vec<String>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            reference_date: default_reference_date(),
            unused_fields: [
                fields::FIRST_NAME,
                fields::LAST_NAME,
                fields::SUBURB,
                fields::STATE,
                fields::POST,
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
        }
    }
}

impl TransformOptions {
    #[must_use]
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }
}

/// Everything the batch driver needs to turn raw lines into output records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub schema: Schema,
    pub ingest: IngestOptions,
    pub transform: TransformOptions,
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ingest(mut self, ingest: IngestOptions) -> Self {
        self.ingest = ingest;
        self
    }

    #[must_use]
    pub fn with_transform(mut self, transform: TransformOptions) -> Self {
        self.transform = transform;
        self
    }
}

/// Document store location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkConfig {
    pub url: String,
    pub database: String,
    pub collection: String,
}

impl SinkConfig {
    /// Config for the member collection at the given connection string.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: MONGO_DATABASE.to_string(),
            collection: MONGO_COLLECTION.to_string(),
        }
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MONGODB_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_source_format() {
        let options = IngestOptions::default();
        assert_eq!(options.delimiter, b'|');
        assert_eq!(options.quote, b'"');
    }

    #[test]
    fn custom_delimiter_must_be_ascii() {
        let options = IngestOptions::new().with_delimiter(',').expect("comma");
        assert_eq!(options.delimiter, b',');
        let err = IngestOptions::new().with_delimiter('¦').unwrap_err();
        assert!(err.to_string().starts_with("invalid delimiter"));
        assert!(IngestOptions::new().with_quote('\n').is_err());
    }

    #[test]
    fn reference_date_is_first_of_march_2024() {
        let options = TransformOptions::default();
        assert_eq!(
            options.reference_date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(
            options.unused_fields,
            vec!["FirstName", "LastName", "Suburb", "State", "Post"]
        );
    }

    #[test]
    fn sink_config_uses_fixed_names() {
        let config = SinkConfig::default();
        assert_eq!(config.url, "mongodb://mongo:27017/");
        assert_eq!(config.database, "revenue_db");
        assert_eq!(config.collection, "member_data");
    }
}
