//! MongoDB document store sink.

use member_model::{Record, SinkConfig};
use mongodb::bson::{self, Document};
use mongodb::sync::Client;

use crate::error::{Result, SinkError};
use crate::sink::RecordSink;

/// Inserts batches into one MongoDB collection.
///
/// The client is owned by the sink and shut down when the sink is dropped,
/// so the connection lives exactly as long as the sink value.
pub struct MongoSink {
    client: Client,
    config: SinkConfig,
}

impl MongoSink {
    /// Create a client for the configured document store.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string is invalid.
    pub fn connect(config: &SinkConfig) -> Result<Self> {
        tracing::info!(
            url = %config.url,
            database = %config.database,
            collection = %config.collection,
            "connecting to document store"
        );
        let client = Client::with_uri_str(&config.url).map_err(|source| SinkError::Connect {
            url: config.url.clone(),
            source,
        })?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }
}

/// Encode a record as a BSON document with the same field layout.
pub fn to_document(record: &Record) -> Result<Document> {
    bson::to_document(record).map_err(|error| SinkError::Encode {
        message: error.to_string(),
    })
}

impl RecordSink for MongoSink {
    fn target(&self) -> String {
        format!("{}.{}", self.config.database, self.config.collection)
    }

    fn insert_many(&mut self, records: &[Record]) -> Result<usize> {
        let documents = records
            .iter()
            .map(to_document)
            .collect::<Result<Vec<Document>>>()?;
        let collection = self
            .client
            .database(&self.config.database)
            .collection::<Document>(&self.config.collection);
        let result = collection
            .insert_many(documents)
            .run()
            .map_err(|source| SinkError::Insert {
                database: self.config.database.clone(),
                collection: self.config.collection.clone(),
                source,
            })?;
        Ok(result.inserted_ids.len())
    }
}
