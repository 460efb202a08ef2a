//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failures
///
/// All variants surface to clients as a generic internal error.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Could not reach or authenticate against the database
    #[error("connection failed: {0}")]
    Connection(String),

    /// Driver reported a failure while executing an operation
    #[error("driver error: {0}")]
    Driver(String),

    /// Stored document does not match the expected shape
    #[error("document codec error: {0}")]
    Codec(String),

    /// Delete matched nothing although the document was just found
    #[error("document {0} was not deleted")]
    NotDeleted(String),

    /// In-memory store lock poisoned by a panicking writer
    #[error("store lock poisoned")]
    Poisoned,
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Driver(err.to_string())
    }
}

impl From<bson::ser::Error> for StoreError {
    fn from(err: bson::ser::Error) -> Self {
        StoreError::Codec(err.to_string())
    }
}

impl From<bson::de::Error> for StoreError {
    fn from(err: bson::de::Error) -> Self {
        StoreError::Codec(err.to_string())
    }
}

impl From<bson::document::ValueAccessError> for StoreError {
    fn from(err: bson::document::ValueAccessError) -> Self {
        StoreError::Codec(err.to_string())
    }
}
