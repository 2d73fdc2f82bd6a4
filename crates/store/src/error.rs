//! Storage error types

use folio_common::Error;
use thiserror::Error;

/// Failures reading or writing the content document
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Content file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Content file is not a valid document: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("Failed to encode content document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io(_) => Error::Persistence("Failed to access content".to_string()),
            StoreError::Corrupt(_) => Error::Persistence("Failed to read content".to_string()),
            StoreError::Encode(_) | StoreError::Unavailable(_) => {
                Error::Persistence("Failed to save content".to_string())
            }
        }
    }
}
