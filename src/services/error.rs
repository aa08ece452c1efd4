use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Corrupt metadata for {0}: {1}")]
    CorruptMetadata(String, String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<StorageError> for ApplicationError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::NotFound(_) => ApplicationError::NotFound,
            StorageError::IoError(msg) | StorageError::CorruptMetadata(_, msg) => {
                ApplicationError::StorageFailure(msg)
            }
            StorageError::InternalError(msg) => ApplicationError::InternalError(msg),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(error: std::io::Error) -> Self {
        StorageError::IoError(error.to_string())
    }
}
