//! Durable key-value storage seam used by the review session

use thiserror::Error;

use super::database::DatabaseError;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),
    #[error("failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Database(DatabaseError::Sqlite(err))
    }
}

/// Text-valued key-value store.
///
/// Read once at startup, written on every mutation, removed on reset.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
