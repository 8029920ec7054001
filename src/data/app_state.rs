//! App state data access object (key-value store)

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex, MutexGuard};

use super::database::DatabaseError;
use super::store::{KeyValueStore, StorageError};

/// SQLite-backed key-value store over the `app_state` table
#[derive(Clone)]
pub struct AppStateStore {
    conn: Arc<Mutex<Connection>>,
}

impl AppStateStore {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn
            .lock()
            .map_err(|_| StorageError::Database(DatabaseError::LockPoisoned))
    }

    /// Timestamp of the last write to `key`, if any
    pub fn updated_at(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.lock()?;
        let updated_at = conn
            .query_row(
                "SELECT updated_at FROM app_state WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(updated_at)
    }
}

impl KeyValueStore for AppStateStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.lock()?;
        let value = conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO app_state (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM app_state WHERE key = ?1", params![key])?;
        Ok(())
    }
}
