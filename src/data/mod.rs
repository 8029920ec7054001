//! Data persistence layer
//!
//! SQLite-backed key-value storage for review responses, plus an in-memory
//! store with the same interface.

mod app_state;
mod database;
mod memory;
mod migrations;
mod store;

pub use app_state::AppStateStore;
pub use database::{Database, DatabaseError};
pub use memory::MemoryStore;
pub use store::{KeyValueStore, StorageError};
