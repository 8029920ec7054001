pub mod config;
pub mod data;
pub mod review;
pub mod ui;
pub mod util;

pub use config::Config;
pub use data::{AppStateStore, Database, KeyValueStore, MemoryStore, StorageError};
pub use review::{
    build_export, source_for, ExportOutcome, LoadError, Question, QuestionSource, Response,
    ReviewSession,
};
pub use ui::App;
