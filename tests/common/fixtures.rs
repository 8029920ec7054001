//! Question lists and storage backed by temporary directories

use std::path::{Path, PathBuf};
use std::sync::Arc;

use question_review::{AppStateStore, Database, KeyValueStore, Question};
use tempfile::TempDir;

pub const QUESTIONS_JSON: &str = r#"[
  {"month": 3, "day_of_month": 15, "question": "What made you laugh today?"},
  {"month": 3, "day_of_month": 16, "question": "Where would you rather be, right now?"},
  {"month": 3, "day_of_month": 17, "question": "Who did you say \"thank you\" to today?"}
]"#;

pub fn sample_questions() -> Vec<Question> {
    vec![
        Question::new(3, 15, "What made you laugh today?"),
        Question::new(3, 16, "Where would you rather be, right now?"),
        Question::new(3, 17, "Who did you say \"thank you\" to today?"),
    ]
}

/// Write the sample question list into `dir`
pub fn write_questions_file(dir: &Path) -> PathBuf {
    let path = dir.join("questions.json");
    std::fs::write(&path, QUESTIONS_JSON).expect("Failed to write questions file");
    path
}

/// SQLite-backed storage in a temporary directory
pub struct TestStorage {
    pub dir: TempDir,
    pub db_path: PathBuf,
}

impl TestStorage {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = dir.path().join("review.db");
        Self { dir, db_path }
    }

    /// Open a fresh connection, as a new run of the program would
    pub fn open(&self) -> Arc<dyn KeyValueStore> {
        let db = Database::open(self.db_path.clone()).expect("Failed to open database");
        Arc::new(AppStateStore::new(db.connection()))
    }
}
