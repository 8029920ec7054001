//! Locations of everything the tool keeps on disk.
//!
//! All paths hang off one data directory, chosen once at startup:
//! `--data-dir`, else `$QUESTION_REVIEW_HOME`, else `~/.question-review`.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Environment variable that relocates the data directory
pub const DATA_DIR_ENV: &str = "QUESTION_REVIEW_HOME";

const DIR_NAME: &str = ".question-review";

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Fix the data directory for the rest of the process. Later calls are ignored.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(default_data_dir);
    if let Err(rejected) = DATA_DIR.set(path) {
        tracing::debug!(
            rejected = %rejected.display(),
            current = %data_dir().display(),
            "Data directory already chosen"
        );
    }
}

fn default_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|home| home.join(DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(DIR_NAME))
}

pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// SQLite database holding saved responses
pub fn database_path() -> PathBuf {
    data_dir().join("review.db")
}

pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

pub fn log_file_path() -> PathBuf {
    logs_dir().join("question-review.log")
}

pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_the_data_dir() {
        let root = data_dir();
        assert_eq!(database_path(), root.join("review.db"));
        assert_eq!(config_path(), root.join("config.toml"));
        assert!(log_file_path().starts_with(logs_dir()));
        assert_eq!(log_file_path().file_name().unwrap(), "question-review.log");
    }
}
