use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Default location of the question list
pub const DEFAULT_QUESTIONS_SOURCE: &str = "questions.json";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path or http(s) URL of the question list
    pub questions_source: String,
    /// Directory the feedback export is written to
    pub export_dir: PathBuf,
    /// Place the cursor on the first unanswered question after loading
    pub start_at_unanswered: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_source: DEFAULT_QUESTIONS_SOURCE.to_string(),
            export_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            start_at_unanswered: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlQuestionsConfig {
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlExportConfig {
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlReviewConfig {
    pub start_at_unanswered: Option<bool>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub questions: Option<TomlQuestionsConfig>,
    pub export: Option<TomlExportConfig>,
    pub review: Option<TomlReviewConfig>,
}

impl Config {
    /// Load configuration from the default config file, merging with defaults.
    /// Writes the bundled example on first run.
    pub fn load() -> Self {
        let config_file = config_path();

        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from `path`. A missing or unreadable file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Config::default();

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "No config file, using defaults");
                return config;
            }
        };

        match toml::from_str::<TomlConfig>(&contents) {
            Ok(toml_config) => config.merge(toml_config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config file");
            }
        }

        config
    }

    fn merge(&mut self, toml_config: TomlConfig) {
        if let Some(source) = toml_config.questions.and_then(|q| q.source) {
            self.questions_source = source;
        }

        if let Some(directory) = toml_config.export.and_then(|e| e.directory) {
            self.export_dir = directory;
        }

        if let Some(start) = toml_config.review.and_then(|r| r.start_at_unanswered) {
            self.start_at_unanswered = start;
        }
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, "Failed to create config directory");
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    pub fn with_questions_source(mut self, source: impl Into<String>) -> Self {
        self.questions_source = source.into();
        self
    }

    pub fn with_export_dir(mut self, dir: PathBuf) -> Self {
        self.export_dir = dir;
        self
    }
}
