//! Question sources: where the question list is read from at startup

use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use super::model::Question;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} returned {status}")]
    Status { url: String, status: u16 },
    #[error("question list is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only provider of the ordered question list.
///
/// Array order defines iteration order for every index-based operation.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Human-readable location, for logs
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Vec<Question>, SourceError>;
}

/// Questions from a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<Question>, SourceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Read {
                path: self.path.clone(),
                source,
            })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Questions served over HTTP(S) as a JSON array
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl QuestionSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<Question>, SourceError> {
        let request_error = |source| SourceError::Request {
            url: self.url.clone(),
            source,
        };

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(request_error)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Fixed in-memory question list
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    questions: Vec<Question>,
}

impl StaticSource {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

#[async_trait]
impl QuestionSource for StaticSource {
    fn describe(&self) -> String {
        format!("<{} built-in questions>", self.questions.len())
    }

    async fn fetch(&self) -> Result<Vec<Question>, SourceError> {
        Ok(self.questions.clone())
    }
}

/// Pick a source for a configured location: URLs go over HTTP, anything else is a file path.
pub fn source_for(location: &str) -> Box<dyn QuestionSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}
