//! Side-effect seams used by the review session and export

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Blocking yes/no prompt
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("failed to create export directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where a delivered document ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub location: PathBuf,
    pub bytes: usize,
}

/// Accepts a finished document and hands it to the user
pub trait DeliverySink {
    fn deliver(&self, document: &str, filename: &str) -> Result<Delivery, DeliveryError>;
}

/// Writes delivered documents into a directory, replacing any previous file
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DeliverySink for FileSink {
    fn deliver(&self, document: &str, filename: &str) -> Result<Delivery, DeliveryError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| DeliveryError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let location = self.dir.join(filename);
        std::fs::write(&location, document).map_err(|source| DeliveryError::Write {
            path: location.clone(),
            source,
        })?;

        tracing::info!(
            path = %location.display(),
            bytes = document.len(),
            "Delivered export"
        );

        Ok(Delivery {
            location,
            bytes: document.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_closure_confirm() {
        let yes = |_: &str| true;
        let no = |_: &str| false;
        assert!(yes.confirm("Proceed?"));
        assert!(!no.confirm("Proceed?"));
    }

    #[test]
    fn test_file_sink_creates_directory_and_overwrites() {
        let dir = tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("exports"));

        let first = sink.deliver("a,b\n", "question_feedback.csv").unwrap();
        let second = sink.deliver("c\n", "question_feedback.csv").unwrap();

        assert_eq!(first.location, second.location);
        assert_eq!(second.bytes, 2);
        let written = std::fs::read_to_string(&second.location).unwrap();
        assert_eq!(written, "c\n");
    }
}
