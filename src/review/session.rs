//! Review state machine: cursor over the question list plus the response overlay.
//!
//! Responses are persisted as a whole to the injected key-value store on every
//! vote and removed on reset. The cursor and draft comment are not persisted.

use std::sync::Arc;

use thiserror::Error;

use super::capabilities::Confirm;
use super::model::{DateKey, Question, Response, ResponseStore, Verdict};
use super::source::{QuestionSource, SourceError};
use crate::data::{KeyValueStore, StorageError};

/// Storage key holding the serialized response map
pub const RESPONSES_KEY: &str = "question_responses";

/// Prompt shown before wiping all responses
pub const RESET_PROMPT: &str =
    "Are you sure you want to start over? This will delete all your responses.";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to load questions: {0}")]
    Source(#[from] SourceError),
    #[error("failed to read saved responses: {0}")]
    Storage(#[from] StorageError),
    #[error("saved responses are corrupt: {0}")]
    CorruptResponses(#[source] serde_json::Error),
    #[error("question list is empty")]
    NoQuestions,
}

pub struct ReviewSession {
    questions: Vec<Question>,
    responses: ResponseStore,
    cursor: usize,
    draft_comment: String,
    storage: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for ReviewSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewSession")
            .field("questions", &self.questions.len())
            .field("responses", &self.responses.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl ReviewSession {
    /// Fetch the question list and rehydrate saved responses.
    pub async fn load(
        source: &dyn QuestionSource,
        storage: Arc<dyn KeyValueStore>,
    ) -> Result<Self, LoadError> {
        let questions = source.fetch().await?;
        tracing::info!(
            source = %source.describe(),
            count = questions.len(),
            "Loaded questions"
        );

        let responses = match storage.get(RESPONSES_KEY)? {
            Some(raw) => ResponseStore::from_json(&raw).map_err(LoadError::CorruptResponses)?,
            None => ResponseStore::new(),
        };

        Self::from_parts(questions, responses, storage)
    }

    /// Build a session from already-loaded parts.
    pub fn from_parts(
        questions: Vec<Question>,
        mut responses: ResponseStore,
        storage: Arc<dyn KeyValueStore>,
    ) -> Result<Self, LoadError> {
        if questions.is_empty() {
            return Err(LoadError::NoQuestions);
        }

        let dropped = responses.retain_within(questions.len());
        if dropped > 0 {
            tracing::warn!(
                dropped,
                questions = questions.len(),
                "Ignoring saved responses for questions that no longer exist"
            );
        }

        let mut session = Self {
            questions,
            responses,
            cursor: 0,
            draft_comment: String::new(),
            storage,
        };
        session.set_cursor(0);
        Ok(session)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn responses(&self) -> &ResponseStore {
        &self.responses
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }

    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last(&self) -> bool {
        self.cursor == self.last_index()
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.cursor]
    }

    pub fn current_response(&self) -> Option<&Response> {
        self.responses.get(self.cursor)
    }

    /// Liked, disliked, or `None` when the current question is unanswered
    pub fn current_verdict(&self) -> Option<Verdict> {
        self.current_response().map(Response::verdict)
    }

    pub fn draft_comment(&self) -> &str {
        &self.draft_comment
    }

    /// Replace the comment being edited. Committed only by the next vote.
    pub fn set_draft_comment(&mut self, comment: impl Into<String>) {
        self.draft_comment = comment.into();
    }

    /// Move to `index`, loading that question's saved comment into the draft.
    /// Indices past the end are ignored.
    pub fn set_cursor(&mut self, index: usize) {
        if index >= self.questions.len() {
            tracing::debug!(index, len = self.questions.len(), "Ignoring out-of-range cursor");
            return;
        }

        self.cursor = index;
        self.draft_comment = self
            .responses
            .get(index)
            .and_then(Response::comment)
            .unwrap_or_default()
            .to_string();
    }

    pub fn previous_question(&mut self) {
        if !self.is_first() {
            self.set_cursor(self.cursor - 1);
        }
    }

    pub fn next_question(&mut self) {
        if !self.is_last() {
            self.set_cursor(self.cursor + 1);
        }
    }

    /// Record a vote for the current question with the current draft comment,
    /// persist all responses, then advance unless on the last question.
    /// Advancing starts the next question with an empty draft, even if it
    /// already has a saved comment.
    pub fn vote(&mut self, liked: bool) -> Result<(), StorageError> {
        let response = Response::new(liked, &self.draft_comment);
        self.responses.insert(self.cursor, response);
        self.persist()?;

        tracing::debug!(
            index = self.cursor,
            liked,
            answered = self.responses.len(),
            "Recorded vote"
        );

        if !self.is_last() {
            self.cursor += 1;
            self.draft_comment.clear();
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), StorageError> {
        let raw = self.responses.to_json()?;
        self.storage.set(RESPONSES_KEY, &raw)
    }

    /// Move to the first question without a response. Returns whether one was found.
    pub fn jump_to_unanswered(&mut self) -> bool {
        let first_open = (0..self.questions.len()).find(|index| !self.responses.contains(*index));
        match first_open {
            Some(index) => {
                self.set_cursor(index);
                true
            }
            None => false,
        }
    }

    /// First question index for a month/day pair
    pub fn find_date(&self, key: DateKey) -> Option<usize> {
        self.questions.iter().position(|q| q.date_key() == key)
    }

    /// Jump to the question for `MM-DD` input. Malformed input or a date with
    /// no question leaves the session untouched and returns false.
    pub fn jump_to_date(&mut self, input: &str) -> bool {
        let Some(key) = DateKey::parse(input) else {
            tracing::debug!(input, "Ignoring malformed date");
            return false;
        };

        match self.find_date(key) {
            Some(index) => {
                self.set_cursor(index);
                true
            }
            None => {
                tracing::debug!(date = %key, "No question for date");
                false
            }
        }
    }

    /// Ask for confirmation, then discard every response and the saved copy.
    /// Returns whether the reset happened.
    pub fn reset(&mut self, confirm: &dyn Confirm) -> Result<bool, StorageError> {
        if !confirm.confirm(RESET_PROMPT) {
            return Ok(false);
        }

        self.storage.remove(RESPONSES_KEY)?;
        self.responses.clear();
        self.cursor = 0;
        self.draft_comment.clear();

        tracing::info!("Reset all responses");
        Ok(true)
    }

    pub fn answered_count(&self) -> usize {
        self.responses.len()
    }

    /// Percentage of questions with a response
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        self.responses.len() as f64 / self.questions.len() as f64 * 100.0
    }

    /// Progress rounded for display
    pub fn progress_percent(&self) -> u16 {
        self.progress().round() as u16
    }

    pub fn is_complete(&self) -> bool {
        self.responses.len() == self.questions.len()
    }
}
