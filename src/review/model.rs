//! Review data model: questions, responses, and the date lookup key

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single day's question. Identified by its position in the loaded list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub month: u8,
    pub day_of_month: u8,
    pub question: String,
}

impl Question {
    pub fn new(month: u8, day_of_month: u8, question: impl Into<String>) -> Self {
        Self {
            month,
            day_of_month,
            question: question.into(),
        }
    }

    pub fn date_key(&self) -> DateKey {
        DateKey {
            month: self.month,
            day: self.day_of_month,
        }
    }

    /// Display form used in the question card, e.g. `3/15`
    pub fn date_label(&self) -> String {
        format!("{}/{}", self.month, self.day_of_month)
    }
}

/// Which way a question was voted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Liked,
    Disliked,
}

impl Verdict {
    pub fn from_liked(liked: bool) -> Self {
        if liked {
            Verdict::Liked
        } else {
            Verdict::Disliked
        }
    }

    /// Label written to the export
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Liked => "Like",
            Verdict::Disliked => "Dislike",
        }
    }
}

/// A recorded vote with its optional comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub liked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Response {
    /// Build a response; an empty comment is stored as absent.
    pub fn new(liked: bool, comment: &str) -> Self {
        Self {
            liked,
            comment: (!comment.is_empty()).then(|| comment.to_string()),
        }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_liked(self.liked)
    }

    /// The comment, treating a stored empty string as no comment
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.is_empty())
    }

    pub fn has_comment(&self) -> bool {
        self.comment().is_some()
    }

    /// Disliked, or carrying a comment
    pub fn needs_attention(&self) -> bool {
        !self.liked || self.has_comment()
    }
}

/// Sparse mapping from question index to response.
///
/// Serializes as a JSON object keyed by decimal index strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseStore {
    entries: BTreeMap<usize, Response>,
}

impl ResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn get(&self, index: usize) -> Option<&Response> {
        self.entries.get(&index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// Replace the response at `index` wholesale
    pub fn insert(&mut self, index: usize, response: Response) {
        self.entries.insert(index, response);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Response)> {
        self.entries.iter().map(|(index, response)| (*index, response))
    }

    /// Drop entries that do not address a question in a list of `len`
    pub fn retain_within(&mut self, len: usize) -> usize {
        let before = self.entries.len();
        self.entries.retain(|index, _| *index < len);
        before - self.entries.len()
    }
}

/// Month and day pair used to jump to a question by date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateKey {
    pub month: u8,
    pub day: u8,
}

impl DateKey {
    /// Parse `MM-DD` input.
    ///
    /// Both parts must be plain integers (surrounding whitespace allowed) with
    /// month in 1..=12 and day in 1..=31. Anything else yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let (month, day) = input.trim().split_once('-')?;
        let month: u8 = month.trim().parse().ok()?;
        let day: u8 = day.trim().parse().ok()?;

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }

        Some(Self { month, day })
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}
