//! Feedback export: the questions that need attention, as CSV.
//!
//! A row is produced for every answered question that was disliked or carries
//! a comment. Liked questions without a comment are left out.

use super::capabilities::{Delivery, DeliveryError, DeliverySink};
use super::model::{Question, ResponseStore};

/// Suggested file name for the exported document
pub const EXPORT_FILENAME: &str = "question_feedback.csv";

/// Column header line
pub const CSV_HEADER: &str = "month,day_of_month,question,response,comment";

/// Message shown when no question qualifies
pub const NOTHING_TO_EXPORT: &str = "No questions with dislikes or comments to export.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRow {
    pub month: u8,
    pub day_of_month: u8,
    pub question: String,
    /// `Like` or `Dislike`
    pub response: &'static str,
    pub comment: String,
}

impl FeedbackRow {
    fn fields(&self) -> [String; 5] {
        [
            self.month.to_string(),
            self.day_of_month.to_string(),
            self.question.clone(),
            self.response.to_string(),
            self.comment.clone(),
        ]
    }
}

/// A finished export ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument {
    pub content: String,
    pub rows: usize,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    NothingToExport,
    Document(CsvDocument),
}

/// Rows needing attention, in question order
pub fn feedback_rows(questions: &[Question], responses: &ResponseStore) -> Vec<FeedbackRow> {
    questions
        .iter()
        .enumerate()
        .filter_map(|(index, question)| {
            let response = responses.get(index)?;
            if !response.needs_attention() {
                return None;
            }
            Some(FeedbackRow {
                month: question.month,
                day_of_month: question.day_of_month,
                question: question.question.clone(),
                response: response.verdict().label(),
                comment: response.comment().unwrap_or_default().to_string(),
            })
        })
        .collect()
}

/// Quote a field, doubling any embedded quotes
fn quote_field(field: &str) -> String {
    let mut quoted = String::with_capacity(field.len() + 2);
    quoted.push('"');
    for c in field.chars() {
        if c == '"' {
            quoted.push('"');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Encode rows as CSV under the fixed header. Every data field is quoted so
/// commas, quotes and line breaks inside a field survive a parse.
pub fn encode_csv(rows: &[FeedbackRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for row in rows {
        let fields: Vec<String> = row.fields().iter().map(|f| quote_field(f)).collect();
        lines.push(fields.join(","));
    }
    lines.join("\n")
}

pub fn build_export(questions: &[Question], responses: &ResponseStore) -> ExportOutcome {
    let rows = feedback_rows(questions, responses);
    if rows.is_empty() {
        tracing::info!("Nothing to export");
        return ExportOutcome::NothingToExport;
    }

    tracing::info!(rows = rows.len(), "Built feedback export");
    ExportOutcome::Document(CsvDocument {
        content: encode_csv(&rows),
        rows: rows.len(),
        filename: EXPORT_FILENAME.to_string(),
    })
}

/// Hand a finished document to a sink
pub fn deliver_export(
    document: &CsvDocument,
    sink: &dyn DeliverySink,
) -> Result<Delivery, DeliveryError> {
    sink.deliver(&document.content, &document.filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::model::Response;
    use proptest::prelude::*;
    use std::cell::RefCell;

    fn questions() -> Vec<Question> {
        vec![
            Question::new(1, 1, "Liked, no comment"),
            Question::new(1, 2, "Disliked, no comment"),
            Question::new(1, 3, "Liked, with comment"),
            Question::new(1, 4, "Disliked, with comment"),
            Question::new(1, 5, "Unanswered"),
        ]
    }

    fn responses() -> ResponseStore {
        let mut store = ResponseStore::new();
        store.insert(0, Response::new(true, ""));
        store.insert(1, Response::new(false, ""));
        store.insert(2, Response::new(true, "Answer is outdated"));
        store.insert(3, Response::new(false, "Ambiguous"));
        store
    }

    fn parse(content: &str) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(content.as_bytes());
        reader
            .records()
            .map(|record| record.unwrap().iter().map(String::from).collect())
            .collect()
    }

    #[test]
    fn test_feedback_rows_selection() {
        let rows = feedback_rows(&questions(), &responses());
        let selected: Vec<&str> = rows.iter().map(|r| r.question.as_str()).collect();

        assert_eq!(
            selected,
            vec![
                "Disliked, no comment",
                "Liked, with comment",
                "Disliked, with comment"
            ]
        );
        assert_eq!(rows[0].response, "Dislike");
        assert_eq!(rows[0].comment, "");
        assert_eq!(rows[1].response, "Like");
        assert_eq!(rows[1].comment, "Answer is outdated");
    }

    #[test]
    fn test_empty_stored_comment_counts_as_no_comment() {
        let mut store = ResponseStore::new();
        store.insert(
            0,
            Response {
                liked: true,
                comment: Some(String::new()),
            },
        );
        assert!(feedback_rows(&questions(), &store).is_empty());
    }

    #[test]
    fn test_encode_csv_layout() {
        let rows = vec![FeedbackRow {
            month: 3,
            day_of_month: 15,
            question: "Who said \"Et tu\"?".to_string(),
            response: "Dislike",
            comment: "".to_string(),
        }];

        assert_eq!(
            encode_csv(&rows),
            "month,day_of_month,question,response,comment\n\
             \"3\",\"15\",\"Who said \"\"Et tu\"\"?\",\"Dislike\",\"\""
        );
    }

    #[test]
    fn test_nothing_to_export() {
        let mut store = ResponseStore::new();
        store.insert(0, Response::new(true, ""));

        assert_eq!(
            build_export(&questions(), &store),
            ExportOutcome::NothingToExport
        );
        assert_eq!(
            build_export(&questions(), &ResponseStore::new()),
            ExportOutcome::NothingToExport
        );
    }

    #[test]
    fn test_build_export_document() {
        let ExportOutcome::Document(document) = build_export(&questions(), &responses()) else {
            panic!("expected a document");
        };

        assert_eq!(document.rows, 3);
        assert_eq!(document.filename, EXPORT_FILENAME);

        let records = parse(&document.content);
        assert_eq!(
            records[0],
            vec!["month", "day_of_month", "question", "response", "comment"]
        );
        assert_eq!(
            records[3],
            vec!["1", "4", "Disliked, with comment", "Dislike", "Ambiguous"]
        );
    }

    #[test]
    fn test_comment_with_comma_quote_newline_round_trips() {
        let comment = "Says \"1999\", but\nit was 2000";
        let mut store = ResponseStore::new();
        store.insert(1, Response::new(true, comment));

        let ExportOutcome::Document(document) = build_export(&questions(), &store) else {
            panic!("expected a document");
        };

        let records = parse(&document.content);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1][4], comment);
    }

    struct RecordingSink {
        delivered: RefCell<Vec<(String, String)>>,
    }

    impl DeliverySink for RecordingSink {
        fn deliver(&self, document: &str, filename: &str) -> Result<Delivery, DeliveryError> {
            self.delivered
                .borrow_mut()
                .push((document.to_string(), filename.to_string()));
            Ok(Delivery {
                location: filename.into(),
                bytes: document.len(),
            })
        }
    }

    #[test]
    fn test_deliver_export_hands_document_to_sink() {
        let ExportOutcome::Document(document) = build_export(&questions(), &responses()) else {
            panic!("expected a document");
        };
        let sink = RecordingSink {
            delivered: RefCell::new(Vec::new()),
        };

        let delivery = deliver_export(&document, &sink).unwrap();

        assert_eq!(delivery.bytes, document.content.len());
        let delivered = sink.delivered.borrow();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].0, document.content);
        assert_eq!(delivered[0].1, "question_feedback.csv");
    }

    proptest! {
        #[test]
        fn prop_fields_round_trip(question in "[ -~\n\r\"]{0,40}", comment in "[ -~\n\r\",]{1,40}") {
            let rows = vec![FeedbackRow {
                month: 7,
                day_of_month: 4,
                question: question.clone(),
                response: "Like",
                comment: comment.clone(),
            }];

            let records = parse(&encode_csv(&rows));
            prop_assert_eq!(records.len(), 2);
            prop_assert_eq!(&records[1][2], &question);
            prop_assert_eq!(&records[1][4], &comment);
        }
    }
}
