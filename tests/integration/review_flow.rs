//! Integration tests for the review session against real storage and files

use super::common::fixtures::{sample_questions, write_questions_file, TestStorage};
use question_review::review::{
    build_export, deliver_export, ExportOutcome, FileSink, FileSource, StaticSource, CSV_HEADER,
    EXPORT_FILENAME,
};
use question_review::{LoadError, ReviewSession};
use tempfile::TempDir;

/// Votes survive closing and reopening the database
#[tokio::test]
async fn test_responses_persist_across_reload() {
    let storage = TestStorage::new();
    let source = StaticSource::new(sample_questions());

    let mut session = ReviewSession::load(&source, storage.open()).await.unwrap();
    session.set_draft_comment("too vague");
    session.vote(false).unwrap();
    session.vote(true).unwrap();

    let reloaded = ReviewSession::load(&source, storage.open()).await.unwrap();
    assert_eq!(reloaded.answered_count(), 2);
    assert_eq!(reloaded.responses().get(0).unwrap().comment(), Some("too vague"));
    assert!(reloaded.responses().get(1).unwrap().liked);
    assert_eq!(reloaded.cursor(), 0);
    assert_eq!(reloaded.draft_comment(), "too vague");
}

/// Reset removes the saved copy, so the next run starts empty
#[tokio::test]
async fn test_reset_clears_saved_responses() {
    let storage = TestStorage::new();
    let source = StaticSource::new(sample_questions());

    let mut session = ReviewSession::load(&source, storage.open()).await.unwrap();
    session.vote(true).unwrap();

    assert!(!session.reset(&|_: &str| false).unwrap());
    assert_eq!(session.answered_count(), 1);

    assert!(session.reset(&|_: &str| true).unwrap());
    assert_eq!(session.progress_percent(), 0);

    let reloaded = ReviewSession::load(&source, storage.open()).await.unwrap();
    assert!(reloaded.responses().is_empty());
}

#[tokio::test]
async fn test_load_from_file_source() {
    let dir = TempDir::new().unwrap();
    let path = write_questions_file(dir.path());
    let storage = TestStorage::new();

    let session = ReviewSession::load(&FileSource::new(path), storage.open())
        .await
        .unwrap();

    assert_eq!(session.len(), 3);
    assert_eq!(session.current_question().date_label(), "3/15");
}

#[tokio::test]
async fn test_missing_question_file_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let storage = TestStorage::new();

    let result =
        ReviewSession::load(&FileSource::new(dir.path().join("absent.json")), storage.open())
            .await;

    assert!(matches!(result, Err(LoadError::Source(_))));
}

/// Full pass: review everything, export, and read the CSV back
#[tokio::test]
async fn test_review_and_export_to_file() {
    let storage = TestStorage::new();
    let source = StaticSource::new(sample_questions());
    let mut session = ReviewSession::load(&source, storage.open()).await.unwrap();

    session.vote(true).unwrap();
    session.set_draft_comment("ask in summer, \"somewhere\" is vague");
    session.vote(true).unwrap();
    session.vote(false).unwrap();
    assert!(session.is_complete());

    let ExportOutcome::Document(document) =
        build_export(session.questions(), session.responses())
    else {
        panic!("expected a document");
    };
    assert_eq!(document.rows, 2);

    let out = TempDir::new().unwrap();
    let delivery = deliver_export(&document, &FileSink::new(out.path())).unwrap();
    assert_eq!(delivery.location, out.path().join(EXPORT_FILENAME));

    let written = std::fs::read_to_string(&delivery.location).unwrap();
    assert!(written.starts_with(CSV_HEADER));

    let mut reader = csv::Reader::from_reader(written.as_bytes());
    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(&records[0][2], "Where would you rather be, right now?");
    assert_eq!(&records[0][3], "Like");
    assert_eq!(&records[0][4], "ask in summer, \"somewhere\" is vague");
    assert_eq!(&records[1][0], "3");
    assert_eq!(&records[1][1], "17");
    assert_eq!(&records[1][3], "Dislike");
    assert_eq!(&records[1][4], "");
}

#[tokio::test]
async fn test_all_liked_has_nothing_to_export() {
    let storage = TestStorage::new();
    let source = StaticSource::new(sample_questions());
    let mut session = ReviewSession::load(&source, storage.open()).await.unwrap();

    for _ in 0..3 {
        session.vote(true).unwrap();
    }

    assert_eq!(
        build_export(session.questions(), session.responses()),
        ExportOutcome::NothingToExport
    );
}
