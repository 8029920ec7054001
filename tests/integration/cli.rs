//! Tests for the command-line front-end

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use question_review::data::{AppStateStore, Database, KeyValueStore};
use question_review::review::{EXPORT_FILENAME, RESPONSES_KEY};
use tempfile::TempDir;

use super::common::fixtures::write_questions_file;

struct CliEnv {
    root: TempDir,
}

impl CliEnv {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        std::fs::create_dir_all(root.path().join("data")).unwrap();
        write_questions_file(root.path());
        Self { root }
    }

    fn data_dir(&self) -> std::path::PathBuf {
        self.root.path().join("data")
    }

    fn export_dir(&self) -> std::path::PathBuf {
        self.root.path().join("out")
    }

    /// Seed saved responses the way a previous review run would
    fn save_responses(&self, json: &str) {
        let db = Database::open(self.data_dir().join("review.db")).unwrap();
        AppStateStore::new(db.connection())
            .set(RESPONSES_KEY, json)
            .unwrap();
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("question-review").unwrap();
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--questions")
            .arg(self.root.path().join("questions.json"))
            .arg("--export-dir")
            .arg(self.export_dir());
        cmd
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn test_status_reports_progress() {
    let env = CliEnv::new();
    env.save_responses(r#"{"0":{"liked":true},"1":{"liked":false}}"#);

    env.command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Questions:      3"))
        .stdout(predicate::str::contains("Answered:       2 (67% Complete)"))
        .stdout(predicate::str::contains("Need attention: 1"))
        .stdout(predicate::str::contains("question 3 (3/17)"))
        .stdout(predicate::str::contains("Last saved:"));
}

#[test]
fn test_export_requires_complete_review() {
    let env = CliEnv::new();
    env.save_responses(r#"{"0":{"liked":false}}"#);

    env.command()
        .arg("export")
        .assert()
        .failure()
        .stderr(predicate::str::contains("33% complete"));

    assert!(!env.export_dir().join(EXPORT_FILENAME).exists());
}

#[test]
fn test_forced_export_writes_csv() {
    let env = CliEnv::new();
    env.save_responses(r#"{"0":{"liked":false,"comment":"dull"}}"#);

    env.command()
        .args(["export", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 1 question(s)"));

    let csv = read(&env.export_dir().join(EXPORT_FILENAME));
    assert_eq!(
        csv,
        "month,day_of_month,question,response,comment\n\
         \"3\",\"15\",\"What made you laugh today?\",\"Dislike\",\"dull\""
    );
}

#[test]
fn test_export_with_nothing_to_report() {
    let env = CliEnv::new();
    env.save_responses(r#"{"0":{"liked":true},"1":{"liked":true},"2":{"liked":true}}"#);

    env.command()
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No questions with dislikes or comments to export.",
        ));
}

#[test]
fn test_reset_prompt_declined_and_accepted() {
    let env = CliEnv::new();
    env.save_responses(r#"{"0":{"liked":true}}"#);

    env.command()
        .arg("reset")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing changed."));

    env.command()
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All responses deleted."));

    env.command()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Answered:       0 (0% Complete)"));
}

#[test]
fn test_missing_question_file_fails() {
    let env = CliEnv::new();
    std::fs::remove_file(env.root.path().join("questions.json")).unwrap();

    env.command()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load questions"));
}
