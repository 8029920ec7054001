//! Rendering tests for the review screen using TestBackend

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use question_review::review::StaticSource;
use question_review::ui::InputMode;
use question_review::{App, Config, MemoryStore};

use super::common::fixtures::sample_questions;
use super::common::terminal::{assert_screen_contains, create_test_terminal, render_app};

fn press(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
}

async fn loaded_app() -> App {
    let mut app = App::new(
        Config::default(),
        Arc::new(StaticSource::new(sample_questions())),
        Arc::new(MemoryStore::new()),
    );
    app.start_loading();
    let event = app.next_event().await.expect("load task should report");
    app.handle_app_event(event);
    app
}

#[tokio::test]
async fn test_loading_screen_before_questions_arrive() {
    let app = App::new(
        Config::default(),
        Arc::new(StaticSource::new(sample_questions())),
        Arc::new(MemoryStore::new()),
    );
    let mut terminal = create_test_terminal();

    let screen = render_app(&mut terminal, &app);
    assert_screen_contains(&screen, "Loading questions...");
}

#[tokio::test]
async fn test_empty_question_list_stays_on_loading_screen() {
    let mut app = App::new(
        Config::default(),
        Arc::new(StaticSource::default()),
        Arc::new(MemoryStore::new()),
    );
    app.start_loading();
    let event = app.next_event().await.unwrap();
    app.handle_app_event(event);

    assert_eq!(app.input_mode(), InputMode::Loading);
    let screen = render_app(&mut create_test_terminal(), &app);
    assert_screen_contains(&screen, "Loading questions...");
    assert_screen_contains(&screen, "Press q to quit");
}

#[tokio::test]
async fn test_review_screen_layout() {
    let app = loaded_app().await;
    let mut terminal = create_test_terminal();

    let screen = render_app(&mut terminal, &app);
    assert_screen_contains(&screen, "Now & Then Question Review Tool");
    assert_screen_contains(&screen, "How to Review:");
    assert_screen_contains(&screen, "Question 1 of 3");
    assert_screen_contains(&screen, "3/15");
    assert_screen_contains(&screen, "What made you laugh today?");
    assert_screen_contains(&screen, "Optional comment");
    assert_screen_contains(&screen, "MM-DD");
    assert_screen_contains(&screen, "0% Complete");
    assert!(!screen.contains("You've reviewed all questions!"));
}

#[tokio::test]
async fn test_progress_and_completion_banner() {
    let mut app = loaded_app().await;
    let mut terminal = create_test_terminal();

    press(&mut app, 'y');
    let screen = render_app(&mut terminal, &app);
    assert_screen_contains(&screen, "33% Complete");
    assert_screen_contains(&screen, "Question 2 of 3");

    press(&mut app, 'n');
    press(&mut app, 'y');
    let screen = render_app(&mut terminal, &app);
    assert_screen_contains(&screen, "100% Complete");
    assert_screen_contains(&screen, "You've reviewed all questions!");
    assert_screen_contains(&screen, "export");
}

#[tokio::test]
async fn test_reset_dialog_is_shown() {
    let mut app = loaded_app().await;
    let mut terminal = create_test_terminal();

    press(&mut app, 'R');
    let screen = render_app(&mut terminal, &app);
    assert_screen_contains(&screen, "Reset Progress");
    assert_screen_contains(&screen, "Are you sure you want to start over?");
    assert_screen_contains(&screen, "Cancel");
}
