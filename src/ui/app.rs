use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::data::KeyValueStore;
use crate::review::{
    build_export, deliver_export, DeliverySink, ExportOutcome, FileSink, QuestionSource,
    ReviewSession, NOTHING_TO_EXPORT, RESET_PROMPT,
};
use crate::ui::action::Action;
use crate::ui::components::theme::{ACCENT_ERROR, ACCENT_PRIMARY, TEXT_MUTED};
use crate::ui::components::{
    CardFocus, CompletionBanner, ConfirmationContext, ConfirmationDialog,
    ConfirmationDialogState, GlobalFooter, NoticeDialog, NoticeDialogState,
    ProgressBar, QuestionCard, ReviewHeader, TextInputState, HEADER_HEIGHT,
};
use crate::ui::events::{AppEvent, InputMode};
use crate::ui::terminal_guard::TerminalGuard;

const LOADING_MESSAGE: &str = "Loading questions...";

/// Main application state
pub struct App {
    config: Config,
    source: Arc<dyn QuestionSource>,
    storage: Arc<dyn KeyValueStore>,
    sink: Box<dyn DeliverySink>,
    /// Present once the startup load succeeds
    session: Option<ReviewSession>,
    load_error: Option<String>,
    input_mode: InputMode,
    comment_input: TextInputState,
    jump_input: TextInputState,
    confirmation: ConfirmationDialogState,
    notice: NoticeDialogState,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    should_quit: bool,
}

impl App {
    pub fn new(
        config: Config,
        source: Arc<dyn QuestionSource>,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let sink = Box::new(FileSink::new(config.export_dir.clone()));

        Self {
            config,
            source,
            storage,
            sink,
            session: None,
            load_error: None,
            input_mode: InputMode::Loading,
            comment_input: TextInputState::new(),
            jump_input: TextInputState::new(),
            confirmation: ConfirmationDialogState::new(),
            notice: NoticeDialogState::new(),
            event_tx,
            event_rx,
            should_quit: false,
        }
    }

    /// Replace where exports are delivered
    pub fn with_sink(mut self, sink: Box<dyn DeliverySink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn session(&self) -> Option<&ReviewSession> {
        self.session.as_ref()
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn notice(&self) -> &NoticeDialogState {
        &self.notice
    }

    pub fn confirmation(&self) -> &ConfirmationDialogState {
        &self.confirmation
    }

    pub fn comment_input(&self) -> &TextInputState {
        &self.comment_input
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Spawn the one-shot load task; its result arrives as an [`AppEvent`].
    pub fn start_loading(&self) {
        let source = Arc::clone(&self.source);
        let storage = Arc::clone(&self.storage);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let event = match ReviewSession::load(source.as_ref(), storage).await {
                Ok(session) => AppEvent::SessionLoaded(Box::new(session)),
                Err(e) => {
                    tracing::error!(source = %source.describe(), error = %e, "Failed to load questions");
                    AppEvent::LoadFailed(e.to_string())
                }
            };
            if tx.send(event).is_err() {
                tracing::debug!("App closed before questions finished loading");
            }
        });
    }

    /// Wait for the next app event
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.event_rx.recv().await
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        self.start_loading();
        let result = self.event_loop(&mut terminal).await;

        guard.cleanup()?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    if event::poll(Duration::from_millis(0))? {
                        if let Event::Key(key) = event::read()? {
                            if key.kind == KeyEventKind::Press {
                                self.handle_key(key);
                            }
                        }
                    }
                }

                Some(event) = self.event_rx.recv() => {
                    self.handle_app_event(event);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SessionLoaded(session) => {
                let mut session = *session;
                if self.config.start_at_unanswered {
                    session.jump_to_unanswered();
                }
                tracing::info!(
                    questions = session.len(),
                    answered = session.answered_count(),
                    "Review session ready"
                );
                self.session = Some(session);
                self.load_error = None;
                self.sync_comment_input();
                self.input_mode = InputMode::Normal;
            }
            AppEvent::LoadFailed(message) => {
                // Nothing to review, so stay on the loading screen
                self.load_error = Some(message);
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Loading => {
                if key.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            InputMode::Normal => {
                if let Some(action) = Action::from_key(&key) {
                    self.perform(action);
                }
            }
            InputMode::Comment => self.handle_comment_key(key),
            InputMode::JumpToDate => self.handle_jump_key(key),
            InputMode::Confirming => self.handle_confirmation_key(key),
            InputMode::Notice => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.notice.hide();
                    self.input_mode = InputMode::Normal;
                }
            }
        }
    }

    fn perform(&mut self, action: Action) {
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match action {
            Action::Like | Action::Dislike => {
                if let Err(e) = session.vote(action == Action::Like) {
                    tracing::error!(error = %e, "Failed to save response");
                    self.notice
                        .show_error("Could not save response", e.to_string());
                    self.input_mode = InputMode::Notice;
                }
                self.sync_comment_input();
            }
            Action::PreviousQuestion => {
                session.previous_question();
                self.sync_comment_input();
            }
            Action::NextQuestion => {
                session.next_question();
                self.sync_comment_input();
            }
            Action::NextUnanswered => {
                session.jump_to_unanswered();
                self.sync_comment_input();
            }
            Action::EditComment => {
                self.comment_input.move_end();
                self.input_mode = InputMode::Comment;
            }
            Action::JumpToDate => {
                self.input_mode = InputMode::JumpToDate;
            }
            Action::ResetProgress => {
                self.confirmation.show(
                    "Reset Progress",
                    RESET_PROMPT,
                    "Reset",
                    ConfirmationContext::ResetProgress,
                );
                self.input_mode = InputMode::Confirming;
            }
            Action::Export => {
                if session.is_complete() {
                    self.export();
                }
            }
            Action::Quit => {}
        }
    }

    /// Mirror the session's draft into the comment box after the cursor moves
    fn sync_comment_input(&mut self) {
        if let Some(session) = &self.session {
            self.comment_input = TextInputState::with_value(session.draft_comment());
        }
    }

    fn handle_comment_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.input_mode = InputMode::Normal;
            return;
        }

        edit_text(&mut self.comment_input, key);
        if let Some(session) = self.session.as_mut() {
            session.set_draft_comment(self.comment_input.value());
        }
    }

    fn handle_jump_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.jump_input.clear();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                let Some(session) = self.session.as_mut() else {
                    return;
                };
                // Malformed or unknown dates leave everything as it was
                if session.jump_to_date(self.jump_input.value()) {
                    self.jump_input.clear();
                    self.input_mode = InputMode::Normal;
                    self.sync_comment_input();
                }
            }
            _ => edit_text(&mut self.jump_input, key),
        }
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        let accepted = match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.confirmation.toggle_selection();
                return;
            }
            KeyCode::Enter => self.confirmation.is_confirm_selected(),
            KeyCode::Char('y') => true,
            KeyCode::Char('n') | KeyCode::Esc => false,
            _ => return,
        };

        let context = self.confirmation.hide();
        self.input_mode = InputMode::Normal;

        if context == Some(ConfirmationContext::ResetProgress) {
            self.reset_progress(accepted);
        }
    }

    fn reset_progress(&mut self, accepted: bool) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.reset(&move |_: &str| accepted) {
            Ok(true) => self.sync_comment_input(),
            Ok(false) => {}
            Err(e) => {
                tracing::error!(error = %e, "Failed to reset progress");
                self.notice.show_error("Could not reset progress", e.to_string());
                self.input_mode = InputMode::Notice;
            }
        }
    }

    fn export(&mut self) {
        let Some(session) = &self.session else {
            return;
        };

        match build_export(session.questions(), session.responses()) {
            ExportOutcome::NothingToExport => {
                self.notice.show_info("Export", NOTHING_TO_EXPORT);
            }
            ExportOutcome::Document(document) => {
                match deliver_export(&document, self.sink.as_ref()) {
                    Ok(delivery) => self.notice.show_info(
                        "Export",
                        format!(
                            "Saved {} question(s) to {}",
                            document.rows,
                            delivery.location.display()
                        ),
                    ),
                    Err(e) => {
                        tracing::error!(error = %e, "Export failed");
                        self.notice.show_error("Export failed", e.to_string());
                    }
                }
            }
        }
        self.input_mode = InputMode::Notice;
    }

    pub fn draw(&self, f: &mut Frame) {
        let area = f.area();

        let Some(session) = &self.session else {
            self.draw_loading(f, area);
            return;
        };

        let banner_height = if session.is_complete() { 3 } else { 0 };
        let [header_area, card_area, progress_area, banner_area, footer_area] =
            Layout::vertical([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(10),
                Constraint::Length(1),
                Constraint::Length(banner_height),
                Constraint::Length(1),
            ])
            .areas(area);

        f.render_widget(ReviewHeader, header_area);

        let focus = match self.input_mode {
            InputMode::Comment => CardFocus::Comment,
            InputMode::JumpToDate => CardFocus::Jump,
            _ => CardFocus::None,
        };
        f.render_widget(
            QuestionCard::new(session, &self.comment_input, &self.jump_input).focus(focus),
            card_area,
        );
        f.render_widget(ProgressBar::new(session.progress_percent()), progress_area);
        if session.is_complete() {
            f.render_widget(CompletionBanner, banner_area);
        }

        GlobalFooter::for_mode(self.input_mode, session.is_complete())
            .render(footer_area, f.buffer_mut());

        f.render_widget(ConfirmationDialog::new(&self.confirmation), area);
        f.render_widget(NoticeDialog::new(&self.notice), area);
    }

    fn draw_loading(&self, f: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            LOADING_MESSAGE,
            Style::default()
                .fg(ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))];
        if let Some(error) = &self.load_error {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(ACCENT_ERROR),
            )));
            lines.push(Line::from(Span::styled(
                "Press q to quit",
                Style::default().fg(TEXT_MUTED),
            )));
        }

        let height = lines.len() as u16;
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(area);

        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            middle,
        );
    }
}

/// Apply a line-editing key to `input`
fn edit_text(input: &mut TextInputState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('a') => input.move_start(),
            KeyCode::Char('e') => input.move_end(),
            KeyCode::Char('u') => input.delete_to_start(),
            KeyCode::Char('k') => input.delete_to_end(),
            KeyCode::Char('w') => input.delete_word_back(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace => input.delete_char(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}
