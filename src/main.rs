use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use question_review::review::{
    build_export, deliver_export, source_for, ExportOutcome, FileSink, QuestionSource,
    ReviewSession, NOTHING_TO_EXPORT, RESPONSES_KEY,
};
use question_review::{util, App, AppStateStore, Config, Database, KeyValueStore};
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Review a year of daily questions: like or dislike each one, leave
/// comments, and export the ones that need attention.
#[derive(Parser, Debug)]
#[command(name = "question-review", version)]
struct Cli {
    /// Directory holding the database, logs and config (default: ~/.question-review)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Question list to review: a JSON file path or an http(s) URL
    #[arg(long, global = true)]
    questions: Option<String>,

    /// Directory the feedback CSV is written to
    #[arg(long, global = true)]
    export_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive review screen (default)
    Review,
    /// Print review progress
    Status,
    /// Write questions that were disliked or commented on to CSV
    Export {
        /// Export even if some questions are still unanswered
        #[arg(long)]
        force: bool,
    },
    /// Delete every saved response
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir.clone());

    // Log to file (<data_dir>/logs/question-review.log); the terminal belongs to the UI
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    let mut config = Config::load();
    if let Some(questions) = cli.questions {
        config = config.with_questions_source(questions);
    }
    if let Some(dir) = cli.export_dir {
        config = config.with_export_dir(dir);
    }

    let database = Database::open_default().context("Failed to open review database")?;
    let app_state = AppStateStore::new(database.connection());
    let storage: Arc<dyn KeyValueStore> = Arc::new(app_state.clone());
    let source: Arc<dyn QuestionSource> = Arc::from(source_for(&config.questions_source));

    match cli.command.unwrap_or(Commands::Review) {
        Commands::Review => {
            question_review::ui::install_panic_hook();
            let mut app = App::new(config, source, storage);
            app.run().await
        }
        Commands::Status => {
            let session = load_session(source.as_ref(), storage).await?;
            print_status(&session);
            if let Some(saved) = app_state.updated_at(RESPONSES_KEY)? {
                println!("Last saved:     {}", saved);
            }
            Ok(())
        }
        Commands::Export { force } => {
            let session = load_session(source.as_ref(), storage).await?;
            if !session.is_complete() && !force {
                bail!(
                    "Review is {}% complete; finish reviewing or pass --force",
                    session.progress_percent()
                );
            }

            match build_export(session.questions(), session.responses()) {
                ExportOutcome::NothingToExport => println!("{}", NOTHING_TO_EXPORT),
                ExportOutcome::Document(document) => {
                    let sink = FileSink::new(config.export_dir.clone());
                    let delivery = deliver_export(&document, &sink)?;
                    println!(
                        "Saved {} question(s) to {}",
                        document.rows,
                        delivery.location.display()
                    );
                }
            }
            Ok(())
        }
        Commands::Reset { yes } => {
            let mut session = load_session(source.as_ref(), storage).await?;
            let confirm = |prompt: &str| yes || ask_yes_no(prompt);
            if session.reset(&confirm)? {
                println!("All responses deleted.");
            } else {
                println!("Nothing changed.");
            }
            Ok(())
        }
    }
}

async fn load_session(
    source: &dyn QuestionSource,
    storage: Arc<dyn KeyValueStore>,
) -> Result<ReviewSession> {
    ReviewSession::load(source, storage)
        .await
        .with_context(|| format!("Failed to load questions from {}", source.describe()))
}

fn print_status(session: &ReviewSession) {
    let attention = session
        .responses()
        .iter()
        .filter(|(_, response)| response.needs_attention())
        .count();

    println!("Questions:      {}", session.len());
    println!(
        "Answered:       {} ({}% Complete)",
        session.answered_count(),
        session.progress_percent()
    );
    println!("Need attention: {}", attention);

    if let Some(next) = session
        .questions()
        .iter()
        .enumerate()
        .find(|(index, _)| !session.responses().contains(*index))
    {
        println!(
            "Next unanswered: question {} ({})",
            next.0 + 1,
            next.1.date_label()
        );
    } else {
        println!("You've reviewed all questions!");
    }
}

/// Blocking `y/N` prompt on stdin
fn ask_yes_no(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"),
        Err(_) => false,
    }
}
