//! Command-line front end for the kanban board.
//!
//! # Responsibility
//! - Turn commands (or JSON event lines) into `BoardEvent`s.
//! - Render the three columns as plain text after each run.

use clap::{Parser, Subcommand};
use kanban_core::db::open_db;
use kanban_core::{
    default_log_level, init_logging, Board, BoardEvent, BoardService, EventOutcome,
    SqliteBoardStore, DEFAULT_STORAGE_KEY,
};
use std::error::Error;
use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "kanban", version, about = "Three-column task board")]
struct Cli {
    /// SQLite file holding the persisted board.
    #[arg(long, env = "KANBAN_DB", default_value = "kanban.sqlite3")]
    db: PathBuf,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "KANBAN_LOG_DIR")]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long, env = "KANBAN_LOG_LEVEL")]
    log_level: Option<String>,

    /// Key the board is stored under.
    #[arg(long, default_value = DEFAULT_STORAGE_KEY)]
    key: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the board.
    Show,
    /// Append a task to Todo.
    Add { title: String },
    /// Delete a task by id.
    Delete { task_id: String },
    /// Drop `active` onto `over` (a task id or column name); omit `over` to cancel.
    Move { active: String, over: Option<String> },
    /// Read one JSON event per stdin line and apply them in order.
    Replay,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let conn = open_db(&cli.db)?;
    let store = SqliteBoardStore::try_new(&conn)?;
    let mut service = BoardService::open_with_key(store, cli.key);

    match cli.command {
        Command::Show => {}
        Command::Add { title } => {
            report(&service.dispatch(BoardEvent::AddTask { title }));
        }
        Command::Delete { task_id } => {
            report(&service.dispatch(BoardEvent::DeleteTask { task_id }));
        }
        Command::Move { active, over } => {
            service.dispatch(BoardEvent::DragStart {
                active_id: active.clone(),
            });
            report(&service.dispatch(BoardEvent::DragEnd {
                active_id: active,
                over_id: over,
            }));
        }
        Command::Replay => {
            let stdin = std::io::stdin();
            for (line_no, line) in stdin.lock().lines().enumerate() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                match serde_json::from_str::<BoardEvent>(&line) {
                    Ok(event) => report(&service.dispatch(event)),
                    Err(err) => eprintln!("line {}: skipped malformed event: {err}", line_no + 1),
                }
            }
        }
    }

    print!("{}", render(service.board()));
    Ok(())
}

fn report(outcome: &EventOutcome) {
    match outcome {
        EventOutcome::TaskAdded(id) => println!("added {id}"),
        EventOutcome::TaskDeleted => println!("deleted"),
        EventOutcome::Ignored => println!("ignored"),
        EventOutcome::DragStarted => {}
        EventOutcome::Dropped(outcome) => println!("drop: {outcome:?}"),
    }
}

fn render(board: &Board) -> String {
    let mut out = String::new();
    for (column, tasks) in board.columns() {
        out.push_str(&format!("== {} ({})\n", column.label(), tasks.len()));
        for task in tasks {
            out.push_str(&format!("  [{}] {}\n", task.id, task.title));
        }
    }
    out
}
