//! Line-oriented host for the todo dispatcher.
//!
//! Usage:
//!
//! ```text
//! todo_shell <data-dir> [--render]
//! ```
//!
//! The list is stored as `todos.json` inside `data-dir`, which is created if
//! missing. Each stdin line is one JSON command, for example:
//!
//! ```json
//! {"type":"ADD_TODO","text":"buy milk"}
//! {"type":"TOGGLE_TODO","id":1}
//! {"type":"REORDER_TODOS","draggedId":1,"targetId":3}
//! ```
//!
//! Each command produces one JSON line on stdout: `{"ok": <report>,
//! "active": n, "completed": n}` or `{"error": "<message>"}`. With
//! `--render`, the rendered HTML list is written after the last command.
//! Logs go to stderr and honour `RUST_LOG`.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use thiserror::Error;
use todo_machine::telemetry;
use todo_machine::todo::{
    adapters::{file::JsonFileTodoStore, template::TemplatePresenter},
    domain::TodoCommand,
    ports::{TodoPresenter, TodoStore, TodoStoreError},
    services::{DispatcherConfig, TodoDispatcher},
};
use tokio::runtime::Builder;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can stop the shell.
#[derive(Debug, Error)]
enum ShellError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] io::Error),
    #[error("failed to open todo store: {0}")]
    Store(#[source] TodoStoreError),
    #[error("failed to build presenter: {0}")]
    Presenter(#[source] minijinja::Error),
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug)]
struct ShellArgs {
    data_dir: Utf8PathBuf,
    render: bool,
}

fn main() -> Result<(), BoxError> {
    telemetry::init_tracing("warn")?;
    let args = parse_args(std::env::args().skip(1))?;
    let runtime = Builder::new_current_thread()
        .build()
        .map_err(ShellError::RuntimeInit)?;
    runtime.block_on(run(&args))?;
    Ok(())
}

fn parse_args(raw: impl Iterator<Item = String>) -> Result<ShellArgs, ShellError> {
    let mut found_dir = None;
    let mut render = false;
    for arg in raw {
        match arg.as_str() {
            "--render" => render = true,
            flag if flag.starts_with("--") => {
                return Err(ShellError::InvalidArgs(format!("unknown flag '{flag}'")));
            }
            _ if found_dir.is_some() => {
                return Err(ShellError::InvalidArgs(
                    "expected a single data directory".to_owned(),
                ));
            }
            path => found_dir = Some(Utf8PathBuf::from(path)),
        }
    }
    let data_dir = found_dir.ok_or_else(|| {
        ShellError::InvalidArgs("usage: todo_shell <data-dir> [--render]".to_owned())
    })?;
    Ok(ShellArgs { data_dir, render })
}

async fn run(args: &ShellArgs) -> Result<(), ShellError> {
    let store = Arc::new(open_store(&args.data_dir)?);
    let presenter = Arc::new(TemplatePresenter::new().map_err(ShellError::Presenter)?);
    let mut dispatcher =
        TodoDispatcher::start(store, Arc::clone(&presenter), DispatcherConfig::default()).await;

    let mut stdout = io::stdout().lock();
    for line in io::stdin().lock().lines() {
        let raw = line?;
        if raw.trim().is_empty() {
            continue;
        }
        let output = handle_line(&mut dispatcher, &raw).await?;
        serde_json::to_writer(&mut stdout, &output)?;
        writeln!(stdout)?;
        stdout.flush()?;
    }

    if args.render {
        writeln!(stdout, "{}", presenter.markup())?;
    }
    Ok(())
}

fn open_store(data_dir: &Utf8Path) -> Result<JsonFileTodoStore, ShellError> {
    JsonFileTodoStore::open(data_dir).map_err(ShellError::Store)
}

async fn handle_line<S, P>(
    dispatcher: &mut TodoDispatcher<S, P>,
    raw: &str,
) -> Result<Value, ShellError>
where
    S: TodoStore,
    P: TodoPresenter,
{
    let command = match TodoCommand::from_json(raw) {
        Ok(command) => command,
        Err(err) => return Ok(json!({ "error": err.to_string() })),
    };
    match dispatcher.dispatch(command).await {
        Ok(report) => Ok(json!({
            "ok": serde_json::to_value(&report)?,
            "active": dispatcher.todos().active_count(),
            "completed": dispatcher.todos().completed_count(),
        })),
        Err(err) => Ok(json!({ "error": err.to_string() })),
    }
}
