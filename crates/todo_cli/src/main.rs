//! `todo` command-line entry point.
//!
//! # Responsibility
//! - Map subcommands onto the core form and store APIs.
//! - Own process setup: data directory, logging, database connection.

mod cli;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use log::info;
use std::path::{Path, PathBuf};
use todo_core::db::open_db;
use todo_core::{
    default_log_level, init_logging, KeyValueStore, SqliteKeyValueStore, SubmitOutcome, Todo,
    StoreError, TodoForm, TodoId, TodoStatus, TodoStore, ValidationErrors,
};

const DB_FILE_NAME: &str = "todos.sqlite3";
const LOG_DIR_NAME: &str = "logs";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = prepare_data_dir(&cli.data_dir)?;

    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, data_dir.join(LOG_DIR_NAME)).context("failed to initialize logging")?;

    let conn = open_db(data_dir.join(DB_FILE_NAME)).context("failed to open todo database")?;
    let mut store = TodoStore::load(SqliteKeyValueStore::new(&conn))
        .context("failed to read stored todos")?;

    run(cli.command, &mut store)
}

fn run<S: KeyValueStore>(command: Commands, store: &mut TodoStore<S>) -> Result<()> {
    let mut form = TodoForm::new();

    match command {
        Commands::Add {
            title,
            description,
            end_date,
            status,
        } => {
            let draft = form.draft_mut();
            draft.title = title;
            draft.description = description;
            draft.end_date = end_date;
            draft.status = status;
            let outcome = form.submit(store).map_err(report_invalid)?;
            print_outcome(&outcome);
        }
        Commands::List => {
            if store.is_empty() {
                println!("No todos yet.");
            }
            for todo in store.list() {
                print_todo(todo);
            }
        }
        Commands::Edit {
            id,
            title,
            description,
            end_date,
            status,
        } => {
            form.begin_edit(store, &TodoId::from(id))?;
            let draft = form.draft_mut();
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(end_date) = end_date {
                draft.end_date = end_date;
            }
            if let Some(status) = status {
                draft.status = status;
            }
            let outcome = form.submit(store).map_err(report_invalid)?;
            print_outcome(&outcome);
        }
        Commands::Status { id, status } => {
            let status = TodoStatus::parse(&status).ok_or_else(|| {
                anyhow!("unknown status `{status}`; expected Pending, \"In Progress\" or Done")
            })?;
            let id = TodoId::from(id);
            match store.set_status(&id, status) {
                Ok(()) => println!("{id} -> {status}"),
                Err(StoreError::NotFound(id)) => {
                    println!("No todo with id {id}; nothing changed")
                }
            }
        }
        Commands::Remove { id } => {
            let id = TodoId::from(id);
            if store.get(&id).is_none() {
                println!("No todo with id {id}; nothing changed");
            } else {
                store.remove(&id);
                println!("Removed {id}");
            }
        }
    }

    info!(
        "event=cli_command module=cli status=ok count={}",
        store.len()
    );
    Ok(())
}

fn prepare_data_dir(dir: &Path) -> Result<PathBuf> {
    let absolute = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        std::env::current_dir()
            .context("failed to resolve current directory")?
            .join(dir)
    };
    std::fs::create_dir_all(&absolute)
        .with_context(|| format!("failed to create data directory `{}`", absolute.display()))?;
    Ok(absolute)
}

fn report_invalid(errors: ValidationErrors) -> anyhow::Error {
    for (field, error) in errors.iter() {
        eprintln!("{field}: {error}");
    }
    anyhow!("todo rejected: {} invalid field(s)", errors.len())
}

fn print_outcome(outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Added(todo) => {
            println!("Added");
            print_todo(todo);
        }
        SubmitOutcome::Updated(todo) => {
            println!("Updated");
            print_todo(todo);
        }
        SubmitOutcome::Discarded(id) => println!("Todo {id} no longer exists; nothing changed"),
    }
}

fn print_todo(todo: &Todo) {
    println!("{}  [{}]  due {}", todo.id, todo.status, todo.end_date);
    println!("    {}", todo.title);
    println!("    {}", todo.description);
}
