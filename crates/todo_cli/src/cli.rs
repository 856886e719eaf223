//! Command-line surface of the `todo` binary.
//!
//! # Responsibility
//! - Declare global options and subcommands.
//!
//! # Invariants
//! - Every global option can also come from a `TODO_*` environment variable.
//! - Ids are taken verbatim; the store decides whether they exist.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todo", author, version, about = "Local todo list manager", long_about = None)]
pub struct Cli {
    /// Directory holding the database and logs
    #[arg(long, env = "TODO_DATA_DIR", default_value = ".todo", global = true)]
    pub data_dir: PathBuf,
    /// trace|debug|info|warn|error (defaults by build mode)
    #[arg(long, env = "TODO_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new todo
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Due date, e.g. 2024-01-01
        #[arg(long = "end-date", value_name = "DATE")]
        end_date: String,
        /// Pending | "In Progress" | Done
        #[arg(long, default_value = "Pending")]
        status: String,
    },
    /// List todos in insertion order
    List,
    /// Edit an existing todo; omitted fields keep their current value
    Edit {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long = "end-date", value_name = "DATE")]
        end_date: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Change only the status of a todo
    Status {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(value_name = "STATUS")]
        status: String,
    },
    /// Delete a todo
    Remove {
        #[arg(value_name = "ID")]
        id: String,
    },
}
