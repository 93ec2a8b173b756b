use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "todotxt")]
#[command(about = "Manage a todo.txt task file from the command line")]
#[command(long_about = "todotxt - a todo.txt command-line tool

Reads and writes plain-text task files in the todo.txt format. Every
command that changes the file rewrites it in canonical form.

QUICK START:
  todotxt ls                         List all tasks
  todotxt add \"(A) Call Mom @Phone\"  Add a task
  todotxt do 3                       Mark task 3 as completed
  todotxt ls --filter open --sort priority

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  todotxt <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Task file to operate on
    ///
    /// Defaults to `general.todo_file` from the config, then
    /// `~/.todotxt/todo.txt`.
    #[arg(short, long, env = "TODO_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Config file to load instead of `~/.todotxt/config.yaml`
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to `general.default_output` from the config.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks
    ///
    /// Tasks are shown with their id and canonical line.
    ///
    /// # Filters
    ///
    ///   completed, done      completed tasks
    ///   open, pending        tasks not completed
    ///   pri, pri:A           any priority, a specific priority
    ///   @Phone, +Family      a context, a project
    ///   due, overdue, today  due date present, past, today
    ///   !<filter>            negation
    ///
    /// Comma-separated filters in one --filter match any of them; repeated
    /// --filter flags must all match.
    ///
    /// # Sort keys
    ///
    ///   id, todo, priority, created, completed, due, context, project
    ///
    /// Prefix with '-' or append ':desc' for descending order.
    ///
    /// # Examples
    ///
    ///   todotxt ls
    ///   todotxt ls --filter open --filter pri:A,pri:B
    ///   todotxt ls --sort priority --sort -due
    #[command(alias = "list")]
    Ls(ListArgs),

    /// Add a task
    ///
    /// The text is parsed as a todo.txt line. Today's date is added as the
    /// created date unless the text has one or `add.auto_created_date` is off.
    ///
    /// # Examples
    ///
    ///   todotxt add "(A) Call Mom @Phone +Family"
    ///   todotxt add "Renew passport due:2024-06-01"
    #[command(alias = "a")]
    Add {
        /// Task text in todo.txt format
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Mark a task as completed
    #[command(alias = "x")]
    Do {
        /// Task id as shown by `ls`
        id: usize,
    },

    /// Mark a completed task as not completed
    Reopen {
        /// Task id as shown by `ls`
        id: usize,
    },

    /// Remove a task
    #[command(alias = "del")]
    Rm {
        /// Task id as shown by `ls`
        id: usize,
    },

    /// Show how a line is split into segments
    ///
    /// Parses the text and prints each segment of its canonical form
    /// without reading or changing the task file.
    ///
    /// # Examples
    ///
    ///   todotxt parse "x 2014-01-03 (B) 2014-01-01 Write docs @Go due:2014-01-12"
    Parse {
        /// Text in todo.txt format
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Rewrite the task file in canonical form
    Fmt {
        /// Only report whether the file is canonical, exiting non-zero if not
        #[arg(long)]
        check: bool,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter expression; commas separate alternatives (repeatable)
    #[arg(long, short = 'F')]
    pub filter: Vec<String>,

    /// Sort key such as `priority` or `-due` (repeatable)
    #[arg(long, short)]
    pub sort: Vec<String>,
}
