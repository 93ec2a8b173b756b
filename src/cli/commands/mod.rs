//! Command implementations for todotxt.
//!
//! Every command returns the text to print; commands that change tasks save
//! the whole file back in canonical form.

mod add;
mod fmt;
mod status;

pub use add::add;
pub use fmt::fmt;
pub use status::{complete, remove, reopen};

use std::path::PathBuf;

use log::debug;

use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::core::Clock;
use crate::error::TodoError;
use crate::list::{Filter, SortKey, TaskList};
use crate::output::{format_segments, format_tasks};
use crate::task::parse;

/// Everything a command needs besides its own arguments.
pub struct Workspace<'a, C: Clock + ?Sized> {
    /// Task file the command operates on.
    pub todo_file: PathBuf,
    pub config: Config,
    pub format: OutputFormat,
    pub clock: &'a C,
}

impl<C: Clock + ?Sized> Workspace<'_, C> {
    /// Load the task file; a file that does not exist yet holds no tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a line cannot be parsed.
    pub fn load(&self) -> Result<TaskList, TodoError> {
        if !self.todo_file.exists() {
            debug!("{} does not exist, starting empty", self.todo_file.display());
            return Ok(TaskList::new());
        }
        TaskList::load_from_path(&self.todo_file)
    }

    /// Write `tasks` back to the task file, creating its directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, tasks: &TaskList) -> Result<(), TodoError> {
        if let Some(parent) = self.todo_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        tasks.write_to_path(&self.todo_file, &self.config.format)
    }
}

/// Parse one `--filter` value; comma-separated filters are alternatives.
fn parse_filter_group(expr: &str) -> Result<Vec<Filter>, TodoError> {
    expr.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

/// Execute ls command
///
/// # Errors
///
/// Returns an error if the task file cannot be loaded or a filter or sort
/// expression is invalid.
pub fn list<C: Clock + ?Sized>(ws: &Workspace<'_, C>, args: &ListArgs) -> Result<String, TodoError> {
    let groups = args
        .filter
        .iter()
        .map(|expr| parse_filter_group(expr))
        .collect::<Result<Vec<_>, _>>()?;

    let keys = if args.sort.is_empty() {
        ws.config.default_sort_keys()?
    } else {
        args.sort
            .iter()
            .map(|key| key.parse())
            .collect::<Result<Vec<SortKey>, _>>()?
    };

    let mut tasks = groups
        .iter()
        .fold(ws.load()?, |tasks, group| tasks.filter(group, ws.clock));
    tasks.sort(&keys);

    format_tasks(&tasks, "Tasks", &ws.config.format, ws.clock, ws.format)
}

/// Execute parse command
///
/// # Errors
///
/// Returns an error if the text cannot be parsed or output formatting fails.
pub fn parse_line(
    text: &str,
    config: &Config,
    format: OutputFormat,
) -> Result<String, TodoError> {
    let task = parse(text)?;
    format_segments(&task.segments(&config.format), format)
}
