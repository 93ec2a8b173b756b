//! Output formatting for todotxt.
//!
//! This module provides formatters for displaying tasks and segments in
//! various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::core::Clock;
use crate::error::TodoError;
use crate::list::TaskList;
use crate::task::{FormatOptions, Segment, Task};

pub use json::*;
pub use pretty::*;

/// Format a task list based on output format
///
/// # Errors
///
/// Returns `TodoError::Json` if JSON serialization fails.
pub fn format_tasks<C: Clock + ?Sized>(
    tasks: &TaskList,
    title: &str,
    options: &FormatOptions,
    clock: &C,
    format: OutputFormat,
) -> Result<String, TodoError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, title, options, clock)),
        OutputFormat::Json => format_tasks_json(tasks, title, options),
    }
}

/// Format a single task based on output format
///
/// # Errors
///
/// Returns `TodoError::Json` if JSON serialization fails.
pub fn format_task(
    task: &Task,
    action: &str,
    options: &FormatOptions,
    format: OutputFormat,
) -> Result<String, TodoError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task, action, options)),
        OutputFormat::Json => format_task_json(task, action, options),
    }
}

/// Format the segments of a line based on output format
///
/// # Errors
///
/// Returns `TodoError::Json` if JSON serialization fails.
pub fn format_segments(segments: &[Segment], format: OutputFormat) -> Result<String, TodoError> {
    match format {
        OutputFormat::Pretty => Ok(format_segments_pretty(segments)),
        OutputFormat::Json => format_segments_json(segments),
    }
}
