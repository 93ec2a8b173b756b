use super::Workspace;
use crate::core::Clock;
use crate::error::TodoError;
use crate::output::format_task;

/// Execute do command
///
/// Completing a task that is already completed keeps its completed date.
///
/// # Errors
///
/// Returns `TodoError::NotFound` if no task has this id, or an error if the
/// task file cannot be read or written.
pub fn complete<C: Clock + ?Sized>(ws: &Workspace<'_, C>, id: usize) -> Result<String, TodoError> {
    let mut tasks = ws.load()?;
    tasks.get_task_mut(id)?.complete(ws.clock);
    ws.save(&tasks)?;

    format_task(tasks.get_task(id)?, "Completed", &ws.config.format, ws.format)
}

/// Execute reopen command
///
/// # Errors
///
/// Returns `TodoError::NotFound` if no task has this id, or an error if the
/// task file cannot be read or written.
pub fn reopen<C: Clock + ?Sized>(ws: &Workspace<'_, C>, id: usize) -> Result<String, TodoError> {
    let mut tasks = ws.load()?;
    tasks.get_task_mut(id)?.reopen();
    ws.save(&tasks)?;

    format_task(tasks.get_task(id)?, "Reopened", &ws.config.format, ws.format)
}

/// Execute rm command
///
/// Ids of the remaining tasks change on the next load, since they follow
/// line order.
///
/// # Errors
///
/// Returns `TodoError::NotFound` if no task has this id, or an error if the
/// task file cannot be read or written.
pub fn remove<C: Clock + ?Sized>(ws: &Workspace<'_, C>, id: usize) -> Result<String, TodoError> {
    let mut tasks = ws.load()?;
    let task = tasks.remove_task_by_id(id)?;
    ws.save(&tasks)?;

    format_task(&task, "Removed", &ws.config.format, ws.format)
}
