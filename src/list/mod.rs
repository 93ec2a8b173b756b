//! Task list container.
//!
//! [`TaskList`] owns the tasks of one todo.txt file, assigns their ids and
//! offers sorting ([`sort`]), filtering ([`filter`]) and file I/O ([`io`]).

pub mod filter;
pub mod io;
pub mod sort;

use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::error::TodoError;
use crate::task::Task;

pub use filter::Filter;
pub use sort::{SortField, SortKey, SortOrder};

/// An ordered list of tasks.
///
/// Dereferences to a slice of tasks for inspection and iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty task list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Append a task, assigning it the next free id.
    ///
    /// Ids are one more than the highest id in the list, so ids of removed
    /// tasks at the end of the list are reused.
    pub fn add_task(&mut self, mut task: Task) -> usize {
        let id = self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        task.id = id;
        self.tasks.push(task);
        id
    }

    /// Look up a task by id.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::NotFound` if no task has this id.
    pub fn get_task(&self, id: usize) -> Result<&Task, TodoError> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))
    }

    /// Look up a task by id for modification.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::NotFound` if no task has this id.
    pub fn get_task_mut(&mut self, id: usize) -> Result<&mut Task, TodoError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))
    }

    /// Remove the task with the given id and return it.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::NotFound` if no task has this id.
    pub fn remove_task_by_id(&mut self, id: usize) -> Result<Task, TodoError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    /// Consume the list and return its tasks.
    #[must_use]
    pub fn into_inner(self) -> Vec<Task> {
        self.tasks
    }
}

impl Deref for TaskList {
    type Target = [Task];

    fn deref(&self) -> &Self::Target {
        &self.tasks
    }
}

impl DerefMut for TaskList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.tasks
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TaskList {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.into_iter()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

/// One canonical line per task, each terminated by a newline.
impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for task in &self.tasks {
            writeln!(f, "{task}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::parse;

    fn list(lines: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for line in lines {
            list.add_task(parse(line).unwrap());
        }
        list
    }

    #[test]
    fn test_add_task_assigns_sequential_ids() {
        let list = list(&["(A) first", "second", "third"]);
        assert_eq!(list.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_add_task_after_gap() {
        let mut list = list(&["one", "two", "three"]);
        list.remove_task_by_id(2).unwrap();

        let id = list.add_task(parse("four").unwrap());
        assert_eq!(id, 4);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_get_task() {
        let list = list(&["one", "two"]);
        assert_eq!(list.get_task(2).unwrap().todo, "two");
        assert!(matches!(list.get_task(9), Err(TodoError::NotFound(9))));
    }

    #[test]
    fn test_get_task_mut() {
        let mut list = list(&["one"]);
        list.get_task_mut(1).unwrap().todo = "changed".to_string();
        assert_eq!(list[0].todo, "changed");
    }

    #[test]
    fn test_remove_task_by_id() {
        let mut list = list(&["one", "two", "three"]);
        let removed = list.remove_task_by_id(2).unwrap();

        assert_eq!(removed.todo, "two");
        assert_eq!(list.len(), 2);
        assert!(list.remove_task_by_id(2).is_err());
    }

    #[test]
    fn test_display_one_line_per_task() {
        let list = list(&["(A) Call Mom +Family @Phone", "x Done"]);
        assert_eq!(list.to_string(), "(A) Call Mom @Phone +Family\nx Done\n");
    }

    #[test]
    fn test_empty_list_displays_nothing() {
        assert_eq!(TaskList::new().to_string(), "");
    }

    #[test]
    fn test_serializes_as_array() {
        let list = list(&["one"]);
        let json = serde_json::to_value(&list).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["id"], 1);
    }
}
