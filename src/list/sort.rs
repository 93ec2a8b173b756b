//! Multi-key sorting of task lists.
//!
//! Sort keys are written as a field name, optionally prefixed with `-` or
//! suffixed with `:desc` for descending order:
//!
//! ```text
//! priority            highest priority first, tasks without priority last
//! -due                latest due date first
//! project:asc         by sorted project names
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::TodoError;
use crate::list::TaskList;
use crate::task::Task;

/// Task field a list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Todo,
    Priority,
    CreatedDate,
    CompletedDate,
    DueDate,
    Context,
    Project,
}

impl SortField {
    const fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Todo => "todo",
            Self::Priority => "priority",
            Self::CreatedDate => "created",
            Self::CompletedDate => "completed",
            Self::DueDate => "due",
            Self::Context => "context",
            Self::Project => "project",
        }
    }

    /// Ascending comparison; tasks missing the field sort last.
    fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Todo => a.todo.cmp(&b.todo),
            Self::Priority => present_first(a.priority, b.priority),
            Self::CreatedDate => present_first(a.created_date, b.created_date),
            Self::CompletedDate => present_first(
                a.completed_date.filter(|_| a.completed),
                b.completed_date.filter(|_| b.completed),
            ),
            Self::DueDate => present_first(a.due_date, b.due_date),
            Self::Context => present_first(sorted(&a.contexts), sorted(&b.contexts)),
            Self::Project => present_first(sorted(&a.projects), sorted(&b.projects)),
        }
    }
}

impl FromStr for SortField {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "todo" | "text" => Ok(Self::Todo),
            "priority" | "pri" => Ok(Self::Priority),
            "created" | "created-date" => Ok(Self::CreatedDate),
            "completed" | "completed-date" => Ok(Self::CompletedDate),
            "due" | "due-date" => Ok(Self::DueDate),
            "context" | "contexts" => Ok(Self::Context),
            "project" | "projects" => Ok(Self::Project),
            other => Err(TodoError::InvalidArgument(format!("unknown sort field '{other}'"))),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// A field and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortKey {
    #[must_use]
    pub const fn asc(field: SortField) -> Self {
        Self {
            field,
            order: SortOrder::Asc,
        }
    }

    #[must_use]
    pub const fn desc(field: SortField) -> Self {
        Self {
            field,
            order: SortOrder::Desc,
        }
    }

    /// Compare two tasks by this key. Descending is the exact reverse of
    /// ascending.
    #[must_use]
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let ordering = self.field.compare(a, b);
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortKey {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(field) = s.strip_prefix('-') {
            return Ok(Self::desc(field.parse()?));
        }

        match s.split_once(':') {
            Some((field, order)) => {
                let field = field.parse()?;
                match order.trim().to_lowercase().as_str() {
                    "asc" => Ok(Self::asc(field)),
                    "desc" => Ok(Self::desc(field)),
                    other => Err(TodoError::InvalidArgument(format!(
                        "unknown sort order '{other}', expected asc or desc"
                    ))),
                }
            },
            None => Ok(Self::asc(s.parse()?)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.order {
            SortOrder::Asc => f.write_str(self.field.name()),
            SortOrder::Desc => write!(f, "-{}", self.field.name()),
        }
    }
}

impl TaskList {
    /// Sort by several keys.
    ///
    /// Ties on one key are broken by the next; tasks equal on every key keep
    /// their relative order.
    pub fn sort(&mut self, keys: &[SortKey]) {
        self.sort_by(|a, b| {
            keys.iter()
                .fold(Ordering::Equal, |ordering, key| ordering.then_with(|| key.compare(a, b)))
        });
    }

    /// Stable sort with a caller supplied comparator.
    pub fn custom_sort<F>(&mut self, compare: F)
    where
        F: FnMut(&Task, &Task) -> Ordering,
    {
        self.sort_by(compare);
    }
}

fn present_first<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn sorted(tokens: &[String]) -> Option<Vec<&str>> {
    if tokens.is_empty() {
        return None;
    }
    let mut sorted: Vec<&str> = tokens.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    Some(sorted)
}
