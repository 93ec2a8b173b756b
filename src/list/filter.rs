//! Predicate filtering of task lists.
//!
//! Filters passed together to [`TaskList::filter`] are OR-combined; chaining
//! two `filter` calls AND-combines them.
//!
//! # Syntax
//!
//! ```text
//! completed | done        completed tasks
//! open | pending          tasks not completed
//! pri                     tasks with any priority
//! pri:A                   tasks with priority A
//! @Phone                  tasks with context Phone
//! +Family                 tasks with project Family
//! due                     tasks with a due date
//! overdue                 due date before today
//! today                   due today
//! !<filter>               negation, e.g. !completed
//! ```

use std::str::FromStr;

use crate::core::Clock;
use crate::error::TodoError;
use crate::list::TaskList;
use crate::task::{Priority, Task, CONTEXT_PREFIX, PROJECT_PREFIX};

/// A predicate over tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Completed,
    NotCompleted,
    HasPriority,
    Priority(Priority),
    Context(String),
    Project(String),
    HasDueDate,
    /// Due date before today.
    Overdue,
    DueToday,
    Not(Box<Filter>),
}

impl Filter {
    /// Negate this filter.
    #[must_use]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Evaluate the filter; due date filters read today from `clock`.
    pub fn matches<C: Clock + ?Sized>(&self, task: &Task, clock: &C) -> bool {
        match self {
            Self::Completed => task.completed,
            Self::NotCompleted => !task.completed,
            Self::HasPriority => task.has_priority(),
            Self::Priority(priority) => task.priority == Some(*priority),
            Self::Context(context) => task.contexts.iter().any(|c| c == context),
            Self::Project(project) => task.projects.iter().any(|p| p == project),
            Self::HasDueDate => task.has_due_date(),
            Self::Overdue => task.is_overdue(clock),
            Self::DueToday => task.is_due_today(clock),
            Self::Not(inner) => !inner.matches(task, clock),
        }
    }
}

impl FromStr for Filter {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(inner) = s.strip_prefix('!') {
            return Ok(inner.parse::<Self>()?.not());
        }
        if let Some(context) = s.strip_prefix(CONTEXT_PREFIX).filter(|c| !c.is_empty()) {
            return Ok(Self::Context(context.to_string()));
        }
        if let Some(project) = s.strip_prefix(PROJECT_PREFIX).filter(|p| !p.is_empty()) {
            return Ok(Self::Project(project.to_string()));
        }

        let lower = s.to_lowercase();
        if let Some(letter) = lower.strip_prefix("pri:") {
            return Ok(Self::Priority(letter.parse()?));
        }

        match lower.as_str() {
            "completed" | "done" => Ok(Self::Completed),
            "open" | "pending" => Ok(Self::NotCompleted),
            "pri" | "priority" => Ok(Self::HasPriority),
            "due" => Ok(Self::HasDueDate),
            "overdue" => Ok(Self::Overdue),
            "today" => Ok(Self::DueToday),
            _ => Err(TodoError::InvalidArgument(format!("unknown filter '{s}'"))),
        }
    }
}

impl TaskList {
    /// Tasks matching any of `filters`, in list order.
    ///
    /// An empty filter slice keeps every task.
    #[must_use]
    pub fn filter<C: Clock + ?Sized>(&self, filters: &[Filter], clock: &C) -> Self {
        if filters.is_empty() {
            return self.clone();
        }
        self.filter_by(|task| filters.iter().any(|f| f.matches(task, clock)))
    }

    /// Tasks for which `predicate` returns true, in list order.
    #[must_use]
    pub fn filter_by<P>(&self, predicate: P) -> Self
    where
        P: Fn(&Task) -> bool,
    {
        self.iter().filter(|task| predicate(task)).cloned().collect()
    }
}
