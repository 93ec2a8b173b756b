//! The task data model.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::parser;
use super::segments::{self, FormatOptions, Segment};
use crate::core::Clock;
use crate::error::{ParseError, TodoError};

/// `chrono` layout of every date in the todo.txt format (`YYYY-MM-DD`).
pub const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Task priority, a single uppercase letter from `A` (highest) to `Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Priority(char);

impl Priority {
    /// Create a priority from a letter.
    ///
    /// Returns `None` unless `letter` is in `A..=Z`.
    #[must_use]
    pub const fn new(letter: char) -> Option<Self> {
        if letter.is_ascii_uppercase() {
            Some(Self(letter))
        } else {
            None
        }
    }

    /// The priority letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Priority {
    type Error = String;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Self::new(letter).ok_or_else(|| format!("invalid priority '{letter}', expected A-Z"))
    }
}

impl From<Priority> for char {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl FromStr for Priority {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                Self::try_from(letter.to_ascii_uppercase()).map_err(TodoError::InvalidArgument)
            },
            _ => Err(TodoError::InvalidArgument(format!(
                "invalid priority '{s}', expected A-Z"
            ))),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo.txt task.
///
/// Contexts (`@Phone`) say where or in which situation the task can be done,
/// projects (`+Family`) group related tasks. Both keep the order in which they
/// appeared in the source line; only the canonical text sorts them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identifier assigned by the containing [`TaskList`](crate::list::TaskList).
    pub id: usize,
    /// Trimmed source line, empty for tasks built in code.
    pub(crate) original: String,
    /// Free text left after all structured tokens are removed.
    pub todo: String,
    /// Completion flag.
    pub completed: bool,
    /// Date the task was completed, only meaningful while `completed` is set.
    #[serde(default)]
    pub completed_date: Option<NaiveDate>,
    /// Date the task was created.
    #[serde(default)]
    pub created_date: Option<NaiveDate>,
    /// Date taken from the `due:` tag.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub contexts: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    /// `key:value` tags other than `due`.
    #[serde(default)]
    pub additional_tags: BTreeMap<String, String>,
}

impl Task {
    /// Create an empty task whose created date is today according to `clock`.
    #[must_use]
    pub fn new<C: Clock + ?Sized>(clock: &C) -> Self {
        Self {
            created_date: Some(clock.today()),
            ..Self::default()
        }
    }

    /// Parse one line of todo.txt text.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] naming the stage whose date token is malformed.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parser::parse(text)
    }

    /// The trimmed source line this task was parsed from.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    // ------------------------------------------------------------------
    //  Status
    // ------------------------------------------------------------------

    /// Mark the task completed today.
    ///
    /// Does nothing if the task is already completed, so an existing
    /// completed date is never overwritten.
    pub fn complete<C: Clock + ?Sized>(&mut self, clock: &C) {
        if !self.completed {
            self.completed = true;
            self.completed_date = Some(clock.today());
        }
    }

    /// Reopen a completed task, clearing its completed date.
    pub fn reopen(&mut self) {
        if self.completed {
            self.completed = false;
            self.completed_date = None;
        }
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    // ------------------------------------------------------------------
    //  Attributes
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn has_priority(&self) -> bool {
        self.priority.is_some()
    }

    #[must_use]
    pub fn has_contexts(&self) -> bool {
        !self.contexts.is_empty()
    }

    #[must_use]
    pub fn has_projects(&self) -> bool {
        !self.projects.is_empty()
    }

    #[must_use]
    pub fn has_additional_tags(&self) -> bool {
        !self.additional_tags.is_empty()
    }

    // ------------------------------------------------------------------
    //  Dates
    // ------------------------------------------------------------------

    /// True when the task is completed and carries a completed date.
    #[must_use]
    pub const fn has_completed_date(&self) -> bool {
        self.completed && self.completed_date.is_some()
    }

    #[must_use]
    pub const fn has_created_date(&self) -> bool {
        self.created_date.is_some()
    }

    #[must_use]
    pub const fn has_due_date(&self) -> bool {
        self.due_date.is_some()
    }

    /// Days from today until the due date; negative when overdue.
    ///
    /// The completion flag is not taken into account.
    #[must_use]
    pub fn days_until_due<C: Clock + ?Sized>(&self, clock: &C) -> Option<i64> {
        self.due_date
            .map(|due| due.signed_duration_since(clock.today()).num_days())
    }

    /// True when the due date lies before today.
    #[must_use]
    pub fn is_overdue<C: Clock + ?Sized>(&self, clock: &C) -> bool {
        self.days_until_due(clock).is_some_and(|days| days < 0)
    }

    /// True when the task is due today.
    #[must_use]
    pub fn is_due_today<C: Clock + ?Sized>(&self, clock: &C) -> bool {
        self.days_until_due(clock) == Some(0)
    }

    // ------------------------------------------------------------------
    //  Formatting
    // ------------------------------------------------------------------

    /// The display segments of this task in canonical order.
    #[must_use]
    pub fn segments(&self, options: &FormatOptions) -> Vec<Segment> {
        segments::segments(self, options)
    }

    /// The canonical todo.txt line for this task.
    #[must_use]
    pub fn format(&self, options: &FormatOptions) -> String {
        segments::format(self, options)
    }
}

impl FromStr for Task {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&FormatOptions::default()))
    }
}
