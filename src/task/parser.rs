//! todo.txt line parser.
//!
//! Parses lines like `x 2014-01-03 (B) 2014-01-01 Write docs @Go +lib due:2014-01-12`
//! into a [`Task`].
//!
//! Extraction runs as a fixed sequence of stages: completion marker, priority,
//! created date, contexts, projects and `key:value` tags. Every stage decides
//! whether it applies by looking at the trimmed source line, never at the
//! partially stripped todo text, then removes its own tokens from that text.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use super::model::{Priority, Task, DATE_LAYOUT};
use crate::error::ParseError;

// Line prefix patterns, matched against the source line
static COMPLETED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^x\s+").unwrap_or_else(|e| panic!("Invalid completed regex: {e}")));

static COMPLETED_DATE: Lazy<Regex> = Lazy::new(|| {
    // "x 2014-01-03 ..." - a date directly after the marker
    Regex::new(r"^x\s+(\d{4}-\d{2}-\d{2})(?:\s+|$)")
        .unwrap_or_else(|e| panic!("Invalid completed date regex: {e}"))
});

static PRIORITY: Lazy<Regex> = Lazy::new(|| {
    // "(A) ...", "x (A) ...", "x 2014-01-03 (A) ..."
    Regex::new(r"^(?:x\s+(?:\d{4}-\d{2}-\d{2}\s+)?)?\(([A-Z])\)(?:\s+|$)")
        .unwrap_or_else(|e| panic!("Invalid priority regex: {e}"))
});

static CREATED_DATE: Lazy<Regex> = Lazy::new(|| {
    // "2014-01-01 ...", "(A) 2014-01-01 ...", "x (A) 2014-01-01 ...",
    // "x 2014-01-03 2014-01-01 ...", "x 2014-01-03 (A) 2014-01-01 ..."
    Regex::new(
        r"^(?:\([A-Z]\)\s+|x\s+\d{4}-\d{2}-\d{2}\s+(?:\([A-Z]\)\s+)?|x\s+\([A-Z]\)\s+)?(\d{4}-\d{2}-\d{2})(?:\s+|$)",
    )
    .unwrap_or_else(|e| panic!("Invalid created date regex: {e}"))
});

// Patterns stripped from the front of the remaining todo text. A prefix may
// end the line, as in the canonical text of a task with empty todo text.
static LEADING_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}(?:\s+|$)")
        .unwrap_or_else(|e| panic!("Invalid date regex: {e}"))
});

static LEADING_PRIORITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\([A-Z]\)(?:\s+|$)").unwrap_or_else(|e| panic!("Invalid priority regex: {e}"))
});

// Whole-token patterns
static CONTEXT_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@(\S+)$").unwrap_or_else(|e| panic!("Invalid context regex: {e}")));

static PROJECT_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+(\S+)$").unwrap_or_else(|e| panic!("Invalid project regex: {e}"))
});

static TAG_TOKEN: Lazy<Regex> = Lazy::new(|| {
    // Exactly one colon: "not::tag" and "a:b:c" stay in the text
    Regex::new(r"^([\w-]+):([^:\s]+)$").unwrap_or_else(|e| panic!("Invalid tag regex: {e}"))
});

/// Tag key that is stored as the task's due date instead of a tag.
pub const DUE_TAG: &str = "due";

/// Parse a single todo.txt line into a [`Task`].
///
/// Surrounding whitespace is trimmed first; the trimmed line is kept as
/// [`Task::original`]. The task id is left at 0 and no created date is
/// invented when the line has none.
///
/// # Examples
///
/// ```
/// use todotxt::task::parse;
///
/// let task = parse("(A) Call Mom @Phone +Family").unwrap();
/// assert_eq!(task.todo, "Call Mom");
/// assert_eq!(task.contexts, vec!["Phone"]);
/// assert_eq!(task.projects, vec!["Family"]);
/// assert_eq!(task.to_string(), "(A) Call Mom @Phone +Family");
/// ```
///
/// # Errors
///
/// Returns the [`ParseError`] of the first stage whose date is malformed.
/// Nothing of the partially parsed task is returned in that case.
pub fn parse(text: &str) -> Result<Task, ParseError> {
    let original = text.trim();
    let mut remaining = original.to_string();
    let mut task = Task::default();

    // Completion marker, optionally followed by the completed date
    if COMPLETED.is_match(original) {
        task.completed = true;
        remaining = COMPLETED.replace(&remaining, "").into_owned();

        if let Some(token) = first_capture(&COMPLETED_DATE, original) {
            let date = parse_date(token).map_err(|source| ParseError::MalformedCompletionDate {
                token: token.to_string(),
                source,
            })?;
            task.completed_date = Some(date);
            remaining = LEADING_DATE.replace(&remaining, "").into_owned();
        }
        trace!("completed task, completed date {:?}", task.completed_date);
    }

    // Priority
    if let Some(letter) = first_capture(&PRIORITY, original) {
        task.priority = letter.chars().next().and_then(Priority::new);
        remaining = LEADING_PRIORITY.replace(&remaining, "").into_owned();
    }

    // Created date
    if let Some(token) = first_capture(&CREATED_DATE, original) {
        let date = parse_date(token).map_err(|source| ParseError::MalformedCreatedDate {
            token: token.to_string(),
            source,
        })?;
        task.created_date = Some(date);
        remaining = LEADING_DATE.replace(&remaining, "").into_owned();
    }

    // Contexts and projects
    task.contexts = collect_tokens(original, &CONTEXT_TOKEN);
    if task.has_contexts() {
        remaining = strip_tokens(&remaining, &CONTEXT_TOKEN);
    }

    task.projects = collect_tokens(original, &PROJECT_TOKEN);
    if task.has_projects() {
        remaining = strip_tokens(&remaining, &PROJECT_TOKEN);
    }

    // key:value tags, "due" becomes the due date
    let (due_date, tags) = extract_tags(original)?;
    if due_date.is_some() || !tags.is_empty() {
        remaining = strip_tokens(&remaining, &TAG_TOKEN);
    }
    task.due_date = due_date;
    task.additional_tags = tags;

    task.todo = remaining.trim().to_string();
    task.original = original.to_string();

    Ok(task)
}

/// Extract the due date and all other `key:value` tags from the line.
///
/// Tags are read left to right; a repeated key keeps its last value.
fn extract_tags(
    original: &str,
) -> Result<(Option<NaiveDate>, BTreeMap<String, String>), ParseError> {
    let mut due_date = None;
    let mut tags = BTreeMap::new();

    for caps in original.split_whitespace().filter_map(|word| TAG_TOKEN.captures(word)) {
        let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) else {
            continue;
        };

        if key.as_str() == DUE_TAG {
            let date = parse_date(value.as_str()).map_err(|source| ParseError::MalformedDueDate {
                token: value.as_str().to_string(),
                source,
            })?;
            due_date = Some(date);
        } else {
            tags.insert(key.as_str().to_string(), value.as_str().to_string());
        }
    }

    Ok((due_date, tags))
}

fn parse_date(token: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(token, DATE_LAYOUT)
}

fn first_capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Capture group 1 of every whitespace-separated token matching `pattern`,
/// in order of appearance.
fn collect_tokens(text: &str, pattern: &Regex) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|word| pattern.captures(word))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Remove every whitespace-separated token matching `pattern`.
fn strip_tokens(text: &str, pattern: &Regex) -> String {
    text.split_whitespace()
        .filter(|word| !pattern.is_match(word))
        .collect::<Vec<_>>()
        .join(" ")
}
