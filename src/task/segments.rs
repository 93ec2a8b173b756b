//! Canonical todo.txt rendering of a task.
//!
//! A task is rendered as an ordered list of [`Segment`]s: completion marker,
//! completed date, priority, created date, todo text, contexts, projects,
//! tags and due date. Contexts, projects and tags are sorted for display only;
//! the task itself keeps their source order.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::model::{Task, DATE_LAYOUT};
use super::parser::DUE_TAG;

/// Prefix of a context token.
pub const CONTEXT_PREFIX: char = '@';
/// Prefix of a project token.
pub const PROJECT_PREFIX: char = '+';

/// Kind of a rendered segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    IsCompleted,
    CompletedDate,
    Priority,
    CreatedDate,
    TodoText,
    Context,
    Project,
    Tag,
    DueDate,
}

impl SegmentKind {
    /// Human-readable label of the kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::IsCompleted => "IsCompleted",
            Self::CompletedDate => "CompletedDate",
            Self::Priority => "Priority",
            Self::CreatedDate => "CreatedDate",
            Self::TodoText => "TodoText",
            Self::Context => "Context",
            Self::Project => "Project",
            Self::Tag => "Tag",
            Self::DueDate => "DueDate",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One rendered piece of a task line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Values the segment was built from, e.g. `["hello", "world"]` for a tag.
    pub originals: Vec<String>,
    /// Text of the segment in the canonical line.
    pub display: String,
}

/// Rendering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Leave the priority out of completed tasks.
    pub remove_completed_priority: bool,
}

#[derive(Default)]
struct SegmentBuilder {
    segments: Vec<Segment>,
}

impl SegmentBuilder {
    fn push(&mut self, kind: SegmentKind, original: impl Into<String>, display: impl Into<String>) {
        self.segments.push(Segment {
            kind,
            originals: vec![original.into()],
            display: display.into(),
        });
    }

    fn push_plain(&mut self, kind: SegmentKind, text: impl Into<String>) {
        let text = text.into();
        self.push(kind, text.clone(), text);
    }

    fn push_tag(&mut self, key: &str, value: &str) {
        self.segments.push(Segment {
            kind: SegmentKind::Tag,
            originals: vec![key.to_string(), value.to_string()],
            display: format!("{key}:{value}"),
        });
    }

    fn completion(&mut self, task: &Task) {
        if !task.completed {
            return;
        }
        self.push_plain(SegmentKind::IsCompleted, "x");
        if let Some(date) = task.completed_date {
            self.push_plain(SegmentKind::CompletedDate, date.format(DATE_LAYOUT).to_string());
        }
    }

    fn priority(&mut self, task: &Task, options: &FormatOptions) {
        let Some(priority) = task.priority else {
            return;
        };
        if !task.completed || !options.remove_completed_priority {
            self.push(SegmentKind::Priority, priority.to_string(), format!("({priority})"));
        }
    }

    fn created_date(&mut self, task: &Task) {
        if let Some(date) = task.created_date {
            self.push_plain(SegmentKind::CreatedDate, date.format(DATE_LAYOUT).to_string());
        }
    }

    fn todo_text(&mut self, task: &Task) {
        self.push_plain(SegmentKind::TodoText, task.todo.clone());
    }

    fn sorted_tokens(&mut self, kind: SegmentKind, prefix: char, tokens: &[String]) {
        let mut sorted: Vec<&String> = tokens.iter().collect();
        sorted.sort();
        for token in sorted {
            self.push(kind, token.clone(), format!("{prefix}{token}"));
        }
    }

    fn tags(&mut self, task: &Task) {
        // BTreeMap iterates in key order
        for (key, value) in &task.additional_tags {
            self.push_tag(key, value);
        }
    }

    fn due_date(&mut self, task: &Task) {
        if let Some(date) = task.due_date {
            let token = format!("{DUE_TAG}:{}", date.format(DATE_LAYOUT));
            self.push_plain(SegmentKind::DueDate, token);
        }
    }
}

/// Build the display segments of `task` in canonical order.
///
/// Absent parts produce no segment. The todo text is always emitted, even
/// when empty.
#[must_use]
pub fn segments(task: &Task, options: &FormatOptions) -> Vec<Segment> {
    let mut builder = SegmentBuilder::default();

    builder.completion(task);
    builder.priority(task, options);
    builder.created_date(task);
    builder.todo_text(task);
    builder.sorted_tokens(SegmentKind::Context, CONTEXT_PREFIX, &task.contexts);
    builder.sorted_tokens(SegmentKind::Project, PROJECT_PREFIX, &task.projects);
    builder.tags(task);
    builder.due_date(task);

    builder.segments
}

/// Render `task` as a canonical todo.txt line.
///
/// Segments are joined with single spaces. The todo text segment is kept
/// even when empty, so a task without text yields a doubled space between
/// its neighbours (`x  @Phone`) or a trailing space (`2023-10-27 `).
#[must_use]
pub fn format(task: &Task, options: &FormatOptions) -> String {
    segments(task, options)
        .iter()
        .map(|segment| segment.display.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use crate::task::{parse, Priority};

    fn canonical(line: &str) -> String {
        format(&parse(line).unwrap(), &FormatOptions::default())
    }

    fn kinds(task: &Task) -> Vec<SegmentKind> {
        segments(task, &FormatOptions::default())
            .iter()
            .map(|s| s.kind)
            .collect()
    }

    #[test]
    fn test_simple_roundtrip() {
        assert_eq!(canonical("(A) Call Mom @Phone +Family"), "(A) Call Mom @Phone +Family");
    }

    #[test]
    fn test_completed_roundtrip() {
        assert_eq!(
            canonical("x Download Todo.txt mobile app @Phone"),
            "x Download Todo.txt mobile app @Phone"
        );
    }

    #[test]
    fn test_canonical_order() {
        assert_eq!(
            canonical(
                "x (C) 2014-01-01 @Go due:2014-01-12 Create golang library documentation +go-todotxt  hello:world not::tag"
            ),
            "x (C) 2014-01-01 Create golang library documentation not::tag @Go +go-todotxt hello:world due:2014-01-12"
        );
    }

    #[test]
    fn test_golden_lines() {
        for (line, expected) in [
            ("2013-02-22 Pick up milk @GroceryStore", "2013-02-22 Pick up milk @GroceryStore"),
            (
                "(B) 2013-12-01 private:false Outline chapter 5 +Novel @Computer Level:5 due:2014-02-17",
                "(B) 2013-12-01 Outline chapter 5 @Computer +Novel Level:5 private:false due:2014-02-17",
            ),
            (
                "x 2014-01-02 (B) 2013-12-30 Create golang library test cases @Go +go-todotxt",
                "x 2014-01-02 (B) 2013-12-30 Create golang library test cases @Go +go-todotxt",
            ),
            (
                "x 2014-01-03 2014-01-01 Create some more golang library test cases @Go +go-todotxt",
                "x 2014-01-03 2014-01-01 Create some more golang library test cases @Go +go-todotxt",
            ),
        ] {
            assert_eq!(canonical(line), expected, "canonical form of {line:?}");
        }
    }

    #[test]
    fn test_sorting_is_display_only() {
        let task = parse("Plan @Zoo @Airport +Beta +Alpha").unwrap();
        assert_eq!(format(&task, &FormatOptions::default()), "Plan @Airport @Zoo +Alpha +Beta");
        assert_eq!(task.contexts, vec!["Zoo", "Airport"]);
        assert_eq!(task.projects, vec!["Beta", "Alpha"]);
    }

    #[test]
    fn test_duplicate_contexts_are_rendered() {
        assert_eq!(canonical("Task @b @a @b"), "Task @a @b @b");
    }

    #[test]
    fn test_remove_completed_priority() {
        let task = parse("x (A) Done already").unwrap();
        let keep = FormatOptions::default();
        let remove = FormatOptions {
            remove_completed_priority: true,
        };

        assert_eq!(format(&task, &keep), "x (A) Done already");
        assert_eq!(format(&task, &remove), "x Done already");

        let open = parse("(A) Not done").unwrap();
        assert_eq!(format(&open, &remove), "(A) Not done");
    }

    #[test]
    fn test_completed_date_needs_completed_flag() {
        let mut task = parse("x 2014-01-02 Finished").unwrap();
        task.completed = false;
        assert_eq!(format(&task, &FormatOptions::default()), "Finished");
    }

    #[test]
    fn test_empty_todo_still_emits_segment() {
        let task = parse("@Phone").unwrap();
        assert_eq!(kinds(&task), vec![SegmentKind::TodoText, SegmentKind::Context]);
        assert_eq!(format(&task, &FormatOptions::default()), " @Phone");
    }

    #[test]
    fn test_segment_originals() {
        let task = parse("(A) 2020-01-01 Call @Phone +Family who:mom due:2020-02-01").unwrap();
        let segs = segments(&task, &FormatOptions::default());

        assert_eq!(
            segs.iter().map(|s| s.kind).collect::<Vec<_>>(),
            vec![
                SegmentKind::Priority,
                SegmentKind::CreatedDate,
                SegmentKind::TodoText,
                SegmentKind::Context,
                SegmentKind::Project,
                SegmentKind::Tag,
                SegmentKind::DueDate,
            ]
        );
        assert_eq!(segs[0].originals, vec!["A"]);
        assert_eq!(segs[0].display, "(A)");
        assert_eq!(segs[3].originals, vec!["Phone"]);
        assert_eq!(segs[3].display, "@Phone");
        assert_eq!(segs[5].originals, vec!["who", "mom"]);
        assert_eq!(segs[5].display, "who:mom");
        assert_eq!(segs[6].originals, vec!["due:2020-02-01"]);
        assert_eq!(segs[6].display, "due:2020-02-01");
    }

    #[test]
    fn test_new_task_formats_created_date() {
        let mut task = Task::new(&FixedClock::from_ymd(2023, 10, 27).unwrap());
        task.todo = "Write report".to_string();
        task.priority = Priority::new('B');
        assert_eq!(task.to_string(), "(B) 2023-10-27 Write report");

        task.complete(&FixedClock::from_ymd(2023, 10, 28).unwrap());
        assert_eq!(task.to_string(), "x 2023-10-28 (B) 2023-10-27 Write report");
    }

    #[test]
    fn test_empty_todo_between_segments_leaves_double_space() {
        let task = parse("x @Phone").unwrap();
        assert_eq!(task.todo, "");
        assert_eq!(format(&task, &FormatOptions::default()), "x  @Phone");
        assert_eq!(canonical("x  @Phone"), "x  @Phone");
    }

    #[test]
    fn test_empty_new_task_survives_reparse() {
        let task = Task::new(&FixedClock::from_ymd(2023, 10, 27).unwrap());
        let line = task.to_string();
        assert_eq!(line, "2023-10-27 ");

        let reparsed = parse(&line).unwrap();
        assert_eq!(reparsed.created_date, task.created_date);
        assert_eq!(reparsed.todo, "");
        assert_eq!(reparsed.to_string(), line);

        let mut done = task;
        done.complete(&FixedClock::from_ymd(2023, 10, 28).unwrap());
        let line = done.to_string();
        assert_eq!(line, "x 2023-10-28 2023-10-27 ");

        let reparsed = parse(&line).unwrap();
        assert!(reparsed.completed);
        assert_eq!(reparsed.completed_date, done.completed_date);
        assert_eq!(reparsed.created_date, done.created_date);
        assert_eq!(reparsed.todo, "");
    }

    #[test]
    fn test_empty_task_with_priority_survives_reparse() {
        let mut task = Task::new(&FixedClock::from_ymd(2023, 10, 27).unwrap());
        task.priority = Priority::new('A');

        let reparsed = parse(&task.to_string()).unwrap();
        assert_eq!(reparsed.priority, Priority::new('A'));
        assert_eq!(reparsed.created_date, task.created_date);
        assert_eq!(reparsed.todo, "");
    }

    #[test]
    fn test_idempotent() {
        for line in [
            "x (C) 2014-01-01 @Go due:2014-01-12 Create docs +go-todotxt  hello:world not::tag",
            "Plan @Zoo @Airport +Beta +Alpha b:2 a:1",
            "2013-02-22   spaced    out   text",
            "x 2014-01-03 2014-01-01 done",
        ] {
            let once = canonical(line);
            assert_eq!(canonical(&once), once, "formatting {line:?} is not stable");
        }
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(SegmentKind::IsCompleted.to_string(), "IsCompleted");
        assert_eq!(SegmentKind::CompletedDate.label(), "CompletedDate");
        assert_eq!(SegmentKind::DueDate.to_string(), "DueDate");
    }
}
