use colored::{ColoredString, Colorize};

use crate::core::Clock;
use crate::list::TaskList;
use crate::task::{segments, FormatOptions, Priority, Segment, SegmentKind, Task};

fn priority_color(priority: Priority, text: &str) -> ColoredString {
    match priority.as_char() {
        'A' => text.red().bold(),
        'B' => text.yellow().bold(),
        'C' => text.green().bold(),
        _ => text.bold(),
    }
}

/// Color one segment of a task line.
fn paint<C: Clock + ?Sized>(task: &Task, segment: &Segment, clock: &C) -> ColoredString {
    let text = segment.display.as_str();
    match segment.kind {
        SegmentKind::IsCompleted => text.green(),
        SegmentKind::CompletedDate | SegmentKind::CreatedDate => text.dimmed(),
        SegmentKind::Priority => match task.priority {
            Some(priority) => priority_color(priority, text),
            None => text.normal(),
        },
        SegmentKind::TodoText if task.completed => text.dimmed(),
        SegmentKind::TodoText => text.normal(),
        SegmentKind::Context => text.cyan(),
        SegmentKind::Project => text.magenta(),
        SegmentKind::Tag => text.blue(),
        SegmentKind::DueDate if task.completed => text.dimmed(),
        SegmentKind::DueDate if task.is_overdue(clock) => text.red().bold(),
        SegmentKind::DueDate if task.is_due_today(clock) => text.yellow().bold(),
        SegmentKind::DueDate => text.yellow(),
    }
}

fn colored_line<C: Clock + ?Sized>(task: &Task, options: &FormatOptions, clock: &C) -> String {
    segments(task, options)
        .iter()
        .map(|segment| paint(task, segment, clock).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a list of tasks, one numbered line per task
pub fn format_tasks_pretty<C: Clock + ?Sized>(
    tasks: &TaskList,
    title: &str,
    options: &FormatOptions,
    clock: &C,
) -> String {
    if tasks.is_empty() {
        return format!("{title} (0 items)\n  No items");
    }

    let width = tasks.iter().map(|t| t.id).max().unwrap_or(0).to_string().len();

    let mut output = format!("{} ({} items)\n", title, tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        let id = format!("{:>width$}", task.id);
        output.push_str(&format!("{} {}\n", id.dimmed(), colored_line(task, options, clock)));
    }

    output
}

/// Format a single task after `action` was applied to it
pub fn format_task_pretty(task: &Task, action: &str, options: &FormatOptions) -> String {
    format!(
        "{} {}: {}",
        action.green().bold(),
        task.id,
        task.format(options)
    )
}

/// Format segments as an aligned `kind  display` table
pub fn format_segments_pretty(segments: &[Segment]) -> String {
    let width = segments
        .iter()
        .map(|s| s.kind.label().len())
        .max()
        .unwrap_or(0);

    segments
        .iter()
        .map(|s| format!("{:<width$}  {}", s.kind.label().dimmed(), s.display))
        .collect::<Vec<_>>()
        .join("\n")
}
