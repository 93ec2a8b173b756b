//! JSON output formatting for todotxt.
//!
//! Tasks are emitted with their parsed fields plus a `line` holding the
//! canonical todo.txt text.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::TodoError;
use crate::list::TaskList;
use crate::task::{FormatOptions, Segment, Task};

fn task_value(task: &Task, options: &FormatOptions) -> Result<Value, TodoError> {
    let mut value = serde_json::to_value(task)?;
    if let Value::Object(map) = &mut value {
        map.insert("line".to_string(), Value::String(task.format(options)));
    }
    Ok(value)
}

/// Format tasks as JSON
///
/// # Errors
///
/// Returns `TodoError::Json` if JSON serialization fails.
pub fn format_tasks_json(
    tasks: &TaskList,
    list_name: &str,
    options: &FormatOptions,
) -> Result<String, TodoError> {
    let items = tasks
        .iter()
        .map(|task| task_value(task, options))
        .collect::<Result<Vec<_>, _>>()?;

    let output = json!({
        "list": list_name,
        "count": items.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single task as JSON, tagged with the action that produced it
///
/// # Errors
///
/// Returns `TodoError::Json` if JSON serialization fails.
pub fn format_task_json(
    task: &Task,
    action: &str,
    options: &FormatOptions,
) -> Result<String, TodoError> {
    let output = json!({
        "action": action,
        "task": task_value(task, options)?
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format segments as JSON
///
/// # Errors
///
/// Returns `TodoError::Json` if JSON serialization fails.
pub fn format_segments_json(segments: &[Segment]) -> Result<String, TodoError> {
    let output = json!({
        "count": segments.len(),
        "items": segments
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TodoError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TodoError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{parse, segments};

    fn sample() -> TaskList {
        let mut list = TaskList::new();
        list.add_task(parse("(A) 2020-01-01 Call Mom @Phone +Family due:2020-02-01").unwrap());
        list.add_task(parse("x 2020-01-05 Done").unwrap());
        list
    }

    #[test]
    fn test_format_tasks_json() {
        let output = format_tasks_json(&sample(), "Tasks", &FormatOptions::default()).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["list"], "Tasks");
        assert_eq!(parsed["count"], 2);
        assert_eq!(parsed["items"][0]["id"], 1);
        assert_eq!(parsed["items"][0]["todo"], "Call Mom");
        assert_eq!(parsed["items"][0]["priority"], "A");
        assert_eq!(parsed["items"][0]["dueDate"], "2020-02-01");
        assert_eq!(parsed["items"][0]["contexts"][0], "Phone");
        assert_eq!(
            parsed["items"][0]["line"],
            "(A) 2020-01-01 Call Mom @Phone +Family due:2020-02-01"
        );
        assert_eq!(parsed["items"][1]["completed"], true);
        assert_eq!(parsed["items"][1]["completedDate"], "2020-01-05");
    }

    #[test]
    fn test_format_tasks_json_empty() {
        let output = format_tasks_json(&TaskList::new(), "Tasks", &FormatOptions::default()).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["count"], 0);
        assert!(parsed["items"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_format_task_json() {
        let list = sample();
        let output = format_task_json(&list[1], "completed", &FormatOptions::default()).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["action"], "completed");
        assert_eq!(parsed["task"]["id"], 2);
        assert_eq!(parsed["task"]["line"], "x 2020-01-05 Done");
    }

    #[test]
    fn test_format_segments_json() {
        let task = parse("(B) Write who:me").unwrap();
        let output =
            format_segments_json(&segments(&task, &FormatOptions::default())).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["count"], 3);
        assert_eq!(parsed["items"][0]["kind"], "Priority");
        assert_eq!(parsed["items"][0]["display"], "(B)");
        assert_eq!(parsed["items"][2]["kind"], "Tag");
        assert_eq!(parsed["items"][2]["originals"][1], "me");
    }

    #[test]
    fn test_to_json() {
        let output = to_json(&vec!["a", "b"]).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[1], "b");
    }
}
