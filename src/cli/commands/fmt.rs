use colored::Colorize;
use log::debug;
use serde::Serialize;

use super::Workspace;
use crate::cli::args::OutputFormat;
use crate::core::Clock;
use crate::error::TodoError;
use crate::list::TaskList;
use crate::output::to_json;

#[derive(Serialize)]
struct FmtReport {
    file: String,
    tasks: usize,
    canonical: bool,
    written: bool,
}

/// Execute fmt command
///
/// Without `check` the file is rewritten when it is not canonical. With
/// `check` nothing is written.
///
/// # Errors
///
/// Returns `TodoError::NotCanonical` when `check` is set and the file would
/// change, or an error if the file cannot be read, parsed or written.
pub fn fmt<C: Clock + ?Sized>(ws: &Workspace<'_, C>, check: bool) -> Result<String, TodoError> {
    let current = if ws.todo_file.exists() {
        std::fs::read_to_string(&ws.todo_file)?
    } else {
        String::new()
    };

    let tasks = TaskList::load_from_reader(current.as_bytes())?;
    let formatted: String = tasks
        .iter()
        .map(|task| format!("{}\n", task.format(&ws.config.format)))
        .collect();
    let canonical = formatted == current;
    debug!("{} canonical: {canonical}", ws.todo_file.display());

    if check && !canonical {
        return Err(TodoError::NotCanonical(ws.todo_file.clone()));
    }

    let written = !check && !canonical;
    if written {
        ws.save(&tasks)?;
    }

    let report = FmtReport {
        file: ws.todo_file.display().to_string(),
        tasks: tasks.len(),
        canonical,
        written,
    };

    match ws.format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Pretty if written => Ok(format!(
            "{} {} ({} tasks)",
            "Formatted".green().bold(),
            report.file,
            report.tasks
        )),
        OutputFormat::Pretty => Ok(format!("{} is already canonical", report.file)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::FixedClock;
    use tempfile::TempDir;

    const MESSY: &str = "(A) +Family Call   Mom\n\n   x Done   \n";

    fn workspace<'a>(dir: &TempDir, clock: &'a FixedClock, contents: &str) -> Workspace<'a, FixedClock> {
        let todo_file = dir.path().join("todo.txt");
        std::fs::write(&todo_file, contents).unwrap();
        Workspace {
            todo_file,
            config: Config::default(),
            format: OutputFormat::Json,
            clock,
        }
    }

    fn report(output: &str) -> serde_json::Value {
        serde_json::from_str(output).unwrap()
    }

    #[test]
    fn test_fmt_rewrites_file() {
        let dir = TempDir::new().unwrap();
        let clock = FixedClock::from_ymd(2024, 3, 9).unwrap();
        let ws = workspace(&dir, &clock, MESSY);

        let output = report(&fmt(&ws, false).unwrap());

        assert_eq!(output["tasks"], 2);
        assert_eq!(output["canonical"], false);
        assert_eq!(output["written"], true);
        assert_eq!(
            std::fs::read_to_string(&ws.todo_file).unwrap(),
            "(A) Call Mom +Family\nx Done\n"
        );
    }

    #[test]
    fn test_fmt_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let clock = FixedClock::from_ymd(2024, 3, 9).unwrap();
        let ws = workspace(&dir, &clock, MESSY);

        fmt(&ws, false).unwrap();
        let output = report(&fmt(&ws, false).unwrap());

        assert_eq!(output["canonical"], true);
        assert_eq!(output["written"], false);
    }

    #[test]
    fn test_fmt_check() {
        let dir = TempDir::new().unwrap();
        let clock = FixedClock::from_ymd(2024, 3, 9).unwrap();
        let ws = workspace(&dir, &clock, MESSY);

        assert!(matches!(fmt(&ws, true), Err(TodoError::NotCanonical(_))));
        assert_eq!(std::fs::read_to_string(&ws.todo_file).unwrap(), MESSY);

        std::fs::write(&ws.todo_file, "(A) Call Mom +Family\n").unwrap();
        assert_eq!(report(&fmt(&ws, true).unwrap())["canonical"], true);
    }

    #[test]
    fn test_fmt_reports_bad_line() {
        let dir = TempDir::new().unwrap();
        let clock = FixedClock::from_ymd(2024, 3, 9).unwrap();
        let ws = workspace(&dir, &clock, "ok\nx 2024-02-30 bad\n");

        assert!(matches!(fmt(&ws, false), Err(TodoError::Line { line: 2, .. })));
    }
}
