use log::debug;

use super::Workspace;
use crate::core::Clock;
use crate::error::TodoError;
use crate::output::format_task;
use crate::task::parse;

/// Execute add command
///
/// # Errors
///
/// Returns an error if the text cannot be parsed or the task file cannot be
/// read or written.
pub fn add<C: Clock + ?Sized>(ws: &Workspace<'_, C>, text: &str) -> Result<String, TodoError> {
    let mut task = parse(text)?;
    if ws.config.add.auto_created_date && !task.has_created_date() {
        task.created_date = Some(ws.clock.today());
    }

    let mut tasks = ws.load()?;
    let id = tasks.add_task(task);
    ws.save(&tasks)?;
    debug!("added task {id} to {}", ws.todo_file.display());

    format_task(tasks.get_task(id)?, "Added", &ws.config.format, ws.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::OutputFormat;
    use crate::config::Config;
    use crate::core::FixedClock;
    use tempfile::TempDir;

    fn workspace<'a>(dir: &TempDir, clock: &'a FixedClock) -> Workspace<'a, FixedClock> {
        Workspace {
            todo_file: dir.path().join("todo.txt"),
            config: Config::default(),
            format: OutputFormat::Pretty,
            clock,
        }
    }

    #[test]
    fn test_add_stamps_created_date() {
        let dir = TempDir::new().unwrap();
        let clock = FixedClock::from_ymd(2024, 3, 9).unwrap();
        let ws = workspace(&dir, &clock);

        let output = add(&ws, "(A) Call Mom +Family @Phone").unwrap();

        assert!(output.contains("1: (A) 2024-03-09 Call Mom @Phone +Family"));
        assert_eq!(
            std::fs::read_to_string(&ws.todo_file).unwrap(),
            "(A) 2024-03-09 Call Mom @Phone +Family\n"
        );
    }

    #[test]
    fn test_add_keeps_existing_created_date() {
        let dir = TempDir::new().unwrap();
        let clock = FixedClock::from_ymd(2024, 3, 9).unwrap();
        let ws = workspace(&dir, &clock);

        add(&ws, "2020-01-01 Old task").unwrap();
        assert_eq!(std::fs::read_to_string(&ws.todo_file).unwrap(), "2020-01-01 Old task\n");
    }

    #[test]
    fn test_add_without_auto_date() {
        let dir = TempDir::new().unwrap();
        let clock = FixedClock::from_ymd(2024, 3, 9).unwrap();
        let mut ws = workspace(&dir, &clock);
        ws.config.add.auto_created_date = false;

        add(&ws, "First").unwrap();
        let output = add(&ws, "Second").unwrap();

        assert!(output.contains("2: Second"));
        assert_eq!(std::fs::read_to_string(&ws.todo_file).unwrap(), "First\nSecond\n");
    }

    #[test]
    fn test_add_rejects_bad_date() {
        let dir = TempDir::new().unwrap();
        let clock = FixedClock::from_ymd(2024, 3, 9).unwrap();
        let ws = workspace(&dir, &clock);

        assert!(matches!(add(&ws, "Pay due:2024-02-30"), Err(TodoError::Parse(_))));
        assert!(!ws.todo_file.exists());
    }
}
