//! Loading and saving todo.txt files.
//!
//! One task per line. Blank lines are skipped on load; ids are assigned from 1
//! in file order.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::TodoError;
use crate::list::TaskList;
use crate::task::{parse, FormatOptions};

impl TaskList {
    /// Read tasks from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Io` if reading fails, or `TodoError::Line` with the
    /// 1-based line number of the first line that cannot be parsed.
    pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Self, TodoError> {
        let mut list = Self::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let task = parse(&line).map_err(|source| {
                debug!("failed to parse line {}: {source}", index + 1);
                TodoError::Line {
                    line: index + 1,
                    source,
                }
            })?;
            list.add_task(task);
        }

        Ok(list)
    }

    /// Read tasks from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or a line cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, TodoError> {
        let file = File::open(path)?;
        let list = Self::load_from_reader(BufReader::new(file))?;
        debug!("loaded {} tasks from {}", list.len(), path.display());
        Ok(list)
    }

    /// Write every task as a canonical line.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Io` if writing fails.
    pub fn write_to_writer<W: Write>(
        &self,
        mut writer: W,
        options: &FormatOptions,
    ) -> Result<(), TodoError> {
        for task in self.iter() {
            writeln!(writer, "{}", task.format(options))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write every task as a canonical line, replacing the file.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Io` if the file cannot be created or written.
    pub fn write_to_path(&self, path: &Path, options: &FormatOptions) -> Result<(), TodoError> {
        let file = File::create(path)?;
        self.write_to_writer(BufWriter::new(file), options)?;
        debug!("saved {} tasks to {}", self.len(), path.display());
        Ok(())
    }
}
