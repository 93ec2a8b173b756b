//! todotxt - a todo.txt task library and command-line tool
//!
//! Parses todo.txt lines into structured [`Task`]s, renders them back in a
//! canonical form, and manages whole task files through [`TaskList`].
//!
//! ```
//! use todotxt::task::{parse, FormatOptions};
//!
//! let task = parse("x 2014-01-03 (B) 2014-01-01 Write docs +go-todotxt @Go due:2014-01-12").unwrap();
//! assert!(task.completed);
//! assert_eq!(task.todo, "Write docs");
//! assert_eq!(
//!     task.format(&FormatOptions::default()),
//!     "x 2014-01-03 (B) 2014-01-01 Write docs @Go +go-todotxt due:2014-01-12"
//! );
//! ```

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod list;
pub mod output;
pub mod task;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use crate::core::{Clock, FixedClock, SystemClock};
pub use error::{ParseError, TodoError};
pub use list::{Filter, SortField, SortKey, SortOrder, TaskList};
pub use task::{FormatOptions, Priority, Segment, SegmentKind, Task};
