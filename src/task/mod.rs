//! todo.txt tasks.
//!
//! This module provides the [`Task`] model, the line parser and the canonical
//! formatter:
//! - `"(A) Call Mom @Phone +Family"`
//! - `"x 2014-01-03 2014-01-01 Write docs @Go +lib due:2014-01-12"`

mod model;
mod parser;
mod segments;

pub use model::{Priority, Task, DATE_LAYOUT};
pub use parser::{parse, DUE_TAG};
pub use segments::{
    format, segments, FormatOptions, Segment, SegmentKind, CONTEXT_PREFIX, PROJECT_PREFIX,
};
