//! Core abstractions for todotxt.
//!
//! This module provides the time source shared by the task model and the
//! task list.

mod clock;

pub use clock::{Clock, FixedClock, SystemClock};
