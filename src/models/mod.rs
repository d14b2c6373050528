//! Scheduling domain models.
//!
//! Provides the data types shared by every policy: tasks, the task set
//! handed to each run, scheduling events, and the resulting schedule.
//!
//! # Glossary
//!
//! | Term | Meaning |
//! |------|---------|
//! | Service time | Total processing units a task requires (burst time) |
//! | Turnaround | Completion minus arrival |
//! | Response | First execution minus arrival |
//! | Slice | Contiguous interval a task held the resource |

mod event;
mod schedule;
mod task;

pub use event::{EventKind, SchedEvent};
pub use schedule::{Schedule, Slice};
pub use task::{Task, TaskId, TaskSet};
