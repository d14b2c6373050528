//! Scheduling events emitted by a policy run.

use serde::{Deserialize, Serialize};

use super::TaskId;

/// Kind of scheduling event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Task was admitted to the ready set.
    Arrived,
    /// Task received the resource for the first time.
    Started,
    /// Task lost the resource with work remaining.
    Preempted,
    /// Task finished all service.
    Completed,
}

/// A single scheduling event, in simulated time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchedEvent {
    /// Name of the policy that produced the event.
    pub policy: &'static str,
    /// What happened.
    pub kind: EventKind,
    /// Task concerned.
    pub task_id: TaskId,
    /// Simulated instant.
    pub time: i64,
}

impl SchedEvent {
    /// Creates an event.
    pub fn new(policy: &'static str, kind: EventKind, task_id: TaskId, time: i64) -> Self {
        Self {
            policy,
            kind,
            task_id,
            time,
        }
    }
}
