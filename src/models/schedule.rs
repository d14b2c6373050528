//! Schedule (policy run result) model.
//!
//! A schedule holds the completed tasks of one policy run, the ordered
//! event log and the execution slices that make up the resource timeline.

use serde::Serialize;

use super::{EventKind, SchedEvent, Task, TaskId};

/// A completed policy run.
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    /// Policy that produced this schedule.
    pub policy: &'static str,
    /// Tasks with timing results, in input order.
    pub tasks: Vec<Task>,
    /// Scheduling events in emission order.
    pub events: Vec<SchedEvent>,
    /// Contiguous execution intervals, in time order.
    pub slices: Vec<Slice>,
}

/// A contiguous interval during which one task held the resource.
///
/// Covers `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slice {
    /// Task that ran.
    pub task_id: TaskId,
    /// First unit of the interval.
    pub start: i64,
    /// One past the last unit.
    pub end: i64,
}

impl Slice {
    /// Creates a slice.
    pub fn new(task_id: TaskId, start: i64, end: i64) -> Self {
        Self {
            task_id,
            start,
            end,
        }
    }

    /// Number of units in the slice.
    #[inline]
    pub fn len(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the slice covers no units.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() <= 0
    }

    /// Whether two slices share at least one unit.
    pub fn overlaps(&self, other: &Slice) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl Schedule {
    /// Creates an empty schedule for a policy.
    pub fn new(policy: &'static str) -> Self {
        Self {
            policy,
            tasks: Vec::new(),
            events: Vec::new(),
            slices: Vec::new(),
        }
    }

    /// Makespan: latest completion time (0 when nothing ran).
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Units during which the resource was busy.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::len).sum()
    }

    /// Fraction of the makespan the resource was busy.
    ///
    /// Returns `None` if the makespan is zero.
    pub fn utilization(&self) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / horizon as f64)
    }

    /// Completed tasks per unit of makespan.
    ///
    /// Returns `None` if the makespan is zero.
    pub fn throughput(&self) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return None;
        }
        let completed = self.tasks.iter().filter(|t| t.is_complete()).count();
        Some(completed as f64 / horizon as f64)
    }

    /// Finds a task by ID.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Execution slices of one task, in time order.
    pub fn slices_for_task(&self, id: TaskId) -> Vec<&Slice> {
        self.slices.iter().filter(|s| s.task_id == id).collect()
    }

    /// Events of one task, in emission order.
    pub fn events_for_task(&self, id: TaskId) -> Vec<&SchedEvent> {
        self.events.iter().filter(|e| e.task_id == id).collect()
    }

    /// Order in which tasks completed.
    pub fn completion_order(&self) -> Vec<TaskId> {
        self.events
            .iter()
            .filter(|e| e.kind == EventKind::Completed)
            .map(|e| e.task_id)
            .collect()
    }

    /// Whether every task has finished.
    pub fn is_complete(&self) -> bool {
        self.tasks.iter().all(Task::is_complete)
    }
}
