//! Task (process) model and task set builder.
//!
//! A task is a unit of work with a fixed service requirement and an
//! arrival instant. Timing results are filled in by a policy run.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedError};
use crate::validation::validate_pairs;

/// Task identifier: 1-based position in the input.
pub type TaskId = u32;

/// A task competing for the processing resource.
///
/// # Time Representation
/// All times are integer simulated units relative to t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier (1-based input position).
    pub id: TaskId,
    /// Instant the task becomes eligible for execution.
    pub arrival_time: i64,
    /// Total processing units required (burst time).
    pub service_time: i64,
    /// Processing units not yet completed.
    pub remaining_time: i64,
    /// First instant the task was given the resource.
    pub start_time: Option<i64>,
    /// Instant the task finished all service.
    pub completion_time: Option<i64>,
    /// `completion_time - arrival_time`.
    pub turnaround_time: Option<i64>,
    /// `start_time - arrival_time`.
    pub response_time: Option<i64>,
}

impl Task {
    /// Creates an unscheduled task with `remaining_time = service_time`.
    pub fn new(id: TaskId, arrival_time: i64, service_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            service_time,
            remaining_time: service_time,
            start_time: None,
            completion_time: None,
            turnaround_time: None,
            response_time: None,
        }
    }

    /// Whether the task has arrived by `now`.
    #[inline]
    pub fn has_arrived(&self, now: i64) -> bool {
        self.arrival_time <= now
    }

    /// Whether all service has been delivered.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Whether the task has ever been given the resource.
    #[inline]
    pub fn has_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Time spent ready but not running: `turnaround - service`.
    pub fn waiting_time(&self) -> Option<i64> {
        self.turnaround_time.map(|t| t - self.service_time)
    }

    pub(crate) fn record_start(&mut self, now: i64) {
        debug_assert!(self.start_time.is_none(), "task {} started twice", self.id);
        self.start_time = Some(now);
    }

    pub(crate) fn record_completion(&mut self, now: i64) {
        debug_assert!(
            self.completion_time.is_none(),
            "task {} completed twice",
            self.id
        );
        let start = self.start_time.unwrap_or(now);
        self.completion_time = Some(now);
        self.turnaround_time = Some(now - self.arrival_time);
        self.response_time = Some(start - self.arrival_time);
    }
}

/// Ordered collection of tasks (insertion order = input order).
///
/// Policy runs clone the tasks, so one run never observes another's
/// timing results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSet {
    tasks: Vec<Task>,
}

impl TaskSet {
    /// Builds a task set from a declared count and `(arrival, service)` pairs.
    ///
    /// # Errors
    /// `InvalidInput` listing every problem when the count does not match,
    /// no pairs were supplied, an arrival is negative or a service time is
    /// not positive.
    pub fn from_input(declared_count: usize, pairs: &[(i64, i64)]) -> Result<Self> {
        validate_pairs(declared_count, pairs).map_err(SchedError::InvalidInput)?;

        let tasks = pairs
            .iter()
            .enumerate()
            .map(|(i, &(arrival, service))| Task::new(i as TaskId + 1, arrival, service))
            .collect();
        Ok(Self { tasks })
    }

    /// Builds a task set, taking the count from the pairs themselves.
    pub fn from_pairs(pairs: &[(i64, i64)]) -> Result<Self> {
        Self::from_input(pairs.len(), pairs)
    }

    /// Tasks in input order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Independent copy of the tasks for one policy run.
    pub fn to_vec(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the set holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
