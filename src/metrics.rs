//! Schedule quality metrics.
//!
//! Computes per-task timing averages from the completed tasks of a policy
//! run. Timeline figures (makespan, utilization, throughput) come from the
//! [`Schedule`](crate::models::Schedule) itself.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Response | Mean of start - arrival |
//! | Avg Turnaround | Mean of completion - arrival |
//! | Avg Waiting | Mean of turnaround - service |
//! | Max Response | Largest single response time |

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedError};
use crate::models::Task;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Aggregate timing results of one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Mean response time.
    pub avg_response_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean time spent ready but not running.
    pub avg_waiting_time: f64,
    /// Largest response time of any task.
    pub max_response_time: i64,
}

impl ScheduleMetrics {
    /// Computes metrics over a completed task collection.
    ///
    /// # Errors
    /// - `EmptyInput` if `tasks` is empty.
    /// - `InvalidInput` if any task lacks start or completion results.
    pub fn calculate(tasks: &[Task]) -> Result<Self> {
        if tasks.is_empty() {
            return Err(SchedError::EmptyInput);
        }

        let incomplete: Vec<ValidationError> = tasks
            .iter()
            .filter(|t| t.response_time.is_none() || t.turnaround_time.is_none())
            .map(|t| {
                ValidationError::new(
                    ValidationErrorKind::IncompleteTask,
                    format!("task {} has no timing results", t.id),
                )
            })
            .collect();
        if !incomplete.is_empty() {
            return Err(SchedError::InvalidInput(incomplete));
        }

        // Per-task values fit in i64; their sums over many tasks may not.
        let mut total_response: i128 = 0;
        let mut total_turnaround: i128 = 0;
        let mut total_waiting: i128 = 0;
        let mut max_response: i64 = 0;

        for task in tasks {
            let response = task.response_time.unwrap_or_default();
            total_response += i128::from(response);
            total_turnaround += i128::from(task.turnaround_time.unwrap_or_default());
            total_waiting += i128::from(task.waiting_time().unwrap_or_default());
            max_response = max_response.max(response);
        }

        let n = tasks.len() as f64;
        Ok(Self {
            avg_response_time: total_response as f64 / n,
            avg_turnaround_time: total_turnaround as f64 / n,
            avg_waiting_time: total_waiting as f64 / n,
            max_response_time: max_response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn done(id: u32, arrival: i64, service: i64, start: i64, completion: i64) -> Task {
        let mut t = Task::new(id, arrival, service);
        t.remaining_time = 0;
        t.start_time = Some(start);
        t.completion_time = Some(completion);
        t.turnaround_time = Some(completion - arrival);
        t.response_time = Some(start - arrival);
        t
    }

    #[test]
    fn test_metrics_basic() {
        let tasks = vec![done(1, 0, 5, 0, 5), done(2, 1, 3, 5, 8)];
        let m = ScheduleMetrics::calculate(&tasks).unwrap();

        assert!((m.avg_turnaround_time - 6.0).abs() < 1e-10); // (5+7)/2
        assert!((m.avg_response_time - 2.0).abs() < 1e-10); // (0+4)/2
        assert!((m.avg_waiting_time - 2.0).abs() < 1e-10); // (0+4)/2
        assert_eq!(m.max_response_time, 4);
    }

    #[test]
    fn test_metrics_single_task() {
        let tasks = vec![done(1, 2, 3, 4, 7)];
        let m = ScheduleMetrics::calculate(&tasks).unwrap();
        assert!((m.avg_response_time - 2.0).abs() < 1e-10);
        assert!((m.avg_turnaround_time - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_large_values_do_not_overflow() {
        let big = i64::MAX / 2;
        let tasks = vec![
            done(1, 0, big, 0, big),
            done(2, 0, 1, big, big + 1),
            done(3, 0, 1, big + 1, big + 2),
        ];
        let m = ScheduleMetrics::calculate(&tasks).unwrap();
        let expected = (3.0 * big as f64 + 3.0) / 3.0;
        assert!((m.avg_turnaround_time - expected).abs() / expected < 1e-9);
        assert_eq!(m.max_response_time, big + 1);
    }

    #[test]
    fn test_metrics_empty() {
        assert_eq!(
            ScheduleMetrics::calculate(&[]).unwrap_err(),
            SchedError::EmptyInput
        );
    }

    #[test]
    fn test_metrics_incomplete_task() {
        let tasks = vec![done(1, 0, 1, 0, 1), Task::new(2, 0, 4)];
        let err = ScheduleMetrics::calculate(&tasks).unwrap_err();
        let errors = err.validation_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::IncompleteTask);
        assert!(errors[0].message.contains("task 2"));
    }
}
