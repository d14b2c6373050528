//! Runs every configured policy over the same task set.

use log::info;
use serde::Serialize;

use crate::config::SimConfig;
use crate::error::Result;
use crate::metrics::ScheduleMetrics;
use crate::models::{Schedule, TaskSet};
use crate::policy::{simulate, SchedulingPolicy};

/// Result of one policy run: the schedule and its metrics.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyReport {
    /// Policy name (e.g., "SRTF").
    pub policy: &'static str,
    /// Policy description (e.g., "Shortest Remaining Time First").
    pub description: &'static str,
    /// Completed schedule.
    pub schedule: Schedule,
    /// Aggregate metrics.
    pub metrics: ScheduleMetrics,
}

/// Runs one policy and computes its metrics.
pub fn run_policy(policy: &dyn SchedulingPolicy, tasks: &TaskSet) -> Result<PolicyReport> {
    let schedule = simulate(policy, tasks);
    let metrics = ScheduleMetrics::calculate(&schedule.tasks)?;
    info!(
        "{}: avg response {:.2}, avg turnaround {:.2}",
        policy.name(),
        metrics.avg_response_time,
        metrics.avg_turnaround_time
    );
    Ok(PolicyReport {
        policy: policy.name(),
        description: policy.description(),
        schedule,
        metrics,
    })
}

/// Runs every policy in `config`, each over its own copy of `tasks`.
///
/// Configuration is validated before any policy runs, so an invalid
/// quantum yields no reports at all.
pub fn run_all(tasks: &TaskSet, config: &SimConfig) -> Result<Vec<PolicyReport>> {
    let policies = config.build_policies()?;
    policies
        .iter()
        .map(|policy| run_policy(policy.as_ref(), tasks))
        .collect()
}
