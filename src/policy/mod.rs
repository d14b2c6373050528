//! Scheduling policies and the run driver.
//!
//! Every policy follows the same shape (select next task, execute it,
//! record timing) and differs only in its selection rule and in how long
//! a selected task keeps the resource.
//!
//! | Policy | Preemptive | Selection | Run length |
//! |--------|-----------|-----------|------------|
//! | FCFS | no | earliest arrival, then shorter service | to completion |
//! | SJF | no | shortest service among arrived | to completion |
//! | SRTF | yes | shortest remaining among arrived | one unit |
//! | RR | yes | FIFO ready queue | `min(remaining, quantum)` |
//!
//! # Usage
//!
//! ```
//! use u_cpusched::models::TaskSet;
//! use u_cpusched::policy::{simulate, RoundRobin};
//!
//! let tasks = TaskSet::from_pairs(&[(0, 5), (1, 3)]).unwrap();
//! let schedule = simulate(&RoundRobin::new(2).unwrap(), &tasks);
//! assert_eq!(schedule.task(2).unwrap().completion_time, Some(7));
//! ```

mod driver;
mod fcfs;
mod round_robin;
mod sjf;
mod srtf;

pub use driver::RunState;
pub use fcfs::Fcfs;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use log::info;
use std::fmt::Debug;

use crate::models::{Schedule, TaskSet};

/// A single-resource scheduling discipline.
///
/// Implementations hold only their parameters; all per-run state lives in
/// the [`RunState`] they are handed, so one policy value can drive any
/// number of independent runs.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Short policy name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Whether the policy may take the resource from an unfinished task.
    fn is_preemptive(&self) -> bool;

    /// Drives `state` until every task has completed.
    fn run(&self, state: &mut RunState);

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Runs `policy` over an independent copy of `tasks`.
pub fn simulate(policy: &dyn SchedulingPolicy, tasks: &TaskSet) -> Schedule {
    info!("{}: scheduling {} tasks", policy.description(), tasks.len());

    let mut state = RunState::new(policy.name(), tasks.to_vec());
    policy.run(&mut state);
    assert!(
        state.all_complete(),
        "{} returned with unfinished tasks",
        policy.name()
    );

    let schedule = state.finish();
    info!(
        "{}: finished at t={} ({} slices)",
        policy.name(),
        schedule.makespan(),
        schedule.slices.len()
    );
    schedule
}

#[cfg(test)]
mod properties;
