//! Shortest-Job-First (non-preemptive).

use super::{RunState, SchedulingPolicy};

/// Shortest-Job-First (non-preemptive).
///
/// At each decision point picks the arrived, unfinished task with the
/// smallest total service time and runs it to completion. Equal service
/// times resolve to the earliest task in input order. With nothing ready
/// the clock jumps to the next arrival.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn run(&self, state: &mut RunState) {
        while !state.all_complete() {
            state.admit_arrivals();
            match state.shortest_eligible(|t| t.service_time) {
                Some(idx) => {
                    let service = state.task(idx).remaining_time;
                    state.execute(idx, service);
                }
                None => state.idle_until_next_arrival(),
            }
        }
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}
