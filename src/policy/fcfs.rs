//! First-Come-First-Served.

use super::{RunState, SchedulingPolicy};

/// First-Come-First-Served (non-preemptive).
///
/// Runs tasks in arrival order. Tasks arriving at the same instant run
/// shorter service first; remaining ties keep input order. The clock jumps
/// over idle gaps to the next arrival.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn run(&self, state: &mut RunState) {
        let mut order: Vec<usize> = (0..state.tasks().len()).collect();
        order.sort_by_key(|&i| {
            let t = state.task(i);
            (t.arrival_time, t.service_time)
        });

        for idx in order {
            state.jump_to(state.task(idx).arrival_time);
            state.admit_arrivals();
            let service = state.task(idx).remaining_time;
            state.execute(idx, service);
        }
    }

    fn description(&self) -> &'static str {
        "FIFO"
    }
}
