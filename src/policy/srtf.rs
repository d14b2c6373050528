//! Shortest-Remaining-Time-First (preemptive SJF).

use super::{RunState, SchedulingPolicy};

/// Shortest-Remaining-Time-First.
///
/// The arrived task with the least remaining work holds the resource. Equal
/// remaining times resolve to the earliest task in input order, so a running
/// task is displaced by any strictly shorter task, or by an equal one listed
/// before it.
///
/// The choice can only change when a task arrives, so the selected task runs
/// until it completes or the next arrival, whichever comes first. This gives
/// the same timeline as a unit-by-unit rescan.
///
/// # Complexity
/// O(n²) for n tasks, independent of the simulated time span.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl SchedulingPolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    // TODO: replace the linear rescan per decision with a heap keyed by
    // (remaining, input index) once task sets grow past a few thousand entries.
    fn run(&self, state: &mut RunState) {
        while !state.all_complete() {
            state.admit_arrivals();
            match state.shortest_eligible(|t| t.remaining_time) {
                Some(idx) => {
                    if let Some(current) = state.running() {
                        if current != idx {
                            state.preempt(current);
                        }
                    }
                    let remaining = state.task(idx).remaining_time;
                    let units = match state.next_arrival() {
                        Some(arrival) => remaining.min(arrival - state.now()),
                        None => remaining,
                    };
                    state.execute(idx, units);
                }
                None => state.idle_until_next_arrival(),
            }
        }
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}
