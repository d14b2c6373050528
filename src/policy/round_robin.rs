//! Round-Robin with a fixed quantum.

use std::collections::VecDeque;

use super::{RunState, SchedulingPolicy};
use crate::error::{Result, SchedError};
use crate::validation::validate_quantum;

/// Round-Robin (preemptive, fixed quantum).
///
/// Ready tasks wait in a FIFO queue. The front task runs for
/// `min(remaining, quantum)` units; if work remains it goes to the tail.
///
/// # Queue order at a preemption instant
/// Tasks that have arrived by the end of a slice join the queue *before*
/// the task that was just preempted.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round-Robin policy.
    ///
    /// # Errors
    /// `InvalidInput` if `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self> {
        validate_quantum(quantum).map_err(SchedError::invalid)?;
        Ok(Self { quantum })
    }

    /// Maximum contiguous units granted per turn.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

/// Ready queue of one run. Membership flags prevent double enqueuing.
struct ReadyQueue {
    queue: VecDeque<usize>,
    in_queue: Vec<bool>,
}

impl ReadyQueue {
    fn new(n: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(n),
            in_queue: vec![false; n],
        }
    }

    fn push(&mut self, idx: usize) {
        debug_assert!(!self.in_queue[idx], "task index {idx} enqueued twice");
        if !self.in_queue[idx] {
            self.in_queue[idx] = true;
            self.queue.push_back(idx);
        }
    }

    fn pop(&mut self) -> Option<usize> {
        let idx = self.queue.pop_front()?;
        self.in_queue[idx] = false;
        Some(idx)
    }

    /// Enqueues newly arrived tasks in input order.
    fn admit(&mut self, state: &mut RunState) {
        for idx in state.admit_arrivals() {
            self.push(idx);
        }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn run(&self, state: &mut RunState) {
        let mut ready = ReadyQueue::new(state.tasks().len());

        while !state.all_complete() {
            ready.admit(state);

            let Some(idx) = ready.pop() else {
                state.idle_until_next_arrival();
                continue;
            };

            let units = state.task(idx).remaining_time.min(self.quantum);
            if state.execute(idx, units) {
                continue;
            }

            // Arrivals during the slice go ahead of the preempted task.
            ready.admit(state);
            state.preempt(idx);
            ready.push(idx);
        }
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}
