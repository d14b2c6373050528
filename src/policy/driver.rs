//! Shared run state for policy simulations.
//!
//! Owns the private task copy of one run together with the simulated clock,
//! event log and execution timeline. Policies decide *what* runs next and
//! for how long; `RunState` does the timing bookkeeping.

use log::{debug, trace};

use crate::models::{EventKind, SchedEvent, Schedule, Slice, Task};

/// Mutable state of a single policy run.
///
/// Task indices used by the methods below are positions in input order.
#[derive(Debug)]
pub struct RunState {
    policy: &'static str,
    tasks: Vec<Task>,
    events: Vec<SchedEvent>,
    slices: Vec<Slice>,
    /// Task indices sorted by arrival time, ties in input order.
    arrival_order: Vec<usize>,
    /// Position in `arrival_order` of the first task not yet admitted.
    next_pending: usize,
    now: i64,
    running: Option<usize>,
    completed: usize,
}

impl RunState {
    /// Creates run state at t=0 over a private copy of the tasks.
    pub fn new(policy: &'static str, tasks: Vec<Task>) -> Self {
        let mut arrival_order: Vec<usize> = (0..tasks.len()).collect();
        arrival_order.sort_by_key(|&i| tasks[i].arrival_time);
        Self {
            policy,
            tasks,
            events: Vec::new(),
            slices: Vec::new(),
            arrival_order,
            next_pending: 0,
            now: 0,
            running: None,
            completed: 0,
        }
    }

    /// Current simulated time.
    #[inline]
    pub fn now(&self) -> i64 {
        self.now
    }

    /// Tasks in input order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Task at input position `idx`.
    pub fn task(&self, idx: usize) -> &Task {
        &self.tasks[idx]
    }

    /// Task that held the resource in the last executed unit, if it has
    /// neither completed nor been preempted since.
    pub fn running(&self) -> Option<usize> {
        self.running
    }

    /// Whether every task has finished.
    pub fn all_complete(&self) -> bool {
        self.completed == self.tasks.len()
    }

    /// Admits every task that has arrived by `now` and was not admitted
    /// before, emitting `Arrived` for each.
    ///
    /// Returns the newly admitted indices in input order. Allocates nothing
    /// when no task is new.
    pub fn admit_arrivals(&mut self) -> Vec<usize> {
        let first = self.next_pending;
        while let Some(&i) = self.arrival_order.get(self.next_pending) {
            if !self.tasks[i].has_arrived(self.now) {
                break;
            }
            self.next_pending += 1;
        }
        if first == self.next_pending {
            return Vec::new();
        }

        let mut arrived = self.arrival_order[first..self.next_pending].to_vec();
        arrived.sort_unstable();
        for &i in &arrived {
            self.push_event(EventKind::Arrived, i);
        }
        arrived
    }

    /// Arrival time of the earliest task not yet admitted.
    pub fn next_arrival(&self) -> Option<i64> {
        self.arrival_order
            .get(self.next_pending)
            .map(|&i| self.tasks[i].arrival_time)
    }

    /// Index of the arrived, unfinished task with the smallest `key`.
    ///
    /// Scans in input order and keeps the first strict minimum, so equal
    /// keys resolve to the earliest task in the input.
    pub fn shortest_eligible<F>(&self, key: F) -> Option<usize>
    where
        F: Fn(&Task) -> i64,
    {
        let mut best: Option<(usize, i64)> = None;
        for (i, task) in self.tasks.iter().enumerate() {
            if !task.has_arrived(self.now) || task.is_complete() {
                continue;
            }
            let k = key(task);
            if best.map_or(true, |(_, b)| k < b) {
                best = Some((i, k));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Leaves the resource idle for `units`.
    pub fn advance_idle(&mut self, units: i64) {
        debug_assert!(units > 0);
        debug!("[{}] idle at t={} for {}", self.policy, self.now, units);
        self.now += units;
    }

    /// Moves the clock forward to `time` if it lies in the future.
    pub fn jump_to(&mut self, time: i64) {
        if time > self.now {
            self.advance_idle(time - self.now);
        }
    }

    /// Leaves the resource idle until the next pending arrival.
    ///
    /// # Panics
    /// If no task is left to arrive, since the run could never finish.
    pub fn idle_until_next_arrival(&mut self) {
        let Some(time) = self.next_arrival() else {
            panic!(
                "[{}] nothing ready at t={} and no arrival pending",
                self.policy, self.now
            );
        };
        self.jump_to(time);
    }

    /// Gives the resource to task `idx` for `units`.
    ///
    /// Records the start on first execution and the completion when the
    /// remaining time reaches zero. Returns `true` if the task completed.
    ///
    /// # Panics
    /// If `units` is not positive or exceeds the task's remaining time.
    pub fn execute(&mut self, idx: usize, units: i64) -> bool {
        let now = self.now;
        let task = &mut self.tasks[idx];
        assert!(
            units > 0 && units <= task.remaining_time,
            "task {} given {} units with {} remaining",
            task.id,
            units,
            task.remaining_time
        );

        let first_run = !task.has_started();
        if first_run {
            task.record_start(now);
        }
        task.remaining_time -= units;
        let task_id = task.id;
        let finished = task.is_complete();

        if first_run {
            self.push_event(EventKind::Started, idx);
        }

        // Consecutive units of the same uninterrupted run extend one slice.
        match self.slices.last_mut() {
            Some(last) if self.running == Some(idx) && last.end == now => last.end += units,
            _ => self.slices.push(Slice::new(task_id, now, now + units)),
        }

        self.now += units;
        self.running = Some(idx);

        if finished {
            self.tasks[idx].record_completion(self.now);
            self.completed += 1;
            self.running = None;
            self.push_event(EventKind::Completed, idx);
        }
        finished
    }

    /// Takes the resource away from task `idx`, which still has work left.
    pub fn preempt(&mut self, idx: usize) {
        let task = &self.tasks[idx];
        assert!(
            task.remaining_time > 0,
            "task {} preempted after completion",
            task.id
        );
        debug!(
            "[{}] preempt task {} at t={} ({} remaining)",
            self.policy, task.id, self.now, task.remaining_time
        );
        if self.running == Some(idx) {
            self.running = None;
        }
        self.push_event(EventKind::Preempted, idx);
    }

    /// Consumes the run state into a schedule.
    pub fn finish(self) -> Schedule {
        Schedule {
            policy: self.policy,
            tasks: self.tasks,
            events: self.events,
            slices: self.slices,
        }
    }

    fn push_event(&mut self, kind: EventKind, idx: usize) {
        let event = SchedEvent::new(self.policy, kind, self.tasks[idx].id, self.now);
        trace!("[{}] t={} task {} {:?}", self.policy, event.time, event.task_id, kind);
        self.events.push(event);
    }
}
