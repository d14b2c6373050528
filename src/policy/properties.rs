//! Invariants every policy must uphold, checked over seeded random workloads.

use super::*;
use crate::models::{Schedule, TaskId};
use crate::workload::WorkloadGenerator;

fn policies() -> Vec<Box<dyn SchedulingPolicy>> {
    vec![
        Box::new(Fcfs),
        Box::new(Sjf),
        Box::new(Srtf),
        Box::new(RoundRobin::new(1).unwrap()),
        Box::new(RoundRobin::new(3).unwrap()),
    ]
}

fn workloads() -> Vec<TaskSet> {
    let mut sets = Vec::new();
    for seed in 0..25 {
        let mut generator = WorkloadGenerator::new(seed);
        sets.push(generator.uniform_task_set(1 + seed as usize % 9, 20, 1, 8).unwrap());
    }
    let mut generator = WorkloadGenerator::new(99);
    sets.push(TaskSet::from_pairs(&generator.bernoulli(60, 0.3, 0.4, 1, 5)).unwrap());
    sets
}

fn check_all(check: impl Fn(&dyn SchedulingPolicy, &TaskSet, &Schedule)) {
    for tasks in workloads() {
        for policy in policies() {
            let schedule = simulate(policy.as_ref(), &tasks);
            check(policy.as_ref(), &tasks, &schedule);
        }
    }
}

#[test]
fn test_conservation_of_service() {
    check_all(|policy, tasks, s| {
        for task in tasks.tasks() {
            let allocated: i64 = s.slices_for_task(task.id).iter().map(|sl| sl.len()).sum();
            assert_eq!(
                allocated,
                task.service_time,
                "{}: task {} allocation",
                policy.name(),
                task.id
            );
        }
        assert!(s.is_complete());
    });
}

#[test]
fn test_slices_never_overlap() {
    check_all(|policy, _, s| {
        for slice in &s.slices {
            assert!(!slice.is_empty(), "{}: empty {:?}", policy.name(), slice);
        }
        for pair in s.slices.windows(2) {
            assert!(
                pair[0].end <= pair[1].start,
                "{}: {:?} overlaps {:?}",
                policy.name(),
                pair[0],
                pair[1]
            );
        }
    });
}

#[test]
fn test_causality() {
    check_all(|policy, _, s| {
        for t in &s.tasks {
            let start = t.start_time.unwrap();
            let completion = t.completion_time.unwrap();
            assert!(start >= t.arrival_time, "{} task {}", policy.name(), t.id);
            assert!(completion > start);
            assert_eq!(t.turnaround_time, Some(completion - t.arrival_time));
            assert_eq!(t.response_time, Some(start - t.arrival_time));
            assert!(t.turnaround_time.unwrap() >= t.service_time);
            assert_eq!(t.remaining_time, 0);

            let first = s.slices_for_task(t.id)[0];
            assert_eq!(first.start, start);
        }
    });
}

#[test]
fn test_non_preemptive_policies_run_once() {
    check_all(|policy, tasks, s| {
        if !policy.is_preemptive() {
            assert_eq!(s.slices.len(), tasks.len(), "{}", policy.name());
        }
    });
}

#[test]
fn test_deterministic() {
    for tasks in workloads() {
        for policy in policies() {
            let a = simulate(policy.as_ref(), &tasks);
            let b = simulate(policy.as_ref(), &tasks);
            assert_eq!(a.tasks, b.tasks);
            assert_eq!(a.slices, b.slices);
            assert_eq!(a.events, b.events);
        }
    }
}

#[test]
fn test_runs_do_not_mutate_input() {
    let tasks = TaskSet::from_pairs(&[(0, 4), (1, 2), (1, 6)]).unwrap();
    let before = tasks.clone();
    for policy in policies() {
        simulate(policy.as_ref(), &tasks);
    }
    assert_eq!(tasks, before);
}

#[test]
fn test_round_robin_wait_bound() {
    for tasks in workloads() {
        for q in [1, 2, 4] {
            let s = simulate(&RoundRobin::new(q).unwrap(), &tasks);
            let bound = (tasks.len() as i64 - 1) * q;
            for t in &s.tasks {
                let slices = s.slices_for_task(t.id);
                for pair in slices.windows(2) {
                    let wait = pair[1].start - pair[0].end;
                    assert!(
                        wait <= bound,
                        "task {} waited {} with q={} (bound {})",
                        t.id,
                        wait,
                        q,
                        bound
                    );
                }
            }
        }
    }
}

#[test]
fn test_every_task_has_lifecycle_events() {
    use crate::models::EventKind;

    check_all(|policy, tasks, s| {
        for task in tasks.tasks() {
            let kinds: Vec<EventKind> = s.events_for_task(task.id).iter().map(|e| e.kind).collect();
            assert_eq!(kinds.first(), Some(&EventKind::Arrived), "{}", policy.name());
            assert_eq!(kinds.last(), Some(&EventKind::Completed));
            let count = |k: EventKind| kinds.iter().filter(|&&x| x == k).count();
            assert_eq!(count(EventKind::Started), 1);
            assert_eq!(count(EventKind::Completed), 1);
        }
        let ids: Vec<TaskId> = s.completion_order();
        assert_eq!(ids.len(), tasks.len());
        assert!(s.events.windows(2).all(|w| w[0].time <= w[1].time));
    });
}

#[test]
fn test_horizon_near_time_limit() {
    let err = TaskSet::from_pairs(&[(i64::MAX, 1)]).unwrap_err();
    assert_eq!(
        err.validation_errors()[0].kind,
        crate::validation::ValidationErrorKind::HorizonOverflow
    );

    let tasks = TaskSet::from_pairs(&[(i64::MAX - 3, 1), (i64::MAX - 3, 2)]).unwrap();
    for policy in policies() {
        let s = simulate(policy.as_ref(), &tasks);
        assert!(s.is_complete(), "{}", policy.name());
        assert_eq!(s.makespan(), i64::MAX, "{}", policy.name());
        crate::metrics::ScheduleMetrics::calculate(&s.tasks).unwrap();
    }
}
