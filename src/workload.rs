//! Synthetic workload generation.
//!
//! Produces `(arrival_time, service_time)` pairs for simulations and
//! tests. Generation is deterministic for a given seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::models::TaskSet;

/// Seeded generator of task arrival streams.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    rng: StdRng,
}

impl WorkloadGenerator {
    /// Creates a generator with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `n` tasks with arrivals uniform in `0..=max_arrival` and service
    /// uniform in `min_service..=max_service`.
    ///
    /// Pairs are returned in generation order (arrivals unsorted).
    pub fn uniform(
        &mut self,
        n: usize,
        max_arrival: i64,
        min_service: i64,
        max_service: i64,
    ) -> Vec<(i64, i64)> {
        debug_assert!(max_arrival >= 0 && min_service > 0 && min_service <= max_service);
        (0..n)
            .map(|_| {
                (
                    self.rng.random_range(0..=max_arrival),
                    self.rng.random_range(min_service..=max_service),
                )
            })
            .collect()
    }

    /// Bernoulli arrival stream over `ticks` instants.
    ///
    /// At each instant a task arrives with probability `p_arrival`; it is
    /// short (`short_service`) with probability `p_short`, otherwise long.
    pub fn bernoulli(
        &mut self,
        ticks: i64,
        p_arrival: f64,
        p_short: f64,
        short_service: i64,
        long_service: i64,
    ) -> Vec<(i64, i64)> {
        let mut pairs = Vec::new();
        for t in 0..ticks {
            if self.rng.random::<f64>() < p_arrival {
                let service = if self.rng.random::<f64>() < p_short {
                    short_service
                } else {
                    long_service
                };
                pairs.push((t, service));
            }
        }
        pairs
    }

    /// Uniform workload wrapped in a validated [`TaskSet`].
    pub fn uniform_task_set(
        &mut self,
        n: usize,
        max_arrival: i64,
        min_service: i64,
        max_service: i64,
    ) -> Result<TaskSet> {
        TaskSet::from_pairs(&self.uniform(n, max_arrival, min_service, max_service))
    }
}
