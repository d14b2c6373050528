//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedError};
use crate::policy::{Fcfs, RoundRobin, SchedulingPolicy, Sjf, Srtf};
use crate::validation::validate_quantum;

/// Default Round-Robin quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Selectable scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    Fcfs,
    Sjf,
    Srtf,
    RoundRobin,
}

impl PolicyKind {
    /// All policies, in the order they are run by default.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fcfs,
        PolicyKind::Sjf,
        PolicyKind::Srtf,
        PolicyKind::RoundRobin,
    ];

    /// Instantiates the policy. `quantum` only matters for Round-Robin.
    pub fn build(self, quantum: i64) -> Result<Box<dyn SchedulingPolicy>> {
        let policy: Box<dyn SchedulingPolicy> = match self {
            PolicyKind::Fcfs => Box::new(Fcfs),
            PolicyKind::Sjf => Box::new(Sjf),
            PolicyKind::Srtf => Box::new(Srtf),
            PolicyKind::RoundRobin => Box::new(RoundRobin::new(quantum)?),
        };
        Ok(policy)
    }
}

/// Which policies to run and with what parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Round-Robin quantum.
    pub quantum: i64,
    /// Policies to run, in order.
    pub policies: Vec<PolicyKind>,
}

impl SimConfig {
    /// All four policies with the given quantum.
    pub fn with_quantum(quantum: i64) -> Self {
        Self {
            quantum,
            ..Self::default()
        }
    }

    /// Checks the quantum when Round-Robin is selected.
    pub fn validate(&self) -> Result<()> {
        if self.policies.contains(&PolicyKind::RoundRobin) {
            validate_quantum(self.quantum).map_err(SchedError::invalid)?;
        }
        Ok(())
    }

    /// Instantiates every configured policy.
    pub fn build_policies(&self) -> Result<Vec<Box<dyn SchedulingPolicy>>> {
        self.validate()?;
        self.policies
            .iter()
            .map(|kind| kind.build(self.quantum))
            .collect()
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            policies: PolicyKind::ALL.to_vec(),
        }
    }
}
