//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors reported by the scheduling engine.
///
/// Both kinds are raised before a policy run starts; a run never produces a
/// partial schedule.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedError {
    /// Raw input failed validation. Carries every detected problem.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    /// Metrics were requested over a task collection with no tasks.
    #[error("metrics requested over an empty task collection")]
    EmptyInput,
}

impl SchedError {
    /// Wraps a single validation problem.
    pub fn invalid(error: ValidationError) -> Self {
        Self::InvalidInput(vec![error])
    }

    /// Validation problems carried by this error (empty for `EmptyInput`).
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            Self::EmptyInput => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, SchedError>;
