//! Input validation for task sets and policy parameters.
//!
//! Checks raw simulation input before any policy runs. Detects:
//! - Negative arrival times
//! - Non-positive service times
//! - Declared task count not matching the supplied pairs
//! - Empty task sets
//! - Non-positive Round-Robin quantum
//! - Time horizons beyond the `i64` range
//!
//! Every problem is collected; validation does not stop at the first one.

use serde::{Deserialize, Serialize};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A task arrives before t=0.
    NegativeArrival,
    /// A task requires zero or negative service.
    NonPositiveService,
    /// The declared task count differs from the number of pairs.
    CountMismatch,
    /// No tasks were supplied.
    EmptyTaskSet,
    /// Round-Robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Metrics were requested for a task without timing results.
    IncompleteTask,
    /// Raw text input could not be parsed.
    Malformed,
    /// Latest arrival plus total service exceeds the representable time range.
    HorizonOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates raw `(arrival_time, service_time)` pairs.
///
/// Checks:
/// 1. `declared_count` matches `pairs.len()`
/// 2. At least one task is present
/// 3. Every arrival time is `>= 0`
/// 4. Every service time is `> 0`
/// 5. `max(arrival) + sum(service)` fits in `i64`
///
/// Every policy finishes by `max(arrival) + sum(service)`, so check 5
/// bounds all simulated times and per-task timing values.
///
/// Task numbers in messages are 1-based input positions.
pub fn validate_pairs(declared_count: usize, pairs: &[(i64, i64)]) -> ValidationResult {
    let mut errors = Vec::new();

    if declared_count != pairs.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::CountMismatch,
            format!(
                "declared {} tasks but {} were supplied",
                declared_count,
                pairs.len()
            ),
        ));
    }

    if pairs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTaskSet,
            "task set contains no tasks",
        ));
    }

    for (i, &(arrival, service)) in pairs.iter().enumerate() {
        let id = i + 1;
        if arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("task {id}: arrival time {arrival} is negative"),
            ));
        }
        if service <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveService,
                format!("task {id}: service time {service} must be positive"),
            ));
        }
    }

    if errors.is_empty() && horizon(pairs).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            "latest arrival plus total service time overflows the time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Latest instant any policy can reach: `max(arrival) + sum(service)`.
///
/// Returns `None` on overflow.
fn horizon(pairs: &[(i64, i64)]) -> Option<i64> {
    let total_service = pairs
        .iter()
        .try_fold(0i64, |acc, &(_, service)| acc.checked_add(service))?;
    let latest_arrival = pairs.iter().map(|&(arrival, _)| arrival).max().unwrap_or(0);
    latest_arrival.checked_add(total_service)
}

/// Validates a Round-Robin quantum.
pub fn validate_quantum(quantum: i64) -> Result<(), ValidationError> {
    if quantum <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("quantum {quantum} must be positive"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pairs() {
        assert!(validate_pairs(3, &[(0, 5), (1, 3), (1, 1)]).is_ok());
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_pairs(1, &[(-1, 5)]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
        assert!(errors[0].message.contains("task 1"));
    }

    #[test]
    fn test_non_positive_service() {
        let errors = validate_pairs(2, &[(0, 5), (2, 0)]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveService);
        assert!(errors[0].message.contains("task 2"));
    }

    #[test]
    fn test_count_mismatch() {
        let errors = validate_pairs(3, &[(0, 5), (1, 3)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CountMismatch));
    }

    #[test]
    fn test_empty_task_set() {
        let errors = validate_pairs(0, &[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyTaskSet);
    }

    #[test]
    fn test_multiple_errors() {
        // Count mismatch + negative arrival + zero service
        let errors = validate_pairs(5, &[(-2, 3), (0, 0)]).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_horizon_overflow() {
        let errors = validate_pairs(1, &[(i64::MAX, 1)]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::HorizonOverflow);

        // Service times alone overflow.
        let errors = validate_pairs(2, &[(0, i64::MAX), (0, 1)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::HorizonOverflow);

        // Exactly at the limit is fine.
        assert!(validate_pairs(2, &[(i64::MAX - 3, 1), (0, 2)]).is_ok());
    }

    #[test]
    fn test_quantum() {
        assert!(validate_quantum(1).is_ok());
        assert_eq!(
            validate_quantum(0).unwrap_err().kind,
            ValidationErrorKind::NonPositiveQuantum
        );
        assert!(validate_quantum(-4).is_err());
    }
}
