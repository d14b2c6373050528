//! Plain-text simulation input.
//!
//! Whitespace-separated integers, in order:
//!
//! ```text
//! n
//! arrival_1 service_1
//! ...
//! arrival_n service_n
//! quantum
//! ```

use crate::error::{Result, SchedError};
use crate::models::TaskSet;
use crate::validation::{validate_quantum, ValidationError, ValidationErrorKind};

/// Parsed but not yet validated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    /// Task count as declared by the input.
    pub declared_count: usize,
    /// `(arrival_time, service_time)` pairs in input order.
    pub pairs: Vec<(i64, i64)>,
    /// Round-Robin quantum.
    pub quantum: i64,
}

impl RawInput {
    /// Validates the pairs and quantum and builds the task set.
    pub fn into_task_set(self) -> Result<(TaskSet, i64)> {
        let task_set = TaskSet::from_input(self.declared_count, &self.pairs);
        let quantum = validate_quantum(self.quantum);

        match (task_set, quantum) {
            (Ok(set), Ok(())) => Ok((set, self.quantum)),
            (Ok(_), Err(e)) => Err(SchedError::invalid(e)),
            (Err(err), Ok(())) => Err(err),
            (Err(SchedError::InvalidInput(mut errors)), Err(e)) => {
                errors.push(e);
                Err(SchedError::InvalidInput(errors))
            }
            (Err(err), Err(_)) => Err(err),
        }
    }
}

/// Parses the text input format.
///
/// # Errors
/// `InvalidInput` (kind `Malformed`) on a non-integer token, a negative
/// count, missing values or trailing tokens.
pub fn parse(text: &str) -> Result<RawInput> {
    let mut tokens = text.split_whitespace();
    let mut next = |what: &str| -> Result<i64> {
        let token = tokens
            .next()
            .ok_or_else(|| malformed(format!("missing {what}")))?;
        token
            .parse::<i64>()
            .map_err(|_| malformed(format!("{what}: '{token}' is not an integer")))
    };

    let count = next("task count")?;
    let declared_count =
        usize::try_from(count).map_err(|_| malformed(format!("task count {count} is negative")))?;

    let mut pairs = Vec::with_capacity(declared_count.min(1024));
    for i in 1..=declared_count {
        let arrival = next(format!("arrival time of task {i}").as_str())?;
        let service = next(format!("service time of task {i}").as_str())?;
        pairs.push((arrival, service));
    }
    let quantum = next("quantum")?;

    if let Some(extra) = tokens.next() {
        return Err(malformed(format!("unexpected trailing token '{extra}'")));
    }

    Ok(RawInput {
        declared_count,
        pairs,
        quantum,
    })
}

fn malformed(message: String) -> SchedError {
    SchedError::invalid(ValidationError::new(ValidationErrorKind::Malformed, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let raw = parse("2\n0 5\n1 3\n2\n").unwrap();
        assert_eq!(raw.declared_count, 2);
        assert_eq!(raw.pairs, vec![(0, 5), (1, 3)]);
        assert_eq!(raw.quantum, 2);

        let (set, quantum) = raw.into_task_set().unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(quantum, 2);
    }

    #[test]
    fn test_parse_not_integer() {
        let err = parse("1 0 x 2").unwrap_err();
        let e = &err.validation_errors()[0];
        assert_eq!(e.kind, ValidationErrorKind::Malformed);
        assert!(e.message.contains("service time of task 1"));
    }

    #[test]
    fn test_parse_missing_quantum() {
        let err = parse("1 0 4").unwrap_err();
        assert!(err.validation_errors()[0].message.contains("missing quantum"));
    }

    #[test]
    fn test_parse_negative_count() {
        assert!(parse("-1 2").is_err());
    }

    #[test]
    fn test_parse_trailing_tokens() {
        let err = parse("1 0 4 2 9").unwrap_err();
        assert!(err.validation_errors()[0].message.contains("'9'"));
    }

    #[test]
    fn test_into_task_set_collects_all_problems() {
        let raw = RawInput {
            declared_count: 1,
            pairs: vec![(0, 0)],
            quantum: 0,
        };
        let err = raw.into_task_set().unwrap_err();
        let kinds: Vec<ValidationErrorKind> =
            err.validation_errors().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::NonPositiveService,
                ValidationErrorKind::NonPositiveQuantum
            ]
        );
    }
}
