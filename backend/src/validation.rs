//! Independent check of a finished draw.
//!
//! Re-verifies every invariant of an assignment list against the inputs it
//! was drawn from. Used when verifying stored draw records and throughout the
//! tests; the generator itself never calls it.

use std::collections::HashMap;
use thiserror::Error;

use crate::models::{Assignment, ForbiddenPairs, Participant};

/// Invariant violations, reported in the order they are checked
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("expected {expected} assignments, found {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("giver at position {position} does not match the participant list")]
    GiverOrderMismatch { position: usize },

    #[error("receivers are not a permutation of the participants")]
    ReceiversNotBijective,

    #[error("{email} is assigned to themselves")]
    SelfMatch { email: String },

    #[error("{giver} was already assigned {receiver} in the previous round")]
    RepeatOfPriorRound { giver: String, receiver: String },
}

/// Validate a draw against its inputs
///
/// Checks, in order: length, giver order, receiver bijection, self-matches,
/// prior-round repeats.
///
/// # Example
/// ```
/// use secret_santa_core_rs::{validate_assignments, Assignment, ForbiddenPairs, Participant};
///
/// let a = Participant::new("A", "a@x");
/// let b = Participant::new("B", "b@x");
/// let draw = vec![
///     Assignment::new(a.clone(), b.clone()),
///     Assignment::new(b.clone(), a.clone()),
/// ];
///
/// assert!(validate_assignments(&[a, b], &ForbiddenPairs::new(), &draw).is_ok());
/// ```
pub fn validate_assignments(
    participants: &[Participant],
    forbidden: &ForbiddenPairs,
    assignments: &[Assignment],
) -> Result<(), ValidationError> {
    if assignments.len() != participants.len() {
        return Err(ValidationError::LengthMismatch {
            expected: participants.len(),
            actual: assignments.len(),
        });
    }

    if let Some(position) = participants
        .iter()
        .zip(assignments)
        .position(|(participant, assignment)| &assignment.giver != participant)
    {
        return Err(ValidationError::GiverOrderMismatch { position });
    }

    let mut balance: HashMap<&Participant, i64> = HashMap::new();
    for participant in participants {
        *balance.entry(participant).or_insert(0) += 1;
    }
    for assignment in assignments {
        *balance.entry(&assignment.receiver).or_insert(0) -= 1;
    }
    if balance.values().any(|&count| count != 0) {
        return Err(ValidationError::ReceiversNotBijective);
    }

    for assignment in assignments {
        if assignment.is_self_match() {
            return Err(ValidationError::SelfMatch {
                email: assignment.giver.email().to_string(),
            });
        }
        if forbidden.forbids(assignment.giver.email(), assignment.receiver.email()) {
            return Err(ValidationError::RepeatOfPriorRound {
                giver: assignment.giver.email().to_string(),
                receiver: assignment.receiver.email().to_string(),
            });
        }
    }

    Ok(())
}
