//! Tests for draw validation

use secret_santa_core_rs::{validate_assignments, Assignment, ForbiddenPairs, Participant, ValidationError};

fn abc() -> (Participant, Participant, Participant) {
    (
        Participant::new("A", "a@x"),
        Participant::new("B", "b@x"),
        Participant::new("C", "c@x"),
    )
}

#[test]
fn test_valid_cycle_passes() {
    let (a, b, c) = abc();
    let draw = vec![
        Assignment::new(a.clone(), b.clone()),
        Assignment::new(b.clone(), c.clone()),
        Assignment::new(c.clone(), a.clone()),
    ];

    assert_eq!(validate_assignments(&[a, b, c], &ForbiddenPairs::new(), &draw), Ok(()));
}

#[test]
fn test_length_mismatch() {
    let (a, b, c) = abc();
    let draw = vec![
        Assignment::new(a.clone(), b.clone()),
        Assignment::new(b.clone(), a.clone()),
    ];

    assert_eq!(
        validate_assignments(&[a, b, c], &ForbiddenPairs::new(), &draw),
        Err(ValidationError::LengthMismatch { expected: 3, actual: 2 })
    );
}

#[test]
fn test_giver_order_mismatch() {
    let (a, b, c) = abc();
    let draw = vec![
        Assignment::new(a.clone(), b.clone()),
        Assignment::new(c.clone(), a.clone()),
        Assignment::new(b.clone(), c.clone()),
    ];

    assert_eq!(
        validate_assignments(&[a, b, c], &ForbiddenPairs::new(), &draw),
        Err(ValidationError::GiverOrderMismatch { position: 1 })
    );
}

#[test]
fn test_receiver_used_twice() {
    let (a, b, c) = abc();
    let draw = vec![
        Assignment::new(a.clone(), b.clone()),
        Assignment::new(b.clone(), c.clone()),
        Assignment::new(c.clone(), b.clone()),
    ];

    assert_eq!(
        validate_assignments(&[a, b, c], &ForbiddenPairs::new(), &draw),
        Err(ValidationError::ReceiversNotBijective)
    );
}

#[test]
fn test_receiver_outside_roster() {
    let (a, b, _) = abc();
    let stranger = Participant::new("Z", "z@x");
    let draw = vec![
        Assignment::new(a.clone(), b.clone()),
        Assignment::new(b.clone(), stranger),
    ];

    assert_eq!(
        validate_assignments(&[a, b], &ForbiddenPairs::new(), &draw),
        Err(ValidationError::ReceiversNotBijective)
    );
}

#[test]
fn test_self_match() {
    let (a, b, c) = abc();
    let draw = vec![
        Assignment::new(a.clone(), a.clone()),
        Assignment::new(b.clone(), c.clone()),
        Assignment::new(c.clone(), b.clone()),
    ];

    assert_eq!(
        validate_assignments(&[a, b, c], &ForbiddenPairs::new(), &draw),
        Err(ValidationError::SelfMatch { email: "a@x".to_string() })
    );
}

#[test]
fn test_repeat_of_prior_round() {
    let (a, b, c) = abc();
    let forbidden: ForbiddenPairs = [("b@x", "c@x")].into_iter().collect();
    let draw = vec![
        Assignment::new(a.clone(), b.clone()),
        Assignment::new(b.clone(), c.clone()),
        Assignment::new(c.clone(), a.clone()),
    ];

    let err = validate_assignments(&[a, b, c], &forbidden, &draw).unwrap_err();
    assert_eq!(
        err,
        ValidationError::RepeatOfPriorRound {
            giver: "b@x".to_string(),
            receiver: "c@x".to_string()
        }
    );
    assert_eq!(err.to_string(), "b@x was already assigned c@x in the previous round");
}

#[test]
fn test_empty_draw_of_empty_roster() {
    assert_eq!(validate_assignments(&[], &ForbiddenPairs::new(), &[]), Ok(()));
}
