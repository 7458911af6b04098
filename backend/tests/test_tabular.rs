//! Tests for CSV decoding and encoding

use secret_santa_core_rs::tabular::{read_participants, read_previous_pairs, write_assignments};
use secret_santa_core_rs::{Assignment, Participant, TabularError};

// ============================================================================
// Participants
// ============================================================================

#[test]
fn test_read_participants_trims_and_keeps_order() {
    let csv = "Employee_Name,Employee_EmailID\n  Alice  ,  alice@co\nBob,bob@co\n";
    let people = read_participants(csv.as_bytes()).unwrap();

    assert_eq!(
        people,
        vec![
            Participant::new("Alice", "alice@co"),
            Participant::new("Bob", "bob@co"),
        ]
    );
}

#[test]
fn test_read_participants_columns_by_name() {
    let csv = "Department,Employee_EmailID,Employee_Name\nSales,alice@co,Alice\n";
    let people = read_participants(csv.as_bytes()).unwrap();

    assert_eq!(people, vec![Participant::new("Alice", "alice@co")]);
}

#[test]
fn test_read_participants_quoted_name() {
    let csv = "Employee_Name,Employee_EmailID\r\n\"Smith, Alice\",alice@co\r\n";
    let people = read_participants(csv.as_bytes()).unwrap();

    assert_eq!(people[0].name(), "Smith, Alice");
}

#[test]
fn test_read_participants_skips_blank_lines() {
    let csv = "Employee_Name,Employee_EmailID\n\nAlice,alice@co\n\n\nBob,bob@co\n\n";
    assert_eq!(read_participants(csv.as_bytes()).unwrap().len(), 2);
}

#[test]
fn test_read_participants_empty_input() {
    assert!(read_participants("".as_bytes()).unwrap().is_empty());
}

#[test]
fn test_read_participants_missing_column() {
    let csv = "Name,Employee_EmailID\nAlice,alice@co\n";
    let err = read_participants(csv.as_bytes()).unwrap_err();

    assert!(matches!(err, TabularError::MissingColumn { ref column } if column == "Employee_Name"));
}

#[test]
fn test_read_participants_missing_email() {
    let csv = "Employee_Name,Employee_EmailID\nAlice,alice@co\nBob,\n";
    let err = read_participants(csv.as_bytes()).unwrap_err();

    assert!(matches!(
        err,
        TabularError::MissingField { line: 3, ref column } if column == "Employee_EmailID"
    ));
    assert_eq!(err.to_string(), "line 3: missing value for Employee_EmailID");
}

#[test]
fn test_read_participants_short_row() {
    let csv = "Employee_Name,Employee_EmailID\nAlice\n";
    let err = read_participants(csv.as_bytes()).unwrap_err();

    assert!(matches!(err, TabularError::MissingField { line: 2, .. }));
}

#[test]
fn test_read_participants_duplicate_email() {
    let csv = "Employee_Name,Employee_EmailID\nAlice,alice@co\nAlicia, alice@co\n";
    let err = read_participants(csv.as_bytes()).unwrap_err();

    assert!(matches!(
        err,
        TabularError::DuplicateEmail { line: 3, ref email } if email == "alice@co"
    ));
}

// ============================================================================
// Previous round
// ============================================================================

#[test]
fn test_read_previous_pairs_from_output_file() {
    let csv = "\
Employee_Name,Employee_EmailID,Secret_Child_Name,Secret_Child_EmailID
Alice,alice@co,Bob,bob@co
Bob,bob@co,Alice,alice@co
";
    let forbidden = read_previous_pairs(csv.as_bytes()).unwrap();

    assert_eq!(forbidden.len(), 2);
    assert_eq!(forbidden.get("alice@co"), Some("bob@co"));
    assert_eq!(forbidden.get("bob@co"), Some("alice@co"));
}

#[test]
fn test_read_previous_pairs_giver_receiver_headers() {
    let csv = "Giver_Email,Receiver_Email\n alice@co , carol@co \n";
    let forbidden = read_previous_pairs(csv.as_bytes()).unwrap();

    assert_eq!(forbidden.get("alice@co"), Some("carol@co"));
}

#[test]
fn test_read_previous_pairs_skips_incomplete_rows() {
    let csv = "Giver_Email,Receiver_Email\nalice@co,\n,bob@co\ncarol@co,dan@co\n";
    let forbidden = read_previous_pairs(csv.as_bytes()).unwrap();

    assert_eq!(forbidden.len(), 1);
    assert_eq!(forbidden.get("carol@co"), Some("dan@co"));
}

#[test]
fn test_read_previous_pairs_later_row_wins() {
    let csv = "Giver_Email,Receiver_Email\nalice@co,bob@co\nalice@co,carol@co\n";
    let forbidden = read_previous_pairs(csv.as_bytes()).unwrap();

    assert_eq!(forbidden.get("alice@co"), Some("carol@co"));
}

#[test]
fn test_read_previous_pairs_unknown_headers() {
    let csv = "From,To\nalice@co,bob@co\n";
    let err = read_previous_pairs(csv.as_bytes()).unwrap_err();

    assert!(matches!(err, TabularError::MissingColumn { ref column } if column == "Giver_Email"));
}

#[test]
fn test_read_previous_pairs_empty_input() {
    assert!(read_previous_pairs("".as_bytes()).unwrap().is_empty());
}

// ============================================================================
// Assignments
// ============================================================================

#[test]
fn test_write_assignments() {
    let alice = Participant::new("Alice", "alice@co");
    let bob = Participant::new("Bob, Jr.", "bob@co");
    let draw = vec![
        Assignment::new(alice.clone(), bob.clone()),
        Assignment::new(bob, alice),
    ];

    let mut out = Vec::new();
    write_assignments(&mut out, &draw).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Employee_Name,Employee_EmailID,Secret_Child_Name,Secret_Child_EmailID\n\
         Alice,alice@co,\"Bob, Jr.\",bob@co\n\
         \"Bob, Jr.\",bob@co,Alice,alice@co\n"
    );
}

#[test]
fn test_written_names_read_back() {
    let tricky = Participant::new("Ann \"Nan\" O'Neil", "ann@co");
    let plain = Participant::new("Bo", "bo@co");
    let draw = vec![
        Assignment::new(tricky.clone(), plain.clone()),
        Assignment::new(plain.clone(), tricky.clone()),
    ];

    let mut out = Vec::new();
    write_assignments(&mut out, &draw).unwrap();
    let people = read_participants(out.as_slice()).unwrap();

    assert_eq!(people, vec![tricky, plain]);
}
