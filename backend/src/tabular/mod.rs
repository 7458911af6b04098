//! Tabular (CSV) encoding and decoding of draw inputs and results.
//!
//! # Formats
//!
//! - **Participants**: `Employee_Name`, `Employee_EmailID`
//! - **Previous round**: either a previous output file
//!   (`Employee_EmailID`, `Secret_Child_EmailID`) or a plain pair list
//!   (`Giver_Email`, `Receiver_Email`)
//! - **Assignments**: `Employee_Name`, `Employee_EmailID`,
//!   `Secret_Child_Name`, `Secret_Child_EmailID`
//!
//! Columns are located by header name; extra columns are ignored and values
//! are trimmed. Decoding is where malformed rows are caught: the generator
//! trusts what it is given.

mod reader;

use std::collections::HashSet;
use std::io::{Read, Write};
use thiserror::Error;

use crate::models::{Assignment, ForbiddenPairs, Participant};
use reader::{read_records, Header};

pub const NAME_COLUMN: &str = "Employee_Name";
pub const EMAIL_COLUMN: &str = "Employee_EmailID";
pub const RECEIVER_NAME_COLUMN: &str = "Secret_Child_Name";
pub const RECEIVER_EMAIL_COLUMN: &str = "Secret_Child_EmailID";
pub const GIVER_EMAIL_COLUMN: &str = "Giver_Email";
pub const PAIR_RECEIVER_EMAIL_COLUMN: &str = "Receiver_Email";

/// Errors from reading or writing tabular data
#[derive(Debug, Error)]
pub enum TabularError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: usize },

    #[error("missing column {column}")]
    MissingColumn { column: String },

    #[error("line {line}: missing value for {column}")]
    MissingField { line: usize, column: String },

    #[error("line {line}: duplicate email {email}")]
    DuplicateEmail { line: usize, email: String },
}

/// Decode the participant list
///
/// Every row needs a name and an email, and emails must be unique.
///
/// # Example
/// ```
/// use secret_santa_core_rs::tabular::read_participants;
///
/// let csv = "Employee_Name,Employee_EmailID\nAlice, alice@co \nBob,bob@co\n";
/// let roster = read_participants(csv.as_bytes()).unwrap();
///
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster[0].email(), "alice@co");
/// ```
pub fn read_participants<R: Read>(reader: R) -> Result<Vec<Participant>, TabularError> {
    let mut records = read_records(reader)?.into_iter();
    let header = match records.next() {
        Some(record) => Header::new(record),
        None => return Ok(Vec::new()),
    };
    let name_idx = header.require(NAME_COLUMN)?;
    let email_idx = header.require(EMAIL_COLUMN)?;

    let mut seen = HashSet::new();
    let mut participants = Vec::new();
    for record in records {
        let name = record.required(name_idx, NAME_COLUMN)?;
        let email = record.required(email_idx, EMAIL_COLUMN)?;
        if !seen.insert(email.to_string()) {
            return Err(TabularError::DuplicateEmail {
                line: record.line,
                email: email.to_string(),
            });
        }
        participants.push(Participant::new(name, email));
    }

    Ok(participants)
}

/// Decode the previous round into forbidden pairs
///
/// Rows missing either email are skipped. A giver listed twice keeps the
/// later receiver.
pub fn read_previous_pairs<R: Read>(reader: R) -> Result<ForbiddenPairs, TabularError> {
    let mut records = read_records(reader)?.into_iter();
    let header = match records.next() {
        Some(record) => Header::new(record),
        None => return Ok(ForbiddenPairs::new()),
    };
    let (giver_idx, receiver_idx) = match (
        header.column(EMAIL_COLUMN),
        header.column(RECEIVER_EMAIL_COLUMN),
    ) {
        (Some(giver), Some(receiver)) => (giver, receiver),
        _ => (
            header.require(GIVER_EMAIL_COLUMN)?,
            header.require(PAIR_RECEIVER_EMAIL_COLUMN)?,
        ),
    };

    let mut forbidden = ForbiddenPairs::new();
    for record in records {
        let giver = record.value(giver_idx);
        let receiver = record.value(receiver_idx);
        if !giver.is_empty() && !receiver.is_empty() {
            forbidden.insert(giver, receiver);
        }
    }

    Ok(forbidden)
}

/// Encode assignments, one row per giver
///
/// The output doubles as next round's previous-round input.
pub fn write_assignments<W: Write>(mut writer: W, assignments: &[Assignment]) -> Result<(), TabularError> {
    write_row(
        &mut writer,
        &[NAME_COLUMN, EMAIL_COLUMN, RECEIVER_NAME_COLUMN, RECEIVER_EMAIL_COLUMN],
    )?;
    for assignment in assignments {
        write_row(
            &mut writer,
            &[
                assignment.giver.name(),
                assignment.giver.email(),
                assignment.receiver.name(),
                assignment.receiver.email(),
            ],
        )?;
    }
    writer.flush()?;
    Ok(())
}

fn write_row<W: Write>(writer: &mut W, fields: &[&str]) -> Result<(), TabularError> {
    let row: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
    writeln!(writer, "{}", row.join(","))?;
    Ok(())
}

fn escape_field(value: &str) -> String {
    if value.contains(|c: char| matches!(c, ',' | '"' | '\r' | '\n')) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
