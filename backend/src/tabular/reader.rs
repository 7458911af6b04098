//! Minimal CSV record reader
//!
//! Handles quoted fields (with doubled quotes, embedded separators and line
//! breaks), LF / CRLF / CR line endings and a leading UTF-8 BOM. Blank
//! records are dropped.

use std::collections::HashMap;
use std::io::Read;

use super::TabularError;

/// One decoded row
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Record {
    /// Line the record starts on (1-based)
    pub line: usize,
    pub fields: Vec<String>,
}

impl Record {
    /// Trimmed value at `idx`, empty if the row is short
    pub fn value(&self, idx: usize) -> &str {
        self.fields.get(idx).map(|f| f.trim()).unwrap_or("")
    }

    pub fn required(&self, idx: usize, column: &str) -> Result<&str, TabularError> {
        match self.value(idx) {
            "" => Err(TabularError::MissingField {
                line: self.line,
                column: column.to_string(),
            }),
            value => Ok(value),
        }
    }
}

/// Column positions by header name
#[derive(Debug)]
pub(crate) struct Header {
    columns: HashMap<String, usize>,
}

impl Header {
    pub fn new(record: Record) -> Self {
        let mut columns = HashMap::new();
        for (idx, name) in record.fields.into_iter().enumerate() {
            // first occurrence wins
            columns.entry(name.trim().to_string()).or_insert(idx);
        }
        Self { columns }
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.get(name).copied()
    }

    pub fn require(&self, name: &str) -> Result<usize, TabularError> {
        self.column(name).ok_or_else(|| TabularError::MissingColumn {
            column: name.to_string(),
        })
    }
}

pub(crate) fn read_records<R: Read>(mut reader: R) -> Result<Vec<Record>, TabularError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_records(input.strip_prefix('\u{feff}').unwrap_or(&input))
}

fn parse_records(input: &str) -> Result<Vec<Record>, TabularError> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut in_quotes = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut quote_line = 1;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() && !quoted => {
                in_quotes = true;
                quoted = true;
                quote_line = line;
            }
            ',' => {
                fields.push(std::mem::take(&mut field));
                quoted = false;
            }
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                fields.push(std::mem::take(&mut field));
                quoted = false;
                push_record(&mut records, record_line, std::mem::take(&mut fields));
                line += 1;
                record_line = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(TabularError::UnterminatedQuote { line: quote_line });
    }
    if !field.is_empty() || !fields.is_empty() || quoted {
        fields.push(field);
        push_record(&mut records, record_line, fields);
    }

    Ok(records)
}

fn push_record(records: &mut Vec<Record>, line: usize, fields: Vec<String>) {
    if fields.iter().any(|f| !f.trim().is_empty()) {
        records.push(Record { line, fields });
    }
}
