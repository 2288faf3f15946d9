//! Input validation for add and remove.
//!
//! Both operations start from a raw [`RecordInput`]. Add is strict (required
//! fields, non-negative age, real calendar date); remove only insists that the
//! age is an integer, since anything else simply fails to match.

use std::num::IntErrorKind;

use chrono::NaiveDate;
use serde_json::Map;
use thiserror::Error;

use super::record::{Record, RecordInput};

/// Format of `dateOfDeath` in the backing file and on the command line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why an add or remove was refused. Refusals never mutate the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("All fields (firstname, lastname, age, dateOfDeath) are required")]
    MissingFields,

    #[error("Age must be an integer, got '{0}'")]
    InvalidAge(String),

    #[error("Age is out of range, got '{0}'")]
    AgeOutOfRange(String),

    #[error("Age must not be negative, got {0}")]
    NegativeAge(i64),

    #[error("Date must be in YYYY-MM-DD format, got '{0}'")]
    InvalidDate(String),

    #[error("Victim '{name}' with date '{date}' already exists")]
    Duplicate { name: String, date: String },

    #[error("Victim '{name}' with date '{date}' not found")]
    NotFound { name: String, date: String },
}

/// Identity fields used to look a record up.
///
/// Names are already trimmed; comparison against stored records happens in
/// [`super::identity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub firstname: String,
    pub middlename: String,
    pub lastname: String,
    pub age: Option<i64>,
    pub date_of_death: String,
}

impl Candidate {
    /// Name as shown in messages, middle name only when present.
    pub fn display_name(&self) -> String {
        if self.middlename.is_empty() {
            format!("{} {}", self.firstname, self.lastname)
        } else {
            format!("{} {} {}", self.firstname, self.middlename, self.lastname)
        }
    }
}

impl From<&Record> for Candidate {
    fn from(record: &Record) -> Self {
        Self {
            firstname: record.firstname.clone(),
            middlename: record.middlename.clone(),
            lastname: record.lastname.clone(),
            age: record.age.map(i64::from),
            date_of_death: record.date_of_death.clone(),
        }
    }
}

/// Validate input for a new record and build it with trimmed fields.
///
/// Checks run in order: required fields, age, date. Duplicate detection needs
/// the store and happens there.
pub fn validate_new(input: &RecordInput) -> Result<Record, Rejection> {
    let firstname = input.firstname.trim();
    let middlename = input.middlename.trim();
    let lastname = input.lastname.trim();
    let date = input.date_of_death.trim();

    if firstname.is_empty() || lastname.is_empty() || date.is_empty() {
        return Err(Rejection::MissingFields);
    }

    let age = parse_age(&input.age)?;
    if age < 0 {
        return Err(Rejection::NegativeAge(age));
    }
    let age = u32::try_from(age).map_err(|_| Rejection::AgeOutOfRange(input.age.clone()))?;

    if !is_valid_date(date) {
        return Err(Rejection::InvalidDate(date.to_string()));
    }

    Ok(Record {
        firstname: firstname.to_string(),
        middlename: middlename.to_string(),
        lastname: lastname.to_string(),
        age: Some(age),
        date_of_death: date.to_string(),
        extra: Map::new(),
    })
}

/// Parse the identity fields for a removal.
///
/// Only the age is checked; a negative age is accepted and will not match.
pub fn parse_lookup(input: &RecordInput) -> Result<Candidate, Rejection> {
    let age = parse_age(&input.age)?;
    Ok(Candidate {
        firstname: input.firstname.trim().to_string(),
        middlename: input.middlename.trim().to_string(),
        lastname: input.lastname.trim().to_string(),
        age: Some(age),
        date_of_death: input.date_of_death.trim().to_string(),
    })
}

fn parse_age(raw: &str) -> Result<i64, Rejection> {
    raw.trim().parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            Rejection::AgeOutOfRange(raw.to_string())
        }
        _ => Rejection::InvalidAge(raw.to_string()),
    })
}

/// True if `value` is exactly `YYYY-MM-DD` and names a real calendar date.
pub fn is_valid_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        });
    shape_ok && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}
