use super::field::RecordField;
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Date format used everywhere a record date is read or written.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Literal stored in place of an empty note.
pub const EMPTY_NOTE: &str = "None";

/// Punctuation accepted in task names and notes, besides word characters
/// and whitespace.
const ALLOWED_PUNCTUATION: &str = "-.,!();:'\"?";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {}: {reason}", .field.label())]
pub struct ValidationError {
    pub field: RecordField,
    pub reason: String,
}

impl ValidationError {
    fn new(field: RecordField, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Raw, unvalidated field values as typed by the user or read from a row.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub date: String,
    pub task_name: String,
    pub duration: String,
    pub note: String,
}

/// One work log entry.
///
/// Records have no identifier: two records are the same entry when all four
/// fields are equal, which is what the derived `PartialEq` checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub date: NaiveDate,    // ⇔ date       (TEXT "DD/MM/YYYY")
    pub task_name: String,  // ⇔ task_name
    pub duration: u32,      // ⇔ time_spent (minutes)
    pub note: String,       // ⇔ note       ("None" when empty)
}

impl Record {
    /// Build a record from raw values, checking every field.
    pub fn validate(draft: &Draft) -> Result<Self, ValidationError> {
        Ok(Self {
            date: parse_date(&draft.date)?,
            task_name: parse_text(RecordField::TaskName, &draft.task_name)?,
            duration: parse_duration(&draft.duration)?,
            note: parse_text(RecordField::Note, &draft.note)?,
        })
    }

    /// Build a record from the four stored columns of a row.
    pub fn from_fields(fields: &[String; 4]) -> Result<Self, ValidationError> {
        let [date, task_name, duration, note] = fields;
        Self::validate(&Draft {
            date: date.clone(),
            task_name: task_name.clone(),
            duration: duration.clone(),
            note: note.clone(),
        })
    }

    /// The four columns in table order.
    pub fn to_fields(&self) -> [String; 4] {
        [
            self.date_text(),
            self.task_name.clone(),
            self.duration.to_string(),
            self.note.clone(),
        ]
    }

    pub fn date_text(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Text value of a single field.
    pub fn field_text(&self, field: RecordField) -> String {
        match field {
            RecordField::Date => self.date_text(),
            RecordField::TaskName => self.task_name.clone(),
            RecordField::Duration => self.duration.to_string(),
            RecordField::Note => self.note.clone(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Date: {}", self.date_text())?;
        writeln!(f, "Task Name: {}", self.task_name)?;
        writeln!(f, "Time Spent: {} Minutes", self.duration)?;
        writeln!(f, "Note: {}", self.note)
    }
}

/// Parse a strict, zero-padded DD/MM/YYYY date.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || {
        ValidationError::new(
            RecordField::Date,
            format!("'{s}' is not a valid date format. Please use DD/MM/YYYY."),
        )
    };

    let b = s.as_bytes();
    let shape_ok = b.len() == 10
        && b[2] == b'/'
        && b[5] == b'/'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 2 || i == 5 || c.is_ascii_digit());
    if !shape_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| invalid())
}

/// Parse a whole, non-negative number of minutes.
pub fn parse_duration(s: &str) -> Result<u32, ValidationError> {
    let invalid = || {
        ValidationError::new(
            RecordField::Duration,
            format!("'{s}' is not a whole number. Please enter a whole number."),
        )
    };

    if s.is_empty() || !s.bytes().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    s.parse::<u32>().map_err(|_| invalid())
}

/// Check a task name or note against the allowed character set.
///
/// An empty note is stored as [`EMPTY_NOTE`]; an empty task name is rejected.
pub fn parse_text(field: RecordField, s: &str) -> Result<String, ValidationError> {
    if s.is_empty() {
        return match field {
            RecordField::Note => Ok(EMPTY_NOTE.to_string()),
            _ => Err(ValidationError::new(field, "the field cannot be empty.")),
        };
    }

    if s.starts_with('"') && s.ends_with('"') {
        return Err(ValidationError::new(
            field,
            "the field cannot be surrounded by doublequotes.",
        ));
    }

    let allowed = |c: char| {
        c.is_alphanumeric() || c == '_' || c.is_whitespace() || ALLOWED_PUNCTUATION.contains(c)
    };
    if !s.chars().all(allowed) || s.contains(['\n', '\r']) {
        return Err(ValidationError::new(
            field,
            "invalid characters detected. Please stick to alphanumerics and normal punctuation.",
        ));
    }

    Ok(s.to_string())
}
