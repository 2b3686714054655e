use super::field::RecordField;
use super::record::{Record, parse_date, parse_duration};
use chrono::NaiveDate;
use thiserror::Error;

/// A data row that could not be decoded into a [`Record`].
///
/// Kept alongside valid rows so that loading and filtering never stop on a
/// damaged line; the error only surfaces when the row is displayed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct RawRowError {
    /// 1-based line number in the table, header included.
    pub line: usize,
    pub fields: Vec<String>,
    pub reason: String,
}

impl RawRowError {
    fn field(&self, field: RecordField) -> Option<&str> {
        self.fields.get(field.index()).map(String::as_str)
    }
}

/// One loaded data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Valid(Record),
    Malformed(RawRowError),
}

impl Row {
    pub fn record(&self) -> Option<&Record> {
        match self {
            Row::Valid(r) => Some(r),
            Row::Malformed(_) => None,
        }
    }

    /// Date text as stored (DD/MM/YYYY), if the row has one.
    pub fn date_text(&self) -> Option<String> {
        match self {
            Row::Valid(r) => Some(r.date_text()),
            Row::Malformed(e) => e.field(RecordField::Date).map(str::to_string),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Row::Valid(r) => Some(r.date),
            Row::Malformed(e) => e.field(RecordField::Date).and_then(|s| parse_date(s).ok()),
        }
    }

    pub fn duration(&self) -> Option<u32> {
        match self {
            Row::Valid(r) => Some(r.duration),
            Row::Malformed(e) => e
                .field(RecordField::Duration)
                .and_then(|s| parse_duration(s).ok()),
        }
    }

    pub fn task_name(&self) -> Option<&str> {
        match self {
            Row::Valid(r) => Some(&r.task_name),
            Row::Malformed(e) => e.field(RecordField::TaskName),
        }
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            Row::Valid(r) => Some(&r.note),
            Row::Malformed(e) => e.field(RecordField::Note),
        }
    }
}

impl From<Record> for Row {
    fn from(r: Record) -> Self {
        Row::Valid(r)
    }
}
