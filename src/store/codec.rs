//! Row encoding for the work log table.
//!
//! Comma delimited, `|` as quote character so double quotes in free text
//! never need escaping.

use crate::errors::{AppError, AppResult};
use crate::models::{RawRowError, Record, Row};

pub const HEADER: [&str; 4] = ["date", "task_name", "time_spent", "note"];
pub const HEADER_LINE: &str = "date,task_name,time_spent,note";

const DELIMITER: u8 = b',';
const QUOTE: u8 = b'|';

/// Encode four fields as one line, terminator included.
pub fn encode_row<I, S>(fields: I) -> AppResult<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .quote(QUOTE)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(fields)?;
    let bytes = wtr.into_inner().map_err(|e| AppError::from(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| AppError::Other(format!("row is not UTF-8: {e}")))
}

pub fn encode_record(record: &Record) -> AppResult<String> {
    encode_row(record.to_fields())
}

/// Split one line into its raw fields. Blank lines yield no fields.
pub fn decode_fields(line: &str) -> AppResult<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(DELIMITER)
        .quote(QUOTE)
        .flexible(true)
        .from_reader(line.as_bytes());

    match rdr.records().next() {
        Some(rec) => Ok(rec?.iter().map(str::to_string).collect()),
        None => Ok(Vec::new()),
    }
}

/// Decode a data line into a [`Row`]. `line_no` is 1-based, header included.
pub fn decode_row(line: &str, line_no: usize) -> Row {
    let fields = match decode_fields(line) {
        Ok(f) => f,
        Err(e) => {
            return Row::Malformed(RawRowError {
                line: line_no,
                fields: Vec::new(),
                reason: e.to_string(),
            });
        }
    };

    let parsed = <&[String; 4]>::try_from(fields.as_slice()).map(Record::from_fields);
    match parsed {
        Ok(Ok(record)) => Row::Valid(record),
        Ok(Err(e)) => Row::Malformed(RawRowError {
            line: line_no,
            reason: e.to_string(),
            fields,
        }),
        Err(_) => Row::Malformed(RawRowError {
            line: line_no,
            reason: format!("expected {} fields, found {}", HEADER.len(), fields.len()),
            fields,
        }),
    }
}

/// A line with its terminator removed.
pub fn strip_terminator(mut line: &[u8]) -> &[u8] {
    while let [rest @ .., b'\n' | b'\r'] = line {
        line = rest;
    }
    line
}

/// Decode a data line that is not valid UTF-8. The fields are read from a
/// lossy copy so the row can still be found by date or duration.
pub fn decode_invalid_utf8(line: &[u8], line_no: usize) -> Row {
    let fields = decode_fields(&String::from_utf8_lossy(line)).unwrap_or_default();
    Row::Malformed(RawRowError {
        line: line_no,
        fields,
        reason: "not valid UTF-8".to_string(),
    })
}
