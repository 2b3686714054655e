//! The work log table: a header row followed by one row per record.
//!
//! The store is the only writer of the table. Every operation reads or
//! writes the backing [`Table`] directly, nothing is cached between calls.

pub mod audit;
pub mod codec;
pub mod table;

pub use audit::AuditLog;
pub use table::{FileTable, MemoryTable, Table};

use crate::errors::{AppError, AppResult};
use crate::models::{Record, Row};
use codec::{
    HEADER_LINE, decode_fields, decode_invalid_utf8, decode_row, encode_record, strip_terminator,
};

/// Proof that the user typed the clear token. Required by
/// [`Store::reset_all`].
#[derive(Debug)]
pub struct ClearToken(());

impl ClearToken {
    pub const WORD: &'static str = "CLEAR";

    /// Accepts the clear word in any letter case, surrounding spaces ignored.
    pub fn confirm(input: &str) -> Option<Self> {
        input
            .trim()
            .eq_ignore_ascii_case(Self::WORD)
            .then_some(ClearToken(()))
    }
}

pub struct Store<T: Table> {
    table: T,
}

impl<T: Table> Store<T> {
    pub fn new(table: T) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Make sure the table exists with the expected header.
    ///
    /// Returns `true` when the table had to be created. A table whose first
    /// line is anything but the header is rejected with
    /// [`AppError::Schema`]; it is never repaired.
    pub fn initialize(&mut self) -> AppResult<bool> {
        if !self.table.exists() {
            self.table.replace(format!("{HEADER_LINE}\n").as_bytes())?;
            return Ok(true);
        }

        let content = self.table.read_bytes()?;
        self.check_header(&content)?;
        Ok(false)
    }

    fn check_header(&self, content: &[u8]) -> AppResult<()> {
        let first = lines(content).next().unwrap_or_default();
        let found = strip_terminator(first);
        if found != HEADER_LINE.as_bytes() {
            return Err(AppError::Schema {
                path: self.table.location(),
                found: String::from_utf8_lossy(found).into_owned(),
                expected: HEADER_LINE,
            });
        }
        Ok(())
    }

    /// Every data row in file order. Blank lines are skipped; rows that do
    /// not decode into a record, bad encoding included, are returned as
    /// [`Row::Malformed`].
    pub fn load_all(&self) -> AppResult<Vec<Row>> {
        let content = self.table.read_bytes()?;
        self.check_header(&content)?;

        let rows = lines(&content)
            .enumerate()
            .skip(1)
            .map(|(i, line)| (i + 1, strip_terminator(line)))
            .filter(|(_, line)| !line.iter().all(u8::is_ascii_whitespace))
            .map(|(line_no, line)| match std::str::from_utf8(line) {
                Ok(text) => decode_row(text, line_no),
                Err(_) => decode_invalid_utf8(line, line_no),
            })
            .collect();

        Ok(rows)
    }

    /// Valid records only, in file order.
    pub fn load_records(&self) -> AppResult<Vec<Record>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter_map(|row| match row {
                Row::Valid(r) => Some(r),
                Row::Malformed(_) => None,
            })
            .collect())
    }

    /// Add one row at the end of the table. Existing rows are untouched.
    pub fn append(&mut self, record: &Record) -> AppResult<()> {
        let mut line = encode_record(record)?;
        if let Some(last) = self.table.last_byte()?
            && last != b'\n'
        {
            line.insert(0, '\n');
        }
        self.table.append(line.as_bytes())
    }

    /// Rewrite the table without every row equal to `record`.
    ///
    /// All other lines, header included, are written back with their exact
    /// original bytes and order. Returns how many rows were removed; zero is
    /// not an error.
    pub fn delete_matching(&mut self, record: &Record) -> AppResult<usize> {
        let content = self.table.read_bytes()?;
        self.check_header(&content)?;

        let mut kept = Vec::with_capacity(content.len());
        let mut removed = 0;

        for (i, line) in lines(&content).enumerate() {
            if i > 0 && row_matches(strip_terminator(line), record) {
                removed += 1;
                continue;
            }
            kept.extend_from_slice(line);
        }

        if removed > 0 {
            self.table.replace(&kept)?;
        }
        Ok(removed)
    }

    /// Drop every data row, leaving only the header.
    pub fn reset_all(&mut self, _token: ClearToken) -> AppResult<()> {
        self.table.replace(format!("{HEADER_LINE}\n").as_bytes())
    }
}

/// Lines with their terminators kept.
fn lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    content.split_inclusive(|b| *b == b'\n')
}

fn row_matches(line: &[u8], record: &Record) -> bool {
    let Ok(line) = std::str::from_utf8(line) else {
        return false;
    };
    match decode_fields(line) {
        Ok(fields) => <&[String; 4]>::try_from(fields.as_slice())
            .ok()
            .and_then(|f| Record::from_fields(f).ok())
            .is_some_and(|r| &r == record),
        Err(_) => false,
    }
}
