//! Search over loaded rows.
//!
//! Every function here is pure: it takes the rows already read from the
//! store and returns the matching ones, in input order, each at most once.
//! Malformed rows take part through whatever raw text they still have, so a
//! damaged line can still be found and then reported by the detail view.

use crate::models::Row;
use chrono::NaiveDate;
use regex::Regex;

/// The five kinds of search.
#[derive(Debug, Clone)]
pub enum Query {
    Date(NaiveDate),
    DateRange { start: NaiveDate, end: NaiveDate },
    Duration(u32),
    Text(String),
    Pattern(Regex),
}

impl Query {
    pub fn apply(&self, rows: &[Row]) -> Vec<Row> {
        match self {
            Query::Date(d) => by_date(rows, *d),
            Query::DateRange { start, end } => by_date_range(rows, *start, *end),
            Query::Duration(m) => by_duration(rows, *m),
            Query::Text(t) => by_text(rows, t),
            Query::Pattern(re) => by_pattern(rows, re),
        }
    }
}

fn select<F>(rows: &[Row], keep: F) -> Vec<Row>
where
    F: Fn(&Row) -> bool,
{
    rows.iter().filter(|r| keep(r)).cloned().collect()
}

pub fn by_date(rows: &[Row], date: NaiveDate) -> Vec<Row> {
    select(rows, |r| r.date() == Some(date))
}

/// Rows dated within `[start, end]`, both ends included.
///
/// A row is kept when `0 <= end - date <= end - start` (in days). With
/// `start > end` nothing matches.
pub fn by_date_range(rows: &[Row], start: NaiveDate, end: NaiveDate) -> Vec<Row> {
    let span = (end - start).num_days();
    select(rows, |r| {
        r.date().is_some_and(|d| {
            let offset = (end - d).num_days();
            (0..=span).contains(&offset)
        })
    })
}

pub fn by_duration(rows: &[Row], minutes: u32) -> Vec<Row> {
    select(rows, |r| r.duration() == Some(minutes))
}

/// Case-insensitive substring search in task name or note.
pub fn by_text(rows: &[Row], needle: &str) -> Vec<Row> {
    let needle = needle.to_lowercase();
    let hit = |s: Option<&str>| s.is_some_and(|s| s.to_lowercase().contains(&needle));
    select(rows, |r| hit(r.task_name()) || hit(r.note()))
}

/// Unanchored regex search in task name or note.
pub fn by_pattern(rows: &[Row], pattern: &Regex) -> Vec<Row> {
    let hit = |s: Option<&str>| s.is_some_and(|s| pattern.is_match(s));
    select(rows, |r| hit(r.task_name()) || hit(r.note()))
}

/// Sort key: the (year, month, day) text components of DD/MM/YYYY.
fn chrono_key(row: &Row) -> Option<(String, String, String)> {
    let text = row.date_text()?;
    let mut parts = text.split('/');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    Some((year.to_string(), month.to_string(), day.to_string()))
}

/// Stable chronological sort. Rows without a readable date come first.
pub fn sort_chronological(rows: &mut [Row]) {
    rows.sort_by_cached_key(chrono_key);
}

pub fn sorted_chronological(mut rows: Vec<Row>) -> Vec<Row> {
    sort_chronological(&mut rows);
    rows
}

/// Distinct dates in the order they first appear.
pub fn distinct_dates(rows: &[Row]) -> Vec<NaiveDate> {
    let mut out: Vec<NaiveDate> = Vec::new();
    for d in rows.iter().filter_map(Row::date) {
        if !out.contains(&d) {
            out.push(d);
        }
    }
    out
}
