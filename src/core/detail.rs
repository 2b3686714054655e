//! Cursor state for paging through search results one at a time.

use crate::models::{Record, Row};

/// Keys accepted by the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Next,
    Previous,
    Edit,
    Delete,
    Return,
}

impl Nav {
    /// Parse a navigation key, case-insensitive. Unknown input is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "n" => Some(Nav::Next),
            "p" => Some(Nav::Previous),
            "e" => Some(Nav::Edit),
            "d" => Some(Nav::Delete),
            "r" => Some(Nav::Return),
            _ => None,
        }
    }
}

/// What the caller must do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Redraw at the (possibly moved) cursor.
    Stay,
    Edit(Record),
    Delete(Record),
    Exit,
}

#[derive(Debug, Clone)]
pub struct DetailView {
    results: Vec<Row>,
    cursor: usize,
}

impl DetailView {
    /// `None` when there is nothing to page through.
    pub fn new(results: Vec<Row>) -> Option<Self> {
        if results.is_empty() {
            return None;
        }
        Some(Self { results, cursor: 0 })
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn current(&self) -> &Row {
        &self.results[self.cursor]
    }

    /// "Displaying result i of n", 1-based.
    pub fn position_label(&self) -> String {
        format!("Displaying result {} of {}", self.cursor + 1, self.len())
    }

    /// Apply one key. Paging never wraps around; edit and delete hand the
    /// current record back and end the view, since the result list is stale
    /// afterwards. A malformed current row can only exit.
    pub fn apply(&mut self, nav: Nav) -> Step {
        match nav {
            Nav::Next => {
                if self.cursor + 1 < self.len() {
                    self.cursor += 1;
                }
                Step::Stay
            }
            Nav::Previous => {
                self.cursor = self.cursor.saturating_sub(1);
                Step::Stay
            }
            Nav::Edit => match self.current() {
                Row::Valid(r) => Step::Edit(r.clone()),
                Row::Malformed(_) => Step::Exit,
            },
            Nav::Delete => match self.current() {
                Row::Valid(r) => Step::Delete(r.clone()),
                Row::Malformed(_) => Step::Exit,
            },
            Nav::Return => Step::Exit,
        }
    }
}
