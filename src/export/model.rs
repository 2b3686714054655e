// src/export/model.rs

use crate::models::Record;
use serde::Serialize;

/// Flat shape of a record in exported files.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordExport {
    pub date: String,
    pub task_name: String,
    pub time_spent: u32,
    pub note: String,
}

impl From<&Record> for RecordExport {
    fn from(r: &Record) -> Self {
        Self {
            date: r.date_text(),
            task_name: r.task_name.clone(),
            time_spent: r.duration,
            note: r.note.clone(),
        }
    }
}
