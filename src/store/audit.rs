//! Internal audit log: one CSV row per mutating operation, kept next to
//! the work log table.

use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Audit file belonging to a table: `work_log.txt` → `work_log.audit.csv`.
    pub fn for_table(table: &Path) -> Self {
        Self::new(table.with_extension("audit.csv"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one audit line.
    pub fn record(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        // local time, RFC 3339
        let entry = AuditEntry {
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        };

        let is_new = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);
        wtr.serialize(&entry)?;
        wtr.flush()?;
        Ok(())
    }

    /// All entries, oldest first. A missing file means no entries.
    pub fn read_all(&self) -> AppResult<Vec<AuditEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::Reader::from_path(&self.path)?;
        let mut entries = Vec::new();
        for entry in rdr.deserialize::<AuditEntry>() {
            entries.push(entry?);
        }
        Ok(entries)
    }
}
