use super::session::Session;
use crate::errors::AppResult;
use crate::models::Record;
use crate::store::Table;
use crate::ui::Console;

impl<T: Table, C: Console> Session<T, C> {
    /// Remove `record` from the table. Every identical row goes with it.
    pub fn delete_record(&mut self, record: &Record) -> AppResult<usize> {
        let removed = self.store.delete_matching(record)?;
        self.audit(
            "del",
            &format!("{} {}", record.date_text(), record.task_name),
            &format!("Deleted {removed} row(s)"),
        );
        Ok(removed)
    }
}
