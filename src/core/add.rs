use super::session::Session;
use crate::errors::AppResult;
use crate::models::{Record, RecordField};
use crate::store::Table;
use crate::ui::Console;
use crate::ui::render;

impl<T: Table, C: Console> Session<T, C> {
    /// Collect a new record from the user and append it to the table.
    pub fn log_work(&mut self) -> AppResult<Record> {
        let record = self.collect_record()?;
        self.store.append(&record)?;
        self.audit("add", &record.date_text(), &record.task_name);

        self.console.clear_display();
        self.console.show("New work log created:");
        self.console.show(&render::record_card(&record));
        self.console
            .pause("\nHit Enter to return to the Main Menu.")?;
        Ok(record)
    }

    /// Prompt for all four fields.
    pub(crate) fn collect_record(&mut self) -> AppResult<Record> {
        self.console.clear_display();
        let date = self.console.prompt_date("Enter the date of this work.")?;
        let task_name = self.console.prompt_restricted_text(RecordField::TaskName)?;
        let duration = self.console.prompt_duration()?;
        let note = self.console.prompt_restricted_text(RecordField::Note)?;

        Ok(Record {
            date,
            task_name,
            duration,
            note,
        })
    }

    /// Prompt for one field, replacing its value in `record`.
    pub(crate) fn collect_field(&mut self, record: &mut Record, field: RecordField) -> AppResult<()> {
        match field {
            RecordField::Date => {
                record.date = self.console.prompt_date("Enter the date of this work.")?;
            }
            RecordField::TaskName | RecordField::Note => {
                let text = self.console.prompt_restricted_text(field)?;
                if field == RecordField::TaskName {
                    record.task_name = text;
                } else {
                    record.note = text;
                }
            }
            RecordField::Duration => {
                record.duration = self.console.prompt_duration()?;
            }
        }
        Ok(())
    }
}
