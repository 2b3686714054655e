//! Editing an existing record: pick fields, compare, confirm, replace.

use super::session::Session;
use crate::errors::AppResult;
use crate::models::{Record, RecordField};
use crate::store::{Store, Table};
use crate::ui::Console;
use crate::ui::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditChoice {
    Field(RecordField),
    AllFields,
    NoFields,
}

pub const EDIT_MENU: [(EditChoice, &str); 6] = [
    (EditChoice::Field(RecordField::Date), "Date"),
    (EditChoice::Field(RecordField::TaskName), "Task Name"),
    (EditChoice::Field(RecordField::Duration), "Time Spent"),
    (EditChoice::Field(RecordField::Note), "Note"),
    (EditChoice::AllFields, "All Fields"),
    (EditChoice::NoFields, "No Fields (Return to Search Menu)"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// "No Fields" was chosen.
    Skipped,
    /// The proposed record was shown and not confirmed.
    Declined,
    /// The proposed record was appended and `removed` original rows deleted.
    Replaced { record: Record, removed: usize },
}

/// Replace `original` with `proposed`: append first, then delete every row
/// equal to `original`.
///
/// Appending first means an interruption leaves a duplicate rather than a
/// lost record. A delete that finds nothing does not undo the append. When
/// `proposed == original` the appended row matches too, so both go.
pub fn replace_record<T: Table>(
    store: &mut Store<T>,
    original: &Record,
    proposed: &Record,
) -> AppResult<usize> {
    store.append(proposed)?;
    store.delete_matching(original)
}

impl<T: Table, C: Console> Session<T, C> {
    pub fn edit_record(&mut self, original: &Record) -> AppResult<EditOutcome> {
        self.console.clear_display();
        self.console.show("Original Log:");
        self.console.show(&render::record_card(original));

        self.console.show("");
        let choice = self.choose("What field(s) would you like to edit?", &EDIT_MENU)?;

        let mut proposed = original.clone();
        match choice {
            EditChoice::NoFields => return Ok(EditOutcome::Skipped),
            EditChoice::Field(field) => self.collect_field(&mut proposed, field)?,
            EditChoice::AllFields => proposed = self.collect_record()?,
        }

        self.console.clear_display();
        self.console
            .show(&render::comparison(original, &proposed));

        if !self.console.prompt_confirm()? {
            return Ok(EditOutcome::Declined);
        }

        let removed = replace_record(&mut self.store, original, &proposed)?;
        self.audit(
            "edit",
            &format!("{} {}", original.date_text(), original.task_name),
            &format!(
                "Replaced with {} {} ({} min)",
                proposed.date_text(),
                proposed.task_name,
                proposed.duration
            ),
        );

        Ok(EditOutcome::Replaced {
            record: proposed,
            removed,
        })
    }
}
