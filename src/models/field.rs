/// The four columns of a work log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Date,     // date
    TaskName, // task_name
    Duration, // time_spent
    Note,     // note
}

impl RecordField {
    pub const ALL: [RecordField; 4] = [
        RecordField::Date,
        RecordField::TaskName,
        RecordField::Duration,
        RecordField::Note,
    ];

    /// Human label used in prompts and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            RecordField::Date => "date",
            RecordField::TaskName => "task name",
            RecordField::Duration => "time spent",
            RecordField::Note => "note",
        }
    }

    /// Label shown in the edit menu.
    pub fn menu_label(&self) -> &'static str {
        match self {
            RecordField::Date => "Date",
            RecordField::TaskName => "Task Name",
            RecordField::Duration => "Time Spent",
            RecordField::Note => "Note",
        }
    }

    /// Zero-based column position in a stored row.
    pub fn index(&self) -> usize {
        match self {
            RecordField::Date => 0,
            RecordField::TaskName => 1,
            RecordField::Duration => 2,
            RecordField::Note => 3,
        }
    }
}
