//! Text renderings shared by the session screens.

use crate::models::{Record, RecordField};
use crate::utils::table::{Column, Table};

/// Width used to wrap record text.
pub const WRAP_WIDTH: usize = 78;

/// A record as shown in the detail view, long lines wrapped.
pub fn record_card(record: &Record) -> String {
    let opts = textwrap::Options::new(WRAP_WIDTH).subsequent_indent("    ");
    textwrap::fill(record.to_string().trim_end(), opts)
}

/// Original and proposed record side by side; changed fields are marked.
pub fn comparison(original: &Record, proposed: &Record) -> String {
    let mut table = Table::new(vec![
        Column::new(""),
        Column::new("Field"),
        Column::new("Original"),
        Column::new("Will Be Replaced With"),
    ]);

    for field in RecordField::ALL {
        let before = original.field_text(field);
        let after = proposed.field_text(field);
        let mark = if before != after { "*" } else { " " };
        table.add_row(vec![
            mark.to_string(),
            field.menu_label().to_string(),
            before,
            after,
        ]);
    }

    table.render()
}

/// Horizontal rule made of `ch`.
pub fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}
