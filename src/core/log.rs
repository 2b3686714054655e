use crate::errors::AppResult;
use crate::store::AuditLog;
use crate::store::audit::AuditEntry;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

const TARGET_MAX: usize = 60;

static ANSI: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok());

fn strip_ansi(s: &str) -> String {
    match ANSI.as_ref() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// ANSI colour for each audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "clear" => Colour::Purple,
        "backup" => Colour::Blue,
        "export" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Cut to `max` visible characters, ending with "...".
fn truncate_visible(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// "op (target)" with only the operation coloured.
fn format_op_target(entry: &AuditEntry) -> String {
    let color = color_for_operation(&entry.operation);
    let plain = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let visible = truncate_visible(&plain, TARGET_MAX);
    match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the audit log, one aligned line per entry.
    pub fn render(entries: &[AuditEntry]) -> Vec<String> {
        let cells: Vec<(String, String)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());
                (date, format_op_target(e))
            })
            .collect();

        let id_w = entries.len().to_string().len();
        let date_w = cells.iter().map(|(d, _)| d.width()).max().unwrap_or(0);
        let op_w = cells
            .iter()
            .map(|(_, op)| strip_ansi(op).width())
            .max()
            .unwrap_or(0);

        entries
            .iter()
            .zip(&cells)
            .enumerate()
            .map(|(i, (entry, (date, op)))| {
                // padding on the visible width, colour codes excluded
                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(op).width()));
                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    i + 1,
                    date,
                    op,
                    padding,
                    entry.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }

    pub fn print_log(audit: &AuditLog) -> AppResult<()> {
        let entries = audit.read_all()?;
        if entries.is_empty() {
            println!("📜 Internal log is empty ({}).", audit.path().display());
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in Self::render(&entries) {
            println!("{line}");
        }
        Ok(())
    }
}
