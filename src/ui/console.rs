//! The interactive collaborator used by the session controller.
//!
//! Implementors only provide raw line I/O; the validated prompts are
//! default methods that re-prompt until the input is acceptable.

use crate::errors::{AppError, AppResult};
use crate::models::RecordField;
use crate::models::record::{parse_date, parse_duration, parse_text};
use chrono::NaiveDate;
use regex::Regex;

pub trait Console {
    /// Cosmetic screen reset.
    fn clear_display(&mut self);

    /// Print a block of text.
    fn show(&mut self, text: &str);

    /// Print `prompt` and read one line, without its terminator.
    ///
    /// End of input is an error: the session cannot continue without a user.
    fn read_line(&mut self, prompt: &str) -> AppResult<String>;

    fn pause(&mut self, message: &str) -> AppResult<()> {
        self.read_line(message).map(|_| ())
    }

    /// Free text, returned as typed.
    fn prompt_text(&mut self, prompt: &str) -> AppResult<String> {
        self.read_line(prompt)
    }

    /// Show numbered options and return the zero-based index of the choice.
    fn prompt_menu_choice(&mut self, title: &str, options: &[String]) -> AppResult<usize> {
        if options.is_empty() {
            return Err(AppError::Other(format!("menu '{title}' has no options")));
        }

        let mut menu = format!("{title}\n");
        for (i, opt) in options.iter().enumerate() {
            menu.push_str(&format!("{}: {}\n", i + 1, opt));
        }
        self.show(&menu);

        loop {
            let nav = self.read_line(&format!("Choose an option (1-{}): ", options.len()))?;
            match nav.trim().parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => self.show(&format!(
                    "\nSorry, '{}' is not a valid option. Please choose a number 1-{}.\n",
                    nav,
                    options.len()
                )),
            }
        }
    }

    fn prompt_confirm(&mut self) -> AppResult<bool> {
        let answer = self.read_line("Confirm this action (y/N): ")?;
        let confirmed = answer.trim().eq_ignore_ascii_case("y");
        if confirmed {
            self.show("\nChange confirmed.");
        } else {
            self.show("\nChange discarded.");
        }
        Ok(confirmed)
    }

    fn prompt_date(&mut self, label: &str) -> AppResult<NaiveDate> {
        self.show(label);
        loop {
            let raw = self.read_line("(DD/MM/YYYY): ")?;
            match parse_date(raw.trim()) {
                Ok(d) => return Ok(d),
                Err(e) => self.show(&format!("\n--- {e} ---\n")),
            }
        }
    }

    fn prompt_restricted_text(&mut self, field: RecordField) -> AppResult<String> {
        loop {
            let raw = self.read_line(&format!("Enter a {} for this log: ", field.label()))?;
            match parse_text(field, &raw) {
                Ok(t) => return Ok(t),
                Err(e) => self.show(&format!("\n--- {e} Try again. ---\n")),
            }
        }
    }

    fn prompt_duration(&mut self) -> AppResult<u32> {
        loop {
            let raw = self.read_line("Enter time spent in minutes (rounded): ")?;
            match parse_duration(raw.trim()) {
                Ok(m) => return Ok(m),
                Err(e) => self.show(&format!("\n--- {e} ---\n")),
            }
        }
    }

    /// A compilable regular expression; invalid syntax is reported and the
    /// prompt repeated.
    fn prompt_pattern(&mut self) -> AppResult<Regex> {
        loop {
            let raw = self
                .read_line("Please enter the pattern (regular expression) you'd like to search for: ")?;
            match Regex::new(&raw) {
                Ok(re) => return Ok(re),
                Err(e) => {
                    let err = AppError::PatternSyntax(e);
                    self.show(&format!("\n--- {err}. Please try again. ---"));
                }
            }
        }
    }
}
