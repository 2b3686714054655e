use super::session::Session;
use crate::errors::AppResult;
use crate::store::{ClearToken, Table};
use crate::ui::Console;

impl<T: Table, C: Console> Session<T, C> {
    /// Wipe every record once the user types the clear token.
    ///
    /// Returns whether the table was cleared.
    pub fn clear_all_logs(&mut self) -> AppResult<bool> {
        let input = self
            .console
            .prompt_text("Enter 'CLEAR' to clear all logs: ")?;

        let Some(token) = ClearToken::confirm(&input) else {
            self.console
                .pause("Work logs have been preserved. Hit Enter to return to the Main Menu.")?;
            return Ok(false);
        };

        self.store.reset_all(token)?;
        let location = self.store.table().location();
        self.audit("clear", &location, "All work logs cleared");

        self.console
            .pause("All work logs have been cleared. Hit Enter to return to the Main Menu.")?;
        Ok(true)
    }
}
