//! Interactive session: main menu, search menu and the paged detail view.

use super::detail::{DetailView, Nav, Step};
use super::filter::{Query, distinct_dates, sorted_chronological};
use crate::errors::AppResult;
use crate::models::Row;
use crate::store::{AuditLog, Store, Table};
use crate::ui::Console;
use crate::ui::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    LogWork,
    SearchLogs,
    ClearAllLogs,
    Quit,
}

pub const MAIN_MENU: [(MainChoice, &str); 4] = [
    (MainChoice::LogWork, "Log Work"),
    (MainChoice::SearchLogs, "Search Logs"),
    (MainChoice::ClearAllLogs, "Clear All Logs"),
    (MainChoice::Quit, "Quit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Date,
    DateRange,
    Duration,
    Text,
    Pattern,
}

/// `None` returns to the main menu.
pub const SEARCH_MENU: [(Option<SearchKind>, &str); 6] = [
    (Some(SearchKind::Date), "Search by Date"),
    (Some(SearchKind::DateRange), "Search by Date Range"),
    (Some(SearchKind::Duration), "Search by Work Time Spent"),
    (Some(SearchKind::Text), "Search by Word or Phrase"),
    (Some(SearchKind::Pattern), "Search by Pattern (Regex)"),
    (None, "Return to Main Menu"),
];

pub const NAV_PROMPT: &str = "[N]ext, [P]revious, [E]dit, [D]elete, [R]eturn to Search Menu: ";

pub struct Session<T: Table, C: Console> {
    pub(crate) store: Store<T>,
    pub(crate) console: C,
    pub(crate) audit: Option<AuditLog>,
    pub(crate) separator: char,
}

impl<T: Table, C: Console> Session<T, C> {
    pub fn new(store: Store<T>, console: C) -> Self {
        Self {
            store,
            console,
            audit: None,
            separator: '-',
        }
    }

    pub fn with_audit(mut self, audit: AuditLog) -> Self {
        self.audit = Some(audit);
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn store(&self) -> &Store<T> {
        &self.store
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_parts(self) -> (Store<T>, C) {
        (self.store, self.console)
    }

    /// Run until the user quits.
    ///
    /// The table is checked first; a bad header ends the session before any
    /// menu is shown.
    pub fn run(&mut self) -> AppResult<()> {
        if self.store.initialize()? {
            let location = self.store.table().location();
            self.audit("init", &location, "Work log created");
        }

        loop {
            self.console.clear_display();
            match self.choose("Main Menu", &MAIN_MENU)? {
                MainChoice::LogWork => {
                    self.log_work()?;
                }
                MainChoice::SearchLogs => self.search_loop()?,
                MainChoice::ClearAllLogs => {
                    self.clear_all_logs()?;
                }
                MainChoice::Quit => return Ok(()),
            }
        }
    }

    /// Search menu loop. Each search reloads the table, so results always
    /// reflect earlier edits and deletions.
    pub fn search_loop(&mut self) -> AppResult<()> {
        loop {
            self.console.clear_display();
            let choice = self.choose("Search Menu", &SEARCH_MENU)?;
            self.console.clear_display();

            let Some(kind) = choice else {
                return Ok(());
            };

            let rows = sorted_chronological(self.store.load_all()?);
            let results = match self.build_query(kind, &rows)? {
                Some(query) => query.apply(&rows),
                None => Vec::new(),
            };
            self.detail_view(results)?;
        }
    }

    /// Ask the user for the search input. `None` when there is nothing to
    /// choose from (a date search over an empty log).
    pub fn build_query(&mut self, kind: SearchKind, rows: &[Row]) -> AppResult<Option<Query>> {
        let query = match kind {
            SearchKind::Date => {
                let dates = distinct_dates(rows);
                if dates.is_empty() {
                    return Ok(None);
                }
                let labels: Vec<String> = dates
                    .iter()
                    .map(|d| d.format(crate::models::record::DATE_FORMAT).to_string())
                    .collect();
                let idx = self
                    .console
                    .prompt_menu_choice("Choose a date to see its logs:", &labels)?;
                Query::Date(dates[idx])
            }
            SearchKind::DateRange => {
                let start = self
                    .console
                    .prompt_date("Enter the start date for your range search.")?;
                let end = self
                    .console
                    .prompt_date("Enter the end date for your range search.")?;
                Query::DateRange { start, end }
            }
            SearchKind::Duration => Query::Duration(self.console.prompt_duration()?),
            SearchKind::Text => Query::Text(self.console.prompt_text(
                "Please enter the word or phrase you'd like to search for: ",
            )?),
            SearchKind::Pattern => Query::Pattern(self.console.prompt_pattern()?),
        };
        Ok(Some(query))
    }

    /// Page through `results` until the user leaves, edits or deletes.
    pub fn detail_view(&mut self, results: Vec<Row>) -> AppResult<()> {
        self.console.clear_display();

        let Some(mut view) = DetailView::new(results) else {
            self.console.pause(
                "---Sorry, no results matched your search.---\nPress Enter to return to the Search Menu.",
            )?;
            return Ok(());
        };

        loop {
            self.console.show(&view.position_label());

            match view.current() {
                Row::Valid(record) => self.console.show(&render::record_card(record)),
                Row::Malformed(e) => {
                    let msg = format!(
                        "Oh no! It looks like the data in {} is not formatted correctly!\n({e})\nPress Enter to return to the Search Menu.",
                        self.store.table().location()
                    );
                    self.console.pause(&msg)?;
                    return Ok(());
                }
            }

            let input = self.console.prompt_text(NAV_PROMPT)?;
            let Some(nav) = Nav::parse(&input) else {
                self.console.clear_display();
                continue;
            };

            match view.apply(nav) {
                Step::Stay => self.console.clear_display(),
                Step::Edit(record) => {
                    self.edit_record(&record)?;
                    return Ok(());
                }
                Step::Delete(record) => {
                    if self.console.prompt_confirm()? {
                        self.delete_record(&record)?;
                    }
                    return Ok(());
                }
                Step::Exit => return Ok(()),
            }
        }
    }

    /// Menu over labelled options; returns the chosen key.
    pub(crate) fn choose<K: Copy>(&mut self, title: &str, options: &[(K, &str)]) -> AppResult<K> {
        let rule = render::rule(self.separator, title.chars().count());
        let labels: Vec<String> = options.iter().map(|(_, l)| l.to_string()).collect();
        let idx = self
            .console
            .prompt_menu_choice(&format!("{title}\n{rule}"), &labels)?;
        Ok(options[idx].0)
    }

    /// Write an audit line; failures are reported but never stop the session.
    pub(crate) fn audit(&mut self, operation: &str, target: &str, message: &str) {
        if let Some(audit) = &self.audit
            && let Err(e) = audit.record(operation, target, message)
        {
            self.console
                .show(&format!("⚠️ Failed to write internal log: {e}"));
        }
    }
}
