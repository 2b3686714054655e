use crate::config::Config;
use crate::core::Session;
use crate::errors::AppResult;
use crate::store::{FileTable, Store};
use crate::ui::{Console, TerminalConsole};

/// Interactive session: greeting, menus until Quit, goodbye.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut console = TerminalConsole::new();
    console.clear_display();
    console.pause("Hello, welcome to the work log program. Press Enter to continue")?;

    let store = Store::new(FileTable::new(cfg.log_path()));
    let mut session = Session::new(store, console).with_separator(cfg.separator());
    if let Some(audit) = cfg.audit_log() {
        session = session.with_audit(audit);
    }
    session.run()?;

    let (_, mut console) = session.into_parts();
    console.clear_display();
    console.show("Thank you for using the work log program!");
    Ok(())
}
