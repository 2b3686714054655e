use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::store::AuditLog;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        if !cfg.audit_enabled {
            info("The internal log is disabled (audit_enabled: false).");
        }
        let audit = AuditLog::for_table(&cfg.log_path());
        LogLogic::print_log(&audit)?;
    }

    Ok(())
}
