pub mod backup;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod session;

use crate::config::Config;
use crate::ui::messages::warning;

/// Write an audit line for a command; failures only warn.
pub(crate) fn audit(cfg: &Config, operation: &str, target: &str, message: &str) {
    if let Some(audit) = cfg.audit_log()
        && let Err(e) = audit.record(operation, target, message)
    {
        warning(format!("Failed to write internal log: {e}"));
    }
}
