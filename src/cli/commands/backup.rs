use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { out, compress } = cmd {
        let dest = expand_tilde(out);
        if let Some(written) = BackupLogic::backup(&cfg.log_path(), &dest, *compress)? {
            super::audit(
                cfg,
                "backup",
                &written.to_string_lossy(),
                if *compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }
    }

    Ok(())
}
