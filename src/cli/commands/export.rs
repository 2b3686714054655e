use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::record::parse_date;
use crate::store::{FileTable, Store};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        out,
        from,
        to,
        force,
    } = cmd
    {
        let range = match (from, to) {
            (Some(f), Some(t)) => Some((parse_date(f)?, parse_date(t)?)),
            _ => None,
        };

        let mut store = Store::new(FileTable::new(cfg.log_path()));
        store.initialize()?;

        let path = expand_tilde(out);
        let count = ExportLogic::export(&store, *format, &path, range, *force)?;
        if count > 0 {
            super::audit(
                cfg,
                "export",
                &path.to_string_lossy(),
                &format!("{count} record(s) exported as {}", format.as_str()),
            );
        }
    }
    Ok(())
}
