use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{FileTable, Store};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the work log table with its header
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.file.as_deref(), cli.test)?;
    let log_path = cfg.log_path();

    println!("⚙️  Initializing worklog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Work log   : {}", log_path.display());

    let mut store = Store::new(FileTable::new(&log_path));
    if store.initialize()? {
        println!("✅ Work log created at {}", log_path.display());
        super::audit(
            &cfg,
            "init",
            &log_path.to_string_lossy(),
            "Work log initialized",
        );
    } else {
        println!("✅ Work log already present at {}", log_path.display());
    }

    println!("🎉 worklog initialization completed!");
    Ok(())
}
