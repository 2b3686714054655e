use crate::errors::{AppError, AppResult};
use crate::store::AuditLog;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the work log table.
    pub log_file: String,
    /// Write mutating operations to `<table>.audit.csv`.
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
    /// Character used to underline menu titles.
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_audit_enabled() -> bool {
    true
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: Self::log_file_default().to_string_lossy().to_string(),
            audit_enabled: default_audit_enabled(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("worklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".worklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklog.conf")
    }

    /// Default location of the work log table
    pub fn log_file_default() -> PathBuf {
        Self::config_dir().join("work_log.txt")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write the configuration file, creating its directory.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Table path with `~/` expanded.
    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }

    /// Audit log next to the table, if enabled.
    pub fn audit_log(&self) -> Option<AuditLog> {
        self.audit_enabled
            .then(|| AuditLog::for_table(&self.log_path()))
    }

    /// First character of `separator_char`, `-` if empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Prepare the configuration directory and file.
    ///
    /// `custom_file` replaces the default table path. In test mode the
    /// configuration file is left untouched.
    pub fn init_all(custom_file: Option<&str>, is_test: bool) -> AppResult<Self> {
        fs::create_dir_all(Self::config_dir())?;

        let mut config = if is_test {
            Self::default()
        } else {
            Self::load()?
        };
        if let Some(file) = custom_file {
            config.log_file = file.to_string();
        }

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }
}
