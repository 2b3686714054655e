use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog.
/// Without a subcommand the interactive work log session starts.
#[derive(Parser)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "An interactive work log: record tasks with date, time spent and notes, then search, edit and delete them",
    long_about = None
)]
pub struct Cli {
    /// Override the work log file path (useful for tests or a custom log)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the work log file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal audit log
    Log {
        /// Print every audited operation
        #[arg(long = "print", help = "Print the internal audit log")]
        print: bool,
    },

    /// Create a backup copy of the work log
    Backup {
        /// Destination file path
        #[arg(long = "out", value_name = "FILE")]
        out: String,

        /// Compress the backup into a .zip archive
        #[arg(long)]
        compress: bool,
    },

    /// Export work log records
    Export {
        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long = "out", value_name = "FILE")]
        out: String,

        /// First date to export (DD/MM/YYYY), inclusive
        #[arg(long, value_name = "DATE", requires = "to")]
        from: Option<String>,

        /// Last date to export (DD/MM/YYYY), inclusive
        #[arg(long, value_name = "DATE", requires = "from")]
        to: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
