//! Command Line & Environment Config

use std::path::PathBuf;

use clap::Args;

/// Default inventory file, relative to the working directory.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.csv";

/// Default Typst report file written by `export`.
pub const DEFAULT_REPORT_FILE: &str = "inventory_report.typ";

/// Log output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    #[default]
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Inventory file settings.
#[derive(Debug, Clone, Args)]
pub struct StoreConfig {
    /// Path to the inventory CSV file
    #[arg(
        short = 'f',
        long,
        env = "INVENTORY_FILE",
        default_value = DEFAULT_INVENTORY_FILE,
        global = true
    )]
    pub inventory_file: PathBuf,
}

/// Logging settings.
#[derive(Debug, Clone, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Compact,
        }
    }
}
