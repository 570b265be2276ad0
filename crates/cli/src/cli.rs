//! Command line definition

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Resolve and inspect Arches deployment settings
#[derive(Debug, Parser)]
#[command(name = "arches-settings", version, about)]
pub struct Cli {
    /// Static settings YAML layered over the built-in defaults
    #[arg(long, env = "ARCHES_STATIC_CONFIG", global = true)]
    pub static_config: Option<PathBuf>,

    /// Log format (json, pretty); defaults to LOG_FORMAT or json
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve and validate settings, failing on any configuration error
    Check,
    /// Print the resolved settings with secrets redacted
    Show {
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Write the default static settings to a YAML file
    Example {
        /// Destination file
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}
