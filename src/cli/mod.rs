//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod account;
pub mod campaigns;
pub mod init;
pub mod status;

/// Output format options
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per entry (default)
    #[default]
    Table,
    /// JSON format - structured for scripts, redacted like the tables
    Json,
}

/// adlens - dashboard CLI for the Facebook Marketing Graph API
#[derive(Parser, Debug)]
#[command(name = "adlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "ADLENS_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "ADLENS_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Display sensitive fields unmasked
    #[arg(long, global = true)]
    pub show_sensitive: bool,

    /// Enable debug logging
    #[arg(long, global = true, env = "ADLENS_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Override the Graph API host
    #[arg(long, global = true, env = "ADLENS_GRAPH_HOST", hide = true)]
    pub graph_host: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up Facebook Marketing API credentials
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Fetch campaigns: list ad accounts visible to the access token
    Campaigns,

    /// Fetch metadata for the configured ad account
    Account,
}
