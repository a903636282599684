//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Announcer - live-notification subscription index
#[derive(Parser, Debug)]
#[command(
    name = "announcer",
    author,
    version,
    about = "Live-notification subscription index",
    long_about = "Subscription index and dispatch tooling for a community bot.\n\n\
                  Loads guild subscription seeds from configuration, resolves \n\
                  creator identities against the external profile API, and \n\
                  renders paginated subscription lists."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "ANNOUNCER_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "ANNOUNCER_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one page of a guild's subscription list
    ShowList(ShowListArgs),

    /// Validate configuration file without running
    Validate(ValidateArgs),

    /// Display configuration information
    Info(InfoArgs),
}

/// Arguments for the `show-list` command
#[derive(Parser, Debug, Clone)]
pub struct ShowListArgs {
    /// Path to configuration file (TOML or JSON)
    #[arg(short, long, default_value = "announcer.toml", env = "ANNOUNCER_CONFIG")]
    pub config: PathBuf,

    /// Guild to list subscriptions for
    #[arg(short, long)]
    pub guild: String,

    /// Zero-based page index
    #[arg(short, long, default_value = "0")]
    pub page: usize,

    /// Entries per page (defaults to display.page_size from configuration)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Bearer token for the external profile API
    #[arg(long, env = "ANNOUNCER_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Metrics server port (0 = disabled)
    #[arg(long, default_value = "0", env = "ANNOUNCER_METRICS_PORT")]
    pub metrics_port: u16,

    /// Output the rendered lines as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, default_value = "announcer.toml")]
    pub config: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "announcer.toml")]
    pub config: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show detailed per-guild subscription information
    #[arg(long)]
    pub guilds: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}
