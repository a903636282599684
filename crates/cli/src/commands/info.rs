//! `info` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::InfoArgs;

/// Configuration info for JSON output
#[derive(Serialize)]
struct ConfigInfo {
    version: String,
    api: ApiInfo,
    display: DisplayInfo,
    guilds: Vec<GuildInfo>,
}

#[derive(Serialize)]
struct ApiInfo {
    base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_id: Option<String>,
    batch_limit: usize,
    request_timeout_ms: u64,
}

#[derive(Serialize)]
struct DisplayInfo {
    page_size: usize,
}

#[derive(Serialize)]
struct GuildInfo {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    creator_count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    notify_list: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    notify_channels: Vec<ChannelInfo>,
}

#[derive(Serialize)]
struct ChannelInfo {
    id: String,
    name: String,
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading configuration info");

    if !args.config.exists() {
        anyhow::bail!("Configuration file not found: {}", args.config.display());
    }

    let config = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    if args.json {
        let info = build_config_info(&config, args);
        let json =
            serde_json::to_string_pretty(&info).context("Failed to serialize config info")?;
        println!("{}", json);
    } else {
        print_config_info(&config, args);
    }

    Ok(())
}

fn build_config_info(config: &contracts::PlatformConfig, args: &InfoArgs) -> ConfigInfo {
    let guilds = config
        .guilds
        .iter()
        .map(|g| {
            let (notify_list, notify_channels) = if args.guilds {
                (
                    g.notify_list.clone(),
                    g.notify_channels
                        .iter()
                        .map(|c| ChannelInfo {
                            id: c.id.clone(),
                            name: c.name.clone(),
                        })
                        .collect(),
                )
            } else {
                (Vec::new(), Vec::new())
            };

            GuildInfo {
                id: g.id.clone(),
                name: g.name.clone(),
                creator_count: g.notify_list.len(),
                notify_list,
                notify_channels,
            }
        })
        .collect();

    ConfigInfo {
        version: format!("{:?}", config.version),
        api: ApiInfo {
            base_url: config.api.base_url.clone(),
            client_id: config.api.client_id.clone(),
            batch_limit: config.api.batch_limit,
            request_timeout_ms: config.api.request_timeout_ms,
        },
        display: DisplayInfo {
            page_size: config.display.page_size,
        },
        guilds,
    }
}

fn print_config_info(config: &contracts::PlatformConfig, args: &InfoArgs) {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Announcer Configuration                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    // API info
    println!("🌐 Profile API");
    println!("   ├─ Version: {:?}", config.version);
    println!("   ├─ Base URL: {}", config.api.base_url);
    match &config.api.client_id {
        Some(client_id) => println!("   ├─ Client ID: {}", client_id),
        None => println!("   ├─ Client ID: (unset)"),
    }
    println!("   ├─ Batch limit: {}", config.api.batch_limit);
    println!("   └─ Timeout: {} ms", config.api.request_timeout_ms);

    // Display settings
    println!("\n📄 Display");
    println!("   └─ Page size: {}", config.display.page_size);

    // Guilds
    println!("\n🏠 Guilds ({})", config.guilds.len());
    for (i, guild) in config.guilds.iter().enumerate() {
        let is_last = i == config.guilds.len() - 1;
        let prefix = if is_last { "└─" } else { "├─" };
        let child_prefix = if is_last { "   " } else { "│  " };

        let label = guild.name.as_deref().unwrap_or("(unnamed)");
        println!("   {} {} ({})", prefix, guild.id, label);

        if args.guilds && !guild.notify_channels.is_empty() {
            println!(
                "   {}  📢 Channels ({}):",
                child_prefix,
                guild.notify_channels.len()
            );
            for (j, channel) in guild.notify_channels.iter().enumerate() {
                let channel_is_last = j == guild.notify_channels.len() - 1;
                let channel_prefix = if channel_is_last { "└─" } else { "├─" };
                println!(
                    "   {}     {} #{} ({})",
                    child_prefix, channel_prefix, channel.name, channel.id
                );
            }
            println!(
                "   {}  └─ Creators: {:?}",
                child_prefix, guild.notify_list
            );
        } else {
            println!(
                "   {}  └─ {} creators, {} channels",
                child_prefix,
                guild.notify_list.len(),
                guild.notify_channels.len()
            );
        }
    }

    println!();
}
