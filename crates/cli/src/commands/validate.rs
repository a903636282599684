//! `validate` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::ValidateArgs;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ConfigSummary>,
}

#[derive(Serialize)]
struct ConfigSummary {
    version: String,
    api_base_url: String,
    page_size: usize,
    guild_count: usize,
    creator_count: usize,
    channel_count: usize,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!(config = %args.config.display(), "Validating configuration");

    let result = validate_config(args);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Configuration validation failed")
    }
}

fn validate_config(args: &ValidateArgs) -> ValidationResult {
    let config_path = args.config.display().to_string();

    // Check file exists
    if !args.config.exists() {
        return ValidationResult {
            valid: false,
            config_path,
            error: Some(format!("File not found: {}", args.config.display())),
            warnings: None,
            summary: None,
        };
    }

    // Try to load and validate
    match config_loader::ConfigLoader::load_from_path(&args.config) {
        Ok(config) => {
            let warnings = collect_warnings(&config);
            let creator_count: usize =
                config.guilds.iter().map(|g| g.notify_list.len()).sum();
            let channel_count: usize =
                config.guilds.iter().map(|g| g.notify_channels.len()).sum();

            ValidationResult {
                valid: true,
                config_path,
                error: None,
                warnings: if warnings.is_empty() {
                    None
                } else {
                    Some(warnings)
                },
                summary: Some(ConfigSummary {
                    version: format!("{:?}", config.version),
                    api_base_url: config.api.base_url.clone(),
                    page_size: config.display.page_size,
                    guild_count: config.guilds.len(),
                    creator_count,
                    channel_count,
                }),
            }
        }
        Err(e) => ValidationResult {
            valid: false,
            config_path,
            error: Some(e.to_string()),
            warnings: None,
            summary: None,
        },
    }
}

/// Collect configuration warnings (non-fatal issues)
fn collect_warnings(config: &contracts::PlatformConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.api.client_id.is_none() {
        warnings.push("api.client_id is unset - most platforms require it".to_string());
    }

    for guild in &config.guilds {
        if !guild.notify_list.is_empty() && guild.notify_channels.is_empty() {
            warnings.push(format!(
                "Guild '{}' has subscriptions but no notify channels - notifications will be dropped",
                guild.id
            ));
        }
        if guild.notify_list.is_empty() {
            warnings.push(format!("Guild '{}' has an empty notify list", guild.id));
        }
    }

    warnings
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Configuration is valid: {}", result.config_path);

        if let Some(ref summary) = result.summary {
            println!("\n  Version: {}", summary.version);
            println!("  API: {}", summary.api_base_url);
            println!("  Page size: {}", summary.page_size);
            println!("  Guilds: {}", summary.guild_count);
            println!("  Creators: {}", summary.creator_count);
            println!("  Channels: {}", summary.channel_count);
        }

        if let Some(ref warnings) = result.warnings {
            println!("\n⚠ Warnings:");
            for warning in warnings {
                println!("  - {}", warning);
            }
        }
    } else {
        println!("✗ Configuration is invalid: {}", result.config_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }
}
