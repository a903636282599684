//! Configuration validation
//!
//! Rules:
//! - guild ids unique
//! - channel ids unique within a guild
//! - batch_limit in 1..=100 (external API hard limit)
//! - request_timeout_ms > 0
//! - page_size > 0
//! - base_url non-empty

use std::collections::HashSet;

use contracts::{NotifyError, PlatformConfig};

/// Validate a PlatformConfig
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(config: &PlatformConfig) -> Result<(), NotifyError> {
    validate_api(config)?;
    validate_display(config)?;
    validate_guild_ids(config)?;
    validate_channel_ids(config)?;
    Ok(())
}

/// Validate API settings
fn validate_api(config: &PlatformConfig) -> Result<(), NotifyError> {
    let api = &config.api;

    if api.base_url.trim().is_empty() {
        return Err(NotifyError::config_validation(
            "api.base_url",
            "must not be empty",
        ));
    }

    if api.batch_limit == 0 || api.batch_limit > 100 {
        return Err(NotifyError::config_validation(
            "api.batch_limit",
            format!("must be in 1..=100, got {}", api.batch_limit),
        ));
    }

    if api.request_timeout_ms == 0 {
        return Err(NotifyError::config_validation(
            "api.request_timeout_ms",
            "must be > 0",
        ));
    }

    Ok(())
}

/// Validate display settings
fn validate_display(config: &PlatformConfig) -> Result<(), NotifyError> {
    if config.display.page_size == 0 {
        return Err(NotifyError::config_validation(
            "display.page_size",
            "must be > 0",
        ));
    }
    Ok(())
}

/// Validate guild id uniqueness
fn validate_guild_ids(config: &PlatformConfig) -> Result<(), NotifyError> {
    let mut seen = HashSet::new();
    for guild in &config.guilds {
        if guild.id.trim().is_empty() {
            return Err(NotifyError::config_validation("guilds[].id", "must not be empty"));
        }
        if !seen.insert(&guild.id) {
            return Err(NotifyError::config_validation(
                format!("guilds[id={}]", guild.id),
                "duplicate guild id",
            ));
        }
    }
    Ok(())
}

/// Validate channel id uniqueness per guild
fn validate_channel_ids(config: &PlatformConfig) -> Result<(), NotifyError> {
    for guild in &config.guilds {
        let mut seen = HashSet::new();
        for channel in &guild.notify_channels {
            if !seen.insert(&channel.id) {
                return Err(NotifyError::config_validation(
                    format!("guilds[{}].notify_channels[id={}]", guild.id, channel.id),
                    "duplicate channel id",
                ));
            }
        }
    }
    Ok(())
}
