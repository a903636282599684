//! PlatformConfig - Config Loader output
//!
//! Describes the complete platform configuration: profile API access,
//! display defaults, and seeded guild subscriptions for demo/test mode.

use serde::{Deserialize, Serialize};

use crate::{CreatorId, GuildSubscriptions, NotifyChannel};

/// Configuration version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// Complete platform configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Configuration version
    #[serde(default)]
    pub version: ConfigVersion,

    /// External profile API settings
    #[serde(default)]
    pub api: ApiSettings,

    /// Operator display settings
    #[serde(default)]
    pub display: DisplaySettings,

    /// Seeded guild subscriptions (demo mode / memory store)
    #[serde(default)]
    pub guilds: Vec<GuildSeed>,
}

/// External profile API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Client identifier sent alongside the bearer token (optional)
    #[serde(default)]
    pub client_id: Option<String>,

    /// Maximum identities per batch call (the API's documented limit)
    #[serde(default = "default_batch_limit")]
    pub batch_limit: usize,

    /// Per-call timeout in milliseconds (aligned with the API's p99)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            client_id: None,
            batch_limit: default_batch_limit(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.twitch.tv/helix".to_string()
}

fn default_batch_limit() -> usize {
    100
}

fn default_request_timeout_ms() -> u64 {
    2000
}

/// Operator display settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Entries per page when listing subscriptions
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    10
}

/// One seeded guild subscription entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildSeed {
    /// Guild snowflake
    pub id: String,

    /// Guild display name (optional)
    #[serde(default)]
    pub name: Option<String>,

    /// Subscribed creator identities
    #[serde(default)]
    pub notify_list: Vec<String>,

    /// Channels receiving live-event notifications
    #[serde(default)]
    pub notify_channels: Vec<NotifyChannel>,
}

impl GuildSeed {
    /// Convert the seed into a store snapshot.
    pub fn to_subscriptions(&self) -> GuildSubscriptions {
        GuildSubscriptions {
            id: self.id.clone(),
            name: self.name.clone(),
            notify_list: self
                .notify_list
                .iter()
                .map(|s| CreatorId::new(s))
                .collect(),
            notify_channels: self.notify_channels.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let api = ApiSettings::default();
        assert_eq!(api.batch_limit, 100);
        assert_eq!(api.request_timeout_ms, 2000);
        assert_eq!(DisplaySettings::default().page_size, 10);
    }

    #[test]
    fn test_minimal_config_deserializes() {
        let config: PlatformConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.version, ConfigVersion::V1);
        assert!(config.guilds.is_empty());
        assert_eq!(config.api.batch_limit, 100);
    }

    #[test]
    fn test_seed_to_subscriptions() {
        let seed = GuildSeed {
            id: "g1".into(),
            name: Some("Test Guild".into()),
            notify_list: vec!["s1".into(), "s2".into()],
            notify_channels: vec![NotifyChannel {
                id: "c1".into(),
                name: "alerts".into(),
            }],
        };
        let snap = seed.to_subscriptions();
        assert_eq!(snap.notify_list.len(), 2);
        assert_eq!(snap.notify_list[0], "s1");
        assert_eq!(snap.notify_channels[0].name, "alerts");
    }
}
