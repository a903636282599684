//! Configuration parsing
//!
//! Supports TOML (primary) and JSON (optional) formats.

use contracts::{NotifyError, PlatformConfig};

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format (recommended)
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Infer format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse TOML configuration
pub fn parse_toml(content: &str) -> Result<PlatformConfig, NotifyError> {
    toml::from_str(content).map_err(|e| NotifyError::ConfigParse {
        message: format!("TOML parse error: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Parse JSON configuration
pub fn parse_json(content: &str) -> Result<PlatformConfig, NotifyError> {
    serde_json::from_str(content).map_err(|e| NotifyError::ConfigParse {
        message: format!("JSON parse error: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Parse configuration for the given format
pub fn parse(content: &str, format: ConfigFormat) -> Result<PlatformConfig, NotifyError> {
    match format {
        ConfigFormat::Toml => parse_toml(content),
        ConfigFormat::Json => parse_json(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_minimal() {
        let content = r#"
[api]
base_url = "https://api.twitch.tv/helix"
batch_limit = 100

[[guilds]]
id = "g1"
notify_list = ["s1"]

[[guilds.notify_channels]]
id = "c1"
name = "alerts"
"#;
        let result = parse_toml(content);
        assert!(result.is_ok(), "Failed: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.guilds.len(), 1);
        assert_eq!(config.guilds[0].notify_channels.len(), 1);
    }

    #[test]
    fn test_parse_json_minimal() {
        let content = r#"{
            "api": { "batch_limit": 50 },
            "guilds": [{
                "id": "g1",
                "notify_list": ["s1", "s2"],
                "notify_channels": [{ "id": "c1", "name": "alerts" }]
            }]
        }"#;
        let result = parse_json(content);
        assert!(result.is_ok(), "Failed: {:?}", result.err());
        assert_eq!(result.unwrap().api.batch_limit, 50);
    }

    #[test]
    fn test_parse_toml_syntax_error() {
        let content = "invalid toml [[[";
        let result = parse_toml(content);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, NotifyError::ConfigParse { .. }));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_extension("toml"),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_extension("TOML"),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_extension("json"),
            Some(ConfigFormat::Json)
        );
        assert_eq!(ConfigFormat::from_extension("yaml"), None);
    }
}
