//! # Config Loader
//!
//! Configuration loading and parsing module.
//!
//! Responsibilities:
//! - Parse TOML/JSON configuration files
//! - Validate configuration legality
//! - Produce `PlatformConfig`
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let config = ConfigLoader::load_from_path(Path::new("announcer.toml")).unwrap();
//! println!("API: {}", config.api.base_url);
//! ```

mod parser;
mod validator;

pub use contracts::PlatformConfig;
pub use parser::ConfigFormat;

use contracts::NotifyError;
use std::path::Path;

/// Configuration loader
///
/// Provides static methods to load configuration from files or strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file path
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<PlatformConfig, NotifyError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load configuration from string
    ///
    /// # Errors
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_str(
        content: &str,
        format: ConfigFormat,
    ) -> Result<PlatformConfig, NotifyError> {
        let config = parser::parse(content, format)?;
        validator::validate(&config)?;
        Ok(config)
    }

    /// Serialize PlatformConfig to TOML string
    pub fn to_toml(config: &PlatformConfig) -> Result<String, NotifyError> {
        toml::to_string_pretty(config)
            .map_err(|e| NotifyError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Serialize PlatformConfig to JSON string
    pub fn to_json(config: &PlatformConfig) -> Result<String, NotifyError> {
        serde_json::to_string_pretty(config)
            .map_err(|e| NotifyError::config_parse(format!("JSON serialize error: {e}")))
    }
}

impl ConfigLoader {
    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, NotifyError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            NotifyError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext).ok_or_else(|| {
            NotifyError::config_parse(format!("unsupported config format: .{ext}"))
        })
    }

    /// Read configuration file content
    fn read_file(path: &Path) -> Result<String, NotifyError> {
        Ok(std::fs::read_to_string(path)?)
    }
}
