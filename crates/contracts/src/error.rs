//! Layered error definitions
//!
//! Categorized by source: store / profile api / display request / config

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum NotifyError {
    // ===== Subscription Store Errors =====
    /// Guild has no subscription record
    #[error("guild not found: {guild_id}")]
    NotFound { guild_id: String },

    /// Store read/write failure
    #[error("subscription store error: {message}")]
    Store { message: String },

    // ===== Profile API Errors =====
    /// External API signalled backoff; never retried automatically
    #[error("profile api rate limited (retry after {retry_after_secs:?}s)")]
    RateLimited { retry_after_secs: Option<u64> },

    /// External API outage or timeout; never retried automatically
    #[error("profile api unavailable: {message}")]
    UpstreamUnavailable { message: String },

    /// Partial resolution failure; the pipeline keeps the resolved subset
    #[error("failed to resolve {failed_count} creator identities")]
    ResolutionFailed { failed_count: usize },

    // ===== Display Request Errors =====
    /// Malformed pagination request, rejected before any I/O
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl NotifyError {
    /// Create a guild-not-found error
    pub fn not_found(guild_id: impl Into<String>) -> Self {
        Self::NotFound {
            guild_id: guild_id.into(),
        }
    }

    /// Create a subscription store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Create a rate-limited error
    pub fn rate_limited(retry_after_secs: Option<u64>) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Create an upstream-unavailable error
    pub fn upstream_unavailable(message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            message: message.into(),
        }
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Operator-facing message for this failure.
    ///
    /// The command surface shows exactly one line per failed request;
    /// internal detail stays in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "No subscriptions found for this server.",
            Self::RateLimited { .. } => {
                "Rate limit exceeded. Please try again in a few minutes."
            }
            Self::UpstreamUnavailable { .. } => {
                "The streaming service is currently unavailable. Please try again later."
            }
            _ => "Something went wrong.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_mapping() {
        assert_eq!(
            NotifyError::RateLimited {
                retry_after_secs: Some(30)
            }
            .user_message(),
            "Rate limit exceeded. Please try again in a few minutes."
        );
        assert_eq!(
            NotifyError::upstream_unavailable("503").user_message(),
            "The streaming service is currently unavailable. Please try again later."
        );
        assert_eq!(
            NotifyError::invalid_argument("page").user_message(),
            "Something went wrong."
        );
    }

    #[test]
    fn test_constructors() {
        let err = NotifyError::not_found("g1");
        assert!(matches!(err, NotifyError::NotFound { guild_id } if guild_id == "g1"));

        let err = NotifyError::config_validation("api.batch_limit", "must be > 0");
        assert!(err.to_string().contains("api.batch_limit"));
    }
}
