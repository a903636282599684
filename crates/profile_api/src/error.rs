//! Profile API error types

use thiserror::Error;

/// Profile-API-specific errors
///
/// `RateLimited` and `Unavailable` abort a whole resolution request;
/// `Transport` and `Decode` only fail the batch they occurred in.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 429 from the external API
    #[error("rate limited by profile api (retry after {retry_after_secs:?}s)")]
    RateLimited { retry_after_secs: Option<u64> },

    /// HTTP 5xx or request timeout
    #[error("profile api unavailable: {message}")]
    Unavailable { message: String },

    /// Connection/request failure below HTTP
    #[error("transport error: {message}")]
    Transport { message: String },

    /// Response body did not match the expected shape
    #[error("decode error: {message}")]
    Decode { message: String },
}

impl ApiError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// A specialized Result for profile API operations
pub type Result<T> = std::result::Result<T, ApiError>;
