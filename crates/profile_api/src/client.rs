//! Profile API client abstraction
//!
//! Defines traits for talking to the external streaming platform, supporting
//! the real HTTP implementation and mock testing.

use std::future::Future;

use contracts::{CreatorId, ResolvedProfile};

use crate::error::Result;

/// Profile API client trait
///
/// Abstracts one batch profile fetch for testing and implementation
/// replacement. A call carries at most the API's batch limit of identities;
/// the response may be a subset - identities the platform does not know are
/// simply absent, which the resolver reports as failed.
pub trait ProfileApi: Send + Sync {
    /// Fetch profiles for a batch of creator identities
    ///
    /// # Arguments
    /// * `ids` - up to `batch_limit` identities
    /// * `token` - bearer token for the external API
    ///
    /// # Errors
    /// - `RateLimited` on HTTP 429
    /// - `Unavailable` on HTTP 5xx or timeout
    /// - `Transport` / `Decode` on anything else
    fn fetch_profiles(
        &self,
        ids: &[CreatorId],
        token: &str,
    ) -> impl Future<Output = Result<Vec<ResolvedProfile>>> + Send;
}

/// Access-token capability
///
/// The token refresh lifecycle is owned by the platform's auth layer; the
/// resolver only depends on being handed a currently-valid token.
pub trait TokenProvider: Send + Sync {
    /// Get a currently-valid bearer token
    fn access_token(&self) -> impl Future<Output = Result<String>> + Send;
}

/// Fixed token, for CLI/env use and tests.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    async fn access_token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}
