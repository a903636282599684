//! Mock profile API client
//!
//! Test double with injectable failure scenarios and a call counter, so
//! tests can assert that an aborted resolution issued no further calls.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use contracts::{CreatorId, ResolvedProfile};
use tracing::instrument;

use crate::client::ProfileApi;
use crate::error::{ApiError, Result};

/// Mock client configuration
#[derive(Debug, Default, Clone)]
pub struct MockApiConfig {
    /// Every call fails with RateLimited
    pub rate_limited: bool,
    /// Every call fails with Unavailable
    pub unavailable: bool,
    /// A batch containing any of these ids fails with Transport
    pub fail_transport_ids: Vec<String>,
}

/// Mock profile API client
pub struct MockProfileApi {
    config: MockApiConfig,
    profiles: Mutex<HashMap<CreatorId, ResolvedProfile>>,
    call_count: AtomicU64,
}

impl MockProfileApi {
    /// Create a default mock client with no known profiles
    pub fn new() -> Self {
        Self::with_config(MockApiConfig::default())
    }

    /// Create a mock client with failure injection
    pub fn with_config(config: MockApiConfig) -> Self {
        Self {
            config,
            profiles: Mutex::new(HashMap::new()),
            call_count: AtomicU64::new(0),
        }
    }

    /// Register a known profile; unknown ids are absent from responses
    pub fn insert_profile(&self, id: &str, display_name: &str, login: &str) {
        let profile = ResolvedProfile::new(id, display_name, login);
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.creator_id.clone(), profile);
    }

    /// Number of batch calls issued so far
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockProfileApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileApi for MockProfileApi {
    #[instrument(name = "mock_profile_fetch", skip(self, ids, _token), fields(batch = ids.len()))]
    async fn fetch_profiles(
        &self,
        ids: &[CreatorId],
        _token: &str,
    ) -> Result<Vec<ResolvedProfile>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if self.config.rate_limited {
            return Err(ApiError::RateLimited {
                retry_after_secs: Some(30),
            });
        }
        if self.config.unavailable {
            return Err(ApiError::unavailable("mock outage"));
        }
        if ids
            .iter()
            .any(|id| self.config.fail_transport_ids.iter().any(|f| id == f.as_str()))
        {
            return Err(ApiError::transport("mock transport failure"));
        }

        let profiles = self.profiles.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| profiles.get(id.as_str()).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_known_subset() {
        let mock = MockProfileApi::new();
        mock.insert_profile("s1", "Alice", "alice");

        let ids: Vec<CreatorId> = vec!["s1".into(), "s2".into()];
        let profiles = mock.fetch_profiles(&ids, "token").await.unwrap();

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].display_name, "Alice");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_rate_limited() {
        let mock = MockProfileApi::with_config(MockApiConfig {
            rate_limited: true,
            ..Default::default()
        });

        let ids: Vec<CreatorId> = vec!["s1".into()];
        let err = mock.fetch_profiles(&ids, "token").await.unwrap_err();
        assert!(matches!(err, ApiError::RateLimited { .. }));
    }

    #[tokio::test]
    async fn test_mock_transport_failure_per_id() {
        let mock = MockProfileApi::with_config(MockApiConfig {
            fail_transport_ids: vec!["bad".into()],
            ..Default::default()
        });
        mock.insert_profile("s1", "Alice", "alice");

        let ok_ids: Vec<CreatorId> = vec!["s1".into()];
        assert!(mock.fetch_profiles(&ok_ids, "token").await.is_ok());

        let bad_ids: Vec<CreatorId> = vec!["s1".into(), "bad".into()];
        let err = mock.fetch_profiles(&bad_ids, "token").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport { .. }));
    }
}
