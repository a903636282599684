//! HTTP profile API client
//!
//! One GET per batch against the platform's `/users` endpoint, bearer-token
//! authenticated. Status mapping: 429 -> RateLimited, 5xx/timeout ->
//! Unavailable, anything else non-2xx -> Transport.

use std::time::Duration;

use contracts::{ApiSettings, CreatorId, ResolvedProfile};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::client::ProfileApi;
use crate::error::{ApiError, Result};

/// Real HTTP client for the external profile API
pub struct HttpProfileApi {
    http: reqwest::Client,
    base_url: String,
    client_id: Option<String>,
}

/// Response envelope of the users endpoint
#[derive(Debug, Deserialize)]
struct UsersResponse {
    data: Vec<UserEntry>,
}

#[derive(Debug, Deserialize)]
struct UserEntry {
    id: String,
    display_name: String,
    login: String,
}

impl HttpProfileApi {
    /// Build a client from API settings
    ///
    /// The per-request timeout comes from `request_timeout_ms`; a timeout is
    /// surfaced as `Unavailable`, consistent with an upstream outage.
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .build()
            .map_err(|e| ApiError::transport(format!("failed to build http client: {e}")))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client_id: settings.client_id.clone(),
        })
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }
}

impl ProfileApi for HttpProfileApi {
    #[instrument(name = "profile_api_fetch", skip(self, ids, token), fields(batch = ids.len()))]
    async fn fetch_profiles(
        &self,
        ids: &[CreatorId],
        token: &str,
    ) -> Result<Vec<ResolvedProfile>> {
        let query: Vec<(&str, &str)> = ids.iter().map(|id| ("id", id.as_str())).collect();

        let mut request = self
            .http
            .get(self.users_url())
            .bearer_auth(token)
            .query(&query);
        if let Some(client_id) = &self.client_id {
            request = request.header("Client-Id", client_id);
        }

        let response = request.send().await.map_err(map_request_error)?;
        let status = response.status();

        if status.as_u16() == 429 {
            let retry_after_secs = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(ApiError::RateLimited { retry_after_secs });
        }
        if status.is_server_error() {
            return Err(ApiError::unavailable(format!("http status {status}")));
        }
        if !status.is_success() {
            return Err(ApiError::transport(format!("http status {status}")));
        }

        let body: UsersResponse = response
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;

        debug!(returned = body.data.len(), "profile batch resolved");

        Ok(body
            .data
            .into_iter()
            .map(|entry| ResolvedProfile::new(entry.id, entry.display_name, entry.login))
            .collect())
    }
}

fn map_request_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::unavailable(format!("request timed out: {err}"))
    } else {
        ApiError::transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_url_strips_trailing_slash() {
        let settings = ApiSettings {
            base_url: "https://api.example.com/helix/".into(),
            ..Default::default()
        };
        let client = HttpProfileApi::new(&settings).unwrap();
        assert_eq!(client.users_url(), "https://api.example.com/helix/users");
    }

    #[test]
    fn test_users_response_decodes() {
        let json = r#"{"data":[{"id":"141981764","display_name":"TwitchDev","login":"twitchdev","type":"","view_count":0}]}"#;
        let body: UsersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.data.len(), 1);
        assert_eq!(body.data[0].display_name, "TwitchDev");
    }
}
