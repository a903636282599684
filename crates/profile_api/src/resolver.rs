//! Creator resolver - batching and failure policy on top of `ProfileApi`
//!
//! One resolution request issues sequential batch calls (at most one in
//! flight). Rate limits and outages abort the whole request and are never
//! retried here: silent retry against a live rate limiter amplifies backoff,
//! so the operator-visible failure is preferred. Transport/decode failures
//! only sink the batch they hit.

use std::collections::HashSet;

use contracts::{CreatorId, NotifyError, ResolvedProfile};
use tracing::{debug, instrument, warn};

use crate::client::{ProfileApi, TokenProvider};
use crate::error::ApiError;

/// Outcome of one resolution request
#[derive(Debug, Default)]
pub struct Resolution {
    /// Successfully resolved profiles, sorted by creator id
    pub resolved: Vec<ResolvedProfile>,
    /// Identities that could not be resolved (unknown, or in a failed batch)
    pub failed_count: usize,
}

/// Batching resolver over a profile API client
pub struct CreatorResolver<C, T> {
    client: C,
    tokens: T,
    batch_limit: usize,
}

impl<C, T> CreatorResolver<C, T>
where
    C: ProfileApi,
    T: TokenProvider,
{
    /// Create a resolver
    ///
    /// `batch_limit` is the external API's documented maximum identities per
    /// call; it is clamped to at least 1.
    pub fn new(client: C, tokens: T, batch_limit: usize) -> Self {
        Self {
            client,
            tokens,
            batch_limit: batch_limit.max(1),
        }
    }

    /// Borrow the underlying client (test hooks)
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Resolve a set of creator identities to current profile data
    ///
    /// # Errors
    /// - `RateLimited` / `UpstreamUnavailable`: the whole request aborts and
    ///   no further batch calls are issued
    /// - `UpstreamUnavailable` if no access token could be obtained
    /// - `ResolutionFailed` if every identity failed (a partial result is
    ///   returned as `Ok` with `failed_count` set instead)
    #[instrument(name = "resolve_creators", skip(self, ids), fields(requested = ids.len()))]
    pub async fn resolve(&self, ids: &[CreatorId]) -> Result<Resolution, NotifyError> {
        if ids.is_empty() {
            return Ok(Resolution::default());
        }

        // Deduplicate and sort so batch composition and output order are
        // deterministic regardless of caller order.
        let mut unique: Vec<CreatorId> = ids.to_vec();
        unique.sort();
        unique.dedup();

        let token = self
            .tokens
            .access_token()
            .await
            .map_err(|e| NotifyError::upstream_unavailable(format!("token fetch failed: {e}")))?;

        let mut resolved: Vec<ResolvedProfile> = Vec::with_capacity(unique.len());
        let mut failed_count = 0usize;

        for batch in unique.chunks(self.batch_limit) {
            match self.client.fetch_profiles(batch, &token).await {
                Ok(profiles) => {
                    let wanted: HashSet<&str> = batch.iter().map(|id| id.as_str()).collect();
                    let returned: HashSet<CreatorId> =
                        profiles.iter().map(|p| p.creator_id.clone()).collect();

                    // Identities absent from a successful response are gone
                    // upstream (deleted/banned accounts); count, don't abort.
                    failed_count += batch
                        .iter()
                        .filter(|id| !returned.contains(id.as_str()))
                        .count();

                    resolved.extend(
                        profiles
                            .into_iter()
                            .filter(|p| wanted.contains(p.creator_id.as_str())),
                    );
                }
                Err(ApiError::RateLimited { retry_after_secs }) => {
                    warn!(?retry_after_secs, "profile api rate limited, aborting request");
                    return Err(NotifyError::RateLimited { retry_after_secs });
                }
                Err(ApiError::Unavailable { message }) => {
                    warn!(%message, "profile api unavailable, aborting request");
                    return Err(NotifyError::UpstreamUnavailable { message });
                }
                Err(err @ (ApiError::Transport { .. } | ApiError::Decode { .. })) => {
                    warn!(error = %err, batch = batch.len(), "batch resolution failed");
                    failed_count += batch.len();
                }
            }
        }

        if resolved.is_empty() && failed_count > 0 {
            return Err(NotifyError::ResolutionFailed { failed_count });
        }

        resolved.sort_by(|a, b| a.creator_id.cmp(&b.creator_id));

        if failed_count > 0 {
            debug!(failed_count, "some identities could not be resolved");
        }

        Ok(Resolution {
            resolved,
            failed_count,
        })
    }
}
