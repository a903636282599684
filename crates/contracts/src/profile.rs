//! Resolved creator profile
//!
//! Transient display data fetched from the external profile API. Cached only
//! within the lifetime of a single resolution batch, never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CreatorId;

/// Profile data for one successfully resolved creator identity.
///
/// Invariant: a profile exists only when resolution succeeded. Identities
/// that fail to resolve are dropped with a reported count, never carried as
/// blank entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedProfile {
    /// The identity this profile resolves
    pub creator_id: CreatorId,

    /// Current display name on the streaming platform
    pub display_name: String,

    /// Stable login handle (external reference token)
    pub login: String,

    /// When this profile was fetched
    pub fetched_at: DateTime<Utc>,
}

impl ResolvedProfile {
    pub fn new(
        creator_id: impl Into<CreatorId>,
        display_name: impl Into<String>,
        login: impl Into<String>,
    ) -> Self {
        Self {
            creator_id: creator_id.into(),
            display_name: display_name.into(),
            login: login.into(),
            fetched_at: Utc::now(),
        }
    }
}
