//! Subscription snapshot types
//!
//! A guild's subscription state is owned by the external relational store;
//! the core only ever sees it as an immutable per-operation snapshot.

use serde::{Deserialize, Serialize};

use crate::CreatorId;

/// A (guild, channel) pair that should receive a creator's live event.
///
/// Derived from a guild's notify configuration at index rebuild time,
/// never persisted. The derived `Ord` (guild id, then channel id) is the
/// deterministic secondary sort the pagination contract relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Destination {
    /// Guild snowflake
    pub guild_id: String,
    /// Channel snowflake
    pub channel_id: String,
    /// Channel display name, carried for rendering
    pub channel_name: String,
}

impl Destination {
    pub fn new(
        guild_id: impl Into<String>,
        channel_id: impl Into<String>,
        channel_name: impl Into<String>,
    ) -> Self {
        Self {
            guild_id: guild_id.into(),
            channel_id: channel_id.into(),
            channel_name: channel_name.into(),
        }
    }
}

/// A text channel configured to receive live-event notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyChannel {
    /// Channel snowflake
    pub id: String,
    /// Channel display name
    pub name: String,
}

/// Immutable snapshot of one guild's subscription state.
///
/// Produced by the subscription store; consumed by the resolver and the
/// destination index. The core never mutates it in place - all writes go
/// through the store's read-modify-write contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildSubscriptions {
    /// Guild snowflake
    pub id: String,

    /// Guild display name (optional)
    #[serde(default)]
    pub name: Option<String>,

    /// Subscribed creator identities; order is irrelevant
    #[serde(default)]
    pub notify_list: Vec<CreatorId>,

    /// Channels that receive live events for every creator on the list
    #[serde(default)]
    pub notify_channels: Vec<NotifyChannel>,
}

impl GuildSubscriptions {
    /// Snapshot with an empty notify list.
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            notify_list: Vec::new(),
            notify_channels: Vec::new(),
        }
    }
}
