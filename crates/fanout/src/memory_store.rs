//! In-memory subscription store
//!
//! Reference `SubscriptionStore` implementation backed by a map, seeded from
//! configuration. Used by tests, the demo, and CLI runs without a database.

use std::collections::HashMap;
use std::sync::Mutex;

use contracts::{CreatorId, GuildSeed, GuildSubscriptions, NotifyError, SubscriptionStore};

/// Map-backed subscription store
#[derive(Debug, Default)]
pub struct MemoryStore {
    guilds: Mutex<HashMap<String, GuildSubscriptions>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from configuration entries
    pub fn from_seeds(seeds: &[GuildSeed]) -> Self {
        let store = Self::new();
        for seed in seeds {
            store.insert(seed.to_subscriptions());
        }
        store
    }

    /// Create or replace a guild record (community-join)
    pub fn insert(&self, guild: GuildSubscriptions) {
        self.guilds.lock().unwrap().insert(guild.id.clone(), guild);
    }

    /// Drop a guild record (community-leave)
    pub fn remove(&self, guild_id: &str) {
        self.guilds.lock().unwrap().remove(guild_id);
    }

    /// Number of guild records
    pub fn len(&self) -> usize {
        self.guilds.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All current snapshots, for startup index construction
    pub fn snapshots(&self) -> Vec<GuildSubscriptions> {
        self.guilds.lock().unwrap().values().cloned().collect()
    }
}

impl SubscriptionStore for MemoryStore {
    async fn get(&self, guild_id: &str) -> Result<GuildSubscriptions, NotifyError> {
        self.guilds
            .lock()
            .unwrap()
            .get(guild_id)
            .cloned()
            .ok_or_else(|| NotifyError::not_found(guild_id))
    }

    async fn set(&self, guild_id: &str, notify_list: Vec<CreatorId>) -> Result<(), NotifyError> {
        let mut guilds = self.guilds.lock().unwrap();
        match guilds.get_mut(guild_id) {
            Some(guild) => {
                guild.notify_list = notify_list;
                Ok(())
            }
            None => Err(NotifyError::not_found(guild_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::NotifyChannel;

    fn snapshot(id: &str, creators: &[&str]) -> GuildSubscriptions {
        GuildSubscriptions {
            id: id.into(),
            name: None,
            notify_list: creators.iter().map(|c| CreatorId::new(c)).collect(),
            notify_channels: vec![NotifyChannel {
                id: "c1".into(),
                name: "alerts".into(),
            }],
        }
    }

    #[tokio::test]
    async fn test_get_missing_guild_is_not_found() {
        let store = MemoryStore::new();
        let err = store.get("nope").await.unwrap_err();
        assert!(matches!(err, NotifyError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_set_replaces_full_list() {
        let store = MemoryStore::new();
        store.insert(snapshot("g1", &["s1", "s2"]));

        store.set("g1", vec!["s3".into()]).await.unwrap();

        let guild = store.get("g1").await.unwrap();
        assert_eq!(guild.notify_list, vec![CreatorId::new("s3")]);
        // Channel routing untouched by a list write
        assert_eq!(guild.notify_channels.len(), 1);
    }

    #[tokio::test]
    async fn test_set_missing_guild_is_not_found() {
        let store = MemoryStore::new();
        let err = store.set("nope", vec![]).await.unwrap_err();
        assert!(matches!(err, NotifyError::NotFound { .. }));
    }
}
