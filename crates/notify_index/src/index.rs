//! Destination index with per-guild partitions.

use std::collections::{BTreeSet, HashMap};

use contracts::{CreatorId, Destination, GuildSubscriptions};
use dashmap::DashMap;
use metrics::{counter, gauge};
use tracing::{debug, instrument, warn};

/// One guild's contribution to the index.
///
/// Built fully before publication; never mutated after insert.
#[derive(Debug, Default)]
struct GuildPartition {
    by_creator: HashMap<CreatorId, BTreeSet<Destination>>,
}

impl GuildPartition {
    fn build(guild: &GuildSubscriptions) -> Self {
        let destinations: BTreeSet<Destination> = guild
            .notify_channels
            .iter()
            .map(|channel| Destination::new(&guild.id, &channel.id, &channel.name))
            .collect();

        let mut by_creator = HashMap::with_capacity(guild.notify_list.len());
        for creator in &guild.notify_list {
            by_creator.insert(creator.clone(), destinations.clone());
        }
        Self { by_creator }
    }

    fn destination_count(&self) -> usize {
        self.by_creator.values().map(|set| set.len()).sum()
    }
}

/// Aggregate index statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Guilds with a published partition
    pub guild_count: usize,
    /// Distinct (guild, creator) subscription entries
    pub subscription_count: usize,
    /// Total destinations across all partitions
    pub destination_count: usize,
}

/// Creator identity -> destination mapping, partitioned by guild.
///
/// Constructed once at startup and shared by reference; every partition is a
/// pure function of its guild's subscription snapshot, so the whole index can
/// always be reconstructed from store state.
#[derive(Debug, Default)]
pub struct DestinationIndex {
    guilds: DashMap<String, GuildPartition>,
}

impl DestinationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a guild's partition with one computed from a fresh snapshot.
    ///
    /// Rebuild-then-publish: the partition is complete before the insert, and
    /// the insert swaps it in atomically for readers of that guild. Rebuilds
    /// for other guilds touch other keys and are never blocked here.
    #[instrument(name = "index_rebuild", skip(self, guild), fields(guild_id = %guild.id))]
    pub fn rebuild(&self, guild: &GuildSubscriptions) {
        if !guild.notify_list.is_empty() && guild.notify_channels.is_empty() {
            warn!(
                guild_id = %guild.id,
                creators = guild.notify_list.len(),
                "guild has subscriptions but no notify channels, nothing will be delivered"
            );
        }

        let partition = GuildPartition::build(guild);
        let destinations = partition.destination_count();

        debug!(
            creators = partition.by_creator.len(),
            destinations, "publishing rebuilt partition"
        );
        counter!("announcer_index_rebuilds_total").increment(1);

        self.guilds.insert(guild.id.clone(), partition);
        gauge!("announcer_index_guilds").set(self.guilds.len() as f64);
    }

    /// Drop a guild's partition (community-leave).
    ///
    /// Idempotent: removing an absent guild is a no-op.
    #[instrument(name = "index_remove_guild", skip(self))]
    pub fn remove_guild(&self, guild_id: &str) {
        self.guilds.remove(guild_id);
        gauge!("announcer_index_guilds").set(self.guilds.len() as f64);
    }

    /// All destinations for a creator across every guild.
    ///
    /// The `BTreeSet` yields (guild id, channel id) order, which keeps
    /// downstream pagination deterministic.
    pub fn lookup(&self, creator: &CreatorId) -> BTreeSet<Destination> {
        let mut destinations = BTreeSet::new();
        for partition in self.guilds.iter() {
            if let Some(found) = partition.by_creator.get(creator.as_str()) {
                destinations.extend(found.iter().cloned());
            }
        }
        destinations
    }

    /// Destinations for a creator within one guild.
    pub fn lookup_for_guild(&self, creator: &CreatorId, guild_id: &str) -> BTreeSet<Destination> {
        self.guilds
            .get(guild_id)
            .and_then(|partition| partition.by_creator.get(creator.as_str()).cloned())
            .unwrap_or_default()
    }

    /// Whether any partition subscribes to this creator.
    pub fn is_subscribed(&self, creator: &CreatorId) -> bool {
        self.guilds
            .iter()
            .any(|partition| partition.by_creator.contains_key(creator.as_str()))
    }

    /// Current aggregate statistics.
    pub fn stats(&self) -> IndexStats {
        let mut subscription_count = 0;
        let mut destination_count = 0;
        for partition in self.guilds.iter() {
            subscription_count += partition.by_creator.len();
            destination_count += partition.destination_count();
        }
        IndexStats {
            guild_count: self.guilds.len(),
            subscription_count,
            destination_count,
        }
    }
}
