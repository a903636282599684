//! SubscriptionStore trait - external relational store boundary
//!
//! The per-guild notify list lives in a relational record owned by the
//! platform's CRUD layer; the core reaches it only through this trait.

use crate::{CreatorId, GuildSubscriptions, NotifyError};

/// Subscription state access trait
///
/// Implementations wrap whatever actually holds guild records (the platform
/// database, or an in-memory map for tests and demos).
///
/// `set` replaces the full notify list - there is no partial merge, callers
/// must read-modify-write. Neither operation touches the destination index;
/// the caller rebuilds the index explicitly after a successful write so the
/// rebuild stays atomic with respect to the write it reflects.
#[trait_variant::make(SubscriptionStore: Send)]
pub trait LocalSubscriptionStore {
    /// Read one guild's subscription snapshot
    ///
    /// # Errors
    /// `NotFound` if the guild has no record
    async fn get(&self, guild_id: &str) -> Result<GuildSubscriptions, NotifyError>;

    /// Replace one guild's notify list
    ///
    /// # Errors
    /// `NotFound` if the guild has no record
    async fn set(&self, guild_id: &str, notify_list: Vec<CreatorId>) -> Result<(), NotifyError>;
}
