//! # Notify Index
//!
//! In-memory destination index: creator identity -> set of (guild, channel)
//! destinations, derived from each guild's subscription snapshot.
//!
//! The index is partitioned by guild. A rebuild computes a guild's whole
//! partition off to the side and publishes it with a single map insert, so
//! concurrent lookups never observe a half-built partition and rebuilds for
//! different guilds proceed independently.

mod index;

pub use index::{DestinationIndex, IndexStats};
