//! # Contracts
//!
//! Frozen interface contracts, defining inter-crate data structures and traits.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Identity Model
//! - `CreatorId` is the external streaming-platform account identifier
//! - Guild and channel identifiers are opaque platform snowflake strings
//! - A creator may be subscribed to by many guilds; destinations are derived,
//!   never stored independently

mod creator_id;
mod error;
mod profile;
mod settings;
mod store;
mod subscription;

pub use creator_id::CreatorId;
pub use error::NotifyError;
pub use profile::ResolvedProfile;
pub use settings::*;
pub use store::SubscriptionStore;
pub use subscription::*;
