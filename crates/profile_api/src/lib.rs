//! # Profile API
//!
//! Creator identity resolution against the external streaming-platform API.
//!
//! The `ProfileApi` trait abstracts one batch call; `HttpProfileApi` is the
//! real HTTP implementation and `MockProfileApi` the failure-injecting test
//! double. `CreatorResolver` sits on top: it deduplicates, batches, applies
//! the rate-limit/outage abort rules, and absorbs partial failures into a
//! reported count.

mod client;
mod error;
mod http_client;
mod mock_client;
mod resolver;

pub use client::{ProfileApi, StaticToken, TokenProvider};
pub use error::{ApiError, Result};
pub use http_client::HttpProfileApi;
pub use mock_client::{MockApiConfig, MockProfileApi};
pub use resolver::{CreatorResolver, Resolution};
