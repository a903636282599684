//! # Fanout
//!
//! Fan-out resolution and operator display: composes the subscription store,
//! the creator resolver, and the destination index into one request-driven
//! pipeline (store read -> resolve -> index lookup -> paginate), strictly
//! sequential within a request and fully independent across guilds.
//!
//! Also hosts the command registry (the operator surface) and the in-memory
//! reference store used by tests, demos, and seeded CLI runs.

mod memory_store;
mod presenter;
mod registry;
mod service;

pub use memory_store::MemoryStore;
pub use presenter::{Page, Paginated};
pub use registry::{
    render_view, CommandHandler, CommandRegistry, CommandRequest, ShowSubscriptions,
    EMPTY_LIST_MESSAGE,
};
pub use service::{DisplayEntry, DisplayList, FanoutService, PageView};
