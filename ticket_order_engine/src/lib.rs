//! Ticket Order Engine
//!
//! Storage backend for the ticket order gateway. The gateway receives checkout-completion
//! notifications from the payment processor and appends one order record per notification; this
//! crate owns everything below that handler:
//!
//! 1. The database types ([`mod@db_types`]). These are public and shared with the server crate.
//! 2. The storage contract ([`mod@traits`]). Any backend that implements [`OrderStore`] can act as
//!    the order store for the gateway. SQLite is the backend that ships ([`SqliteOrderStore`]).
//! 3. The public API ([`mod@order_api`]). The server never talks to the database directly; it goes
//!    through an [`OrderApi`] constructed once at startup.
//!
//! The store is append-only by design. There is no update or delete path, and no deduplication by
//! session id: replaying the same notification appends a second record.
pub mod db_types;
pub mod order_api;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod traits;

pub use order_api::OrderApi;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteOrderStore;
pub use traits::{OrderStore, OrderStoreError};
