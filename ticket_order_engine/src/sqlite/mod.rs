//! SQLite backend for the ticket order gateway.
mod sqlite_impl;

pub mod db;
mod orders;

pub use sqlite_impl::SqliteOrderStore;
