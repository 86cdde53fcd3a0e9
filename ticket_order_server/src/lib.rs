//! # Ticket order gateway server
//! This crate hosts the HTTP side of the ticket order gateway. It is responsible for:
//! Listening for incoming webhook notifications from the payment processor.
//! Deciding whether a notification is relevant (a completed checkout session).
//! Deriving the order record (player name, ticket count, capture timestamp) and appending it to
//! the order store.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more
//! information. The process refuses to start without the database URL and the payment processor
//! secret key.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/webhook`: The webhook route for receiving events from the payment processor.
pub mod config;
pub mod errors;
pub mod helpers;
pub mod routes;
pub mod secret;
pub mod server;
pub mod stripe_event;

#[cfg(test)]
mod endpoint_tests;
