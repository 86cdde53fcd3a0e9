use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

//--------------------------------------     SessionId       ---------------------------------------------------------
/// A lightweight wrapper around the payment processor's checkout-session identifier.
///
/// The id is a passthrough value. It is unique per checkout session on the processor's side, but
/// the store does not enforce uniqueness: one session can legitimately appear in several records
/// if the processor delivers the same notification more than once.
#[derive(Clone, Debug, Type, PartialEq, Eq, Serialize, Deserialize)]
#[sqlx(transparent)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<S: Into<String>> From<S> for SessionId {
    fn from(value: S) -> Self {
        Self(value.into())
    }
}

impl SessionId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

//--------------------------------------      Tickets        ---------------------------------------------------------
/// The number of tickets covered by one completed checkout.
///
/// Always derived, never taken from the payload verbatim. See the server crate's ticket policy
/// helpers for the derivation rules.
#[derive(Debug, Clone, Copy, Default, Type, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[sqlx(transparent)]
#[serde(transparent)]
pub struct Tickets(i64);

impl From<i64> for Tickets {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Tickets {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Display for Tickets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} tickets", self.0)
    }
}

//--------------------------------------      NewOrder       ---------------------------------------------------------
/// An order record as derived from a checkout-completion notification, ready to be appended to the
/// store.
///
/// `timestamp` is the formatted wall-clock time at which the notification was processed, not any
/// timestamp carried by the notification itself. It is a display string and is stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub player_name: String,
    pub tickets: Tickets,
    pub timestamp: String,
    pub session_id: SessionId,
}

impl Display for NewOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bought {} on {} (session {})", self.player_name, self.tickets, self.timestamp, self.session_id)
    }
}

//--------------------------------------       Order         ---------------------------------------------------------
/// A persisted order record. `id` and `created_at` are assigned by the database on insert; records
/// are never mutated afterwards.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub player_name: String,
    pub tickets: Tickets,
    pub timestamp: String,
    pub session_id: SessionId,
    pub created_at: DateTime<Utc>,
}
