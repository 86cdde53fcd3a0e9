//! Derivation helpers for the webhook handler.
//!
//! Everything in here is a pure function of its inputs so the handler's behaviour is deterministic
//! under test: the ticket count depends only on the subtotal and the configured policy, and the
//! timestamp string depends only on the instant and the configured timezone.
use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;
use ticket_order_engine::db_types::Tickets;

/// The default conversion rate: one ticket per 50 cents of subtotal.
pub const DEFAULT_CENTS_PER_TICKET: i64 = 50;

/// How the ticket count is derived from the checkout's `amount_subtotal`.
///
/// Two policies have been observed in production and the choice between them is a product
/// decision. The default, `CentsPerTicket(50)`, converts the subtotal (in cents) to tickets at
/// $0.50 per ticket, rounding half-up. `Direct` treats the subtotal as the ticket count verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicketPolicy {
    Direct,
    CentsPerTicket(i64),
}

impl Default for TicketPolicy {
    fn default() -> Self {
        Self::CentsPerTicket(DEFAULT_CENTS_PER_TICKET)
    }
}

impl Display for TicketPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct => write!(f, "direct"),
            Self::CentsPerTicket(cents) => write!(f, "{cents} cents per ticket"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("{0} is not a valid ticket policy. Use 'direct' or a positive number of cents per ticket.")]
pub struct TicketPolicyParseError(String);

impl FromStr for TicketPolicy {
    type Err = TicketPolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        if value == "direct" {
            return Ok(Self::Direct);
        }
        match value.parse::<i64>() {
            Ok(cents) if cents > 0 => Ok(Self::CentsPerTicket(cents)),
            _ => Err(TicketPolicyParseError(s.to_string())),
        }
    }
}

/// Derives the ticket count for an order. An absent or zero subtotal is zero tickets under either
/// policy. Subtotals are never negative; division rounds half-up to match the behaviour the
/// storefront advertises.
pub fn derive_ticket_count(amount_subtotal: Option<i64>, policy: TicketPolicy) -> Tickets {
    let count = match (amount_subtotal.unwrap_or_default(), policy) {
        (0, _) => 0,
        (cents, TicketPolicy::Direct) => cents,
        (cents, TicketPolicy::CentsPerTicket(per_ticket)) => (cents + per_ticket / 2) / per_ticket,
    };
    Tickets::from(count)
}

/// en-AU style, e.g. "29/02/2024, 2:30:15 pm".
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %-I:%M:%S %P";

/// Formats the capture time of an order as a human-readable string in the given timezone.
///
/// The output is a display value, not a machine timestamp. The timezone comes from configuration,
/// never from the host environment, so the same instant always renders the same way.
pub fn format_order_timestamp(instant: DateTime<Utc>, timezone: Tz) -> String {
    instant.with_timezone(&timezone).format(TIMESTAMP_FORMAT).to_string()
}
