//! Inbound event payloads from the payment processor.
//!
//! Events arrive unauthenticated and untrusted. The envelope declares a type; only
//! [`CHECKOUT_SESSION_COMPLETED`] is acted on. The inner object is kept as raw JSON until the type
//! is known to be relevant, because irrelevant event types carry arbitrary object shapes and must
//! still be acknowledged with a 200.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The only event type that results in an order record.
pub const CHECKOUT_SESSION_COMPLETED: &str = "checkout.session.completed";

/// The fallback player name when the checkout carries no usable custom field.
pub const UNKNOWN_PLAYER: &str = "Unknown";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripeEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub data: EventData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventData {
    #[serde(default)]
    pub object: Value,
}

impl StripeEvent {
    pub fn is_completed_checkout(&self) -> bool {
        self.event_type == CHECKOUT_SESSION_COMPLETED
    }

    /// Parses `data.object` as a checkout session. Only call this once the event type is known to
    /// be relevant; for other types the object is some other processor record entirely.
    pub fn checkout_session(&self) -> Result<CheckoutSession, serde_json::Error> {
        serde_json::from_value(self.data.object.clone())
    }
}

/// The subset of the processor's checkout-session object that the gateway reads. Everything but
/// the id is optional on the wire, and unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    #[serde(default)]
    pub amount_subtotal: Option<i64>,
    #[serde(default)]
    pub custom_fields: Option<Vec<CustomField>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomField {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub text: Option<TextValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextValue {
    #[serde(default)]
    pub value: Option<String>,
}

impl CheckoutSession {
    /// Resolves the buyer-supplied display name from `custom_fields[0].text.value`.
    ///
    /// Any missing link in that chain, or a blank value, short-circuits to [`UNKNOWN_PLAYER`]
    /// rather than erroring. Buyers control this field, so it gets no validation beyond that.
    pub fn player_name(&self) -> String {
        self.custom_fields
            .as_deref()
            .unwrap_or_default()
            .first()
            .and_then(|field| field.text.as_ref())
            .and_then(|text| text.value.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_PLAYER)
            .to_string()
    }
}
