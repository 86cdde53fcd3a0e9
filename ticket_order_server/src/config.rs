use std::{env, str::FromStr};

use chrono_tz::Tz;
use log::*;

use crate::{errors::ServerError, helpers::TicketPolicy, secret::Secret};

const DEFAULT_TOS_HOST: &str = "127.0.0.1";
const DEFAULT_TOS_PORT: u16 = 3000;
const DEFAULT_TOS_TIMEZONE: Tz = chrono_tz::Australia::Sydney;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Connection string for the order store. Required; the process refuses to start without it.
    pub database_url: String,
    /// Payment processor credentials. Required; the process refuses to start without them.
    pub stripe: StripeConfig,
    /// The timezone that order timestamps are rendered in. This is declared configuration; the
    /// host timezone is never consulted.
    pub timezone: Tz,
    /// How ticket counts are derived from the checkout subtotal.
    pub ticket_policy: TicketPolicy,
}

#[derive(Clone, Debug, Default)]
pub struct StripeConfig {
    pub secret_key: Secret<String>,
}

impl ServerConfig {
    /// Loads the configuration from environment variables.
    ///
    /// Optional values fall back to defaults with a logged warning, in line with the rest of the
    /// `TOS_*` family. The credentials (`TOS_DATABASE_URL`, `TOS_STRIPE_SECRET_KEY`) are hard
    /// requirements: a missing one is a `ConfigurationError` and the caller must not serve
    /// traffic.
    pub fn try_from_env() -> Result<Self, ServerError> {
        let host = env::var("TOS_HOST").ok().unwrap_or_else(|| DEFAULT_TOS_HOST.into());
        let port = env::var("TOS_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!("🪛️ {s} is not a valid port for TOS_PORT. {e} Using the default, {DEFAULT_TOS_PORT}, instead.");
                    DEFAULT_TOS_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_TOS_PORT);
        let database_url = env::var("TOS_DATABASE_URL").map_err(|e| {
            ServerError::ConfigurationError(format!("{e} [TOS_DATABASE_URL]. Set it to the URL of the order store."))
        })?;
        let stripe = StripeConfig::try_from_env()?;
        let timezone = configure_timezone();
        let ticket_policy = configure_ticket_policy();
        Ok(Self { host, port, database_url, stripe, timezone, ticket_policy })
    }
}

impl StripeConfig {
    pub fn try_from_env() -> Result<Self, ServerError> {
        let secret_key = env::var("TOS_STRIPE_SECRET_KEY").map_err(|e| {
            ServerError::ConfigurationError(format!(
                "{e} [TOS_STRIPE_SECRET_KEY]. Set it to the secret key for your payment processor account."
            ))
        })?;
        Ok(Self { secret_key: Secret::new(secret_key) })
    }
}

fn configure_timezone() -> Tz {
    env::var("TOS_TIMEZONE")
        .map_err(|_| info!("🪛️ TOS_TIMEZONE is not set. Order timestamps will use {DEFAULT_TOS_TIMEZONE}."))
        .and_then(|s| {
            Tz::from_str(&s).map_err(|e| {
                warn!("🪛️ Invalid timezone in TOS_TIMEZONE. {e}. Using {DEFAULT_TOS_TIMEZONE} instead.");
            })
        })
        .unwrap_or(DEFAULT_TOS_TIMEZONE)
}

fn configure_ticket_policy() -> TicketPolicy {
    env::var("TOS_TICKET_POLICY")
        .map_err(|_| {
            info!("🪛️ TOS_TICKET_POLICY is not set. Using the default, {}.", TicketPolicy::default());
        })
        .and_then(|s| {
            s.parse::<TicketPolicy>().map_err(|e| {
                warn!("🪛️ Invalid configuration value for TOS_TICKET_POLICY. {e} Using the default instead.");
            })
        })
        .unwrap_or_default()
}

//-------------------------------------------------  WebhookOptions  ---------------------------------------------------
/// The subset of the server configuration that request handlers need. Kept small and `Copy`, and
/// excludes secrets to avoid passing sensitive information around the system.
#[derive(Clone, Copy, Debug)]
pub struct WebhookOptions {
    pub timezone: Tz,
    pub ticket_policy: TicketPolicy,
}

impl WebhookOptions {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self { timezone: config.timezone, ticket_policy: config.ticket_policy }
    }
}

impl Default for WebhookOptions {
    fn default() -> Self {
        Self { timezone: DEFAULT_TOS_TIMEZONE, ticket_policy: TicketPolicy::default() }
    }
}
