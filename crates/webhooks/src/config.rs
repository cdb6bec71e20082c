//! Relay configuration.
//!
//! Configuration is loaded once at startup and immutable thereafter. Kind
//! names are validated against the closed enums in `authrelay_events`, so a
//! typo fails loudly at startup instead of silently never matching.

use std::collections::HashSet;
use std::hash::Hash;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use authrelay_events::{EventKind, KindError, OperationKind, ResourceKind};

/// Comma-separated user event kinds to forward.
pub const ENV_EVENT_KINDS: &str = "RELAY_EVENT_KINDS";
/// Comma-separated admin operation kinds to forward.
pub const ENV_ADMIN_OPERATIONS: &str = "RELAY_ADMIN_OPERATIONS";
/// Comma-separated admin resource kinds to forward.
pub const ENV_ADMIN_RESOURCES: &str = "RELAY_ADMIN_RESOURCES";
/// Comma-separated target URIs, notified in the given order.
pub const ENV_TARGET_URIS: &str = "RELAY_TARGET_URIS";
/// Whether to attach a bearer token to deliveries.
pub const ENV_USE_AUTH: &str = "RELAY_USE_AUTH";
/// Client used for the client-credentials grant.
pub const ENV_CLIENT_ID: &str = "RELAY_CLIENT_ID";
/// Per-request timeout in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "RELAY_TIMEOUT_MS";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),

    /// A boolean variable holds something other than true/false/1/0.
    #[error("invalid value for {var}: {value}")]
    InvalidFlag {
        /// The variable name.
        var: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The timeout is not a number of milliseconds.
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),

    /// The target list parsed to nothing.
    #[error("no target uris configured")]
    NoTargets,

    /// A kind name did not match the closed enums.
    #[error(transparent)]
    UnknownKind(#[from] KindError),
}

/// Which event kinds are forwarded. Empty sets admit nothing.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// User event kinds to forward.
    pub enabled_event_kinds: HashSet<EventKind>,
    /// Admin operation kinds to forward.
    pub enabled_operation_kinds: HashSet<OperationKind>,
    /// Admin resource kinds to forward.
    pub enabled_resource_kinds: HashSet<ResourceKind>,
}

/// Where and how accepted events are delivered.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Target URIs, notified in order. Order carries no significance beyond
    /// being the notification order.
    pub target_uris: Vec<String>,
    /// Whether deliveries carry a bearer token.
    pub use_auth: bool,
    /// Client used for the client-credentials grant.
    pub client_id: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl DispatchConfig {
    /// Creates a configuration delivering unauthenticated to the given targets.
    pub fn new(target_uris: Vec<String>) -> Self {
        Self {
            target_uris,
            use_auth: false,
            client_id: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Enables authenticated delivery through the given client.
    pub fn with_auth(mut self, client_id: impl Into<String>) -> Self {
        self.use_auth = true;
        self.client_id = client_id.into();
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Complete relay configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Event admission configuration.
    pub filter: FilterConfig,
    /// Delivery configuration.
    pub dispatch: DispatchConfig,
}

impl RelayConfig {
    /// Loads the configuration from `RELAY_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let filter = FilterConfig {
            enabled_event_kinds: parse_kind_list(&env_var(ENV_EVENT_KINDS).unwrap_or_default())?,
            enabled_operation_kinds: parse_kind_list(
                &env_var(ENV_ADMIN_OPERATIONS).unwrap_or_default(),
            )?,
            enabled_resource_kinds: parse_kind_list(
                &env_var(ENV_ADMIN_RESOURCES).unwrap_or_default(),
            )?,
        };

        let raw_targets = env_var(ENV_TARGET_URIS).ok_or(ConfigError::MissingVar(ENV_TARGET_URIS))?;
        let target_uris = parse_uri_list(&raw_targets)?;

        let use_auth = match env_var(ENV_USE_AUTH) {
            Some(value) => parse_flag(ENV_USE_AUTH, &value)?,
            None => false,
        };

        let client_id = match env_var(ENV_CLIENT_ID) {
            Some(id) => id,
            None if use_auth => return Err(ConfigError::MissingVar(ENV_CLIENT_ID)),
            None => String::new(),
        };

        let timeout = match env_var(ENV_TIMEOUT_MS) {
            Some(value) => parse_timeout(&value)?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            filter,
            dispatch: DispatchConfig {
                target_uris,
                use_auth,
                client_id,
                timeout,
            },
        })
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parse_kind_list<K>(raw: &str) -> Result<HashSet<K>, KindError>
where
    K: FromStr<Err = KindError> + Eq + Hash,
{
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::parse)
        .collect()
}

fn parse_uri_list(raw: &str) -> Result<Vec<String>, ConfigError> {
    let uris: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|uri| !uri.is_empty())
        .map(String::from)
        .collect();

    if uris.is_empty() {
        return Err(ConfigError::NoTargets);
    }
    Ok(uris)
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    value
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidTimeout(value.to_string()))
}
