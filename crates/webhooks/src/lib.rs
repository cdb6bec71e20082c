//! # Authrelay Webhooks
//!
//! Webhook relay for identity-server events providing:
//! - Include-list event admission over closed kind sets
//! - Best-effort multi-target HTTP delivery (no retries, log and continue)
//! - Optional OAuth2 client-credentials bearer tokens on deliveries
//! - Environment-based configuration with validated kind names
//!
//! ## Example
//!
//! ```rust,ignore
//! use authrelay_webhooks::{DispatchConfig, EventFilter, EventRelay, RelayConfig, WebhookDispatcher};
//!
//! let config = RelayConfig::from_env()?;
//! let relay = EventRelay::new(
//!     EventFilter::new(config.filter),
//!     WebhookDispatcher::new(config.dispatch).with_session(session),
//! );
//!
//! // Host event hook
//! relay.on_user_event(&event).await;
//! ```

mod config;
mod dispatch;
mod error;
mod filter;
mod relay;
mod token;

pub use config::{ConfigError, DispatchConfig, FilterConfig, RelayConfig, DEFAULT_TIMEOUT};
pub use dispatch::{WebhookDispatcher, USER_AGENT};
pub use error::{WebhookError, WebhookResult};
pub use filter::EventFilter;
pub use relay::EventRelay;
pub use token::{AccessToken, AuthError, ClientModel, RealmSession, TokenClient};
