//! # Authrelay Events
//!
//! Event model for Authrelay providing:
//! - User and admin event records as supplied by an identity server
//! - Closed kind enums with validated string parsing
//! - Canonical JSON payload serialization
//!
//! ## Example
//!
//! ```rust
//! use authrelay_events::{EventKind, UserEvent};
//!
//! let event = UserEvent::new(EventKind::Login, "master", "web-app", "user-1")
//!     .with_ip_address("10.0.0.1")
//!     .with_detail("auth_method", "openid-connect");
//!
//! let payload = serde_json::to_string(&event).unwrap();
//! assert!(payload.contains("\"type\":\"LOGIN\""));
//! ```

mod error;
mod event;
mod kinds;

pub use error::KindError;
pub use event::{AdminEvent, UserEvent};
pub use kinds::{EventKind, OperationKind, ResourceKind};
