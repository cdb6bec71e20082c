//! Webhook relay error types.

use thiserror::Error;

use crate::token::AuthError;

/// Result type for webhook operations.
pub type WebhookResult<T> = Result<T, WebhookError>;

/// Error type for webhook operations.
///
/// None of these are fatal: the dispatcher logs them and continues, so they
/// never reach the host's event-processing path.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The event could not be converted to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Token retrieval failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A single target could not be delivered to.
    #[error("delivery to {uri} failed: {reason}")]
    Delivery {
        /// The target URI.
        uri: String,
        /// Transport error or unexpected status.
        reason: String,
    },
}
