//! Event model error types.

use thiserror::Error;

/// Error type for parsing event kind names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KindError {
    /// The name does not match any known user event kind.
    #[error("unknown event kind: {0}")]
    UnknownEventKind(String),

    /// The name does not match any known admin operation kind.
    #[error("unknown operation kind: {0}")]
    UnknownOperationKind(String),

    /// The name does not match any known admin resource kind.
    #[error("unknown resource kind: {0}")]
    UnknownResourceKind(String),
}
