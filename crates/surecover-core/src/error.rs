//! Error types for the SureCover frontend core

use thiserror::Error;

/// Main error type for notification center operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The notification center was accessed outside the scope that owns it
    #[error("notification center used outside its provider scope")]
    OutsideScope,

    /// No async runtime was available to host expiry timers
    #[error("no tokio runtime available to schedule notification expiry")]
    RuntimeUnavailable,

    /// A notification kind name could not be parsed
    #[error("Unknown notification kind: {0}")]
    UnknownKind(String),
}

/// Result type alias using NotifyError
pub type NotifyResult<T> = Result<T, NotifyError>;
