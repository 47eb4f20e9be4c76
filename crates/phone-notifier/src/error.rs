//! Error types for the phone notifier

use thiserror::Error;

/// Result type for notifier setup operations
pub type Result<T> = std::result::Result<T, NotifierError>;

/// Result type for a single call into a registry endpoint
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Failure to hand a notification to the registry endpoint.
///
/// The dispatcher never surfaces these to its caller; they exist so that
/// endpoints can report what went wrong and so the discard point is explicit.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The endpoint could not be reached
    #[error("Registry unreachable at {address}: {source}")]
    Unreachable {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The connection failed while writing the notification
    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// The notification could not be encoded for the wire
    #[error("Failed to encode notification: {0}")]
    Encode(#[from] serde_json::Error),

    /// The call did not complete in time
    #[error("Registry call timed out after {millis} ms")]
    Timeout { millis: u64 },

    /// The receiving side has gone away
    #[error("Registry endpoint closed")]
    Closed,

    /// The in-process endpoint has no room for another notification
    #[error("Registry endpoint full")]
    Full,
}

/// Errors raised while configuring the notifier
#[derive(Debug, Error)]
pub enum NotifierError {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O failure while loading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Registry endpoint failure surfaced outside of dispatch
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

impl NotifierError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
