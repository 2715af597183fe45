//! Error types for registry API calls.

use thiserror::Error;

/// Failure of a remote registry call.
///
/// Validation failures never become `RegistryError`; they are handled
/// locally by the owning form before any network call is made.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Transport-level failure or undecodable success body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the server, with the structured message
    /// field (`message` or `msg`) when the body carried one.
    #[error("server error {status}: {msg}", msg = .message.as_deref().unwrap_or("no message"))]
    Server {
        status: u16,
        message: Option<String>,
    },
}

impl RegistryError {
    /// The server's structured error message, when one was present.
    ///
    /// Forms surface this verbatim and fall back to a per-action string
    /// otherwise.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } => message.as_deref(),
            Self::Http(_) => None,
        }
    }
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
