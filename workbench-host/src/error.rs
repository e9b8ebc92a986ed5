//! Error types for host interaction.

use thiserror::Error;

/// Result type for host operations.
pub type HostResult<T> = Result<T, HostError>;

/// Errors that can occur while talking to the host.
///
/// A stale handle is not an error: queries against a torn-down handle
/// return `Ok(None)` so callers can treat the node as gone.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host returned a non-success status for a request.
    #[error("host rejected request: status {code:#010x}")]
    Rejected { code: i32 },

    /// A host service could not satisfy the query.
    #[error("host service unavailable: {0}")]
    Unavailable(String),

    /// The affinity-thread dispatcher has shut down.
    #[error("ui dispatcher detached")]
    Detached,
}

impl HostError {
    /// Convenience constructor for [`HostError::Unavailable`].
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }
}
