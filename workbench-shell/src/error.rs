//! Facade error type.

use thiserror::Error;

/// Result type for facade operations.
pub type ShellResult<T> = Result<T, ShellError>;

/// Errors the facade itself can raise.
///
/// Host-side conditions are absorbed by the core (partial results,
/// `false` statuses); only a torn-down facade is a hard failure.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The affinity thread has shut down; this facade is unusable.
    #[error("workbench detached from the host affinity thread")]
    Detached,
}
