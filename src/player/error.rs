//! Player error types

use thiserror::Error;

/// A failed player operation. The message is the single status line
/// reported to the user; state is never changed on failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// A video or playlist is absent, or hidden by a flag
    #[error("{0}")]
    NotFound(String),

    /// The request clashes with existing state
    #[error("{0}")]
    Conflict(String),

    /// Nothing is playing, so the request has nothing to act on
    #[error("{0}")]
    InvalidState(String),
}

pub type PlayerResult<T> = Result<T, PlayerError>;

/// Status lines produced by a successful operation
pub type Messages = Vec<String>;

/// `Cannot <action>: <reason>`
pub(crate) fn cannot(action: impl AsRef<str>, reason: impl AsRef<str>) -> String {
    format!("Cannot {}: {}", action.as_ref(), reason.as_ref())
}

/// Reason text shown for a flag, `Not supplied` when empty
pub(crate) fn flag_reason(reason: &str) -> &str {
    if reason.is_empty() {
        "Not supplied"
    } else {
        reason
    }
}
