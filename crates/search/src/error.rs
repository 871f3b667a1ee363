//! Error type for search session lookups.

/// Errors produced while looking up a library on behalf of a session.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The lookup failed; the message is already human-readable and is
    /// rendered as-is in the error state.
    #[error("{0}")]
    Lookup(String),
}
