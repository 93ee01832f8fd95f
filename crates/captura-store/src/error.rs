//! Store error types.
//!
//! Every variant carries the path (or a stand-in for memory stores) and the
//! underlying reason, so a failure can be diagnosed from the log line alone.

/// Errors that can occur while loading or saving the document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to read the document.
    #[error("failed to read store at '{path}': {reason}")]
    Read { path: String, reason: String },

    /// Failed to write the document.
    #[error("failed to write store at '{path}': {reason}")]
    Write { path: String, reason: String },
}
