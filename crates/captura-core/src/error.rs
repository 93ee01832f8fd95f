//! Error types for `captura-core`.
//!
//! Intake errors split cleanly into client faults (missing field, bad
//! encoding, malformed body) and server faults (storage). The HTTP layer
//! maps the former to 400 and the latter to 500. Field-level validation
//! failures are not errors in this sense — they live as messages in the
//! form session and never reach the network layer.

use captura_store::StoreError;

/// Errors from receiving and persisting a submission.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// A required field was absent or empty.
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// The request body used an encoding the endpoint does not accept.
    #[error("unsupported content type '{content_type}'")]
    UnsupportedMediaType { content_type: String },

    /// The request body could not be parsed in its declared encoding.
    #[error("malformed request body: {reason}")]
    MalformedBody { reason: String },

    /// The store document could not be re-encoded for persistence.
    #[error("failed to encode store document: {reason}")]
    Encode { reason: String },

    /// The submission store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl IntakeError {
    /// Whether this error is the client's fault (HTTP 400 territory).
    #[must_use]
    pub fn is_client_fault(&self) -> bool {
        match self {
            Self::MissingField { .. }
            | Self::UnsupportedMediaType { .. }
            | Self::MalformedBody { .. } => true,
            Self::Encode { .. } | Self::Store(_) => false,
        }
    }
}

/// A client-side network failure while sending a submission.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never completed — connection refused, timeout, DNS.
    #[error("network error: {reason}")]
    Network { reason: String },
}
