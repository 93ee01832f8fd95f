//! Submission intake — the single endpoint implementation.
//!
//! Both the HTTP server and any other hosting shim route through
//! [`IntakeService`]; there is exactly one place that decodes, validates,
//! and persists a submission. The store document is a JSON array of
//! [`Submission`] in arrival order, pretty-printed. A missing or corrupt
//! document reads as the empty array; appends rewrite the whole document.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use captura_store::DocumentStore;

use crate::error::IntakeError;
use crate::submission::{Submission, SubmissionInput};

/// Decode a request body into a [`SubmissionInput`] based on its declared
/// content type. JSON and URL-encoded form bodies are accepted; anything
/// else is rejected.
///
/// # Errors
///
/// [`IntakeError::UnsupportedMediaType`] for unrecognized encodings,
/// [`IntakeError::MalformedBody`] when the body does not parse in its
/// declared encoding.
pub fn decode_payload(content_type: &str, body: &[u8]) -> Result<SubmissionInput, IntakeError> {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    match media_type.as_str() {
        "application/json" => {
            serde_json::from_slice(body).map_err(|err| IntakeError::MalformedBody {
                reason: err.to_string(),
            })
        }
        "application/x-www-form-urlencoded" => {
            serde_urlencoded::from_bytes(body).map_err(|err| IntakeError::MalformedBody {
                reason: err.to_string(),
            })
        }
        _ => Err(IntakeError::UnsupportedMediaType {
            content_type: content_type.to_owned(),
        }),
    }
}

/// Receives submissions and persists them through a [`DocumentStore`].
///
/// Writers are serialized by an internal mutex, so concurrent submits
/// within one process cannot lose each other's appends. Cross-process
/// writers still race; run one server per store file.
pub struct IntakeService {
    store: Arc<dyn DocumentStore>,
    write_lock: Mutex<()>,
}

impl IntakeService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Validate, timestamp, and persist one submission. Returns the stored
    /// record.
    ///
    /// # Errors
    ///
    /// [`IntakeError::MissingField`] if a required field is absent,
    /// [`IntakeError::Store`] if persistence fails.
    pub async fn submit(&self, input: SubmissionInput) -> Result<Submission, IntakeError> {
        input.validate()?;
        let submission = input.into_submission(Utc::now());

        let _guard = self.write_lock.lock().await;
        let mut submissions = self.read_all().await?;
        submissions.push(submission.clone());
        let document =
            serde_json::to_vec_pretty(&submissions).map_err(|err| IntakeError::Encode {
                reason: err.to_string(),
            })?;
        self.store.save(&document).await?;

        info!(
            email = %submission.email,
            postal_code = %submission.postal_code,
            total = submissions.len(),
            "submission stored"
        );
        Ok(submission)
    }

    /// Every stored submission, in arrival order.
    ///
    /// # Errors
    ///
    /// [`IntakeError::Store`] if the store cannot be read.
    pub async fn list(&self) -> Result<Vec<Submission>, IntakeError> {
        self.read_all().await
    }

    async fn read_all(&self) -> Result<Vec<Submission>, IntakeError> {
        let Some(bytes) = self.store.load().await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_slice(&bytes) {
            Ok(submissions) => Ok(submissions),
            Err(err) => {
                warn!(error = %err, "submission document is corrupt, treating as empty");
                Ok(Vec::new())
            }
        }
    }
}

impl std::fmt::Debug for IntakeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntakeService").finish_non_exhaustive()
    }
}
