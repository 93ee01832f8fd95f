//! Submit lifecycle controller.
//!
//! Drives the validate → send → interpret → update-UI-state sequence for a
//! [`FormSession`]. All UI state is plain data ([`TriggerState`],
//! [`Notice`]) that a front end renders however it likes; the controller
//! never touches a screen. The network is behind [`LeadTransport`] so the
//! whole lifecycle is testable without a server.

use std::time::Duration;

use serde_json::Value;
use tracing::warn;

use crate::error::TransportError;
use crate::form::FormSession;
use crate::submission::{DEFAULT_PROPERTY_OWNER, SubmissionInput};

/// Label on the submit trigger while idle.
pub const SUBMIT_LABEL: &str = "Enviar";
/// Label on the submit trigger while a request is in flight.
pub const BUSY_LABEL: &str = "Enviando...";
/// Stored address when the user left the optional address field empty.
pub const ADDRESS_FALLBACK: &str = "No proporcionada";
/// Success notice text.
pub const SUCCESS_NOTICE: &str =
    "¡Gracias por contactarnos! Nos pondremos en contacto contigo pronto.";
/// Generic failure notice, shown when nothing more specific is available.
pub const GENERIC_FAILURE_NOTICE: &str =
    "Hubo un error al enviar el formulario. Por favor, inténtalo de nuevo.";
/// How long the success notice stays up before auto-dismissing.
pub const SUCCESS_NOTICE_TTL: Duration = Duration::from_secs(5);

/// Success or error flavor of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A user-facing notice. `auto_dismiss` is `Some` for notices the front
/// end should take down on its own; error notices are persistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub auto_dismiss: Option<Duration>,
}

/// State of the submit trigger control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerState {
    pub disabled: bool,
    pub label: String,
}

/// What a call to [`SubmitController::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing happened.
    AlreadyInFlight,
    /// Validation failed; the session navigated to the failing step and no
    /// request was sent.
    Invalid { step: usize },
    /// The server accepted the submission; the form was reset.
    Accepted,
    /// The server rejected the submission; its message is in the notice.
    Rejected,
    /// The request failed in transit or the response body was unreadable.
    Failed,
}

/// Raw reply from the submission endpoint.
#[derive(Debug, Clone)]
pub struct TransportReply {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Sends a submission payload to the backend.
#[async_trait::async_trait]
pub trait LeadTransport {
    /// Deliver `payload` and return the raw reply.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request never completes.
    async fn send(&self, payload: &SubmissionInput) -> Result<TransportReply, TransportError>;
}

/// Orchestrates one form's submission lifecycle.
#[derive(Debug)]
pub struct SubmitController {
    session: FormSession,
    trigger: TriggerState,
    notice: Option<Notice>,
}

impl SubmitController {
    /// Wrap a session with an idle trigger and no notice showing.
    #[must_use]
    pub fn new(session: FormSession) -> Self {
        Self {
            session,
            trigger: TriggerState {
                disabled: false,
                label: SUBMIT_LABEL.to_owned(),
            },
            notice: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut FormSession {
        &mut self.session
    }

    #[must_use]
    pub fn trigger(&self) -> &TriggerState {
        &self.trigger
    }

    /// The notice currently showing, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Take the notice down (the front end's dismiss action).
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Run the full submission lifecycle.
    ///
    /// Re-entry is guarded by the trigger: while a request is in flight the
    /// trigger is disabled and a second call is a no-op. Whatever happens
    /// after the request starts, the trigger is re-enabled with its original
    /// label before this returns.
    pub async fn submit<T: LeadTransport + ?Sized>(&mut self, transport: &T) -> SubmitOutcome {
        if self.trigger.disabled {
            return SubmitOutcome::AlreadyInFlight;
        }
        if let Err(step) = self.session.validate_all() {
            return SubmitOutcome::Invalid { step };
        }

        let original_label = std::mem::replace(&mut self.trigger.label, BUSY_LABEL.to_owned());
        self.trigger.disabled = true;

        let payload = self.build_payload();
        let outcome = match transport.send(&payload).await {
            Ok(reply) => self.interpret_reply(&reply),
            Err(err) => {
                warn!(error = %err, "submission request failed");
                self.show_error(GENERIC_FAILURE_NOTICE.to_owned());
                SubmitOutcome::Failed
            }
        };

        self.trigger.disabled = false;
        self.trigger.label = original_label;
        outcome
    }

    /// Explicit field→key mapping from session values to the wire payload.
    fn build_payload(&self) -> SubmissionInput {
        let field = |key: &str| self.session.value(key).unwrap_or("").to_owned();
        let property_type = {
            let tipo = field("property_type");
            if tipo.is_empty() { "casa".to_owned() } else { tipo }
        };
        let address = {
            let address = field("address");
            if address.trim().is_empty() {
                ADDRESS_FALLBACK.to_owned()
            } else {
                address
            }
        };
        SubmissionInput {
            name: Some(field("name")),
            email: Some(field("email")),
            phone: Some(field("phone")),
            address: Some(address),
            postal_code: Some(field("postal_code")),
            property_owner: Some(DEFAULT_PROPERTY_OWNER.to_owned()),
            message: Some(format!("Tipo de vivienda: {property_type}")),
            property_type: Some(property_type),
        }
    }

    fn interpret_reply(&mut self, reply: &TransportReply) -> SubmitOutcome {
        let body: Value = if reply.body.is_empty() {
            Value::Object(serde_json::Map::new())
        } else {
            match serde_json::from_slice(&reply.body) {
                Ok(value) => value,
                Err(err) => {
                    warn!(status = reply.status, error = %err, "unreadable response body");
                    self.show_error(GENERIC_FAILURE_NOTICE.to_owned());
                    return SubmitOutcome::Failed;
                }
            }
        };

        if (200..300).contains(&reply.status) {
            self.notice = Some(Notice {
                kind: NoticeKind::Success,
                text: SUCCESS_NOTICE.to_owned(),
                auto_dismiss: Some(SUCCESS_NOTICE_TTL),
            });
            self.session.reset();
            return SubmitOutcome::Accepted;
        }

        // The server's error envelope is {error, message}; prefer the
        // human-readable message, fall back to the machine code.
        let text = body
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| body.get("error").and_then(Value::as_str))
            .unwrap_or(GENERIC_FAILURE_NOTICE)
            .to_owned();
        warn!(status = reply.status, message = %text, "submission rejected");
        self.show_error(text);
        SubmitOutcome::Rejected
    }

    fn show_error(&mut self, text: String) {
        self.notice = Some(Notice {
            kind: NoticeKind::Error,
            text,
            auto_dismiss: None,
        });
    }
}
