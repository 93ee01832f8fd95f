//! Shared application state for the Captura server.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`.

use captura_core::intake::IntakeService;

/// Shared application state passed to all HTTP handlers.
#[derive(Debug)]
pub struct AppState {
    /// Submission intake and listing.
    pub intake: IntakeService,
}
