//! Submission routes: `POST /submit` and `GET /submissions`.
//!
//! Thin shims over [`IntakeService`] — decoding, validation, and
//! persistence all happen in `captura-core` so any other hosting shim
//! reuses the same endpoint implementation.
//!
//! [`IntakeService`]: captura_core::intake::IntakeService

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use captura_core::intake;
use captura_core::submission::Submission;

use crate::error::AppError;
use crate::state::AppState;

/// Build the submission API router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/submit", post(submit))
        .route("/submissions", get(list_submissions))
}

/// Success body for `POST /submit`.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: &'static str,
    pub data: Submission,
}

/// Accept a submission in JSON or URL-encoded form and persist it.
async fn submit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SubmitResponse>, AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let input = intake::decode_payload(content_type, &body)?;
    let stored = state.intake.submit(input).await?;

    Ok(Json(SubmitResponse {
        message: "Form submitted successfully",
        data: stored,
    }))
}

/// Return every stored submission in arrival order.
async fn list_submissions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Submission>>, AppError> {
    Ok(Json(state.intake.list().await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use captura_core::intake::IntakeService;
    use captura_store::MemoryStore;

    fn state() -> Arc<AppState> {
        Arc::new(AppState {
            intake: IntakeService::new(Arc::new(MemoryStore::new())),
        })
    }

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers
    }

    fn form_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        headers
    }

    const COMPLETE_JSON: &[u8] = r#"{
        "name": "Ana García",
        "email": "ana@example.com",
        "phone": "612345678",
        "address": "Calle Mayor 1",
        "postal_code": "28001",
        "property_type": "piso"
    }"#
    .as_bytes();

    #[tokio::test]
    async fn listing_an_empty_store_returns_an_empty_array() {
        let listed = list_submissions(State(state())).await.unwrap();
        assert!(listed.0.is_empty());
    }

    #[tokio::test]
    async fn submit_then_list_returns_one_record_with_timestamp() {
        let state = state();
        let accepted = submit(
            State(Arc::clone(&state)),
            json_headers(),
            Bytes::from_static(COMPLETE_JSON),
        )
        .await
        .unwrap();
        assert_eq!(accepted.0.message, "Form submitted successfully");
        assert_eq!(accepted.0.data.name, "Ana García");

        let listed = list_submissions(State(state)).await.unwrap();
        assert_eq!(listed.0.len(), 1);
        assert!(!listed.0[0].timestamp.to_rfc3339().is_empty());
    }

    #[tokio::test]
    async fn urlencoded_bodies_are_accepted() {
        let state = state();
        let body = Bytes::from_static(
            b"name=Luis&email=luis%40example.com&phone=698765432\
              &adress=Calle+Luna+2&postal_code=08001&vivienda=chalet",
        );
        let accepted = submit(State(Arc::clone(&state)), form_headers(), body)
            .await
            .unwrap();
        assert_eq!(accepted.0.data.address, "Calle Luna 2");
        assert_eq!(
            accepted.0.data.property_type,
            captura_core::submission::PropertyType::Chalet
        );
    }

    #[tokio::test]
    async fn missing_email_is_rejected_and_store_stays_empty() {
        let state = state();
        let body = Bytes::from_static(
            br#"{"name":"Ana","phone":"612345678","address":"x","postal_code":"28001"}"#,
        );
        let err = submit(State(Arc::clone(&state)), json_headers(), body)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let listed = list_submissions(State(state)).await.unwrap();
        assert!(listed.0.is_empty());
    }

    #[tokio::test]
    async fn unknown_content_type_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        let err = submit(State(state()), headers, Bytes::from_static(b"name=Ana"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn missing_content_type_is_rejected() {
        let err = submit(
            State(state()),
            HeaderMap::new(),
            Bytes::from_static(COMPLETE_JSON),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
