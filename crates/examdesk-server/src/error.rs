//! Mapping of exam errors onto HTTP responses.
//!
//! Session precondition failures are reported as HTTP 200 with an `error`
//! field, so clients must check the body rather than the status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use examdesk_core::error::ExamError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Exam(#[from] ExamError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::Exam(ExamError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Exam not found").into_response()
            }
            ServerError::Exam(err) if err.is_client_error() => {
                (StatusCode::OK, Json(json!({ "error": err.to_string() }))).into_response()
            }
            ServerError::Exam(err) => {
                tracing::error!("{err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
            ServerError::Internal(err) => {
                tracing::error!("{err:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
