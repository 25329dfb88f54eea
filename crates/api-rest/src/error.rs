//! HTTP error mapping.
//!
//! One taxonomy for every endpoint. Ownership mismatches are reported as
//! `NotFound`, never as a forbidden condition, so a non-owner cannot
//! learn whether another identity's note exists. Store failures surface
//! as `Internal` with the cause logged server-side only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use quill_core::NoteError;
use quill_webhook::reconciler::ReconcileError;
use serde::Serialize;
use utoipa::ToSchema;

/// Machine-readable error body returned on every failure.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorRes {
    /// Error kind, e.g. `not_found`
    pub error: &'static str,
    /// Human-readable description
    pub message: String,
}

/// Failure conditions an endpoint can report.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no authenticated identity on the request")]
    Unauthenticated,
    #[error("no owned note matches this id")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error("method not allowed on this route")]
    MethodNotAllowed,
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::Unauthenticated => "unauthenticated",
            ApiError::NotFound => "not_found",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::MethodNotAllowed => "method_not_allowed",
            ApiError::Internal => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorRes {
            error: self.kind(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<NoteError> for ApiError {
    fn from(err: NoteError) -> Self {
        match err {
            NoteError::NotFound => ApiError::NotFound,
            NoteError::Store(cause) => {
                tracing::error!("store failure: {cause}");
                ApiError::Internal
            }
        }
    }
}

impl From<ReconcileError> for ApiError {
    fn from(err: ReconcileError) -> Self {
        match err {
            ReconcileError::Event(cause) => ApiError::BadRequest(cause.to_string()),
            ReconcileError::Notes(cause) => ApiError::from(cause),
        }
    }
}
