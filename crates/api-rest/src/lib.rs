//! # API REST
//!
//! REST API implementation for Quillbox.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, error mapping)
//!
//! The router is built here so the root binary and the tests share one
//! authoritative set of handlers.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod identity;
pub mod notes;
pub mod state;
pub mod webhook;

pub use error::{ApiError, ErrorRes};
pub use identity::{Identity, USER_ID_HEADER};
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use quill_types::Note;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        notes::health,
        notes::list_notes,
        notes::create_note,
        notes::read_note,
        notes::update_note,
        notes::delete_note,
        webhook::user_deleted,
    ),
    components(schemas(
        Note,
        notes::NoteReq,
        notes::MessageRes,
        notes::HealthRes,
        ErrorRes,
    ))
)]
struct ApiDoc;

/// Builds the application router over the shared state.
///
/// Unsupported verbs on known routes fall through to a 405 with the same
/// JSON error shape as every other failure.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(notes::health))
        .route(
            "/notes",
            get(notes::list_notes)
                .post(notes::create_note)
                .fallback(notes::method_not_allowed),
        )
        .route(
            "/notes/:id",
            get(notes::read_note)
                .put(notes::update_note)
                .delete(notes::delete_note)
                .fallback(notes::method_not_allowed),
        )
        .route(
            "/webhooks/user-deleted",
            post(webhook::user_deleted).fallback(notes::method_not_allowed),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
