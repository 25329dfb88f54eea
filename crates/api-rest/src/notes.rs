//! Note CRUD handlers.

use crate::error::{ApiError, ErrorRes};
use crate::identity::Identity;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path as AxumPath, State};
use axum::http::StatusCode;
use axum::response::Json;
use quill_types::{Note, NoteId, NoteUpdate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Mutable note fields as accepted from a create or update request.
///
/// Unknown fields are rejected rather than passed through to the store.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct NoteReq {
    /// Optional title text
    pub title: Option<String>,
    /// Optional rich-text markup
    pub content: Option<String>,
    /// Free-form labels in display order
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<NoteReq> for NoteUpdate {
    fn from(req: NoteReq) -> Self {
        NoteUpdate {
            title: req.title,
            content: req.content,
            tags: req.tags,
        }
    }
}

/// Confirmation body for operations with nothing else to return.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageRes {
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers.
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Quillbox is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "All notes owned by the acting identity, newest first", body = [Note]),
        (status = 401, description = "No authenticated identity", body = ErrorRes),
        (status = 500, description = "Store failure", body = ErrorRes)
    )
)]
/// List all notes owned by the acting identity.
///
/// Notes are ordered newest first by creation time, ties broken stably
/// by id.
pub async fn list_notes(
    State(state): State<AppState>,
    Identity(owner): Identity,
) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state.repository.list(&owner)?;
    Ok(Json(notes))
}

#[utoipa::path(
    post,
    path = "/notes",
    request_body = NoteReq,
    responses(
        (status = 201, description = "Note created", body = Note),
        (status = 400, description = "Malformed request body", body = ErrorRes),
        (status = 401, description = "No authenticated identity", body = ErrorRes),
        (status = 500, description = "Store failure", body = ErrorRes)
    )
)]
/// Create a note owned by the acting identity.
///
/// Returns the stored representation including the assigned id;
/// `createdAt` and `updatedAt` are equal on the response.
pub async fn create_note(
    State(state): State<AppState>,
    Identity(owner): Identity,
    body: Result<Json<NoteReq>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let Json(req) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let note = state.repository.create(&owner, req.into())?;
    Ok((StatusCode::CREATED, Json(note)))
}

#[utoipa::path(
    get,
    path = "/notes/{id}",
    params(("id" = String, Path, description = "Note id in canonical form")),
    responses(
        (status = 200, description = "The owned note", body = Note),
        (status = 401, description = "No authenticated identity", body = ErrorRes),
        (status = 404, description = "No owned note matches", body = ErrorRes)
    )
)]
/// Read a single owned note.
pub async fn read_note(
    State(state): State<AppState>,
    Identity(owner): Identity,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<Note>, ApiError> {
    let id = parse_note_id(&id)?;
    let note = state.repository.get(&id, &owner)?;
    Ok(Json(note))
}

#[utoipa::path(
    put,
    path = "/notes/{id}",
    params(("id" = String, Path, description = "Note id in canonical form")),
    request_body = NoteReq,
    responses(
        (status = 200, description = "Updated note", body = Note),
        (status = 400, description = "Malformed request body", body = ErrorRes),
        (status = 401, description = "No authenticated identity", body = ErrorRes),
        (status = 404, description = "No owned note matches", body = ErrorRes),
        (status = 500, description = "Store failure", body = ErrorRes)
    )
)]
/// Replace the mutable fields of an owned note.
///
/// `id`, `ownerId` and `createdAt` never change; `updatedAt` is stamped
/// on success.
pub async fn update_note(
    State(state): State<AppState>,
    Identity(owner): Identity,
    AxumPath(id): AxumPath<String>,
    body: Result<Json<NoteReq>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let id = parse_note_id(&id)?;
    let Json(req) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let note = state.repository.update(&id, &owner, req.into())?;
    Ok(Json(note))
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(("id" = String, Path, description = "Note id in canonical form")),
    responses(
        (status = 200, description = "Note deleted", body = MessageRes),
        (status = 401, description = "No authenticated identity", body = ErrorRes),
        (status = 404, description = "No owned note matches", body = ErrorRes),
        (status = 500, description = "Store failure", body = ErrorRes)
    )
)]
/// Delete an owned note.
///
/// A repeat delete of the same id reports 404, the same as any other
/// miss.
pub async fn delete_note(
    State(state): State<AppState>,
    Identity(owner): Identity,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<MessageRes>, ApiError> {
    let id = parse_note_id(&id)?;
    state.repository.delete(&id, &owner)?;
    Ok(Json(MessageRes {
        message: "Note deleted successfully".into(),
    }))
}

/// Fallback for unsupported verbs on known routes.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// An id that fails canonical parsing cannot address any stored note, so
/// it reads as a miss rather than a malformed request.
fn parse_note_id(raw: &str) -> Result<NoteId, ApiError> {
    NoteId::parse(raw).map_err(|_| ApiError::NotFound)
}
