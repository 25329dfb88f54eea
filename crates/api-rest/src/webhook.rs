//! Identity-provider webhook route.

use crate::error::{ApiError, ErrorRes};
use crate::notes::MessageRes;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Json;
use chrono::Utc;
use quill_webhook::{reconcile, Reconciliation, WebhookEvent};

#[utoipa::path(
    post,
    path = "/webhooks/user-deleted",
    responses(
        (status = 200, description = "Event processed or acknowledged", body = MessageRes),
        (status = 400, description = "Missing headers or failed signature verification", body = ErrorRes),
        (status = 500, description = "Store failure during cascade delete", body = ErrorRes)
    )
)]
/// Consume an identity-lifecycle event from the provider.
///
/// Verification order is fixed: required signature headers first, then
/// the signature over the exact header and payload bytes, and only then
/// is the payload parsed. A verified `user.deleted` event cascades
/// deletion of the identity's notes; any other verified event type is
/// acknowledged as a no-op.
pub async fn user_deleted(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<MessageRes>, ApiError> {
    let id = required_header(&headers, "svix-id", "webhook-id")?;
    let timestamp = required_header(&headers, "svix-timestamp", "webhook-timestamp")?;
    let signature = required_header(&headers, "svix-signature", "webhook-signature")?;

    state
        .verifier
        .verify(id, timestamp, signature, &body, Utc::now())
        .map_err(|err| {
            tracing::warn!("webhook signature rejected: {err}");
            ApiError::BadRequest(err.to_string())
        })?;

    let event: WebhookEvent = serde_json::from_slice(&body)
        .map_err(|err| ApiError::BadRequest(format!("failed to parse webhook event: {err}")))?;

    let message = match reconcile(&state.repository, &event)? {
        Reconciliation::UserDeleted { owner, removed } => {
            format!("Deleted {removed} notes for user {owner}")
        }
        Reconciliation::Ignored { .. } => "Webhook received".to_string(),
    };
    Ok(Json(MessageRes { message }))
}

/// Looks up a required header under its provider name or the generic
/// webhook alias.
fn required_header<'a>(
    headers: &'a HeaderMap,
    name: &'static str,
    alias: &'static str,
) -> Result<&'a str, ApiError> {
    headers
        .get(name)
        .or_else(|| headers.get(alias))
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::BadRequest(format!("missing required webhook header: {name}")))
}
