//! # Quill Webhook
//!
//! Inbound webhook handling for upstream identity-lifecycle events.
//!
//! The identity provider signs each delivery with a shared secret;
//! [`verify::WebhookVerifier`] checks that signature over the exact header
//! and payload bytes before anything else looks at the body. A verified
//! `user.deleted` event is handed to [`reconciler::reconcile`], which
//! cascade-deletes the notes of the removed identity. This is the only
//! path through which an external actor can trigger bulk deletion, so
//! verification always comes first.

pub mod event;
pub mod reconciler;
pub mod verify;

pub use event::WebhookEvent;
pub use reconciler::{reconcile, Reconciliation};
pub use verify::WebhookVerifier;

/// Errors that can occur while accepting a webhook delivery.
///
/// Every variant maps to a 400 at the API boundary; none of them touch
/// note data.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("webhook secret is not valid base64")]
    InvalidSecret,
    #[error("missing required webhook header: {0}")]
    MissingHeader(&'static str),
    #[error("webhook timestamp is not a unix second count")]
    InvalidTimestamp,
    #[error("webhook timestamp is outside the accepted tolerance")]
    TimestampOutOfTolerance,
    #[error("no webhook signature matched the payload")]
    SignatureMismatch,
    #[error("failed to parse webhook event payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("user.deleted event is missing the user id")]
    MissingUserId,
}

pub type WebhookResult<T> = std::result::Result<T, WebhookError>;
