//! Identity-provider event payloads.

use serde::Deserialize;

/// A verified event delivered by the identity provider.
///
/// Only the event type and the subject id are of interest; providers add
/// fields freely, so parsing is deliberately tolerant of extras.
#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    /// Event type, e.g. `user.deleted`
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: EventData,
}

/// The event subject.
#[derive(Debug, Default, Deserialize)]
pub struct EventData {
    /// Identity the event refers to
    #[serde(default)]
    pub id: Option<String>,
}
