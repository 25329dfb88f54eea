//! The note entity.

use crate::{NoteId, OwnerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single note document.
///
/// This is both the stored representation and the wire shape: field names
/// are camelCase on the wire and timestamps render as RFC 3339. `content`
/// is rich-text markup the backend treats as an opaque string. `tags`
/// keeps insertion order; deduplication for display happens in the
/// browser's derived tag index, not here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Canonical identifier, assigned once at creation
    #[schema(value_type = String, example = "550e8400e29b41d4a716446655440000")]
    pub id: NoteId,
    /// Identity of the owning user, set at creation and never changed
    #[schema(value_type = String, example = "user_2abc")]
    pub owner_id: OwnerId,
    /// Optional title text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Optional rich-text markup, opaque to the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Free-form labels in display order
    #[serde(default)]
    pub tags: Vec<String>,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
    /// Set at creation, replaced on every successful update
    pub updated_at: DateTime<Utc>,
}

/// The mutable fields of a note, as supplied by an update request.
///
/// `id`, `owner_id` and `created_at` are never part of an update; the
/// repository stamps `updated_at` itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Vec<String>,
}

impl Note {
    /// Applies an update to the mutable fields, stamping `updated_at`.
    pub fn apply(&mut self, update: NoteUpdate, updated_at: DateTime<Utc>) {
        self.title = update.title;
        self.content = update.content;
        self.tags = update.tags;
        self.updated_at = updated_at;
    }
}
