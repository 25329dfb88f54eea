//! Owner-scoped note repository.
//!
//! Wraps the document store with the ownership and lifecycle rules of the
//! service:
//!
//! - every operation requires a validated [`OwnerId`]; the type makes an
//!   empty acting identity unrepresentable here
//! - `update` and `delete` target `(id, owner)` jointly, and a request
//!   for another identity's note behaves identically to a request for a
//!   nonexistent one
//! - timestamps are stamped here, never by callers: `created_at` equals
//!   `updated_at` at creation, and only `updated_at` moves afterwards

use crate::{NoteError, NoteResult};
use chrono::Utc;
use quill_store::DocumentStore;
use quill_types::{Note, NoteId, NoteUpdate, OwnerId};

/// Note operations scoped to an acting identity.
///
/// Cheap to clone; holds only the store handle.
#[derive(Clone, Debug)]
pub struct NoteRepository {
    store: DocumentStore,
}

impl NoteRepository {
    /// Creates a repository over an opened document store.
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Creates a note owned by `owner` and returns the stored
    /// representation, including the assigned id.
    ///
    /// `created_at` and `updated_at` are both set to now.
    pub fn create(&self, owner: &OwnerId, draft: NoteUpdate) -> NoteResult<Note> {
        let now = Utc::now();
        let note = Note {
            id: NoteId::new(),
            owner_id: owner.clone(),
            title: draft.title,
            content: draft.content,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        };
        self.store.insert(&note)?;
        tracing::debug!(id = %note.id, owner = %owner, "created note");
        Ok(note)
    }

    /// Lists all notes owned by `owner`, newest first by `created_at`,
    /// ties broken stably by id.
    pub fn list(&self, owner: &OwnerId) -> NoteResult<Vec<Note>> {
        let mut notes = self.store.find(owner)?;
        notes.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(notes)
    }

    /// Returns the owned note with the given id.
    ///
    /// # Errors
    ///
    /// [`NoteError::NotFound`] if no note with this id exists or it
    /// belongs to a different owner.
    pub fn get(&self, id: &NoteId, owner: &OwnerId) -> NoteResult<Note> {
        self.store.find_one(id, owner)?.ok_or(NoteError::NotFound)
    }

    /// Replaces the mutable fields of the owned note and stamps
    /// `updated_at`, then returns the stored representation.
    ///
    /// `id`, `owner_id` and `created_at` are never changed.
    pub fn update(
        &self,
        id: &NoteId,
        owner: &OwnerId,
        update: NoteUpdate,
    ) -> NoteResult<Note> {
        let matched = self.store.update(id, owner, update, Utc::now())?;
        if !matched {
            return Err(NoteError::NotFound);
        }
        self.get(id, owner)
    }

    /// Removes the owned note.
    ///
    /// A repeat delete of the same id reports [`NoteError::NotFound`]
    /// just like the first miss would; it is not an escalation.
    pub fn delete(&self, id: &NoteId, owner: &OwnerId) -> NoteResult<()> {
        if !self.store.delete(id, owner)? {
            return Err(NoteError::NotFound);
        }
        tracing::debug!(id = %id, owner = %owner, "deleted note");
        Ok(())
    }

    /// Removes every note owned by `owner` and returns the count.
    ///
    /// Only the user-deletion reconciler calls this; individual deletes
    /// always go through [`NoteRepository::delete`].
    pub fn delete_all_for_owner(&self, owner: &OwnerId) -> NoteResult<usize> {
        let removed = self.store.delete_all(owner)?;
        tracing::info!(owner = %owner, removed, "cascade-deleted notes for owner");
        Ok(removed)
    }
}
