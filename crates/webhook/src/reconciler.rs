//! User-deletion reconciliation.
//!
//! Keeps note data consistent with upstream identity lifecycle: when the
//! provider reports an identity as deleted, every note that identity
//! owned is removed. Callers must verify the delivery signature *before*
//! parsing and handing the event here; this module assumes authenticity.

use crate::{WebhookError, WebhookEvent};
use quill_core::{NoteError, NoteRepository};
use quill_types::OwnerId;

const USER_DELETED: &str = "user.deleted";

/// Outcome of processing a verified event.
#[derive(Debug, PartialEq, Eq)]
pub enum Reconciliation {
    /// A `user.deleted` event was applied; `removed` notes were deleted.
    UserDeleted { owner: OwnerId, removed: usize },
    /// The event type carries no note-side work and was accepted as a
    /// no-op.
    Ignored { kind: String },
}

/// Errors from reconciling a verified event.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    /// The event payload was unusable (maps to a client error)
    #[error(transparent)]
    Event(#[from] WebhookError),
    /// Note deletion failed in the store (maps to a server error)
    #[error(transparent)]
    Notes(#[from] NoteError),
}

/// Applies a verified identity event to the note collection.
///
/// `user.deleted` cascades deletion of the identity's notes and reports
/// the exact count removed. Every other verified event type is accepted
/// and ignored.
pub fn reconcile(
    repository: &NoteRepository,
    event: &WebhookEvent,
) -> Result<Reconciliation, ReconcileError> {
    if event.kind != USER_DELETED {
        tracing::debug!(kind = %event.kind, "ignoring webhook event type");
        return Ok(Reconciliation::Ignored {
            kind: event.kind.clone(),
        });
    }

    let owner = event
        .data
        .id
        .as_deref()
        .and_then(|id| OwnerId::new(id).ok())
        .ok_or(WebhookError::MissingUserId)?;

    let removed = repository.delete_all_for_owner(&owner)?;
    Ok(Reconciliation::UserDeleted { owner, removed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_store::DocumentStore;
    use quill_types::NoteUpdate;
    use tempfile::TempDir;

    fn repository() -> (NoteRepository, TempDir) {
        let temp = TempDir::new().unwrap();
        let store = DocumentStore::open(temp.path()).unwrap();
        (NoteRepository::new(store), temp)
    }

    fn event(json: &str) -> WebhookEvent {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn user_deleted_removes_all_owned_notes() {
        let (repo, _temp) = repository();
        let doomed = OwnerId::new("u1").unwrap();
        let safe = OwnerId::new("u2").unwrap();
        for _ in 0..3 {
            repo.create(&doomed, NoteUpdate::default()).unwrap();
        }
        repo.create(&safe, NoteUpdate::default()).unwrap();

        let outcome = reconcile(
            &repo,
            &event(r#"{"type":"user.deleted","data":{"id":"u1"}}"#),
        )
        .unwrap();

        assert_eq!(
            outcome,
            Reconciliation::UserDeleted {
                owner: doomed.clone(),
                removed: 3
            }
        );
        assert!(repo.list(&doomed).unwrap().is_empty());
        assert_eq!(repo.list(&safe).unwrap().len(), 1);
    }

    #[test]
    fn other_event_types_are_ignored() {
        let (repo, _temp) = repository();
        let owner = OwnerId::new("u1").unwrap();
        repo.create(&owner, NoteUpdate::default()).unwrap();

        let outcome = reconcile(
            &repo,
            &event(r#"{"type":"user.updated","data":{"id":"u1"}}"#),
        )
        .unwrap();

        assert_eq!(
            outcome,
            Reconciliation::Ignored {
                kind: "user.updated".into()
            }
        );
        assert_eq!(repo.list(&owner).unwrap().len(), 1);
    }

    #[test]
    fn user_deleted_without_id_is_rejected() {
        let (repo, _temp) = repository();
        let outcome = reconcile(&repo, &event(r#"{"type":"user.deleted","data":{}}"#));
        assert!(matches!(
            outcome,
            Err(ReconcileError::Event(WebhookError::MissingUserId))
        ));

        let blank = reconcile(
            &repo,
            &event(r#"{"type":"user.deleted","data":{"id":"  "}}"#),
        );
        assert!(matches!(
            blank,
            Err(ReconcileError::Event(WebhookError::MissingUserId))
        ));
    }
}
