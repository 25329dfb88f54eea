//! File-backed document store.
//!
//! ## Storage layout
//!
//! Notes are stored as JSON documents in a sharded structure:
//!
//! ```text
//! <root>/
//!   notes/
//!     <s1>/
//!       <s2>/
//!         <id>.json
//! ```
//!
//! where `s1` and `s2` are the first four hex characters of the note id.
//! Sharding keeps directory fan-out bounded; the canonical-id discipline in
//! `quill-types` guarantees a route parameter can never address a path
//! outside the store.
//!
//! ## Ownership scoping
//!
//! Every read, update and delete takes the owning identity alongside the
//! id and treats an owner mismatch exactly like a missing document. The
//! store itself never reveals whether a non-owned document exists.
//!
//! ## Atomicity
//!
//! Each operation touches a single document file. There are no
//! multi-document transactions; the data model has one entity type with no
//! cross-entity references, so none are needed.

use crate::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use quill_types::{Note, NoteId, NoteUpdate, OwnerId};
use std::fs;
use std::path::{Path, PathBuf};

const NOTES_DIR_NAME: &str = "notes";

/// Collection-level operations over the on-disk note documents.
///
/// Open once at process start and share via cheap clones; the store holds
/// only the resolved collection path, no per-request mutable state.
#[derive(Clone, Debug)]
pub struct DocumentStore {
    notes_dir: PathBuf,
}

impl DocumentStore {
    /// Opens the store rooted at `root`, creating the collection
    /// directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidRootDirectory`] if `root` exists but
    /// is not a directory, or [`StoreError::StoreDirCreation`] if the
    /// collection directory cannot be created.
    pub fn open(root: impl AsRef<Path>) -> StoreResult<Self> {
        let root = root.as_ref();
        if root.exists() && !root.is_dir() {
            return Err(StoreError::InvalidRootDirectory(
                root.display().to_string(),
            ));
        }
        let notes_dir = root.join(NOTES_DIR_NAME);
        fs::create_dir_all(&notes_dir).map_err(StoreError::StoreDirCreation)?;
        Ok(Self { notes_dir })
    }

    /// Returns all documents owned by `owner`, in no particular order.
    ///
    /// Ordering is a repository concern; the store only filters.
    pub fn find(&self, owner: &OwnerId) -> StoreResult<Vec<Note>> {
        let mut notes = Vec::new();
        self.scan(|_, note| {
            if note.owner_id == *owner {
                notes.push(note);
            }
            Ok(())
        })?;
        Ok(notes)
    }

    /// Returns the document at `(id, owner)`, or `None` if no document
    /// with that id exists **or** it belongs to a different owner.
    pub fn find_one(&self, id: &NoteId, owner: &OwnerId) -> StoreResult<Option<Note>> {
        let path = id.document_path(&self.notes_dir);
        if !path.exists() {
            return Ok(None);
        }
        let note = read_document(&path)?;
        if note.owner_id != *owner {
            return Ok(None);
        }
        Ok(Some(note))
    }

    /// Inserts a new document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if a document with the same id
    /// already exists; ids are assigned exactly once and never reused.
    pub fn insert(&self, note: &Note) -> StoreResult<()> {
        let path = note.id.document_path(&self.notes_dir);
        if path.exists() {
            return Err(StoreError::DuplicateId);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(StoreError::StoreDirCreation)?;
        }
        write_document(&path, note)
    }

    /// Replaces the mutable fields of the document at `(id, owner)`.
    ///
    /// Returns `true` if a matching owned document was found and
    /// rewritten, `false` otherwise. `id`, `owner_id` and `created_at`
    /// are left untouched.
    pub fn update(
        &self,
        id: &NoteId,
        owner: &OwnerId,
        update: NoteUpdate,
        updated_at: DateTime<Utc>,
    ) -> StoreResult<bool> {
        let Some(mut note) = self.find_one(id, owner)? else {
            return Ok(false);
        };
        note.apply(update, updated_at);
        let path = id.document_path(&self.notes_dir);
        write_document(&path, &note)?;
        Ok(true)
    }

    /// Removes the document at `(id, owner)`.
    ///
    /// Returns `true` if a matching owned document was removed.
    pub fn delete(&self, id: &NoteId, owner: &OwnerId) -> StoreResult<bool> {
        if self.find_one(id, owner)?.is_none() {
            return Ok(false);
        }
        let path = id.document_path(&self.notes_dir);
        fs::remove_file(&path).map_err(StoreError::FileRemove)?;
        Ok(true)
    }

    /// Removes every document owned by `owner`, returning the count.
    pub fn delete_all(&self, owner: &OwnerId) -> StoreResult<usize> {
        let mut doomed = Vec::new();
        self.scan(|path, note| {
            if note.owner_id == *owner {
                doomed.push(path);
            }
            Ok(())
        })?;
        for path in &doomed {
            fs::remove_file(path).map_err(StoreError::FileRemove)?;
        }
        Ok(doomed.len())
    }

    /// Walks both shard levels, invoking `visit` for every document.
    fn scan(
        &self,
        mut visit: impl FnMut(PathBuf, Note) -> StoreResult<()>,
    ) -> StoreResult<()> {
        for shard1 in read_dirs(&self.notes_dir)? {
            for shard2 in read_dirs(&shard1)? {
                for entry in fs::read_dir(&shard2).map_err(StoreError::FileRead)? {
                    let entry = entry.map_err(StoreError::FileRead)?;
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "json") {
                        let note = read_document(&path)?;
                        visit(path, note)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn read_dirs(path: &Path) -> StoreResult<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(path).map_err(StoreError::FileRead)? {
        let entry = entry.map_err(StoreError::FileRead)?;
        if entry.path().is_dir() {
            dirs.push(entry.path());
        }
    }
    Ok(dirs)
}

fn read_document(path: &Path) -> StoreResult<Note> {
    let raw = fs::read_to_string(path).map_err(StoreError::FileRead)?;
    serde_json::from_str(&raw).map_err(StoreError::Deserialization)
}

fn write_document(path: &Path, note: &Note) -> StoreResult<()> {
    let raw = serde_json::to_string_pretty(note).map_err(StoreError::Serialization)?;
    fs::write(path, raw).map_err(StoreError::FileWrite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store() -> (DocumentStore, TempDir) {
        let temp = TempDir::new().unwrap();
        let store = DocumentStore::open(temp.path()).unwrap();
        (store, temp)
    }

    fn owner(name: &str) -> OwnerId {
        OwnerId::new(name).unwrap()
    }

    fn note_for(owner_name: &str, title: &str) -> Note {
        let now = Utc::now();
        Note {
            id: NoteId::new(),
            owner_id: owner(owner_name),
            title: Some(title.into()),
            content: Some("<p>body</p>".into()),
            tags: vec!["home".into()],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn open_rejects_file_as_root() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            DocumentStore::open(&file),
            Err(StoreError::InvalidRootDirectory(_))
        ));
    }

    #[test]
    fn insert_places_document_in_sharded_path() {
        let (store, temp) = open_store();
        let note = note_for("u1", "a");
        store.insert(&note).unwrap();

        let id = note.id.to_string();
        let expected = temp
            .path()
            .join("notes")
            .join(&id[0..2])
            .join(&id[2..4])
            .join(format!("{id}.json"));
        assert!(expected.is_file());
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let (store, _temp) = open_store();
        let note = note_for("u1", "a");
        store.insert(&note).unwrap();
        assert!(matches!(store.insert(&note), Err(StoreError::DuplicateId)));
    }

    #[test]
    fn find_filters_by_owner() {
        let (store, _temp) = open_store();
        store.insert(&note_for("u1", "mine")).unwrap();
        store.insert(&note_for("u1", "also mine")).unwrap();
        store.insert(&note_for("u2", "theirs")).unwrap();

        let mine = store.find(&owner("u1")).unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|n| n.owner_id == owner("u1")));
        assert!(store.find(&owner("u3")).unwrap().is_empty());
    }

    #[test]
    fn find_one_hides_other_owners_documents() {
        let (store, _temp) = open_store();
        let note = note_for("u1", "mine");
        store.insert(&note).unwrap();

        assert!(store.find_one(&note.id, &owner("u1")).unwrap().is_some());
        assert!(store.find_one(&note.id, &owner("u2")).unwrap().is_none());
        assert!(store.find_one(&NoteId::new(), &owner("u1")).unwrap().is_none());
    }

    #[test]
    fn update_rewrites_mutable_fields_for_owner_only() {
        let (store, _temp) = open_store();
        let note = note_for("u1", "before");
        store.insert(&note).unwrap();

        let later = note.created_at + chrono::Duration::seconds(30);
        let update = NoteUpdate {
            title: Some("after".into()),
            content: None,
            tags: vec![],
        };
        assert!(!store
            .update(&note.id, &owner("u2"), update.clone(), later)
            .unwrap());
        assert!(store.update(&note.id, &owner("u1"), update, later).unwrap());

        let stored = store.find_one(&note.id, &owner("u1")).unwrap().unwrap();
        assert_eq!(stored.title.as_deref(), Some("after"));
        assert_eq!(stored.content, None);
        assert_eq!(stored.created_at, note.created_at);
        assert_eq!(stored.updated_at, later);
    }

    #[test]
    fn delete_is_owner_scoped_and_idempotent_in_result() {
        let (store, _temp) = open_store();
        let note = note_for("u1", "mine");
        store.insert(&note).unwrap();

        assert!(!store.delete(&note.id, &owner("u2")).unwrap());
        assert!(store.delete(&note.id, &owner("u1")).unwrap());
        assert!(!store.delete(&note.id, &owner("u1")).unwrap());
    }

    #[test]
    fn delete_all_removes_only_that_owner() {
        let (store, _temp) = open_store();
        store.insert(&note_for("u1", "a")).unwrap();
        store.insert(&note_for("u1", "b")).unwrap();
        store.insert(&note_for("u2", "c")).unwrap();

        assert_eq!(store.delete_all(&owner("u1")).unwrap(), 2);
        assert_eq!(store.delete_all(&owner("u1")).unwrap(), 0);
        assert_eq!(store.find(&owner("u2")).unwrap().len(), 1);
    }
}
