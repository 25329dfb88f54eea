//! # Quill Store
//!
//! Document store adapter for the Quillbox notes service.
//!
//! Holds one JSON document per note under a sharded directory layout and
//! exposes collection-level operations scoped by the owning identity.
//!
//! **No API concerns**: authentication, HTTP servers and ownership policy
//! belong in `quill-core` and `api-rest`.

pub mod store;

pub use store::DocumentStore;

/// Errors that can occur in the document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to create store directory: {0}")]
    StoreDirCreation(std::io::Error),
    #[error("store root is not a directory: {0}")]
    InvalidRootDirectory(String),
    #[error("a document with this id already exists")]
    DuplicateId,
    #[error("failed to write note document: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read note document: {0}")]
    FileRead(std::io::Error),
    #[error("failed to remove note document: {0}")]
    FileRemove(std::io::Error),
    #[error("failed to serialize note: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize note: {0}")]
    Deserialization(serde_json::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
