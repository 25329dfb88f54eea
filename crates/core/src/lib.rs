//! # Quill Core
//!
//! Core business logic for the Quillbox notes service.
//!
//! This crate owns the note lifecycle:
//! - creation with fresh ids and matching timestamps
//! - updates that only ever touch the mutable fields
//! - owner-scoped reads and deletes, including the cascade delete used
//!   when an upstream identity is removed
//!
//! **No API concerns**: authentication, HTTP servers, or webhook
//! verification belong in `api-rest` and `quill-webhook`.

pub mod error;
pub mod repository;

pub use error::{NoteError, NoteResult};
pub use repository::NoteRepository;
