//! # Quill Types
//!
//! Shared validated types for the Quillbox notes service.
//!
//! Contains:
//! - [`OwnerId`]: the acting identity, guaranteed non-empty
//! - [`NoteId`]: canonical note identifier with sharded-path derivation
//! - [`Note`] and [`NoteUpdate`]: the domain entity and its mutable fields
//!
//! Every crate in the workspace speaks these types; none of them carry
//! API or storage concerns.

pub mod id;
pub mod note;
pub mod owner;

pub use id::{NoteId, NoteIdError};
pub use note::{Note, NoteUpdate};
pub use owner::{IdentityError, OwnerId};
