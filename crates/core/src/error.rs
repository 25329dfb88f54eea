use quill_store::StoreError;

/// Errors surfaced by note repository operations.
///
/// An ownership mismatch is reported as [`NoteError::NotFound`], never as
/// a distinct "forbidden" condition, so a non-owner cannot learn whether
/// the id exists at all.
#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("no owned note matches this id")]
    NotFound,
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

pub type NoteResult<T> = std::result::Result<T, NoteError>;
