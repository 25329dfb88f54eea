//! Note identifiers and sharded-path derivation.
//!
//! Quillbox stores one JSON document per note under sharded directories
//! derived from the note's identifier. To keep path derivation
//! deterministic, identifiers use a *canonical* representation:
//! **32 lowercase hexadecimal characters** (no hyphens) — the same value
//! `Uuid::new_v4().simple()` produces.
//!
//! For a canonical id `u`, the document lives at:
//! `<root>/notes/<u[0..2]>/<u[2..4]>/<u>.json`
//!
//! Two-level sharding keeps directory fan-out bounded as the collection
//! grows. Externally supplied identifiers (route parameters) must already
//! be canonical; [`NoteId::parse`] rejects anything else, so a malformed
//! id can never address a path outside the store.

use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Error type for note identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum NoteIdError {
    /// The supplied identifier was not in canonical form
    #[error("note id must be 32 lowercase hex characters without hyphens, got: '{0}'")]
    InvalidInput(String),
}

/// A note identifier in canonical form.
///
/// Once constructed, the contained UUID is guaranteed to render as 32
/// lowercase hex characters. Use [`NoteId::new`] when allocating an id for
/// a freshly created note and [`NoteId::parse`] to validate an externally
/// supplied one.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Generates a new random note identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates and parses an identifier that must already be canonical.
    ///
    /// Other common UUID forms (hyphenated, uppercase) are **not**
    /// normalised; they are rejected so that every identifier in the
    /// system has exactly one spelling.
    ///
    /// # Errors
    ///
    /// Returns [`NoteIdError::InvalidInput`] if `input` is not 32
    /// lowercase hex characters.
    pub fn parse(input: &str) -> Result<Self, NoteIdError> {
        if !Self::is_canonical(input) {
            return Err(NoteIdError::InvalidInput(input.to_owned()));
        }
        let uuid = Uuid::parse_str(input)
            .map_err(|_| NoteIdError::InvalidInput(input.to_owned()))?;
        Ok(Self(uuid))
    }

    fn is_canonical(input: &str) -> bool {
        input.len() == 32
            && input
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }

    /// Returns the document path for this id relative to a store root.
    ///
    /// Layout: `<root>/<s1>/<s2>/<id>.json` where `s1`/`s2` are the first
    /// four hex characters.
    pub fn document_path(&self, root: &Path) -> PathBuf {
        let id = self.to_string();
        root.join(&id[0..2]).join(&id[2..4]).join(format!("{id}.json"))
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl serde::Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NoteId::parse(&s).map_err(serde::de::Error::custom)
    }
}
