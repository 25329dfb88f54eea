//! The acting identity that scopes all note access.

/// Errors that can occur when constructing an [`OwnerId`].
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The input identity was empty or contained only whitespace
    #[error("identity cannot be empty")]
    Empty,
}

/// The authenticated identity on whose behalf a request is made.
///
/// Wraps a `String` and guarantees at least one non-whitespace character.
/// Input is trimmed during construction, so an all-whitespace header value
/// is rejected the same way as a missing one. Every repository and store
/// operation is keyed by this type, which makes "no acting identity"
/// unrepresentable past the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerId(String);

impl OwnerId {
    /// Creates a new `OwnerId` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the
    /// trimmed result is empty, [`IdentityError::Empty`] is returned.
    pub fn new(input: impl AsRef<str>) -> Result<Self, IdentityError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IdentityError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for OwnerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for OwnerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for OwnerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        OwnerId::new(&s).map_err(serde::de::Error::custom)
    }
}
