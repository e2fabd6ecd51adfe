//! Note identifiers.
//!
//! Ids are opaque strings. Fresh ones are UUID v4 values in their simple
//! (32 lowercase hex chars, no hyphens) form, which keeps them URL-safe for
//! share links. Ids read back from storage are never re-parsed, so notes
//! written by older versions with other id schemes still load.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NoteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Generates a fresh, practically collision-free identifier.
pub fn generate_id() -> NoteId {
    NoteId(Uuid::new_v4().simple().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_url_safe() {
        let id = generate_id();
        assert_eq!(id.as_str().len(), 32);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn generated_ids_do_not_repeat() {
        let ids: HashSet<NoteId> = (0..2000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 2000);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = NoteId::new("k3x9q0mz");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"k3x9q0mz\"");
        let back: NoteId = serde_json::from_str("\"k3x9q0mz\"").unwrap();
        assert_eq!(back, id);
    }
}
