//! # Note references
//!
//! Ids are long and opaque, so UI clients let users refer to notes in
//! friendlier ways. A [`NoteRef`] is parsed from user input:
//!
//! - `3`: the third note in the current listing (newest first, 1-based)
//! - `0f9e8d7c...`: a full id, or a unique prefix of at least
//!   [`MIN_PREFIX_LEN`] characters
//! - `https://host/view/<id>`: a share link
//!
//! Positions are only stable until the next create or delete, since new
//! notes are inserted at the front. A number past the end of the listing is
//! tried as an exact id, so all-digit stored ids stay reachable.

use crate::model::Note;
use crate::share::parse_share_url;
use std::fmt;
use std::str::FromStr;

/// Shortest id prefix accepted as a reference.
pub const MIN_PREFIX_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteRef {
    Position(usize),
    Id(String),
}

impl fmt::Display for NoteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteRef::Position(n) => write!(f, "{}", n),
            NoteRef::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for NoteRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty note reference".to_string());
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            return match s.parse::<usize>() {
                Ok(0) => Err("Positions start at 1".to_string()),
                Ok(n) => Ok(NoteRef::Position(n)),
                Err(_) => Err(format!("Invalid position: {}", s)),
            };
        }
        if let Some(id) = parse_share_url(s) {
            return Ok(NoteRef::Id(id.as_str().to_string()));
        }
        if s.contains("://") {
            return Err(format!("Not a share link: {}", s));
        }
        Ok(NoteRef::Id(s.to_string()))
    }
}

/// A note paired with its position in the listing it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNote {
    pub note: Note,
    pub index: usize,
}

/// Assigns 1-based display positions in collection order.
pub fn index_notes(notes: &[Note]) -> Vec<DisplayNote> {
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            note: note.clone(),
            index: i + 1,
        })
        .collect()
}
