use crate::error::{KeeperError, Result};
use crate::index::{DisplayNote, NoteRef, MIN_PREFIX_LEN};
use crate::model::Note;
use crate::store::{NoteBackend, NoteStore};

/// Resolves one reference against the current listing.
pub fn resolve_ref(notes: &[Note], note_ref: &NoteRef) -> Result<DisplayNote> {
    match note_ref {
        NoteRef::Position(n) => {
            if let Some(note) = n.checked_sub(1).and_then(|i| notes.get(i)) {
                return Ok(DisplayNote {
                    note: note.clone(),
                    index: *n,
                });
            }
            // Past the end of the listing: an all-digit stored id may be meant
            let id = n.to_string();
            notes
                .iter()
                .position(|note| note.id.as_str() == id)
                .map(|pos| DisplayNote {
                    note: notes[pos].clone(),
                    index: pos + 1,
                })
                .ok_or_else(|| KeeperError::NoteNotFound(format!("position {}", n)))
        }
        NoteRef::Id(id) => {
            if let Some(pos) = notes.iter().position(|n| n.id.as_str() == id) {
                return Ok(DisplayNote {
                    note: notes[pos].clone(),
                    index: pos + 1,
                });
            }
            if id.chars().count() < MIN_PREFIX_LEN {
                return Err(KeeperError::NoteNotFound(id.clone()));
            }

            let mut candidates = notes
                .iter()
                .enumerate()
                .filter(|(_, n)| n.id.as_str().starts_with(id.as_str()));
            match (candidates.next(), candidates.next()) {
                (Some((pos, note)), None) => Ok(DisplayNote {
                    note: note.clone(),
                    index: pos + 1,
                }),
                (Some(_), Some(_)) => Err(KeeperError::Api(format!(
                    "Id prefix {} matches more than one note",
                    id
                ))),
                (None, _) => Err(KeeperError::NoteNotFound(id.clone())),
            }
        }
    }
}

/// Resolves every reference up front, so positions refer to the listing as
/// it was before the command touched anything.
pub fn resolve_refs<B: NoteBackend>(
    store: &NoteStore<B>,
    refs: &[NoteRef],
) -> Result<Vec<DisplayNote>> {
    refs.iter()
        .map(|r| resolve_ref(store.notes(), r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::NoteId;
    use crate::model::NoteDraft;
    use chrono::Utc;

    fn notes() -> Vec<Note> {
        let now = Utc::now();
        ["aaaa1111", "aaaa2222", "bbbb3333"]
            .iter()
            .map(|id| Note::from_draft(NoteDraft::new().title(*id), NoteId::new(*id), now))
            .collect()
    }

    #[test]
    fn resolves_positions() {
        let dn = resolve_ref(&notes(), &NoteRef::Position(3)).unwrap();
        assert_eq!(dn.note.id.as_str(), "bbbb3333");
        assert_eq!(dn.index, 3);
    }

    #[test]
    fn position_out_of_range_is_not_found() {
        let err = resolve_ref(&notes(), &NoteRef::Position(4)).unwrap_err();
        assert!(matches!(err, KeeperError::NoteNotFound(_)));
    }

    #[test]
    fn out_of_range_position_matches_numeric_id() {
        let mut listing = notes();
        listing.push(Note::from_draft(
            NoteDraft::new().title("Numeric"),
            NoteId::new("12345678"),
            Utc::now(),
        ));

        let dn = resolve_ref(&listing, &NoteRef::Position(12345678)).unwrap();
        assert_eq!(dn.note.title, "Numeric");
        assert_eq!(dn.index, 4);

        // in range still means position
        let dn = resolve_ref(&listing, &NoteRef::Position(4)).unwrap();
        assert_eq!(dn.note.id.as_str(), "12345678");
        let dn = resolve_ref(&listing, &NoteRef::Position(1)).unwrap();
        assert_eq!(dn.note.id.as_str(), "aaaa1111");
    }

    #[test]
    fn resolves_full_id_and_unique_prefix() {
        let full = resolve_ref(&notes(), &NoteRef::Id("aaaa2222".into())).unwrap();
        assert_eq!(full.index, 2);
        let prefix = resolve_ref(&notes(), &NoteRef::Id("bbbb".into())).unwrap();
        assert_eq!(prefix.note.id.as_str(), "bbbb3333");
    }

    #[test]
    fn ambiguous_prefix_is_an_error() {
        let err = resolve_ref(&notes(), &NoteRef::Id("aaaa".into())).unwrap_err();
        assert!(matches!(err, KeeperError::Api(_)));
    }

    #[test]
    fn short_prefix_is_not_matched() {
        let err = resolve_ref(&notes(), &NoteRef::Id("bbb".into())).unwrap_err();
        assert!(matches!(err, KeeperError::NoteNotFound(_)));
    }
}
