use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KeeperError, Result};
use crate::index::NoteRef;
use crate::store::{NoteBackend, NoteStore};

use super::helpers::resolve_ref;

/// Looks notes up for display.
///
/// A reference that matches nothing is not an error: it yields a warning so
/// the viewer can render its "not found" state.
pub fn run<B: NoteBackend>(store: &NoteStore<B>, refs: &[NoteRef]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for note_ref in refs {
        match resolve_ref(store.notes(), note_ref) {
            Ok(dn) => result.listed_notes.push(dn),
            Err(KeeperError::NoteNotFound(_)) => {
                result.add_message(CmdMessage::warning(format!("Note not found: {}", note_ref)))
            }
            Err(e) => return Err(e),
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, share};
    use crate::commands::MessageLevel;
    use crate::model::NoteDraft;
    use crate::test_utils::mem_store;

    #[test]
    fn views_by_position_and_id() {
        let mut store = mem_store();
        let created = create::run(&mut store, NoteDraft::new().title("Hello")).unwrap();
        let id = created.affected_notes[0].note.id.to_string();

        let result = run(&store, &[NoteRef::Position(1), NoteRef::Id(id)]).unwrap();
        assert_eq!(result.listed_notes.len(), 2);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn missing_note_renders_not_found_state() {
        let store = mem_store();
        let result = run(&store, &[NoteRef::Id("deadbeef".into())]).unwrap();
        assert!(result.listed_notes.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("Note not found"));
    }

    #[test]
    fn share_link_round_trips_to_view() {
        let mut store = mem_store();
        create::run(&mut store, NoteDraft::new().title("Shared")).unwrap();
        let shared = share::run(&store, &[NoteRef::Position(1)], "https://example.com").unwrap();

        let note_ref: NoteRef = shared.share_urls[0].parse().unwrap();
        let result = run(&store, &[note_ref]).unwrap();
        assert_eq!(result.listed_notes[0].note.title, "Shared");
    }
}
