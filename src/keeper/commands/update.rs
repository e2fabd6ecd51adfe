use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KeeperError, Result};
use crate::index::{DisplayNote, NoteRef};
use crate::model::NoteUpdate;
use crate::store::{NoteBackend, NoteStore, UpdateOutcome};

use super::helpers::resolve_ref;

pub fn run<B: NoteBackend>(
    store: &mut NoteStore<B>,
    note_ref: &NoteRef,
    patch: &NoteUpdate,
) -> Result<CmdResult> {
    let target = resolve_ref(store.notes(), note_ref)?;
    let mut result = CmdResult::default();

    if patch.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to update ({}): {}",
            target.index, target.note.title
        )));
        return Ok(result);
    }

    let id = target.note.id.clone();
    if store.update(id.as_str(), patch) == UpdateOutcome::NotFound {
        return Err(KeeperError::NoteNotFound(id.to_string()));
    }
    let note = store
        .get_by_id(id.as_str())
        .cloned()
        .ok_or_else(|| KeeperError::NoteNotFound(id.to_string()))?;

    result.add_message(CmdMessage::success(format!(
        "Note updated ({}): {}",
        target.index, note.title
    )));
    // Updates don't reorder, so the index is unchanged
    result.affected_notes.push(DisplayNote {
        note,
        index: target.index,
    });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::model::{NoteColor, NoteDraft};
    use crate::test_utils::mem_store;

    #[test]
    fn updates_content() {
        let mut store = mem_store();
        create::run(&mut store, NoteDraft::new().title("Title").content("Old")).unwrap();

        let result = run(
            &mut store,
            &NoteRef::Position(1),
            &NoteUpdate::new().content("New"),
        )
        .unwrap();

        assert_eq!(store.notes()[0].content, "New");
        assert_eq!(result.affected_notes[0].note.content, "New");
        assert!(result.messages[0].content.contains("Note updated (1)"));
    }

    #[test]
    fn keeps_position_of_older_note() {
        let mut store = mem_store();
        create::run(&mut store, NoteDraft::new().title("Old")).unwrap();
        create::run(&mut store, NoteDraft::new().title("New")).unwrap();

        let result = run(
            &mut store,
            &NoteRef::Position(2),
            &NoteUpdate::new().color(Some(NoteColor::Yellow)),
        )
        .unwrap();

        assert_eq!(result.affected_notes[0].index, 2);
        assert_eq!(store.notes()[1].color, Some(NoteColor::Yellow));
        assert_eq!(store.notes()[0].title, "New");
    }

    #[test]
    fn unknown_note_is_reported() {
        let mut store = mem_store();
        let err = run(
            &mut store,
            &NoteRef::Id("nope".into()),
            &NoteUpdate::new().title("X"),
        )
        .unwrap_err();
        assert!(matches!(err, KeeperError::NoteNotFound(_)));
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut store = mem_store();
        create::run(&mut store, NoteDraft::new().title("Same")).unwrap();
        let before = store.notes().to_vec();

        let result = run(&mut store, &NoteRef::Position(1), &NoteUpdate::new()).unwrap();

        assert!(result.affected_notes.is_empty());
        assert_eq!(store.notes(), before.as_slice());
    }
}
