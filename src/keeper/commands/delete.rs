use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::NoteRef;
use crate::store::{NoteBackend, NoteStore};

use super::helpers::resolve_refs;

pub fn run<B: NoteBackend>(store: &mut NoteStore<B>, refs: &[NoteRef]) -> Result<CmdResult> {
    let resolved = resolve_refs(store, refs)?;
    let mut result = CmdResult::default();

    for dn in resolved {
        // the same note may be named twice (by position and by id)
        if !store.delete(dn.note.id.as_str()) {
            continue;
        }
        result.add_message(CmdMessage::success(format!(
            "Note deleted ({}): {}",
            dn.index, dn.note.title
        )));
        result.affected_notes.push(dn);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::error::KeeperError;
    use crate::model::NoteDraft;
    use crate::test_utils::mem_store;

    #[test]
    fn deletes_by_listing_position() {
        let mut store = mem_store();
        create::run(&mut store, NoteDraft::new().title("A")).unwrap();
        create::run(&mut store, NoteDraft::new().title("B")).unwrap();
        create::run(&mut store, NoteDraft::new().title("C")).unwrap();

        // positions refer to the listing before the first delete
        let result = run(&mut store, &[NoteRef::Position(1), NoteRef::Position(3)]).unwrap();

        assert_eq!(result.affected_notes.len(), 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.notes()[0].title, "B");
    }

    #[test]
    fn duplicate_refs_delete_once() {
        let mut store = mem_store();
        let created = create::run(&mut store, NoteDraft::new().title("A")).unwrap();
        let id = created.affected_notes[0].note.id.to_string();

        let result = run(&mut store, &[NoteRef::Position(1), NoteRef::Id(id)]).unwrap();

        assert_eq!(result.affected_notes.len(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_ref_fails_before_deleting_anything() {
        let mut store = mem_store();
        create::run(&mut store, NoteDraft::new().title("A")).unwrap();

        let err = run(&mut store, &[NoteRef::Position(1), NoteRef::Position(5)]).unwrap_err();

        assert!(matches!(err, KeeperError::NoteNotFound(_)));
        assert_eq!(store.len(), 1);
    }
}
