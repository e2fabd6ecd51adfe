use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayNote;
use crate::model::NoteDraft;
use crate::store::{NoteBackend, NoteStore};

pub fn run<B: NoteBackend>(store: &mut NoteStore<B>, draft: NoteDraft) -> Result<CmdResult> {
    let note = store.create(draft);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note created: {}",
        note.title
    )));
    // New note is always the newest, so it gets index 1
    result.affected_notes.push(DisplayNote { note, index: 1 });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NoteType, DEFAULT_TITLE};
    use crate::test_utils::mem_store;

    #[test]
    fn creates_note_at_front() {
        let mut store = mem_store();
        run(&mut store, NoteDraft::new().title("First")).unwrap();
        let result = run(&mut store, NoteDraft::new().title("Second")).unwrap();

        assert_eq!(result.affected_notes.len(), 1);
        assert_eq!(result.affected_notes[0].index, 1);
        assert_eq!(store.notes()[0].title, "Second");
        assert!(result.messages[0].content.contains("Second"));
    }

    #[test]
    fn untitled_note_gets_placeholder() {
        let mut store = mem_store();
        let result = run(&mut store, NoteDraft::new().note_type(NoteType::Code)).unwrap();
        let note = &result.affected_notes[0].note;
        assert_eq!(note.title, DEFAULT_TITLE);
        assert_eq!(note.note_type, NoteType::Code);
    }
}
