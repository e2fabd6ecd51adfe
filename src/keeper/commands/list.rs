use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_notes;
use crate::store::{NoteBackend, NoteStore};

pub fn run<B: NoteBackend>(store: &NoteStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_notes(index_notes(store.notes())))
}
