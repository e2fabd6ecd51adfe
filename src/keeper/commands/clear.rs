use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{NoteBackend, NoteStore};

pub fn run<B: NoteBackend>(store: &mut NoteStore<B>) -> Result<CmdResult> {
    let count = store.len();
    store.clear();

    let mut result = CmdResult::default();
    let noun = if count == 1 { "note" } else { "notes" };
    result.add_message(CmdMessage::success(format!("Cleared {} {}", count, noun)));
    Ok(result)
}
