use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::NoteRef;
use crate::share::share_url;
use crate::store::{NoteBackend, NoteStore};

use super::helpers::resolve_refs;

pub fn run<B: NoteBackend>(
    store: &NoteStore<B>,
    refs: &[NoteRef],
    origin: &str,
) -> Result<CmdResult> {
    let resolved = resolve_refs(store, refs)?;
    let mut result = CmdResult::default();
    for dn in resolved {
        result.share_urls.push(share_url(&dn.note.id, origin));
        result.affected_notes.push(dn);
    }
    Ok(result)
}
