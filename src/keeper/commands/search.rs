use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{index_notes, DisplayNote};
use crate::store::{NoteBackend, NoteStore};

/// Case-insensitive search over title and content.
///
/// Exact title matches rank first, then title substrings, then content
/// matches. Within a rank the listing order (newest first) is kept, and each
/// hit carries its listing position so it can be referenced afterwards.
pub fn run<B: NoteBackend>(store: &NoteStore<B>, term: &str) -> Result<CmdResult> {
    let indexed = index_notes(store.notes());
    let term_lower = term.trim().to_lowercase();
    if term_lower.is_empty() {
        return Ok(CmdResult::default().with_listed_notes(indexed));
    }

    let mut matches: Vec<(DisplayNote, u8)> = indexed
        .into_iter()
        .filter_map(|dn| {
            let title_lower = dn.note.title.to_lowercase();

            let score = if title_lower == term_lower {
                1
            } else if title_lower.contains(&term_lower) {
                2
            } else if dn.note.content.to_lowercase().contains(&term_lower) {
                3
            } else {
                return None;
            };

            Some((dn, score))
        })
        .collect();

    // stable sort keeps listing order inside each rank
    matches.sort_by_key(|(_, score)| *score);

    let listed = matches.into_iter().map(|(dn, _)| dn).collect();
    Ok(CmdResult::default().with_listed_notes(listed))
}
