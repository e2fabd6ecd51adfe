//! Share links.
//!
//! A note is shared as `<origin>/view/<id>`. The view route reverses the
//! mapping with [`parse_share_url`] and looks the id up in the store.

use crate::id::NoteId;

pub const VIEW_ROUTE: &str = "/view/";

/// Builds the read-only view URL for a note.
pub fn share_url(id: &NoteId, origin: &str) -> String {
    format!("{}{}{}", origin.trim_end_matches('/'), VIEW_ROUTE, id)
}

/// Extracts the note id from a share URL, or `None` if `url` is not one.
pub fn parse_share_url(url: &str) -> Option<NoteId> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return None;
    }
    let (_, rest) = url.rsplit_once(VIEW_ROUTE)?;
    let id = rest
        .split(&['?', '#'][..])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    if id.is_empty() || id.contains('/') {
        return None;
    }
    Some(NoteId::new(id))
}
