use crate::error::Result;
use crate::model::Note;
use serde::{Deserialize, Serialize};

/// Name of the persisted record that holds the note collection.
pub const STORAGE_NAMESPACE: &str = "keeperApp-notes";

/// Layout version written next to the collection.
pub const RECORD_VERSION: u32 = 0;

/// Abstract interface for durable note storage.
/// The backend handles the "how" (filesystem vs memory), while
/// [`NoteStore`](super::NoteStore) handles the "what" (ordering, merges, notifications).
pub trait NoteBackend {
    /// Load the whole collection. A backend with nothing stored yet returns an empty list.
    fn load(&self) -> Result<Vec<Note>>;

    /// Replace the stored collection with `notes`.
    /// MUST be atomic: a reader never observes a partial write.
    fn save(&self, notes: &[Note]) -> Result<()>;

    /// Human-readable location of the stored record.
    fn location(&self) -> String;
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    #[serde(default)]
    notes: Vec<Note>,
}

/// On-disk shape: `{"state": {"notes": [...]}, "version": 0}`.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedRecord {
    state: PersistedState,
    #[serde(default)]
    version: u32,
}

pub fn encode_record(notes: &[Note]) -> Result<String> {
    let record = PersistedRecord {
        state: PersistedState {
            notes: notes.to_vec(),
        },
        version: RECORD_VERSION,
    };
    Ok(serde_json::to_string_pretty(&record)?)
}

pub fn decode_record(raw: &str) -> Result<Vec<Note>> {
    let record: PersistedRecord = serde_json::from_str(raw)?;
    Ok(record.state.notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::NoteId;
    use crate::model::{NoteDraft, NoteType};
    use chrono::Utc;

    #[test]
    fn record_wraps_notes_in_state() {
        let note = Note::from_draft(NoteDraft::new().title("A"), NoteId::new("a1"), Utc::now());
        let raw = encode_record(&[note]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["version"], 0);
        assert_eq!(value["state"]["notes"][0]["id"], "a1");
        assert_eq!(value["state"]["notes"][0]["title"], "A");
    }

    #[test]
    fn decode_accepts_record_without_version() {
        let raw = r#"{"state":{"notes":[{
            "id":"z9","title":"Code","content":"print(1)","type":"code",
            "language":"python",
            "createdAt":"2024-05-01T12:00:00Z","updatedAt":"2024-05-01T12:00:00Z"
        }]}}"#;
        let notes = decode_record(raw).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].note_type, NoteType::Code);
        assert_eq!(notes[0].language.as_deref(), Some("python"));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_record("not json").is_err());
    }
}
