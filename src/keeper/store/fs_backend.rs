use super::backend::{decode_record, encode_record, NoteBackend, STORAGE_NAMESPACE};
use crate::error::{KeeperError, Result};
use crate::model::Note;
use log::debug;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Stores the collection as one JSON record under a data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn record_path(&self) -> PathBuf {
        self.root.join(format!("{}.json", STORAGE_NAMESPACE))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(KeeperError::Io)?;
        }
        Ok(())
    }
}

impl NoteBackend for FsBackend {
    fn load(&self) -> Result<Vec<Note>> {
        let path = self.record_path();
        if !path.exists() {
            debug!("no record at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&path).map_err(KeeperError::Io)?;
        let notes = decode_record(&raw)?;
        debug!("loaded {} notes from {}", notes.len(), path.display());
        Ok(notes)
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        self.ensure_dir()?;
        let content = encode_record(notes)?;

        // Atomic write
        let tmp_path = self
            .root
            .join(format!(".{}-{}.tmp", STORAGE_NAMESPACE, Uuid::new_v4()));
        let written =
            fs::write(&tmp_path, content).and_then(|()| fs::rename(&tmp_path, self.record_path()));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(KeeperError::Io(e));
        }

        debug!("saved {} notes", notes.len());
        Ok(())
    }

    fn location(&self) -> String {
        self.record_path().display().to_string()
    }
}
