use super::backend::NoteBackend;
use crate::error::{KeeperError, Result};
use crate::model::Note;
use std::cell::RefCell;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since keeper is single-threaded,
/// which lets [`NoteBackend`] take `&self` for every method.
#[derive(Default)]
pub struct MemBackend {
    notes: RefCell<Vec<Note>>,
    saves: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with a stored collection, as if from an earlier session.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: RefCell::new(notes),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Snapshot of what was last saved.
    pub fn stored(&self) -> Vec<Note> {
        self.notes.borrow().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl NoteBackend for MemBackend {
    fn load(&self) -> Result<Vec<Note>> {
        Ok(self.notes.borrow().clone())
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(KeeperError::Store("Simulated write error".to_string()));
        }
        *self.notes.borrow_mut() = notes.to_vec();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory://keeperApp-notes".to_string()
    }
}
