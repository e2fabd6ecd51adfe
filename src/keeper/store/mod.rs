//! # Storage Layer
//!
//! [`NoteStore`] is the single authoritative collection of notes. It owns the
//! in-memory list and an injected [`NoteBackend`] that persists it.
//!
//! ## Consistency
//!
//! Every effective mutation (create, update of a known id, delete of a known
//! id, clear) writes the **full** collection through the backend before the
//! call returns, then notifies subscribers. No-op updates and deletes neither
//! write nor notify.
//!
//! The in-memory collection is the source of truth. If a write fails the
//! mutation still stands, the failure is logged, and the store is marked
//! dirty until a later save succeeds. [`NoteStore::flush`] retries the write
//! and hands the error to the caller.
//!
//! ## Ordering
//!
//! Newest-created note first. Updates never reorder.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one JSON record in the data directory.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── keeperApp-notes.json   # {"state": {"notes": [...]}, "version": 0}
//! └── config.json            # KeeperConfig
//! ```

use crate::error::Result;
use crate::id::{generate_id, NoteId};
use crate::model::{Note, NoteDraft, NoteUpdate};
use chrono::{DateTime, Utc};
use log::{debug, warn};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::NoteBackend;

/// Handle returned by [`NoteStore::subscribe`].
pub type SubscriptionId = usize;

/// What changed in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Created(NoteId),
    Updated(NoteId),
    Deleted(NoteId),
    Cleared,
}

/// Result of [`NoteStore::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Applied,
    /// No note had the id. The collection is unchanged.
    NotFound,
}

type Subscriber = Box<dyn FnMut(&StoreEvent, &[Note])>;

pub struct NoteStore<B: NoteBackend> {
    notes: Vec<Note>,
    backend: B,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: SubscriptionId,
    dirty: bool,
}

impl<B: NoteBackend> NoteStore<B> {
    /// Creates the store and rehydrates it from the backend.
    pub fn open(backend: B) -> Result<Self> {
        let notes = backend.load()?;
        debug!("store opened with {} notes", notes.len());
        Ok(Self {
            notes,
            backend,
            subscribers: Vec::new(),
            next_subscription: 0,
            dirty: false,
        })
    }

    /// All notes, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id.as_str() == id)
    }

    pub fn create(&mut self, draft: NoteDraft) -> Note {
        let mut id = generate_id();
        while self.get_by_id(id.as_str()).is_some() {
            id = generate_id();
        }
        let note = Note::from_draft(draft, id, Utc::now());
        debug!("creating note {}", note.id);

        self.notes.insert(0, note.clone());
        self.commit(StoreEvent::Created(note.id.clone()));
        note
    }

    pub fn update(&mut self, id: &str, patch: &NoteUpdate) -> UpdateOutcome {
        let outcome = apply_update(&mut self.notes, id, patch, Utc::now());
        match outcome {
            UpdateOutcome::Applied => {
                debug!("updated note {}", id);
                self.commit(StoreEvent::Updated(NoteId::new(id)));
            }
            UpdateOutcome::NotFound => debug!("update ignored, no note {}", id),
        }
        outcome
    }

    /// Removes the note with `id`. Returns whether a note was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(pos) = self.notes.iter().position(|n| n.id.as_str() == id) else {
            debug!("delete ignored, no note {}", id);
            return false;
        };
        let removed = self.notes.remove(pos);
        debug!("deleted note {}", removed.id);
        self.commit(StoreEvent::Deleted(removed.id));
        true
    }

    pub fn clear(&mut self) {
        debug!("clearing {} notes", self.notes.len());
        self.notes.clear();
        self.commit(StoreEvent::Cleared);
    }

    /// Registers a callback run after every effective mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent, &[Note]) + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// True when the last write to the backend failed.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Retries a failed write. A clean store returns immediately.
    pub fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        self.backend.save(&self.notes)?;
        self.dirty = false;
        Ok(())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn commit(&mut self, event: StoreEvent) {
        self.persist();
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&event, &self.notes);
        }
    }

    fn persist(&mut self) {
        match self.backend.save(&self.notes) {
            Ok(()) => self.dirty = false,
            Err(e) => {
                warn!(
                    "failed to persist notes to {}: {}",
                    self.backend.location(),
                    e
                );
                self.dirty = true;
            }
        }
    }
}

/// Merges `patch` into the note with `id`.
///
/// The one place that decides what an unknown id means. It is currently a
/// silent no-op reported as [`UpdateOutcome::NotFound`].
fn apply_update(
    notes: &mut [Note],
    id: &str,
    patch: &NoteUpdate,
    now: DateTime<Utc>,
) -> UpdateOutcome {
    let Some(note) = notes.iter_mut().find(|n| n.id.as_str() == id) else {
        return UpdateOutcome::NotFound;
    };
    patch.merge_into(note);
    // updated_at never moves backwards, even if the clock does
    note.updated_at = now.max(note.updated_at);
    UpdateOutcome::Applied
}
