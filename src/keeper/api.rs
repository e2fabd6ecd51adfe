//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all keeper operations, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (user strings → [`NoteRef`])
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and does no I/O of its own.
//!
//! ## Generic Over NoteBackend
//!
//! `KeeperApi<B: NoteBackend>` is generic over the persistence adapter:
//! - Production: `KeeperApi<FsBackend>`
//! - Testing: `KeeperApi<MemBackend>`

use crate::commands;
use crate::config::KeeperConfig;
use crate::error::{KeeperError, Result};
use crate::index::NoteRef;
use crate::model::{NoteDraft, NoteUpdate};
use crate::store::{NoteBackend, NoteStore};
use std::path::PathBuf;
use std::str::FromStr;

/// The main API facade for keeper operations.
pub struct KeeperApi<B: NoteBackend> {
    store: NoteStore<B>,
    data_dir: PathBuf,
    config: KeeperConfig,
}

impl<B: NoteBackend> KeeperApi<B> {
    pub fn new(store: NoteStore<B>, data_dir: PathBuf, config: KeeperConfig) -> Self {
        Self {
            store,
            data_dir,
            config,
        }
    }

    pub fn create_note(&mut self, draft: NoteDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_notes(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn view_notes<I: AsRef<str>>(&self, refs: &[I]) -> Result<commands::CmdResult> {
        let refs = parse_refs(refs)?;
        commands::view::run(&self.store, &refs)
    }

    pub fn update_note(
        &mut self,
        note_ref: &str,
        patch: &NoteUpdate,
    ) -> Result<commands::CmdResult> {
        let note_ref = parse_ref(note_ref)?;
        commands::update::run(&mut self.store, &note_ref, patch)
    }

    pub fn delete_notes<I: AsRef<str>>(&mut self, refs: &[I]) -> Result<commands::CmdResult> {
        let refs = parse_refs(refs)?;
        commands::delete::run(&mut self.store, &refs)
    }

    pub fn clear_notes(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn share_notes<I: AsRef<str>>(&self, refs: &[I]) -> Result<commands::CmdResult> {
        let refs = parse_refs(refs)?;
        commands::share::run(&self.store, &refs, &self.config.origin)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.data_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    /// Writes any mutation whose save failed earlier.
    pub fn flush(&mut self) -> Result<()> {
        self.store.flush()
    }

    pub fn store(&self) -> &NoteStore<B> {
        &self.store
    }

    pub fn current_config(&self) -> &KeeperConfig {
        &self.config
    }

    pub fn storage_location(&self) -> String {
        self.store.backend().location()
    }
}

fn parse_ref(input: &str) -> Result<NoteRef> {
    NoteRef::from_str(input).map_err(KeeperError::Api)
}

fn parse_refs<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<NoteRef>> {
    if inputs.is_empty() {
        return Err(KeeperError::Api("No note given".to_string()));
    }
    inputs.iter().map(|s| parse_ref(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NoteType;
    use crate::store::fs_backend::FsBackend;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::{mem_store, TestEnv};

    fn api() -> KeeperApi<MemBackend> {
        KeeperApi::new(
            mem_store(),
            PathBuf::from("/nonexistent"),
            KeeperConfig::default(),
        )
    }

    #[test]
    fn create_then_view_by_position() {
        let mut api = api();
        api.create_note(NoteDraft::new().title("Hi")).unwrap();
        let result = api.view_notes(&["1"]).unwrap();
        assert_eq!(result.listed_notes[0].note.title, "Hi");
    }

    #[test]
    fn update_dispatches_parsed_ref() {
        let mut api = api();
        let created = api.create_note(NoteDraft::new().title("Hi")).unwrap();
        let id = created.affected_notes[0].note.id.to_string();

        api.update_note(&id, &NoteUpdate::new().note_type(NoteType::Code))
            .unwrap();

        assert_eq!(api.store().notes()[0].note_type, NoteType::Code);
    }

    #[test]
    fn share_uses_configured_origin() {
        let mut api = api();
        api.create_note(NoteDraft::new()).unwrap();
        let result = api.share_notes(&["1"]).unwrap();
        assert!(result.share_urls[0].starts_with("http://localhost:8080/view/"));
    }

    #[test]
    fn bad_reference_is_an_api_error() {
        let api = api();
        let err = api.view_notes(&["0"]).unwrap_err();
        assert!(matches!(err, KeeperError::Api(_)));
    }

    #[test]
    fn empty_reference_list_is_rejected() {
        let mut api = api();
        let none: [&str; 0] = [];
        assert!(api.delete_notes(&none).is_err());
    }

    #[test]
    fn config_change_applies_to_later_shares() {
        let env = TestEnv::new();
        let store = env.open_store();
        let mut api: KeeperApi<FsBackend> =
            KeeperApi::new(store, env.root.clone(), KeeperConfig::default());
        api.create_note(NoteDraft::new()).unwrap();

        api.config(ConfigAction::Set(
            "origin".into(),
            "https://keep.example.org".into(),
        ))
        .unwrap();

        let result = api.share_notes(&["1"]).unwrap();
        assert!(result.share_urls[0].starts_with("https://keep.example.org/view/"));
    }

    #[test]
    fn notes_survive_reopen() {
        let env = TestEnv::new();
        let mut api = KeeperApi::new(env.open_store(), env.root.clone(), KeeperConfig::default());
        api.create_note(NoteDraft::new().title("Persisted")).unwrap();
        drop(api);

        let api = KeeperApi::new(env.open_store(), env.root.clone(), KeeperConfig::default());
        assert_eq!(api.store().notes()[0].title, "Persisted");
    }
}
