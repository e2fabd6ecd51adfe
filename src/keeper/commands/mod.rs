//! # Command Layer
//!
//! Business logic for each user-facing operation lives in its own
//! submodule. Commands take the [`NoteStore`](crate::store::NoteStore),
//! operate on domain types and return a structured [`CmdResult`].
//!
//! Commands never print, never exit and never prompt. The UI layer decides
//! how to render the result.
//!
//! ## Not-found handling
//!
//! The store treats unknown ids as silent no-ops. Commands are where that
//! becomes a reported outcome: `update`, `delete` and `share` fail with
//! [`KeeperError::NoteNotFound`](crate::error::KeeperError::NoteNotFound),
//! while `view` returns a `warning` message. That message is the "not found"
//! state a viewer renders.
//!
//! ## Testing Strategy
//!
//! Command tests run against [`MemBackend`](crate::store::mem_backend::MemBackend).
//!
//! ## Command Modules
//!
//! - [`create`]: Create a note
//! - [`list`]: List all notes, newest first
//! - [`search`]: Ranked title/content search
//! - [`view`]: Retrieve notes by reference
//! - [`update`]: Patch a note
//! - [`delete`]: Remove notes
//! - [`clear`]: Remove every note
//! - [`share`]: Build share links
//! - [`config`]: Manage configuration
//! - [`helpers`]: Reference resolution

use crate::config::KeeperConfig;
use crate::index::DisplayNote;
use serde::Serialize;

pub mod clear;
pub mod config;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod search;
pub mod share;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<DisplayNote>,
    pub listed_notes: Vec<DisplayNote>,
    pub share_urls: Vec<String>,
    pub messages: Vec<CmdMessage>,
    pub config: Option<KeeperConfig>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_config(mut self, config: KeeperConfig) -> Self {
        self.config = Some(config);
        self
    }
}
