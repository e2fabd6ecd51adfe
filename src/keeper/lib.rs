//! # Keeper Architecture
//!
//! Keeper is a **UI-agnostic note library** with a command-line client on top.
//! Notes come in three kinds (plain text, code snippets, images), live in
//! local storage, and can be shared through `<origin>/view/<id>` links.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, owns stdout/stderr     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, parses note references        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns structured CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/)                                             │
//! │  - NoteStore: ordered collection, mutations, subscribers    │
//! │  - NoteBackend: FsBackend (production), MemBackend (tests)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the
//! process, so the same core could back a web view or a TUI.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: The note store and its persistence backends
//! - [`model`]: Core data types (`Note`, `NoteDraft`, `NoteUpdate`)
//! - [`id`]: Note identifiers
//! - [`share`]: Share-link formatting and parsing
//! - [`index`]: User-facing note references (positions, id prefixes, links)
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod id;
pub mod index;
pub mod model;
pub mod share;
pub mod store;

#[cfg(test)]
mod test_utils;
