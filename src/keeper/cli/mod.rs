//! # CLI Behavior
//!
//! This is **one possible UI client** for keeper, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the library documentation in [`keeper`].
//!
//! ## Naked Execution (`keeper`)
//!
//! Running `keeper` with no arguments defaults to `keeper list`.
//!
//! ## Create
//!
//! Priority order for the body of a new note:
//!
//! 1. `--content` (or `--image`, whose caption is `--content`)
//! 2. **Piped input**: `echo "milk" | keeper create -t Groceries` skips the editor
//! 3. **Editor**: opens `$EDITOR` on a scratch file, unless `--no-editor`
//!
//! ## Referring to notes
//!
//! Every command that takes a note accepts its list position (`2`), its id or a
//! unique prefix of the id (`3fa9`), or its share link
//! (`http://localhost:8080/view/<id>`).
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `print`: Output formatting (lists, full notes, messages)
//! - `setup`: Argument parsing via clap
//! - `image`: Embedding image files as data URLs

mod commands;
mod image;
mod print;
pub mod setup;

pub use commands::run;
