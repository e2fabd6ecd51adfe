//! # CLI Layer
//!
//! This module is **one possible UI client** for keeper. It is the only place
//! in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Handles argument parsing
//! - Opens the editor and the clipboard
//! - Formats output for human consumption
//!
//! The library stores whatever optional fields it is given. Keeping
//! `language` on code notes and `imageUrl` on image notes is this client's
//! job, so the note handlers below normalize those fields before calling
//! the API.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API and configuration
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::image::to_data_url;
use super::print::{print_full_notes, print_messages, print_notes, print_text_list};
use super::setup::{Cli, Commands, NoteFields};
use clap::Parser;
use directories::ProjectDirs;
use keeper::api::{CmdMessage, ConfigAction, KeeperApi};
use keeper::clipboard::copy_to_clipboard;
use keeper::config::KeeperConfig;
use keeper::editor::{edit_content, EditorContent};
use keeper::error::{KeeperError, Result};
use keeper::model::{
    is_known_language, Note, NoteColor, NoteDraft, NoteType, NoteUpdate, CODE_LANGUAGES,
    DEFAULT_LANGUAGE, DEFAULT_TITLE,
};
use keeper::store::fs_backend::FsBackend;
use keeper::store::NoteStore;
use log::{debug, warn};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "KEEPER_DATA";

struct AppContext {
    api: KeeperApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // These only print constants and need no storage
    match &cli.command {
        Some(Commands::Languages) => return handle_languages(),
        Some(Commands::Colors) => return handle_colors(),
        _ => {}
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Create { fields, no_editor }) => handle_create(&mut ctx, fields, no_editor),
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Search { term }) => handle_list(&ctx, Some(term)),
        Some(Commands::View { notes }) => handle_view(&ctx, notes),
        Some(Commands::Edit {
            note,
            fields,
            no_color,
            editor,
        }) => handle_edit(&mut ctx, note, fields, no_color, editor),
        Some(Commands::Delete { notes }) => handle_delete(&mut ctx, notes),
        Some(Commands::Share { notes, copy }) => handle_share(&ctx, notes, copy),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Languages) => handle_languages(),
        Some(Commands::Colors) => handle_colors(),
        None => handle_list(&ctx, None),
    }?;

    // Surfaces a save that failed during the command
    ctx.api.flush()
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    debug!("using data dir {}", data_dir.display());

    let config = match KeeperConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring unreadable config: {}", e);
            KeeperConfig::default()
        }
    };
    let store = NoteStore::open(FsBackend::new(data_dir.clone()))?;

    Ok(AppContext {
        api: KeeperApi::new(store, data_dir, config),
    })
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "keeper", "keeper")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            KeeperError::Config(format!(
                "Could not determine a data directory; set ${} or pass --data-dir",
                DATA_DIR_ENV
            ))
        })
}

fn handle_create(ctx: &mut AppContext, fields: NoteFields, no_editor: bool) -> Result<()> {
    let image_url = fields.image.as_deref().map(to_data_url).transpose()?;
    let note_type = resolve_type(fields.note_type, image_url.is_some(), fields.language.is_some())?;
    let language = resolve_language(note_type, fields.language.as_deref(), None)?;
    check_image(note_type, image_url.is_some())?;

    let mut title = fields.title;
    let mut content = fields.content;

    if content.is_none() && note_type != NoteType::Image {
        if !std::io::stdin().is_terminal() {
            // Piped input becomes the body and skips the editor
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(KeeperError::Io)?;
            content = Some(buffer.trim_end().to_string());
        } else if !no_editor {
            let initial = EditorContent::new(title.clone().unwrap_or_default(), "");
            let edited = edit_content(&initial, &ctx.api.current_config().editor_ext)?;
            title = Some(edited.title);
            content = Some(edited.content);
        }
    }

    let draft = NoteDraft {
        title,
        content,
        note_type: Some(note_type),
        color: fields.color,
        image_url,
        language,
    };

    let result = ctx.api.create_note(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let result = match search {
        Some(term) => ctx.api.search_notes(&term)?,
        None => ctx.api.list_notes()?,
    };
    print_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, notes: Vec<String>) -> Result<()> {
    let result = ctx.api.view_notes(&notes)?;
    print_full_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    note_ref: String,
    fields: NoteFields,
    no_color: bool,
    open_editor: bool,
) -> Result<()> {
    let current = current_note(ctx, &note_ref)?;

    let image_url = fields.image.as_deref().map(to_data_url).transpose()?;
    let has_image = image_url.is_some();
    let has_language = fields.language.is_some();
    let note_type = if fields.note_type.is_some() || has_image || has_language {
        resolve_type(fields.note_type, has_image, has_language)?
    } else {
        current.note_type
    };
    let language = resolve_language(
        note_type,
        fields.language.as_deref(),
        current.language.as_deref(),
    )?;
    check_image(note_type, has_image || current.image_url.is_some())?;

    let mut patch = NoteUpdate::new();
    if note_type != current.note_type {
        patch = patch.note_type(note_type);
    }
    if language != current.language {
        patch = patch.language(language);
    }
    if note_type != NoteType::Image && current.image_url.is_some() {
        patch = patch.image_url(None);
    } else if image_url.is_some() {
        patch = patch.image_url(image_url);
    }
    if no_color {
        patch = patch.color(None);
    } else if let Some(color) = fields.color {
        patch = patch.color(Some(color));
    }

    let mut title = fields.title;
    let mut content = fields.content;
    if open_editor {
        let initial = EditorContent::new(
            title.clone().unwrap_or_else(|| current.title.clone()),
            content.clone().unwrap_or_else(|| current.content.clone()),
        );
        let edited = edit_content(&initial, &ctx.api.current_config().editor_ext)?;
        title = Some(edited.title);
        content = Some(edited.content);
    }
    if let Some(title) = title {
        let title = if title.trim().is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            title
        };
        if title != current.title {
            patch = patch.title(title);
        }
    }
    if let Some(content) = content {
        if content != current.content {
            patch = patch.content(content);
        }
    }

    let result = ctx.api.update_note(current.id.as_str(), &patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, notes: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_notes(&notes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_share(ctx: &AppContext, notes: Vec<String>, copy: bool) -> Result<()> {
    let result = ctx.api.share_notes(&notes)?;
    for url in &result.share_urls {
        println!("{}", url);
    }
    print_messages(&result.messages);

    if copy && !result.share_urls.is_empty() {
        match copy_to_clipboard(&result.share_urls.join("\n")) {
            Ok(()) => print_messages(&[CmdMessage::success("Link copied to clipboard!")]),
            Err(e) => print_messages(&[CmdMessage::warning(format!(
                "Could not copy to clipboard: {}",
                e
            ))]),
        }
    }
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes {
        return Err(KeeperError::Api(
            "Refusing to delete every note without --yes".to_string(),
        ));
    }
    let result = ctx.api.clear_notes()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            let lines = vec![
                format!("origin = {}", config.origin),
                format!("editor-ext = {}", config.editor_ext),
                format!("data-file = {}", ctx.api.storage_location()),
            ];
            print_text_list(&lines, "No configuration values.");
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_languages() -> Result<()> {
    let lines: Vec<String> = CODE_LANGUAGES.iter().map(|l| l.to_string()).collect();
    print_text_list(&lines, "No languages.");
    Ok(())
}

fn handle_colors() -> Result<()> {
    let lines: Vec<String> = NoteColor::ALL.iter().map(|c| c.to_string()).collect();
    print_text_list(&lines, "No colors.");
    Ok(())
}

/// The note `note_ref` points at. Unlike `view`, a miss is an error here.
fn current_note(ctx: &AppContext, note_ref: &str) -> Result<Note> {
    let result = ctx.api.view_notes(&[note_ref])?;
    result
        .listed_notes
        .into_iter()
        .next()
        .map(|dn| dn.note)
        .ok_or_else(|| KeeperError::NoteNotFound(note_ref.to_string()))
}

/// Picks the note kind from the flags given. `--image` implies image and
/// `--language` implies code; an explicit `--type` must agree with them.
fn resolve_type(
    explicit: Option<NoteType>,
    has_image: bool,
    has_language: bool,
) -> Result<NoteType> {
    match explicit {
        Some(t) if has_image && t != NoteType::Image => Err(KeeperError::Api(format!(
            "--image needs an image note, not {}",
            t
        ))),
        Some(t) if has_language && t != NoteType::Code => Err(KeeperError::Api(format!(
            "--language only applies to code notes, not {}",
            t
        ))),
        Some(t) => Ok(t),
        None if has_image && has_language => Err(KeeperError::Api(
            "A note cannot have both --image and --language".to_string(),
        )),
        None if has_image => Ok(NoteType::Image),
        None if has_language => Ok(NoteType::Code),
        None => Ok(NoteType::Text),
    }
}

/// Language to store for a note of `note_type`: only code notes keep one,
/// and a code note without one gets the default.
fn resolve_language(
    note_type: NoteType,
    requested: Option<&str>,
    current: Option<&str>,
) -> Result<Option<String>> {
    if let Some(language) = requested {
        if !is_known_language(language) {
            return Err(KeeperError::Api(format!(
                "Unknown language: {} (see `keeper languages`)",
                language
            )));
        }
    }
    if note_type != NoteType::Code {
        return Ok(None);
    }
    Ok(Some(
        requested
            .or(current)
            .unwrap_or(DEFAULT_LANGUAGE)
            .to_string(),
    ))
}

fn check_image(note_type: NoteType, has_image: bool) -> Result<()> {
    if note_type == NoteType::Image && !has_image {
        return Err(KeeperError::Api(
            "Image notes need an image: pass --image <path>".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_flag_implies_image_type() {
        assert_eq!(resolve_type(None, true, false).unwrap(), NoteType::Image);
        assert_eq!(resolve_type(None, false, true).unwrap(), NoteType::Code);
        assert_eq!(resolve_type(None, false, false).unwrap(), NoteType::Text);
    }

    #[test]
    fn explicit_type_must_agree_with_flags() {
        assert!(resolve_type(Some(NoteType::Text), true, false).is_err());
        assert!(resolve_type(Some(NoteType::Image), false, true).is_err());
        assert!(resolve_type(None, true, true).is_err());
        assert_eq!(
            resolve_type(Some(NoteType::Code), false, true).unwrap(),
            NoteType::Code
        );
    }

    #[test]
    fn code_notes_default_their_language() {
        assert_eq!(
            resolve_language(NoteType::Code, None, None).unwrap().as_deref(),
            Some(DEFAULT_LANGUAGE)
        );
        assert_eq!(
            resolve_language(NoteType::Code, None, Some("go"))
                .unwrap()
                .as_deref(),
            Some("go")
        );
        assert_eq!(
            resolve_language(NoteType::Code, Some("rust"), Some("go"))
                .unwrap()
                .as_deref(),
            Some("rust")
        );
    }

    #[test]
    fn non_code_notes_drop_language() {
        assert_eq!(resolve_language(NoteType::Text, None, Some("go")).unwrap(), None);
    }

    #[test]
    fn unknown_language_is_rejected() {
        assert!(resolve_language(NoteType::Code, Some("cobol"), None).is_err());
    }

    #[test]
    fn image_notes_require_an_image() {
        assert!(check_image(NoteType::Image, false).is_err());
        assert!(check_image(NoteType::Image, true).is_ok());
        assert!(check_image(NoteType::Text, false).is_ok());
    }

    #[test]
    fn data_dir_flag_wins() {
        let dir = resolve_data_dir(Some(PathBuf::from("/tmp/keeper-flag"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/keeper-flag"));
    }
}
