use crate::error::{KeeperError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;
use uuid::Uuid;

/// Title and body as edited in an external editor.
///
/// Buffer format: the first line is the title, then a blank line, then the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorContent {
    pub title: String,
    pub content: String,
}

impl EditorContent {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn to_buffer(&self) -> String {
        format!("{}\n\n{}", self.title, self.content)
    }

    pub fn from_buffer(buffer: &str) -> Self {
        let mut lines = buffer.lines();
        let title = lines.next().unwrap_or_default().trim().to_string();
        let rest: Vec<&str> = lines.collect();
        let body = match rest.split_first() {
            Some((first, tail)) if first.trim().is_empty() => tail.join("\n"),
            _ => rest.join("\n"),
        };
        Self {
            title,
            content: body.trim_end().to_string(),
        }
    }
}

/// Gets the editor command from environment.
/// Checks $VISUAL, then $EDITOR, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["VISUAL", "EDITOR"] {
        if let Ok(editor) = env::var(var) {
            if !editor.trim().is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in ["nano", "vim", "vi"] {
        let found = Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false);
        if found {
            return Ok(fallback.to_string());
        }
    }

    Err(KeeperError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor, waits for it to close and returns the file's contents.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    // $EDITOR may carry flags, e.g. "code --wait"
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or("vi");
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| KeeperError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(KeeperError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(KeeperError::Io)
}

/// Round-trips `initial` through the editor using a scratch file with `file_extension`.
pub fn edit_content(initial: &EditorContent, file_extension: &str) -> Result<EditorContent> {
    let temp_file = env::temp_dir().join(format!(
        "keeper-{}{}",
        Uuid::new_v4().simple(),
        file_extension
    ));
    fs::write(&temp_file, initial.to_buffer()).map_err(KeeperError::Io)?;

    let edited = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);

    Ok(EditorContent::from_buffer(&edited?))
}
