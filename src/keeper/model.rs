use crate::id::NoteId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Title given to notes created without one.
pub const DEFAULT_TITLE: &str = "Untitled Note";

/// Source languages a code note may be tagged with.
pub const CODE_LANGUAGES: &[&str] = &[
    "javascript",
    "typescript",
    "html",
    "css",
    "python",
    "java",
    "rust",
    "go",
    "c",
    "cpp",
    "csharp",
    "php",
    "ruby",
];

/// Language preselected for new code notes.
pub const DEFAULT_LANGUAGE: &str = "javascript";

pub fn is_known_language(language: &str) -> bool {
    CODE_LANGUAGES.contains(&language)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteType {
    #[default]
    Text,
    Code,
    Image,
}

impl NoteType {
    pub const ALL: [NoteType; 3] = [NoteType::Text, NoteType::Code, NoteType::Image];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteType::Text => "text",
            NoteType::Code => "code",
            NoteType::Image => "image",
        }
    }
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown note type: {} (expected text, code or image)", s))
    }
}

/// Cosmetic palette tag. Notes without a color use the default card style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    Purple,
    Blue,
    Yellow,
    Orange,
    Green,
    Pink,
}

impl NoteColor {
    pub const ALL: [NoteColor; 6] = [
        NoteColor::Purple,
        NoteColor::Blue,
        NoteColor::Yellow,
        NoteColor::Orange,
        NoteColor::Green,
        NoteColor::Pink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteColor::Purple => "purple",
            NoteColor::Blue => "blue",
            NoteColor::Yellow => "yellow",
            NoteColor::Orange => "orange",
            NoteColor::Green => "green",
            NoteColor::Pink => "pink",
        }
    }
}

impl fmt::Display for NoteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteColor::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown color: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub note_type: NoteType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<NoteColor>,
    /// Embedded image payload, normally a `data:` URL. Only set on image notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Only set on code notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Builds a note from a draft, filling in defaults for missing fields.
    /// Optional fields are copied verbatim.
    pub fn from_draft(draft: NoteDraft, id: NoteId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            content: draft.content.unwrap_or_default(),
            note_type: draft.note_type.unwrap_or_default(),
            color: draft.color,
            image_url: draft.image_url,
            language: draft.language,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Input for creating a note. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub note_type: Option<NoteType>,
    pub color: Option<NoteColor>,
    pub image_url: Option<String>,
    pub language: Option<String>,
}

impl NoteDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn note_type(mut self, note_type: NoteType) -> Self {
        self.note_type = Some(note_type);
        self
    }

    pub fn color(mut self, color: NoteColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// A partial update to an existing note.
///
/// `None` leaves a field untouched. The optional note fields take a nested
/// option so a patch can clear them: `Some(None)` removes the value.
/// Identity and timestamps are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub note_type: Option<NoteType>,
    pub color: Option<Option<NoteColor>>,
    pub image_url: Option<Option<String>>,
    pub language: Option<Option<String>>,
}

impl NoteUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn note_type(mut self, note_type: NoteType) -> Self {
        self.note_type = Some(note_type);
        self
    }

    pub fn color(mut self, color: Option<NoteColor>) -> Self {
        self.color = Some(color);
        self
    }

    pub fn image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = Some(image_url);
        self
    }

    pub fn language(mut self, language: Option<String>) -> Self {
        self.language = Some(language);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies every present field onto `note`. Timestamps are left to the caller.
    pub fn merge_into(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(content) = &self.content {
            note.content = content.clone();
        }
        if let Some(note_type) = self.note_type {
            note.note_type = note_type;
        }
        if let Some(color) = self.color {
            note.color = color;
        }
        if let Some(image_url) = &self.image_url {
            note.image_url = image_url.clone();
        }
        if let Some(language) = &self.language {
            note.language = language.clone();
        }
    }
}
