use clap::{Args, Parser, Subcommand};
use keeper::model::{NoteColor, NoteType};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "keeper", bin_name = "keeper", version)]
#[command(
    about = "Keep text notes, code snippets and images, and share them by link",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding notes and config (defaults to $KEEPER_DATA, then the user data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Fields shared by `create` and `edit`.
#[derive(Args, Debug, Default, Clone)]
pub struct NoteFields {
    /// Note title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Note body (the caption for image notes)
    #[arg(short, long)]
    pub content: Option<String>,

    /// Note kind: text, code or image
    #[arg(long = "type", value_name = "TYPE")]
    pub note_type: Option<NoteType>,

    /// Card color: purple, blue, yellow, orange, green or pink
    #[arg(long)]
    pub color: Option<NoteColor>,

    /// Source language of a code note (see `keeper languages`)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Image file to embed (implies --type image)
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "n")]
    Create {
        #[command(flatten)]
        fields: NoteFields,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// List notes, newest first
    #[command(alias = "ls")]
    List {
        /// Only show notes matching this term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search notes by title and content
    Search { term: String },

    /// View one or more notes (position, id, id prefix or share link)
    #[command(alias = "v")]
    View {
        #[arg(required = true, num_args = 1..)]
        notes: Vec<String>,
    },

    /// Edit a note
    #[command(alias = "e")]
    Edit {
        /// Position, id, id prefix or share link
        note: String,

        #[command(flatten)]
        fields: NoteFields,

        /// Remove the note's color
        #[arg(long, conflicts_with = "color")]
        no_color: bool,

        /// Open the title and body in $EDITOR
        #[arg(long)]
        editor: bool,
    },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        notes: Vec<String>,
    },

    /// Print view links for one or more notes
    Share {
        #[arg(required = true, num_args = 1..)]
        notes: Vec<String>,

        /// Copy the links to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Delete every note
    Clear {
        /// Confirm removing all notes
        #[arg(long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (origin, editor-ext)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// List the languages a code note can use
    Languages,

    /// List the available note colors
    Colors,
}
