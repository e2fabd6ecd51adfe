use super::image::describe_data_url;
use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use keeper::api::{CmdMessage, MessageLevel};
use keeper::index::DisplayNote;
use keeper::model::{Note, NoteColor, NoteType};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const BADGE_WIDTH: usize = 7;
const PREVIEW_CHARS: usize = 50;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_text_list(lines: &[String], empty_message: &str) {
    if lines.is_empty() {
        println!("{}", empty_message);
        return;
    }
    for line in lines {
        println!("{}", line);
    }
}

pub(super) fn print_notes(notes: &[DisplayNote]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    for dn in notes {
        let idx_str = format!("{}. ", dn.index);
        let badge = format!("{:<width$}", dn.note.note_type.as_str(), width = BADGE_WIDTH);
        let time_ago = format_time_ago(dn.note.updated_at);

        let left_prefix = "    ";
        let fixed_width = left_prefix.width() + idx_str.width() + BADGE_WIDTH + TIME_WIDTH + 2;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let preview = preview(&dn.note);
        let title_len = truncate_to_width(&dn.note.title, available);
        let title_width = title_len.width();
        let rest = if preview.is_empty() || title_width >= available {
            String::new()
        } else {
            truncate_to_width(
                &format!(" {}", preview),
                available.saturating_sub(title_width),
            )
        };
        let padding = available.saturating_sub(title_width + rest.width());

        println!(
            "{}{}{}{}{}{}  {}",
            left_prefix,
            idx_str.yellow(),
            badge.dimmed(),
            paint(&title_len, dn.note.color),
            rest.dimmed(),
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

pub(super) fn print_full_notes(notes: &[DisplayNote]) {
    for (i, dn) in notes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let note = &dn.note;
        println!(
            "{} {}  {}",
            dn.index.to_string().yellow(),
            paint(&note.title, note.color).bold(),
            kind_label(note).dimmed()
        );
        println!(
            "{}",
            format!(
                "id {}  created {}  updated {}",
                note.id,
                note.created_at.format("%Y-%m-%d %H:%M"),
                note.updated_at.format("%Y-%m-%d %H:%M")
            )
            .dimmed()
        );
        println!("--------------------------------");
        if let Some(url) = &note.image_url {
            println!("{}", describe_image(url));
        }
        if !note.content.is_empty() {
            println!("{}", note.content);
        }
    }
}

fn kind_label(note: &Note) -> String {
    let mut label = note.note_type.to_string();
    if let Some(language) = &note.language {
        label.push_str(" · ");
        label.push_str(language);
    }
    if let Some(color) = note.color {
        label.push_str(" · ");
        label.push_str(color.as_str());
    }
    format!("[{}]", label)
}

fn describe_image(url: &str) -> String {
    match describe_data_url(url) {
        Some((mime, size)) => format!("[image {} {}]", mime, format_size(size)),
        None => format!("[image {}]", url),
    }
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

fn preview(note: &Note) -> String {
    let body: String = note
        .content
        .chars()
        .take(PREVIEW_CHARS)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    match (note.note_type, note.language.as_deref()) {
        (NoteType::Code, Some(language)) if body.is_empty() => language.to_string(),
        (NoteType::Code, Some(language)) => format!("{}: {}", language, body),
        (NoteType::Image, _) if body.is_empty() => "(image)".to_string(),
        _ => body,
    }
}

fn paint(text: &str, color: Option<NoteColor>) -> ColoredString {
    match color {
        None => text.normal(),
        Some(NoteColor::Purple) => text.magenta(),
        Some(NoteColor::Blue) => text.blue(),
        Some(NoteColor::Yellow) => text.yellow(),
        Some(NoteColor::Orange) => text.truecolor(255, 165, 0),
        Some(NoteColor::Green) => text.green(),
        Some(NoteColor::Pink) => text.bright_magenta(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use keeper::id::NoteId;
    use keeper::model::NoteDraft;

    fn note(draft: NoteDraft) -> Note {
        Note::from_draft(draft, NoteId::new("abcd1234"), Utc::now())
    }

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        // wide chars count double
        assert_eq!(truncate_to_width("日本語のメモ", 7), "日本語…");
        assert!(truncate_to_width("日本語のメモ", 7).width() <= 7);
    }

    #[test]
    fn code_preview_leads_with_language() {
        let n = note(
            NoteDraft::new()
                .note_type(NoteType::Code)
                .language("rust")
                .content("fn main() {\n}"),
        );
        assert_eq!(preview(&n), "rust: fn main() { }");
    }

    #[test]
    fn image_without_caption_has_placeholder_preview() {
        let n = note(NoteDraft::new().note_type(NoteType::Image));
        assert_eq!(preview(&n), "(image)");
    }

    #[test]
    fn kind_label_lists_language_and_color() {
        let n = note(
            NoteDraft::new()
                .note_type(NoteType::Code)
                .language("go")
                .color(NoteColor::Green),
        );
        assert_eq!(kind_label(&n), "[code · go · green]");
        assert_eq!(kind_label(&note(NoteDraft::new())), "[text]");
    }

    #[test]
    fn image_description_shows_mime_and_size() {
        assert_eq!(
            describe_image("data:image/png;base64,iVBORw=="),
            "[image image/png 4 B]"
        );
        assert_eq!(
            describe_image("https://example.com/cat.png"),
            "[image https://example.com/cat.png]"
        );
    }

    #[test]
    fn sizes_are_human_readable() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn time_ago_is_right_aligned() {
        let s = format_time_ago(Utc::now() - Duration::minutes(5));
        assert_eq!(s.width(), TIME_WIDTH);
        assert!(s.trim_start().starts_with("5 minutes"));
    }
}
