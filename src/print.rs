use chrono::{DateTime, Utc};
use colored::Colorize;
use postits::board::{CmdMessage, MessageLevel};
use postits::view::NoteView;
use timeago::Formatter;

const PREVIEW_CHARS: usize = 60;
const EDIT_MARKER: &str = "✎";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

pub(crate) fn print_notes(notes: &[NoteView]) {
    if notes.is_empty() {
        println!("No notes yet.");
        return;
    }

    for (i, note) in notes.iter().enumerate() {
        let marker = if note.is_editing() { EDIT_MARKER } else { " " };
        let preview: String = note
            .content
            .chars()
            .take(PREVIEW_CHARS)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();

        println!(
            "{} {} {} {} {}",
            marker.yellow(),
            format!("{}.", i + 1).normal(),
            note.title.bold(),
            preview,
            format_time_ago(note.updated_at).dimmed()
        );
    }
}

pub(crate) fn print_note(note: &NoteView) {
    println!("{}", note.title.bold());
    println!("--------------------------------");
    println!("{}", note.content);
    println!(
        "{}",
        format!(
            "created {}, updated {}",
            format_time_ago(note.created_at),
            format_time_ago(note.updated_at)
        )
        .dimmed()
    );
}

fn format_time_ago(time: DateTime<Utc>) -> String {
    let elapsed = Utc::now()
        .signed_duration_since(time)
        .to_std()
        .unwrap_or_default();
    Formatter::new().convert(elapsed)
}
