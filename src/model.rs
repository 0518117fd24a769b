use crate::error::{Field, PostitError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Presentation state of a note. Transient: persisted notes are always View.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    View,
    Edit,
}

/// Persisted form of a note.
///
/// Field names and the epoch-millisecond timestamps match the storage payload
/// this tool has always written, so existing boards load unchanged. Identity
/// and mode are runtime-only and deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSnapshot {
    pub title: String,
    pub content: String,
    #[serde(rename = "dateCreate", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "dateUpdate", with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

/// One post-it: title, content, timestamps, and its View/Edit lifecycle.
///
/// Fields are private so every mutation goes through the state machine:
/// construction and [`Note::commit_edit`] validate, [`Note::restore`] only
/// accepts values that were captured from a valid note.
#[derive(Debug, Clone)]
pub struct Note {
    id: Uuid,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    mode: Mode,
}

impl Note {
    /// Builds a new note in View mode with both timestamps set to `now`.
    pub fn new(title: &str, content: &str, now: DateTime<Utc>) -> Result<Self> {
        let (title, content) = validated(title, content)?;
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            content,
            created_at: now,
            updated_at: now,
            mode: Mode::View,
        })
    }

    /// Rebuilds a note from its persisted form, assigning a fresh id.
    pub fn from_snapshot(snap: NoteSnapshot) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: snap.title,
            content: snap.content,
            created_at: snap.created_at,
            updated_at: snap.updated_at,
            mode: Mode::View,
        }
    }

    pub fn snapshot(&self) -> NoteSnapshot {
        NoteSnapshot {
            title: self.title.clone(),
            content: self.content.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Edit
    }

    /// View -> Edit. The board guards that no other note is editing.
    pub fn enter_edit(&mut self) {
        self.mode = Mode::Edit;
    }

    /// Edit -> View without touching fields. Used on cancel.
    pub fn exit_to_view(&mut self) {
        self.mode = Mode::View;
    }

    /// Validates and applies an edit, stamps `updated_at`, returns to View.
    ///
    /// On validation failure the note is left untouched, still in Edit mode,
    /// so the caller can re-prompt or cancel.
    pub fn commit_edit(&mut self, title: &str, content: &str, now: DateTime<Utc>) -> Result<()> {
        let (title, content) = validated(title, content)?;
        self.title = title;
        self.content = content;
        // Clamp so updated_at never precedes created_at, clock skew or not.
        self.updated_at = now.max(self.created_at);
        self.mode = Mode::View;
        Ok(())
    }

    /// Puts back pre-edit values without validation (they came from a note
    /// that already passed it) and returns to View.
    pub fn restore(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
        self.exit_to_view();
    }
}

fn validated(title: &str, content: &str) -> Result<(String, String)> {
    let title = title.trim();
    let content = content.trim();

    let mut empty = Vec::new();
    if title.is_empty() {
        empty.push(Field::Title);
    }
    if content.is_empty() {
        empty.push(Field::Content);
    }
    if !empty.is_empty() {
        return Err(PostitError::Validation(empty));
    }

    Ok((title.to_string(), content.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn new_note_starts_in_view_with_equal_timestamps() {
        let note = Note::new("Beach", "Crawl among the sharks", at(100)).unwrap();
        assert_eq!(note.mode(), Mode::View);
        assert_eq!(note.created_at(), at(100));
        assert_eq!(note.updated_at(), at(100));
    }

    #[test]
    fn new_note_trims_fields() {
        let note = Note::new("  Beach  ", "\tswim\n", at(100)).unwrap();
        assert_eq!(note.title(), "Beach");
        assert_eq!(note.content(), "swim");
    }

    #[test]
    fn blank_title_is_rejected_and_named() {
        let err = Note::new("   ", "swim", at(100)).unwrap_err();
        assert_eq!(err.invalid_fields(), &[Field::Title]);
    }

    #[test]
    fn blank_title_and_content_are_both_named() {
        let err = Note::new("", " \n ", at(100)).unwrap_err();
        assert_eq!(err.invalid_fields(), &[Field::Title, Field::Content]);
    }

    #[test]
    fn commit_edit_updates_fields_and_timestamp() {
        let mut note = Note::new("Beach", "swim", at(100)).unwrap();
        note.enter_edit();
        note.commit_edit("Mountain", "climb", at(300)).unwrap();
        assert_eq!(note.title(), "Mountain");
        assert_eq!(note.content(), "climb");
        assert_eq!(note.updated_at(), at(300));
        assert_eq!(note.mode(), Mode::View);
    }

    #[test]
    fn failed_commit_leaves_note_in_edit_untouched() {
        let mut note = Note::new("Beach", "swim", at(100)).unwrap();
        note.enter_edit();
        let err = note.commit_edit("", "climb", at(300)).unwrap_err();
        assert_eq!(err.invalid_fields(), &[Field::Title]);
        assert_eq!(note.title(), "Beach");
        assert_eq!(note.content(), "swim");
        assert_eq!(note.updated_at(), at(100));
        assert_eq!(note.mode(), Mode::Edit);
    }

    #[test]
    fn commit_edit_never_moves_updated_at_before_created_at() {
        let mut note = Note::new("Beach", "swim", at(200)).unwrap();
        note.enter_edit();
        note.commit_edit("Beach", "wade", at(50)).unwrap();
        assert_eq!(note.updated_at(), at(200));
    }

    #[test]
    fn restore_puts_back_values_and_view_mode() {
        let mut note = Note::new("Beach", "swim", at(100)).unwrap();
        note.enter_edit();
        note.restore("Beach".into(), "swim".into());
        assert_eq!(note.mode(), Mode::View);
        assert_eq!(note.content(), "swim");
    }

    #[test]
    fn snapshot_round_trips_through_note() {
        let note = Note::new("Beach", "swim", at(100)).unwrap();
        let rebuilt = Note::from_snapshot(note.snapshot());
        assert_eq!(rebuilt.title(), note.title());
        assert_eq!(rebuilt.content(), note.content());
        assert_eq!(rebuilt.created_at(), note.created_at());
        assert_eq!(rebuilt.mode(), Mode::View);
        // Identity is runtime-only; a reload yields a new one.
        assert_ne!(rebuilt.id(), note.id());
    }

    #[test]
    fn snapshot_serializes_with_legacy_field_names() {
        let snap = NoteSnapshot {
            title: "Beach".into(),
            content: "swim".into(),
            created_at: at(1666180099794),
            updated_at: at(1666181000000),
        };
        let value = serde_json::to_value(&snap).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Beach",
                "content": "swim",
                "dateCreate": 1666180099794i64,
                "dateUpdate": 1666181000000i64,
            })
        );
    }
}
