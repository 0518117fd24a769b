//! The note board: owns the collection, the edit lifecycle, and the
//! mutate -> persist -> render discipline.
//!
//! Every command returns a [`CmdResult`] carrying the fresh render snapshot,
//! so callers never have to re-query internal state. Commands rejected by a
//! guard come back with `changed: false` and no side effects at all.
//!
//! The one cross-cutting rule is single-edit-in-flight: at most one note is
//! in Edit mode at any time. The outstanding [`EditBackup`] doubles as the
//! flag for it; no locks, just early returns.

use crate::error::{PostitError, Result};
use crate::model::Note;
use crate::store::NoteStore;
use crate::view::{self, NoteView};
use chrono::Utc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

/// A presentation-ready message attached to a command result.
#[derive(Debug, Clone)]
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

/// Outcome of a board command.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Render snapshot of the collection after the command.
    pub view: Vec<NoteView>,
    /// False when a guard rejected the command as a no-op.
    pub changed: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}

/// Pre-edit copy of a note's fields, held while that note is in Edit mode.
///
/// Created by `start_edit`, consumed by `save_edit`/`cancel_edit`/`clear_all`.
/// Never outlives one edit session.
#[derive(Debug, Clone)]
struct EditBackup {
    id: Uuid,
    title: String,
    content: String,
}

/// The collection manager. Exclusive owner of the notes; the presentation
/// layer only issues commands and reads the returned snapshots.
pub struct Board<S: NoteStore> {
    store: S,
    notes: Vec<Note>,
    backup: Option<EditBackup>,
}

impl<S: NoteStore> Board<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            notes: Vec::new(),
            backup: None,
        }
    }

    /// Loads the persisted collection and produces the first render snapshot.
    /// Call once at startup.
    pub fn initialize(&mut self) -> CmdResult {
        self.notes = self
            .store
            .load_all()
            .into_iter()
            .map(Note::from_snapshot)
            .collect();
        self.sort_by_recency();

        CmdResult {
            view: view::render(&self.notes),
            changed: true,
            messages: Vec::new(),
        }
    }

    /// Creates a note at the front of the board.
    ///
    /// A brand-new note goes first regardless of timestamp ties with existing
    /// notes; the recency sort only reorders on later saves.
    pub fn add_note(&mut self, title: &str, content: &str) -> Result<CmdResult> {
        let note = Note::new(title, content, Utc::now())?;
        let message = CmdMessage::success(format!("Note created: {}", note.title()));
        self.notes.insert(0, note);

        let mut result = self.changed_result();
        result.add_message(message);
        self.persist(&mut result);
        Ok(result)
    }

    /// Removes a note. No-op while any edit is in flight: an unsaved edit
    /// takes precedence over deletion, including of the note being edited.
    pub fn delete_note(&mut self, id: Uuid) -> Result<CmdResult> {
        if self.backup.is_some() {
            return Ok(self.unchanged_result());
        }

        let pos = self.position_of(id)?;
        let removed = self.notes.remove(pos);

        let mut result = self.changed_result();
        result.add_message(CmdMessage::success(format!(
            "Note deleted: {}",
            removed.title()
        )));
        self.persist(&mut result);
        Ok(result)
    }

    /// Puts a note into Edit mode and captures its backup. No-op if another
    /// edit is already in flight.
    pub fn start_edit(&mut self, id: Uuid) -> Result<CmdResult> {
        if self.backup.is_some() {
            return Ok(self.unchanged_result());
        }

        let pos = self.position_of(id)?;
        let note = &mut self.notes[pos];
        self.backup = Some(EditBackup {
            id,
            title: note.title().to_string(),
            content: note.content().to_string(),
        });
        note.enter_edit();

        // Mode is transient, nothing to persist.
        Ok(self.changed_result())
    }

    /// Commits the in-flight edit.
    ///
    /// Validation failure propagates as an error and leaves everything as it
    /// was: note still in Edit mode, backup retained, nothing persisted. On
    /// success the collection is re-sorted most-recently-updated first.
    pub fn save_edit(&mut self, id: Uuid, title: &str, content: &str) -> Result<CmdResult> {
        if !self.is_editing(id) {
            return Ok(self.unchanged_result());
        }

        let pos = self.position_of(id)?;
        self.notes[pos].commit_edit(title, content, Utc::now())?;
        self.backup = None;
        self.sort_by_recency();

        let mut result = self.changed_result();
        result.add_message(CmdMessage::success(format!("Note saved: {}", title.trim())));
        self.persist(&mut result);
        Ok(result)
    }

    /// Abandons the in-flight edit, restoring the backed-up fields.
    pub fn cancel_edit(&mut self, id: Uuid) -> Result<CmdResult> {
        if !self.is_editing(id) {
            return Ok(self.unchanged_result());
        }

        let backup = self.backup.take().ok_or(PostitError::NoteNotFound(id))?;
        let pos = self.position_of(id)?;
        self.notes[pos].restore(backup.title, backup.content);

        // Nothing was committed, so the persisted state is already right.
        let mut result = self.changed_result();
        result.add_message(CmdMessage::info("Edit cancelled"));
        Ok(result)
    }

    /// Empties the board unconditionally, discarding any in-flight edit.
    pub fn clear_all(&mut self) -> CmdResult {
        self.notes.clear();
        self.backup = None;

        let mut result = self.changed_result();
        result.add_message(CmdMessage::success("All notes cleared"));
        self.persist(&mut result);
        result
    }

    /// True while some note is in Edit mode.
    pub fn has_edit_in_flight(&self) -> bool {
        self.backup.is_some()
    }

    fn is_editing(&self, id: Uuid) -> bool {
        self.backup.as_ref().map(|b| b.id) == Some(id)
    }

    fn position_of(&self, id: Uuid) -> Result<usize> {
        self.notes
            .iter()
            .position(|n| n.id() == id)
            .ok_or(PostitError::NoteNotFound(id))
    }

    /// Most recently updated first. Stable, so ties keep their order.
    fn sort_by_recency(&mut self) {
        self.notes.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()));
    }

    /// Persists the whole collection. On failure the in-memory state stays
    /// authoritative and the caller gets a warning instead of an error.
    fn persist(&mut self, result: &mut CmdResult) {
        let snapshots: Vec<_> = self.notes.iter().map(Note::snapshot).collect();
        if !self.store.save_all(&snapshots) {
            log::warn!("note store write failed; changes are in memory only");
            result.add_message(CmdMessage::warning(
                "Could not save notes; changes will not survive a restart",
            ));
        }
    }

    fn changed_result(&self) -> CmdResult {
        CmdResult {
            view: view::render(&self.notes),
            changed: true,
            messages: Vec::new(),
        }
    }

    fn unchanged_result(&self) -> CmdResult {
        CmdResult {
            view: view::render(&self.notes),
            changed: false,
            messages: Vec::new(),
        }
    }
}
