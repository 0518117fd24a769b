use crate::model::{Mode, Note};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Read-only rendering snapshot of one note.
///
/// This is everything the presentation layer gets: it renders from these and
/// routes gestures back through board commands, never touching [`Note`]
/// directly.
#[derive(Debug, Clone)]
pub struct NoteView {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub mode: Mode,
}

impl From<&Note> for NoteView {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id(),
            title: note.title().to_string(),
            content: note.content().to_string(),
            created_at: note.created_at(),
            updated_at: note.updated_at(),
            mode: note.mode(),
        }
    }
}

impl NoteView {
    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Edit
    }
}

/// Renders the collection in display order (the board keeps it sorted).
pub fn render(notes: &[Note]) -> Vec<NoteView> {
    notes.iter().map(NoteView::from).collect()
}
