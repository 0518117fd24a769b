use super::NoteStore;
use crate::model::NoteSnapshot;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Keeps the collection as a serialized payload rather than typed values so
/// tests can plant corrupted payloads and watch the recovery path run.
#[derive(Default)]
pub struct InMemoryStore {
    payload: Option<String>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plants a raw payload, decodable or not.
    pub fn set_raw_payload(&mut self, raw: impl Into<String>) {
        self.payload = Some(raw.into());
    }

    pub fn raw_payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Makes every subsequent `save_all` report failure.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl NoteStore for InMemoryStore {
    fn load_all(&mut self) -> Vec<NoteSnapshot> {
        let Some(raw) = self.payload.as_deref() else {
            return Vec::new();
        };
        match serde_json::from_str(raw) {
            Ok(notes) => notes,
            Err(e) => {
                log::warn!("discarding undecodable in-memory payload: {}", e);
                self.payload = None;
                Vec::new()
            }
        }
    }

    fn save_all(&mut self, notes: &[NoteSnapshot]) -> bool {
        if self.fail_writes {
            return false;
        }
        match serde_json::to_string(notes) {
            Ok(raw) => {
                self.payload = Some(raw);
                true
            }
            Err(_) => false,
        }
    }
}
