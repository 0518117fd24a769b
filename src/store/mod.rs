//! # Storage Layer
//!
//! Persistence behind the [`NoteStore`] trait so the board never knows where
//! its notes live.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file holding the whole
//!   collection
//! - [`memory::InMemoryStore`]: in-memory storage for testing, no persistence
//!
//! ## Persistence model
//!
//! The collection is persisted as a unit: every save re-serializes and
//! replaces the entire payload, there are no incremental updates. That keeps
//! the contract small and makes a save atomic from the board's point of view:
//! it either fully lands or the previous payload survives.
//!
//! Loading is infallible by design. A missing payload is an empty board; a
//! payload that no longer decodes is treated as data loss: it is logged,
//! cleared, and the board starts empty rather than failing startup.

use crate::model::NoteSnapshot;

pub mod fs;
pub mod memory;

/// Whole-collection persistence for note snapshots.
pub trait NoteStore {
    /// Loads the persisted collection in stored order.
    ///
    /// Returns an empty collection when nothing is stored or the payload
    /// fails to decode; a corrupted payload is cleared as a side effect.
    fn load_all(&mut self) -> Vec<NoteSnapshot>;

    /// Replaces the persisted collection with `notes`.
    ///
    /// Returns `false` when the write failed; the previously stored payload
    /// is left as it was.
    fn save_all(&mut self, notes: &[NoteSnapshot]) -> bool;
}
