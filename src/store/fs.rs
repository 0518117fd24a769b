use super::NoteStore;
use crate::error::{PostitError, Result};
use crate::model::NoteSnapshot;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: the whole collection in one JSON array.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_load(&self) -> Result<Vec<NoteSnapshot>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(PostitError::Io)?;
        let notes = serde_json::from_str(&raw).map_err(PostitError::Serialization)?;
        Ok(notes)
    }

    fn try_save(&self, notes: &[NoteSnapshot]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PostitError::Io)?;
            }
        }

        let raw = serde_json::to_string_pretty(notes).map_err(PostitError::Serialization)?;

        // Write-then-rename so a failed write never clobbers the old payload.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw).map_err(PostitError::Io)?;
        fs::rename(&tmp, &self.path).map_err(PostitError::Io)?;
        Ok(())
    }
}

impl NoteStore for FileStore {
    fn load_all(&mut self) -> Vec<NoteSnapshot> {
        match self.try_load() {
            Ok(notes) => notes,
            Err(PostitError::Serialization(e)) => {
                log::warn!(
                    "discarding undecodable note store at {}: {}",
                    self.path.display(),
                    e
                );
                let _ = fs::remove_file(&self.path);
                Vec::new()
            }
            Err(e) => {
                log::warn!("could not read note store at {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    fn save_all(&mut self, notes: &[NoteSnapshot]) -> bool {
        match self.try_save(notes) {
            Ok(()) => true,
            Err(e) => {
                log::warn!(
                    "could not write note store at {}: {}",
                    self.path.display(),
                    e
                );
                false
            }
        }
    }
}
