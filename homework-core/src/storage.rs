//! Whole-document persistence.
//!
//! The store always hands over the complete document; backends only need to
//! overwrite one blob and read it back.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::constants::STORAGE_KEY;
use crate::document::Document;
use crate::error::{HomeworkError, HomeworkResult};

pub trait Storage {
    /// The saved document, or `None` if nothing has been saved yet.
    fn load(&self) -> HomeworkResult<Option<Document>>;

    /// Replace the saved document.
    fn save(&mut self, document: &Document) -> HomeworkResult<()>;
}

/// Document kept as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStorage { path: path.into() }
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> HomeworkResult<Option<Document>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            HomeworkError::Persistence(format!("Could not read {}: {e}", self.path.display()))
        })?;

        let document = serde_json::from_str(&content).map_err(|e| {
            HomeworkError::Persistence(format!("Could not parse {}: {e}", self.path.display()))
        })?;

        Ok(Some(document))
    }

    fn save(&mut self, document: &Document) -> HomeworkResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                HomeworkError::Persistence(format!("Could not create {}: {e}", parent.display()))
            })?;
        }

        let content = serde_json::to_string_pretty(document)?;

        // Sibling temp file, then rename over the real one
        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        std::fs::write(&temp, content).map_err(|e| {
            HomeworkError::Persistence(format!("Could not write {}: {e}", temp.display()))
        })?;
        std::fs::rename(&temp, &self.path).map_err(|e| {
            HomeworkError::Persistence(format!("Could not replace {}: {e}", self.path.display()))
        })?;

        Ok(())
    }
}

/// Key-value storage held in memory, with the document serialized under
/// a single key the same way a browser-style local store would keep it.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with an arbitrary (possibly invalid) blob.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(STORAGE_KEY.to_string(), raw.into());
        MemoryStorage { entries }
    }

    pub fn raw(&self) -> Option<&str> {
        self.entries.get(STORAGE_KEY).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> HomeworkResult<Option<Document>> {
        match self.raw() {
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| {
                    HomeworkError::Persistence(format!("Stored document is corrupt: {e}"))
                }),
            None => Ok(None),
        }
    }

    fn save(&mut self, document: &Document) -> HomeworkResult<()> {
        let raw = serde_json::to_string(document)?;
        self.entries.insert(STORAGE_KEY.to_string(), raw);
        Ok(())
    }
}
