use std::path::Path;

use crate::errors::CoreError;
use crate::models::document::Document;

/// High-level storage operations: save/load the document as a
/// pretty-printed JSON file or string.
pub struct StorageManager;

impl StorageManager {
    /// Serialize a document to the pretty-printed wire format.
    pub fn to_json_string(document: &Document) -> Result<String, CoreError> {
        serde_json::to_string_pretty(document)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize document: {e}")))
    }

    /// Parse a stored JSON document.
    /// Missing numeric fields and numeric strings are coerced to
    /// numbers by the model; anything structurally broken is a
    /// `MalformedDocument` error.
    pub fn from_json_str(json: &str) -> Result<Document, CoreError> {
        serde_json::from_str(json)
            .map_err(|e| CoreError::MalformedDocument(e.to_string()))
    }

    /// Load the document from disk.
    ///
    /// A missing file yields the default empty document — first visit,
    /// nothing stored yet. A file that exists but fails to parse is an
    /// error; callers that must not fail (page load) use
    /// [`StorageManager::load_or_default`].
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Document, CoreError> {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no stored document at {}, starting empty", path.display());
                return Ok(Document::default());
            }
            Err(e) => return Err(e.into()),
        };
        Self::from_json_str(&json)
    }

    /// Load the document from disk, falling back to the default empty
    /// document when the stored file is malformed. The fallback is
    /// logged — the broken file stays on disk until the next save
    /// overwrites it.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Document {
        match Self::load_from_file(path.as_ref()) {
            Ok(document) => document,
            Err(e) => {
                log::warn!(
                    "stored document at {} is unreadable ({e}), falling back to empty",
                    path.as_ref().display()
                );
                Document::default()
            }
        }
    }

    /// Write the document to disk as a full overwrite of prior state.
    /// Creates parent directories on first save.
    pub fn save_to_file(document: &Document, path: impl AsRef<Path>) -> Result<(), CoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = Self::to_json_string(document)?;
        std::fs::write(path, json)?;
        log::info!("saved document to {}", path.display());
        Ok(())
    }
}
