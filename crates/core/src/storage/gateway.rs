use std::path::{Path, PathBuf};

use crate::errors::CoreError;
use crate::models::document::Document;

use super::manager::StorageManager;

/// Narrow interface to durable storage. The document is always read and
/// written wholesale — a save is a full overwrite of prior state.
pub trait PersistenceGateway {
    /// Load the stored document. Returns the default empty document
    /// when nothing has been stored; a malformed stored document also
    /// falls back to the default rather than failing the page load.
    fn load(&self) -> Result<Document, CoreError>;

    /// Overwrite the stored document.
    fn save(&self, document: &Document) -> Result<(), CoreError>;
}

/// File-backed gateway: one pretty-printed JSON file per dashboard.
pub struct JsonFileGateway {
    path: PathBuf,
}

impl JsonFileGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceGateway for JsonFileGateway {
    fn load(&self) -> Result<Document, CoreError> {
        // I/O errors other than "not found" still surface; only a
        // parse failure is downgraded to the documented fallback.
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(match StorageManager::from_json_str(&json) {
                Ok(document) => document,
                Err(e) => {
                    log::warn!(
                        "stored document at {} is malformed ({e}), serving empty document",
                        self.path.display()
                    );
                    Document::default()
                }
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Document::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, document: &Document) -> Result<(), CoreError> {
        StorageManager::save_to_file(document, &self.path)
    }
}
