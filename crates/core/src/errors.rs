use thiserror::Error;

/// Unified error type for the entire portfolio-board-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    // ── Access Gate ─────────────────────────────────────────────────
    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    // ── Persistence ─────────────────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::MalformedDocument(e.to_string())
    }
}
