use crate::errors::CoreError;
use crate::models::document::Document;

/// On-demand snapshots of the document for download/archival.
/// Pure projections — exporting never touches stored state.
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Pretty-printed JSON snapshot of the exact document contents.
    pub fn to_json(&self, document: &Document) -> Result<String, CoreError> {
        serde_json::to_string_pretty(document)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize document: {e}")))
    }

    /// Self-contained HTML snapshot embedding the same data for
    /// archival viewing in a browser.
    pub fn to_html(&self, document: &Document) -> Result<String, CoreError> {
        let json = self.to_json(document)?;
        Ok(format!(
            "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>Portfolio Snapshot</title></head>\n\
             <body><h1>Portfolio Snapshot</h1><pre>{}</pre></body></html>",
            escape_html(&json)
        ))
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal HTML escaping for text embedded in the snapshot.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
