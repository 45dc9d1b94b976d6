pub mod auth;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use chrono::NaiveDate;

use auth::{ensure_authorized, AccessGate};
use errors::CoreError;
use models::document::Document;
use models::summary::PortfolioSummary;
use models::view::{AdminView, PublicView};
use services::export_service::ExportService;
use services::holdings_service::{HoldingChange, HoldingInput, HoldingsService};
use services::logs_service::{LogChange, LogsService};
use services::valuation_service::ValuationService;
use services::view_service::ViewService;
use storage::gateway::PersistenceGateway;

/// Main entry point for the Portfolio Board core library.
///
/// Holds the working copy of the document for an editing session plus
/// the services that operate on it. Mutations are synchronous and apply
/// in full before the next view is computed; nothing is persisted until
/// an explicit [`PortfolioBoard::save`].
#[must_use]
pub struct PortfolioBoard {
    document: Document,
    holdings_service: HoldingsService,
    logs_service: LogsService,
    valuation_service: ValuationService,
    view_service: ViewService,
    export_service: ExportService,
    /// Index of the holding targeted by the edit form, if any.
    /// While set, upserts replace that entry instead of appending.
    editing: Option<usize>,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for PortfolioBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioBoard")
            .field("holdings", &self.document.holdings.len())
            .field("logs", &self.document.logs.len())
            .field("editing", &self.editing)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl PortfolioBoard {
    /// Start an editing session over an empty document.
    pub fn create_new() -> Self {
        Self::build(Document::default())
    }

    /// Start an editing session over an existing document.
    pub fn from_document(document: Document) -> Self {
        Self::build(document)
    }

    /// Load the stored document through the gateway and start a session.
    pub fn load(gateway: &dyn PersistenceGateway) -> Result<Self, CoreError> {
        let document = gateway.load()?;
        Ok(Self::build(document))
    }

    /// The current working copy.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    // ── Holdings ────────────────────────────────────────────────────

    /// Add or update a holding from form input.
    ///
    /// With an edit target selected, the targeted entry is replaced and
    /// the target cleared; otherwise upsert-by-symbol semantics apply.
    pub fn upsert_holding(&mut self, input: &HoldingInput) -> Result<HoldingChange, CoreError> {
        let change = self
            .holdings_service
            .upsert(&mut self.document, self.editing, input)?;
        self.editing = None;
        self.dirty = true;
        Ok(change)
    }

    /// Remove the holding at `index`. Out-of-bounds is a no-op.
    /// Returns whether anything was removed. The confirmation prompt is
    /// a UI concern and happens before this call.
    pub fn delete_holding(&mut self, index: usize) -> bool {
        let removed = self.holdings_service.delete(&mut self.document, index);
        if removed {
            if self.editing == Some(index) {
                self.editing = None;
            }
            self.dirty = true;
        }
        removed
    }

    /// Mark the holding at `index` as being edited, so the next upsert
    /// replaces it instead of appending.
    pub fn begin_edit(&mut self, index: usize) -> Result<(), CoreError> {
        if index >= self.document.holdings.len() {
            return Err(CoreError::ValidationError(format!(
                "No holding at index {index} to edit"
            )));
        }
        self.editing = Some(index);
        Ok(())
    }

    /// Return to append mode without changing anything.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// The current edit target, if any.
    #[must_use]
    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    // ── Daily Logs ──────────────────────────────────────────────────

    /// Insert or overwrite the log entry for a date.
    pub fn upsert_log(&mut self, date: NaiveDate, value: f64) -> Result<LogChange, CoreError> {
        let change = self.logs_service.upsert(&mut self.document, date, value)?;
        self.dirty = true;
        Ok(change)
    }

    /// Insert or overwrite a log entry from raw form input.
    /// The date string is trimmed and parsed as `YYYY-MM-DD`; an empty
    /// or unparsable date is a validation error.
    pub fn upsert_log_str(&mut self, date: &str, value: f64) -> Result<LogChange, CoreError> {
        let trimmed = date.trim();
        if trimmed.is_empty() {
            return Err(CoreError::ValidationError("Date and value required".into()));
        }
        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map_err(|_| CoreError::ValidationError(format!("Invalid date '{trimmed}'")))?;
        self.upsert_log(date, value)
    }

    /// Remove the log entry at `index`. Out-of-bounds is a no-op.
    pub fn delete_log(&mut self, index: usize) -> bool {
        let removed = self.logs_service.delete(&mut self.document, index);
        if removed {
            self.dirty = true;
        }
        removed
    }

    // ── Account Fields ──────────────────────────────────────────────

    /// Set the uninvested cash balance. Any value is accepted,
    /// including negative.
    pub fn set_cash_balance(&mut self, amount: f64) {
        self.document.cash_balance = models::coerce::sanitize(amount);
        self.dirty = true;
    }

    /// Set the manual gain/return baseline. Must be positive — a
    /// non-positive deposit means "not set" and is entered by never
    /// setting one, not through this form.
    pub fn set_initial_deposit(&mut self, amount: f64) -> Result<(), CoreError> {
        let amount = models::coerce::sanitize(amount);
        if amount <= 0.0 {
            return Err(CoreError::ValidationError(
                "Initial deposit must be greater than 0".into(),
            ));
        }
        self.document.initial_deposit = amount;
        self.dirty = true;
        Ok(())
    }

    /// Show or hide the holdings listing on the public dashboard.
    /// Never affects the admin view or what gets persisted.
    pub fn set_show_holdings_public(&mut self, visible: bool) {
        self.document.show_holdings_public = visible;
        self.dirty = true;
    }

    // ── Views & Summary ─────────────────────────────────────────────

    /// Aggregate totals for the current working copy.
    #[must_use]
    pub fn summary(&self) -> PortfolioSummary {
        self.valuation_service.summarize(&self.document)
    }

    /// Display state for the public dashboard.
    #[must_use]
    pub fn public_view(&self) -> PublicView {
        self.view_service.public_view(&self.document)
    }

    /// Display state for the admin editor.
    #[must_use]
    pub fn admin_view(&self) -> AdminView {
        self.view_service
            .admin_view(&self.document, self.editing, self.dirty)
    }

    // ── Persistence ─────────────────────────────────────────────────

    /// Persist the working copy through the gateway as a full
    /// overwrite. Requires an authorized gate; on failure the in-memory
    /// state is untouched so the save can be retried.
    pub fn save(
        &mut self,
        gate: &dyn AccessGate,
        gateway: &dyn PersistenceGateway,
    ) -> Result<(), CoreError> {
        ensure_authorized(gate)?;
        gateway.save(&self.document)?;
        self.dirty = false;
        Ok(())
    }

    /// Discard in-memory edits and reload from the gateway.
    /// Last writer wins at document granularity — no merge.
    pub fn reload(&mut self, gateway: &dyn PersistenceGateway) -> Result<(), CoreError> {
        self.document = gateway.load()?;
        self.editing = None;
        self.dirty = false;
        Ok(())
    }

    /// Returns `true` if the working copy has been modified since the
    /// last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Pretty-printed JSON snapshot of the working copy.
    pub fn export_json(&self) -> Result<String, CoreError> {
        self.export_service.to_json(&self.document)
    }

    /// HTML snapshot embedding the same data for archival viewing.
    pub fn export_html(&self) -> Result<String, CoreError> {
        self.export_service.to_html(&self.document)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(document: Document) -> Self {
        Self {
            document,
            holdings_service: HoldingsService::new(),
            logs_service: LogsService::new(),
            valuation_service: ValuationService::new(),
            view_service: ViewService::new(),
            export_service: ExportService::new(),
            editing: None,
            dirty: false,
        }
    }
}
