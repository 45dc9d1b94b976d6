use crate::models::document::Document;
use crate::models::view::{AdminView, PublicView};
use crate::services::valuation_service::ValuationService;

/// Projects a document into display state for the two dashboards.
pub struct ViewService {
    valuation_service: ValuationService,
}

impl ViewService {
    pub fn new() -> Self {
        Self {
            valuation_service: ValuationService::new(),
        }
    }

    /// Read-only public projection. The holdings listing is suppressed
    /// when `show_holdings_public` is off; the summary and log series
    /// are rendered regardless.
    #[must_use]
    pub fn public_view(&self, document: &Document) -> PublicView {
        let holdings = if document.show_holdings_public {
            Some(self.valuation_service.holding_summaries(document))
        } else {
            None
        };
        PublicView {
            summary: self.valuation_service.summarize(document),
            holdings,
            logs: document.logs.clone(),
        }
    }

    /// Admin projection: same numbers, nothing suppressed, plus the
    /// editor state the mutation UI needs.
    #[must_use]
    pub fn admin_view(&self, document: &Document, editing: Option<usize>, dirty: bool) -> AdminView {
        AdminView {
            summary: self.valuation_service.summarize(document),
            holdings: self.valuation_service.holding_summaries(document),
            logs: document.logs.clone(),
            editing,
            dirty,
            show_holdings_public: document.show_holdings_public,
        }
    }
}

impl Default for ViewService {
    fn default() -> Self {
        Self::new()
    }
}
