use serde::{Deserialize, Serialize};

use super::document::LogEntry;
use super::summary::{HoldingSummary, PortfolioSummary};

/// Display state for the public dashboard.
///
/// The core computes all the numbers — the frontend only renders.
/// `holdings` is `None` when the admin has hidden the listing; the
/// summary and log series are always present regardless of that flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicView {
    /// Aggregate totals, always shown
    pub summary: PortfolioSummary,

    /// Per-holding rows, or `None` when hidden from the public
    pub holdings: Option<Vec<HoldingSummary>>,

    /// Value history for the trend chart
    pub logs: Vec<LogEntry>,
}

/// Display state for the admin editor. Nothing is ever suppressed here;
/// the visibility flag is carried through so the editor can show its
/// current setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminView {
    pub summary: PortfolioSummary,

    pub holdings: Vec<HoldingSummary>,

    pub logs: Vec<LogEntry>,

    /// Index of the holding currently targeted by the edit form, if any
    pub editing: Option<usize>,

    /// Whether the in-memory document differs from the last save/load
    pub dirty: bool,

    /// Current public-visibility setting for the holdings listing
    pub show_holdings_public: bool,
}
