use serde::{Deserialize, Serialize};

/// Day-over-day movement taken from the last two entries of the log
/// series. Given the sort invariant on logs, these are the two most
/// recent dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyChange {
    /// Absolute change: latest value minus previous value
    pub change: f64,

    /// Percentage change against the previous value; 0 when the
    /// previous value is 0
    pub change_pct: f64,
}

/// Summary of a single holding, with derived valuation fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingSummary {
    /// Ticker symbol
    pub symbol: String,

    /// Units held
    pub qty: f64,

    /// Cost basis per unit
    pub avg_price: f64,

    /// Current value per unit
    pub market_price: f64,

    /// market_price × qty
    pub market_value: f64,

    /// (market_price − avg_price) × qty
    pub gain_loss: f64,

    /// (market_price − avg_price) / avg_price × 100; 0 when avg_price is 0
    pub gain_loss_pct: f64,

    /// Free-text notes carried through for display
    pub notes: String,
}

/// Summary of the entire portfolio, shared by the public and admin views.
/// All fields are finite — NaN and infinities are normalized to 0
/// before they land here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Σ market_price × qty over holdings
    pub portfolio_value: f64,

    /// Σ avg_price × qty over holdings
    pub cost_basis: f64,

    /// The gain/return reference: the manual initial deposit when set
    /// (> 0), otherwise the computed cost basis
    pub baseline_deposit: f64,

    /// Uninvested cash, carried through from the document
    pub cash_balance: f64,

    /// portfolio_value + cash_balance
    pub total_wealth: f64,

    /// total_wealth − baseline_deposit
    pub total_gain: f64,

    /// total_gain / baseline_deposit × 100; 0 when the baseline is 0
    pub return_pct: f64,

    /// Pure holdings performance: (portfolio_value − cost_basis) /
    /// cost_basis × 100, ignoring cash and the deposit override;
    /// 0 when the cost basis is 0
    pub since_start_pct: f64,

    /// Day-over-day movement; `None` when fewer than two log entries exist
    pub daily_change: Option<DailyChange>,
}
