use crate::models::coerce::sanitize;
use crate::models::document::{Document, LogEntry};
use crate::models::summary::{DailyChange, HoldingSummary, PortfolioSummary};

/// Computes portfolio totals, gain/loss, and return percentages.
///
/// Pure business logic — no I/O, no state. Both the public and admin
/// views consume the same summary, so the numbers can never diverge
/// between them.
pub struct ValuationService;

impl ValuationService {
    pub fn new() -> Self {
        Self
    }

    /// Compute the full portfolio summary for a document.
    ///
    /// Division-by-zero policy: every percentage whose denominator is 0
    /// is defined as 0, not an error. Every output is finite.
    #[must_use]
    pub fn summarize(&self, document: &Document) -> PortfolioSummary {
        let mut portfolio_value = 0.0;
        let mut cost_basis = 0.0;

        for holding in &document.holdings {
            let qty = sanitize(holding.qty);
            portfolio_value += sanitize(holding.market_price) * qty;
            cost_basis += sanitize(holding.avg_price) * qty;
        }

        let cash_balance = sanitize(document.cash_balance);
        let initial_deposit = sanitize(document.initial_deposit);

        // Manual deposit overrides the computed cost basis when set
        let baseline_deposit = if initial_deposit > 0.0 {
            initial_deposit
        } else {
            cost_basis
        };

        let total_wealth = portfolio_value + cash_balance;
        let total_gain = total_wealth - baseline_deposit;
        let return_pct = if baseline_deposit != 0.0 {
            (total_gain / baseline_deposit) * 100.0
        } else {
            0.0
        };
        let since_start_pct = if cost_basis != 0.0 {
            (portfolio_value - cost_basis) / cost_basis * 100.0
        } else {
            0.0
        };

        PortfolioSummary {
            portfolio_value: sanitize(portfolio_value),
            cost_basis: sanitize(cost_basis),
            baseline_deposit: sanitize(baseline_deposit),
            cash_balance,
            total_wealth: sanitize(total_wealth),
            total_gain: sanitize(total_gain),
            return_pct: sanitize(return_pct),
            since_start_pct: sanitize(since_start_pct),
            daily_change: self.daily_change(&document.logs),
        }
    }

    /// Per-holding rows with derived valuation fields, in document order.
    #[must_use]
    pub fn holding_summaries(&self, document: &Document) -> Vec<HoldingSummary> {
        document
            .holdings
            .iter()
            .map(|h| {
                let qty = sanitize(h.qty);
                let avg_price = sanitize(h.avg_price);
                let market_price = sanitize(h.market_price);
                let gain_loss = (market_price - avg_price) * qty;
                let gain_loss_pct = if avg_price != 0.0 {
                    (market_price - avg_price) / avg_price * 100.0
                } else {
                    0.0
                };
                HoldingSummary {
                    symbol: h.symbol.clone(),
                    qty,
                    avg_price,
                    market_price,
                    market_value: sanitize(market_price * qty),
                    gain_loss: sanitize(gain_loss),
                    gain_loss_pct: sanitize(gain_loss_pct),
                    notes: h.notes.clone(),
                }
            })
            .collect()
    }

    /// Day-over-day change from the last two log entries by position.
    /// Returns `None` when fewer than two entries exist.
    #[must_use]
    pub fn daily_change(&self, logs: &[LogEntry]) -> Option<DailyChange> {
        if logs.len() < 2 {
            return None;
        }
        let latest = sanitize(logs[logs.len() - 1].value);
        let previous = sanitize(logs[logs.len() - 2].value);
        let change = latest - previous;
        let change_pct = if previous != 0.0 {
            change / previous * 100.0
        } else {
            0.0
        };
        Some(DailyChange {
            change: sanitize(change),
            change_pct: sanitize(change_pct),
        })
    }
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new()
    }
}
