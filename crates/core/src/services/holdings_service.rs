use crate::errors::CoreError;
use crate::models::coerce::sanitize;
use crate::models::document::{Document, Holding};

/// Form input for adding or updating a holding. Numeric fields are
/// expected to have gone through the usual coercion at the boundary;
/// NaN is treated as 0 here as a second line of defense.
#[derive(Debug, Clone)]
pub struct HoldingInput {
    pub symbol: String,
    pub qty: f64,
    pub avg_price: f64,
    pub market_price: f64,
    pub notes: String,
}

/// What an upsert did, so the UI layer can phrase its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldingChange {
    /// A new holding was appended at the end
    Appended,
    /// An existing holding was overwritten at this index
    UpdatedAt(usize),
}

/// Mutation operations over the holdings list.
///
/// Either the whole operation applies or nothing does — a rejected
/// input leaves the document untouched.
pub struct HoldingsService;

impl HoldingsService {
    pub fn new() -> Self {
        Self
    }

    /// Add or update a holding from form input.
    ///
    /// Rejects when the symbol is empty after trimming/uppercasing or
    /// the quantity is zero. With an explicit edit target, the entry at
    /// that index is replaced. Otherwise a holding with the same
    /// normalized symbol is overwritten in place (first match wins),
    /// and only when no match exists is the entry appended.
    pub fn upsert(
        &self,
        document: &mut Document,
        editing: Option<usize>,
        input: &HoldingInput,
    ) -> Result<HoldingChange, CoreError> {
        let symbol = input.symbol.trim().to_uppercase();
        let qty = sanitize(input.qty);

        if symbol.is_empty() || qty == 0.0 {
            return Err(CoreError::ValidationError(
                "Symbol and quantity required".into(),
            ));
        }

        let holding = Holding::new(
            symbol.clone(),
            qty,
            sanitize(input.avg_price),
            sanitize(input.market_price),
            input.notes.clone(),
        );

        if let Some(index) = editing {
            let slot = document.holdings.get_mut(index).ok_or_else(|| {
                CoreError::ValidationError(format!("No holding at index {index} to update"))
            })?;
            *slot = holding;
            return Ok(HoldingChange::UpdatedAt(index));
        }

        if let Some(index) = document.holdings.iter().position(|h| h.symbol == symbol) {
            document.holdings[index] = holding;
            return Ok(HoldingChange::UpdatedAt(index));
        }

        document.holdings.push(holding);
        Ok(HoldingChange::Appended)
    }

    /// Remove the holding at `index`. Out-of-bounds is a no-op;
    /// returns whether anything was removed.
    pub fn delete(&self, document: &mut Document, index: usize) -> bool {
        if index < document.holdings.len() {
            document.holdings.remove(index);
            true
        } else {
            false
        }
    }
}

impl Default for HoldingsService {
    fn default() -> Self {
        Self::new()
    }
}
