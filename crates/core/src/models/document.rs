use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::coerce;

/// A single stock position.
///
/// `symbol` is uppercased on construction; the reconciler repeats the
/// normalization on every form submission, so a stored document only
/// contains uppercase symbols if it went through either path. The model
/// itself does not reject duplicate symbols — dedup is a reconciler
/// concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Ticker symbol, uppercased (e.g., "AAPL")
    pub symbol: String,

    /// Number of units held
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub qty: f64,

    /// Cost basis per unit
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub avg_price: f64,

    /// Current value per unit
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub market_price: f64,

    /// Optional free-text notes (e.g., sector, memo)
    #[serde(default)]
    pub notes: String,
}

impl Holding {
    pub fn new(
        symbol: impl Into<String>,
        qty: f64,
        avg_price: f64,
        market_price: f64,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into().trim().to_uppercase(),
            qty,
            avg_price,
            market_price,
            notes: notes.into(),
        }
    }
}

/// A dated snapshot of total portfolio value.
/// `date` acts as the natural key: at most one entry per date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,

    /// Portfolio total on that date
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub value: f64,
}

impl LogEntry {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// The main data container. Everything in here gets serialized to a
/// single JSON document and saved wholesale — there is no partial or
/// incremental persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Current stock positions, in display (insertion) order
    #[serde(default)]
    pub holdings: Vec<Holding>,

    /// Daily portfolio-value series, ascending by date after any mutation
    #[serde(default)]
    pub logs: Vec<LogEntry>,

    /// Uninvested cash; may be negative, taken at face value
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub cash_balance: f64,

    /// Manual baseline for gain/return calculations. When `> 0` it
    /// overrides the computed cost basis; `<= 0` means "not set".
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub initial_deposit: f64,

    /// Whether the public view lists individual holdings.
    /// Gates only the listing — aggregate totals are always public.
    #[serde(default = "default_true")]
    pub show_holdings_public: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Document {
    fn default() -> Self {
        Self {
            holdings: Vec::new(),
            logs: Vec::new(),
            cash_balance: 0.0,
            initial_deposit: 0.0,
            show_holdings_public: true,
        }
    }
}

impl Document {
    /// The demo document served when nothing has been stored yet,
    /// matching the seeded dashboard content.
    #[must_use]
    pub fn demo() -> Self {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap_or_default();
        Self {
            holdings: vec![
                Holding::new("ABC", 100.0, 50.0, 55.0, "Demo holding - Technology sector"),
                Holding::new("XYZ", 200.0, 30.0, 28.0, "Demo holding - Finance sector"),
            ],
            logs: vec![
                LogEntry::new(d(2025, 11, 20), 15_000.0),
                LogEntry::new(d(2025, 11, 21), 15_250.0),
                LogEntry::new(d(2025, 11, 22), 15_100.0),
                LogEntry::new(d(2025, 11, 23), 15_500.0),
                LogEntry::new(d(2025, 11, 24), 15_900.0),
                LogEntry::new(d(2025, 11, 25), 16_100.0),
            ],
            cash_balance: 50_000.0,
            initial_deposit: 0.0,
            show_holdings_public: true,
        }
    }
}
