use chrono::NaiveDate;
use portfolio_board_core::models::coerce::{sanitize, to_number_or_zero};
use portfolio_board_core::models::document::{Document, Holding, LogEntry};
use serde_json::json;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Holding
// ═══════════════════════════════════════════════════════════════════

mod holding {
    use super::*;

    #[test]
    fn new_uppercases_lowercase_symbol() {
        let h = Holding::new("aapl", 10.0, 50.0, 55.0, "");
        assert_eq!(h.symbol, "AAPL");
    }

    #[test]
    fn new_uppercases_mixed_case_symbol() {
        let h = Holding::new("AbC", 1.0, 1.0, 1.0, "");
        assert_eq!(h.symbol, "ABC");
    }

    #[test]
    fn new_trims_symbol() {
        let h = Holding::new("  xyz  ", 1.0, 1.0, 1.0, "");
        assert_eq!(h.symbol, "XYZ");
    }

    #[test]
    fn new_preserves_numeric_fields() {
        let h = Holding::new("ABC", 100.0, 50.0, 55.0, "tech");
        assert_eq!(h.qty, 100.0);
        assert_eq!(h.avg_price, 50.0);
        assert_eq!(h.market_price, 55.0);
        assert_eq!(h.notes, "tech");
    }

    #[test]
    fn serde_uses_camel_case_wire_names() {
        let h = Holding::new("ABC", 100.0, 50.0, 55.0, "note");
        let v = serde_json::to_value(&h).unwrap();
        assert!(v.get("avgPrice").is_some());
        assert!(v.get("marketPrice").is_some());
        assert!(v.get("avg_price").is_none());
    }

    #[test]
    fn serde_roundtrip_json() {
        let h = Holding::new("ABC", 100.0, 50.0, 55.0, "note");
        let json = serde_json::to_string(&h).unwrap();
        let back: Holding = serde_json::from_str(&json).unwrap();
        assert_eq!(h, back);
    }

    #[test]
    fn deserialize_coerces_numeric_strings() {
        let h: Holding = serde_json::from_value(json!({
            "symbol": "ABC",
            "qty": "100",
            "avgPrice": "50.5",
            "marketPrice": 55,
        }))
        .unwrap();
        assert_eq!(h.qty, 100.0);
        assert_eq!(h.avg_price, 50.5);
        assert_eq!(h.market_price, 55.0);
        assert_eq!(h.notes, "");
    }

    #[test]
    fn deserialize_missing_numerics_default_to_zero() {
        let h: Holding = serde_json::from_value(json!({ "symbol": "ABC" })).unwrap();
        assert_eq!(h.qty, 0.0);
        assert_eq!(h.avg_price, 0.0);
        assert_eq!(h.market_price, 0.0);
    }

    #[test]
    fn deserialize_null_and_garbage_numerics_become_zero() {
        let h: Holding = serde_json::from_value(json!({
            "symbol": "ABC",
            "qty": null,
            "avgPrice": "not a number",
            "marketPrice": true,
        }))
        .unwrap();
        assert_eq!(h.qty, 0.0);
        assert_eq!(h.avg_price, 0.0);
        assert_eq!(h.market_price, 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  LogEntry
// ═══════════════════════════════════════════════════════════════════

mod log_entry {
    use super::*;

    #[test]
    fn date_serializes_as_iso_string() {
        let l = LogEntry::new(d(2025, 1, 2), 110.0);
        let v = serde_json::to_value(&l).unwrap();
        assert_eq!(v["date"], "2025-01-02");
    }

    #[test]
    fn serde_roundtrip() {
        let l = LogEntry::new(d(2025, 11, 20), 15_000.0);
        let json = serde_json::to_string(&l).unwrap();
        let back: LogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(l, back);
    }

    #[test]
    fn deserialize_coerces_string_value() {
        let l: LogEntry =
            serde_json::from_value(json!({ "date": "2025-01-01", "value": "100" })).unwrap();
        assert_eq!(l.value, 100.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Document
// ═══════════════════════════════════════════════════════════════════

mod document {
    use super::*;

    #[test]
    fn default_is_empty() {
        let doc = Document::default();
        assert!(doc.holdings.is_empty());
        assert!(doc.logs.is_empty());
        assert_eq!(doc.cash_balance, 0.0);
        assert_eq!(doc.initial_deposit, 0.0);
        assert!(doc.show_holdings_public);
    }

    #[test]
    fn demo_matches_seed_content() {
        let doc = Document::demo();
        assert_eq!(doc.holdings.len(), 2);
        assert_eq!(doc.holdings[0].symbol, "ABC");
        assert_eq!(doc.logs.len(), 6);
        assert_eq!(doc.cash_balance, 50_000.0);
        assert!(doc.show_holdings_public);
    }

    #[test]
    fn serde_wire_names() {
        let doc = Document::default();
        let v = serde_json::to_value(&doc).unwrap();
        assert!(v.get("cashBalance").is_some());
        assert!(v.get("initialDeposit").is_some());
        assert!(v.get("showHoldingsPublic").is_some());
    }

    #[test]
    fn deserialize_empty_object_fills_defaults() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, Document::default());
    }

    #[test]
    fn deserialize_missing_visibility_defaults_true() {
        let doc: Document =
            serde_json::from_value(json!({ "holdings": [], "logs": [] })).unwrap();
        assert!(doc.show_holdings_public);
    }

    #[test]
    fn negative_cash_balance_is_preserved() {
        let doc: Document = serde_json::from_value(json!({ "cashBalance": -250.5 })).unwrap();
        assert_eq!(doc.cash_balance, -250.5);
    }

    #[test]
    fn serde_roundtrip_full_document() {
        let doc = Document::demo();
        let json = serde_json::to_string_pretty(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn clone_preserves_holdings() {
        let doc = Document::demo();
        let c = doc.clone();
        assert_eq!(c.holdings, doc.holdings);
        assert_eq!(c.logs, doc.logs);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Coercion helpers
// ═══════════════════════════════════════════════════════════════════

mod coerce {
    use super::*;

    #[test]
    fn number_passes_through() {
        assert_eq!(to_number_or_zero(&json!(42.5)), 42.5);
    }

    #[test]
    fn numeric_string_parses() {
        assert_eq!(to_number_or_zero(&json!("  15.25 ")), 15.25);
    }

    #[test]
    fn garbage_string_is_zero() {
        assert_eq!(to_number_or_zero(&json!("abc")), 0.0);
    }

    #[test]
    fn null_is_zero() {
        assert_eq!(to_number_or_zero(&json!(null)), 0.0);
    }

    #[test]
    fn bool_is_zero() {
        assert_eq!(to_number_or_zero(&json!(true)), 0.0);
    }

    #[test]
    fn array_is_zero() {
        assert_eq!(to_number_or_zero(&json!([1, 2])), 0.0);
    }

    #[test]
    fn sanitize_keeps_finite() {
        assert_eq!(sanitize(-3.5), -3.5);
        assert_eq!(sanitize(0.0), 0.0);
    }

    #[test]
    fn sanitize_flattens_nan_and_infinity() {
        assert_eq!(sanitize(f64::NAN), 0.0);
        assert_eq!(sanitize(f64::INFINITY), 0.0);
        assert_eq!(sanitize(f64::NEG_INFINITY), 0.0);
    }
}
