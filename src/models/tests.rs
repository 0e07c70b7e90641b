#![allow(clippy::unwrap_used)]

use serde_json::json;

use super::*;

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_all_fixed_and_ordered() {
    let all = Category::all();
    assert_eq!(all.len(), 8);
    assert_eq!(all[0], Category::FoodDrink);
    assert_eq!(all[7], Category::Other);
}

#[test]
fn test_category_as_str() {
    assert_eq!(Category::FoodDrink.as_str(), "Food & Drink");
    assert_eq!(Category::Transportation.as_str(), "Transportation");
    assert_eq!(Category::Bills.as_str(), "Bills");
    assert_eq!(Category::Other.as_str(), "Other");
}

#[test]
fn test_category_parse() {
    assert_eq!(Category::parse("Food & Drink"), Some(Category::FoodDrink));
    assert_eq!(Category::parse("food"), Some(Category::FoodDrink));
    assert_eq!(Category::parse("TRANSPORT"), Some(Category::Transportation));
    assert_eq!(Category::parse("  health "), Some(Category::Health));
    assert_eq!(Category::parse("groceries"), None);
    assert_eq!(Category::parse(""), None);
}

#[test]
fn test_category_roundtrip() {
    for c in Category::all() {
        assert_eq!(Category::parse(c.as_str()), Some(*c), "roundtrip {c}");
    }
}

#[test]
fn test_category_cycle_wraps() {
    assert_eq!(Category::Other.next(), Category::FoodDrink);
    assert_eq!(Category::FoodDrink.prev(), Category::Other);
    assert_eq!(Category::Bills.next(), Category::Health);
}

#[test]
fn test_category_display() {
    assert_eq!(format!("{}", Category::Entertainment), "Entertainment");
}

// ── MonthKey ──────────────────────────────────────────────────

#[test]
fn test_month_key_from_iso() {
    assert_eq!(
        MonthKey::from_iso("2024-03-15"),
        Some(MonthKey::new(2024, 3))
    );
    assert_eq!(
        MonthKey::from_iso(" 2024-12-01 "),
        Some(MonthKey::new(2024, 12))
    );
}

#[test]
fn test_month_key_rejects_non_dates() {
    assert_eq!(MonthKey::from_iso(""), None);
    assert_eq!(MonthKey::from_iso("not-a-date"), None);
    assert_eq!(MonthKey::from_iso("2024-13-01"), None);
    assert_eq!(MonthKey::from_iso("2024-02-30"), None);
}

#[test]
fn test_month_key_display_zero_pads() {
    assert_eq!(MonthKey::new(2024, 6).to_string(), "2024-06");
    assert_eq!(MonthKey::new(2024, 11).to_string(), "2024-11");
}

#[test]
fn test_same_month_same_key() {
    assert_eq!(
        MonthKey::from_iso("2024-06-01"),
        MonthKey::from_iso("2024-06-30")
    );
    assert_ne!(
        MonthKey::from_iso("2024-06-01"),
        MonthKey::from_iso("2023-06-01")
    );
}

// ── FilterState ───────────────────────────────────────────────

#[test]
fn test_filter_month_key() {
    let f = FilterState {
        category: None,
        month: 6,
        year: 2024,
    };
    assert_eq!(f.month_key(), MonthKey::new(2024, 6));
}

#[test]
fn test_filter_month_navigation_wraps() {
    let mut f = FilterState {
        category: None,
        month: 12,
        year: 2024,
    };
    f.next_month();
    assert_eq!((f.month, f.year), (1, 2025));
    f.prev_month();
    assert_eq!((f.month, f.year), (12, 2024));

    f.month = 1;
    f.prev_month();
    assert_eq!((f.month, f.year), (12, 2023));
}

// ── Amount normalization ──────────────────────────────────────

#[test]
fn test_normalize_amount_strips_currency_junk() {
    assert_eq!(normalize_amount("Rp12.500"), 12500.0);
    assert_eq!(normalize_amount("12500"), 12500.0);
    assert_eq!(normalize_amount("Rp 7.000"), 7000.0);
    assert_eq!(normalize_amount("1.234.567"), 1234567.0);
}

#[test]
fn test_normalize_amount_plain_decimals() {
    assert_eq!(normalize_amount("12.5"), 12.5);
    assert_eq!(normalize_amount("0.01"), 0.01);
    assert_eq!(normalize_amount("42"), 42.0);
}

#[test]
fn test_normalize_amount_unparsable_is_nan() {
    assert!(normalize_amount("").is_nan());
    assert!(normalize_amount("abc").is_nan());
    assert!(normalize_amount("Rp").is_nan());
}

// ── ExpenseForm ───────────────────────────────────────────────

fn filled_form() -> ExpenseForm {
    let mut form = ExpenseForm::new("2024-06-01".into());
    form.amount = "Rp12.500".into();
    form.category = Category::Shopping;
    form.payment_method = "Cash".into();
    form.merchant = "Warung Bu Sari".into();
    form.notes = "lunch".into();
    form
}

#[test]
fn test_payload_normalizes_amount() {
    let payload = filled_form().payload();
    assert_eq!(payload.amount, 12500.0);
    assert_eq!(payload.category, "Shopping");
    assert_eq!(payload.date, "2024-06-01");
}

#[test]
fn test_payload_omits_empty_optional_fields() {
    let mut form = filled_form();
    form.notes = String::new();
    form.merchant = "   ".into();
    let body = serde_json::to_value(form.payload()).unwrap();
    let obj = body.as_object().unwrap();
    assert!(!obj.contains_key("notes"));
    assert!(!obj.contains_key("merchant"));
    assert_eq!(obj["payment_method"], json!("Cash"));
}

#[test]
fn test_payload_nan_amount_serializes_as_null() {
    let mut form = filled_form();
    form.amount = "abc".into();
    assert!(form.amount_value().is_nan());
    let body = serde_json::to_value(form.payload()).unwrap();
    assert_eq!(body["amount"], serde_json::Value::Null);
}

#[test]
fn test_clear_transient_keeps_sticky_fields() {
    let mut form = filled_form();
    form.clear_transient();
    assert!(form.amount.is_empty());
    assert!(form.notes.is_empty());
    assert!(form.merchant.is_empty());
    assert_eq!(form.category, Category::Shopping);
    assert_eq!(form.date, "2024-06-01");
    assert_eq!(form.payment_method, "Cash");
}

// ── ExpenseRecord ─────────────────────────────────────────────

#[test]
fn test_record_amount_value_tolerates_strings() {
    let rec: ExpenseRecord =
        serde_json::from_value(json!({"amount": "250.75", "date": "2024-01-01"})).unwrap();
    assert_eq!(rec.amount_value(), Some(250.75));

    let rec: ExpenseRecord =
        serde_json::from_value(json!({"amount": "garbage", "date": "2024-01-01"})).unwrap();
    assert_eq!(rec.amount_value(), None);
}

#[test]
fn test_record_sparse_deserialization() {
    let rec: ExpenseRecord = serde_json::from_value(json!({})).unwrap();
    assert_eq!(rec.amount_value(), Some(0.0));
    assert!(rec.category.is_empty());
    assert!(rec.notes.is_none());
    assert_eq!(rec.month_key(), None);
}

#[test]
fn test_record_opaque_id_shapes() {
    let numeric: ExpenseRecord = serde_json::from_value(json!({"id": 7})).unwrap();
    assert_eq!(numeric.id, json!(7));
    let uuid: ExpenseRecord = serde_json::from_value(json!({"id": "a-b-c"})).unwrap();
    assert_eq!(uuid.id, json!("a-b-c"));
}

#[test]
fn test_record_month_key() {
    let rec: ExpenseRecord = serde_json::from_value(json!({"date": "2024-03-15"})).unwrap();
    assert_eq!(rec.month_key(), Some(MonthKey::new(2024, 3)));
}

// ── Summary ───────────────────────────────────────────────────

#[test]
fn test_summary_deserialize_defaults() {
    let summary: Summary = serde_json::from_value(json!({})).unwrap();
    assert_eq!(summary.total, 0.0);
    assert!(summary.per_category.is_empty());
}

#[test]
fn test_summary_deserialize_full() {
    let summary: Summary = serde_json::from_value(json!({
        "total": 100000.0,
        "per_category": {"Food & Drink": 60000.0, "Bills": 40000.0}
    }))
    .unwrap();
    assert_eq!(summary.total, 100000.0);
    assert_eq!(summary.per_category["Food & Drink"], 60000.0);
    assert_eq!(summary.per_category.len(), 2);
}
