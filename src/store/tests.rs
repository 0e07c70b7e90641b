#![allow(clippy::unwrap_used)]

use serde_json::json;

use super::*;
use crate::models::{MonthKey, RawAmount};

fn record(id: i64, amount: f64, category: &str, date: &str) -> ExpenseRecord {
    ExpenseRecord {
        id: json!(id),
        amount: RawAmount::Number(amount),
        category: category.into(),
        date: date.into(),
        notes: None,
        payment_method: None,
        merchant: None,
    }
}

// ── Month Partitioner ─────────────────────────────────────────

#[test]
fn test_partition_splits_by_calendar_month() {
    let records = vec![
        record(1, 50000.0, "Food & Drink", "2024-06-01"),
        record(2, 20000.0, "Food & Drink", "2024-07-01"),
    ];

    let subset = monthly_subset(&records, MonthKey::new(2024, 6));
    assert_eq!(subset.len(), 1);
    assert_eq!(subset[0].id, json!(1));
    assert_eq!(monthly_total(&subset), 50000.0);
}

#[test]
fn test_partition_month_boundaries() {
    let records = vec![record(1, 100.0, "Bills", "2024-03-15")];

    assert_eq!(monthly_subset(&records, MonthKey::new(2024, 3)).len(), 1);
    assert!(monthly_subset(&records, MonthKey::new(2024, 4)).is_empty());
    assert!(monthly_subset(&records, MonthKey::new(2023, 3)).is_empty());
}

#[test]
fn test_partition_empty_collection() {
    let records: Vec<ExpenseRecord> = Vec::new();
    let subset = monthly_subset(&records, MonthKey::new(2024, 6));
    assert!(subset.is_empty());
    assert_eq!(monthly_total(&subset), 0.0);
}

#[test]
fn test_partition_is_pure() {
    let records = vec![
        record(1, 10.0, "Bills", "2024-06-02"),
        record(2, 20.0, "Health", "2024-06-20"),
        record(3, 30.0, "Health", "2024-05-31"),
    ];
    let key = MonthKey::new(2024, 6);

    let first: Vec<_> = monthly_subset(&records, key)
        .iter()
        .map(|r| r.id.clone())
        .collect();
    let second: Vec<_> = monthly_subset(&records, key)
        .iter()
        .map(|r| r.id.clone())
        .collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![json!(1), json!(2)]);
}

#[test]
fn test_unparsable_amount_included_but_counts_zero() {
    let mut bad = record(1, 0.0, "Other", "2024-06-10");
    bad.amount = RawAmount::Text("???".into());
    let records = vec![bad, record(2, 15000.0, "Other", "2024-06-11")];

    let subset = monthly_subset(&records, MonthKey::new(2024, 6));
    assert_eq!(subset.len(), 2);
    assert_eq!(monthly_total(&subset), 15000.0);
}

#[test]
fn test_unparsable_date_never_matches() {
    let records = vec![record(1, 10.0, "Other", "someday")];
    assert!(monthly_subset(&records, MonthKey::new(2024, 6)).is_empty());
}

// ── RecordStore ───────────────────────────────────────────────

#[test]
fn test_store_refresh_replaces_collection() {
    let mut store = RecordStore::default();
    let generation = store.begin_refresh();
    assert!(store.loading);

    store.apply(generation, Ok(vec![record(1, 5.0, "Bills", "2024-06-01")]));
    assert!(!store.loading);
    assert!(store.error.is_none());
    assert_eq!(store.records().len(), 1);
}

#[test]
fn test_store_failure_keeps_prior_collection() {
    let mut store = RecordStore::default();
    let generation = store.begin_refresh();
    store.apply(generation, Ok(vec![record(1, 5.0, "Bills", "2024-06-01")]));

    let generation = store.begin_refresh();
    store.apply(generation, Err("connection refused".into()));
    assert_eq!(store.records().len(), 1);
    assert_eq!(store.error.as_deref(), Some("connection refused"));
    assert!(!store.loading);
}

#[test]
fn test_store_begin_clears_error() {
    let mut store = RecordStore::default();
    let generation = store.begin_refresh();
    store.apply(generation, Err("boom".into()));
    assert!(store.error.is_some());

    store.begin_refresh();
    assert!(store.error.is_none());
    assert!(store.loading);
}

#[test]
fn test_store_discards_stale_generation() {
    let mut store = RecordStore::default();
    let old = store.begin_refresh();
    let new = store.begin_refresh();

    // The superseded response lands late; it must not win.
    store.apply(old, Ok(vec![record(1, 5.0, "Bills", "2024-06-01")]));
    assert!(store.records().is_empty());
    assert!(store.loading);

    store.apply(new, Ok(vec![record(2, 9.0, "Health", "2024-06-02")]));
    assert_eq!(store.records().len(), 1);
    assert_eq!(store.records()[0].id, json!(2));
    assert!(!store.loading);
}

#[test]
fn test_store_stale_failure_is_ignored() {
    let mut store = RecordStore::default();
    let old = store.begin_refresh();
    let new = store.begin_refresh();

    store.apply(old, Err("timeout".into()));
    assert!(store.error.is_none());

    store.apply(new, Ok(Vec::new()));
    assert!(store.error.is_none());
    assert!(!store.loading);
}

// ── SummaryCell ───────────────────────────────────────────────

fn summary_of(total: f64, category: &str) -> Summary {
    let mut per_category = std::collections::BTreeMap::new();
    per_category.insert(category.to_string(), total);
    Summary {
        total,
        per_category,
    }
}

#[test]
fn test_summary_replaced_wholesale() {
    let mut cell = SummaryCell::default();
    let generation = cell.begin_refresh();
    cell.apply(generation, Ok(summary_of(100000.0, "Food & Drink")));

    let generation = cell.begin_refresh();
    cell.apply(generation, Ok(summary_of(2500.0, "Bills")));
    assert_eq!(cell.view().total, 2500.0);
    assert!(!cell.view().per_category.contains_key("Food & Drink"));
}

#[test]
fn test_summary_failure_is_silent_and_retains_prior() {
    let mut cell = SummaryCell::default();
    let generation = cell.begin_refresh();
    cell.apply(generation, Ok(summary_of(100000.0, "Food & Drink")));

    let generation = cell.begin_refresh();
    cell.apply(generation, Err("500 Internal Server Error".into()));
    assert_eq!(cell.view().total, 100000.0);
    assert_eq!(cell.view().per_category["Food & Drink"], 100000.0);
}

#[test]
fn test_summary_discards_stale_generation() {
    let mut cell = SummaryCell::default();
    let old = cell.begin_refresh();
    let new = cell.begin_refresh();

    cell.apply(new, Ok(summary_of(777.0, "Health")));
    cell.apply(old, Ok(summary_of(1.0, "Bills")));
    assert_eq!(cell.view().total, 777.0);
}
