#![allow(clippy::unwrap_used)]

use serde_json::json;

use super::*;

#[test]
fn test_parse_items_reads_record_list() {
    let body = json!({
        "items": [
            {"id": 1, "amount": 50000, "category": "Food & Drink", "date": "2024-06-01"},
            {"id": 2, "amount": "20000", "category": "Bills", "date": "2024-07-01",
             "merchant": "PLN"}
        ]
    });
    let items = parse_items(&body);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].amount_value(), Some(50000.0));
    assert_eq!(items[1].amount_value(), Some(20000.0));
    assert_eq!(items[1].merchant.as_deref(), Some("PLN"));
}

#[test]
fn test_parse_items_absent_field_is_empty() {
    assert!(parse_items(&json!({})).is_empty());
    assert!(parse_items(&json!({"count": 3})).is_empty());
}

#[test]
fn test_parse_items_malformed_field_is_empty() {
    assert!(parse_items(&json!({"items": "oops"})).is_empty());
    assert!(parse_items(&json!({"items": 42})).is_empty());
}

#[test]
fn test_parse_items_empty_list() {
    assert!(parse_items(&json!({"items": []})).is_empty());
}

#[test]
fn test_client_trims_trailing_slash() {
    let client = ApiClient::new("http://localhost:8000/").unwrap();
    assert_eq!(client.base, "http://localhost:8000");
}
