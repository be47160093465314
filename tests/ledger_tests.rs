// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::error::TrackerError;
use fintrack::ledger::Ledger;
use fintrack::schema::Category;
use fintrack::store::Store;
use serde_json::{Map, Value, json};
use tempfile::{TempDir, tempdir};

fn setup() -> (Ledger, TempDir) {
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path()).unwrap();
    (Ledger::new(store), dir)
}

fn fields(v: Value) -> Map<String, Value> {
    v.as_object().unwrap().clone()
}

fn listed(ledger: &Ledger, category: Category) -> Vec<Value> {
    ledger
        .list(category)
        .unwrap()
        .iter()
        .map(|e| serde_json::to_value(e).unwrap())
        .collect()
}

#[test]
fn appended_entry_is_listed_last() {
    let (ledger, _dir) = setup();
    let samples = [
        (
            Category::Expenses,
            json!({"date": "2024-01-01", "amount": 50, "category": "food", "description": "lunch"}),
        ),
        (
            Category::Earnings,
            json!({"date": "2024-01-31", "amount": 1999.5, "category": "salary", "description": "january"}),
        ),
        (
            Category::Investments,
            json!({"date": "2024-02-01", "amount": 250, "type": "etf", "name": "World", "notes": "monthly"}),
        ),
        (
            Category::Goals,
            json!({"name": "Bike", "target_amount": 300, "description": "road bike", "target_date": "2024-12-01"}),
        ),
    ];
    for (category, value) in samples {
        ledger
            .append(category, &fields(json!({"date": "2023-12-31", "amount": 1, "category": "x", "description": "x", "type": "x", "name": "x", "target_amount": 1, "target_date": "x"})))
            .unwrap();
        ledger.append(category, &fields(value.clone())).unwrap();
        let rows = listed(&ledger, category);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.last().unwrap(), &value, "{category}");
    }
}

#[test]
fn omitted_optional_fields_list_as_null() {
    let (ledger, _dir) = setup();
    ledger
        .append(
            Category::Goals,
            &fields(json!({"name": "Trip", "target_amount": "1200", "target_date": "2025-06-01"})),
        )
        .unwrap();
    assert_eq!(
        listed(&ledger, Category::Goals),
        vec![json!({"name": "Trip", "target_amount": 1200, "description": null, "target_date": "2025-06-01"})]
    );
}

#[test]
fn any_json_value_is_accepted_for_required_keys() {
    let (ledger, _dir) = setup();
    ledger
        .append(
            Category::Expenses,
            &fields(json!({
                "date": 20240101,
                "amount": "twelve",
                "category": true,
                "description": null,
                "ignored": "extra"
            })),
        )
        .unwrap();
    assert_eq!(
        listed(&ledger, Category::Expenses),
        vec![json!({"date": "20240101", "amount": "twelve", "category": "true", "description": ""})]
    );
}

#[test]
fn missing_fields_are_reported_in_schema_order_without_writing() {
    let (ledger, _dir) = setup();
    let path = ledger.store().path_for(Category::Goals);
    let before = std::fs::read(&path).unwrap();

    let err = ledger
        .append(Category::Goals, &fields(json!({"name": "Car", "description": "used"})))
        .unwrap_err();
    match &err {
        TrackerError::Validation { missing } => {
            assert_eq!(missing, &vec!["target_amount".to_string(), "target_date".to_string()]);
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "Missing required fields: target_amount, target_date"
    );
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn empty_fields_are_rejected() {
    let (ledger, _dir) = setup();
    let err = ledger.append(Category::Earnings, &Map::new()).unwrap_err();
    assert!(matches!(err, TrackerError::EmptyPayload));
    assert!(ledger.list(Category::Earnings).unwrap().is_empty());
}

#[test]
fn delete_removes_one_and_keeps_order() {
    let (ledger, _dir) = setup();
    for desc in ["a", "b", "c"] {
        ledger
            .append(
                Category::Expenses,
                &fields(json!({"date": "2024-01-01", "amount": 1, "category": "x", "description": desc})),
            )
            .unwrap();
    }

    let removed = ledger.delete_at(Category::Expenses, 1).unwrap();
    assert_eq!(removed.cells()[3], "b");
    let left: Vec<String> = listed(&ledger, Category::Expenses)
        .iter()
        .map(|v| v["description"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(left, vec!["a", "c"]);
}

#[test]
fn delete_out_of_range_leaves_store_unchanged() {
    let (ledger, _dir) = setup();
    ledger
        .append(
            Category::Investments,
            &fields(json!({"date": "2024-01-01", "amount": 10, "type": "stock", "name": "ACME"})),
        )
        .unwrap();
    let before = listed(&ledger, Category::Investments);

    let err = ledger.delete_at(Category::Investments, 1).unwrap_err();
    assert!(matches!(err, TrackerError::IndexOutOfRange { index: 1, len: 1 }));
    assert!(err.is_client_error());
    assert_eq!(listed(&ledger, Category::Investments), before);

    let err = ledger.delete_at(Category::Goals, 0).unwrap_err();
    assert!(matches!(err, TrackerError::IndexOutOfRange { index: 0, len: 0 }));
}

#[test]
fn list_is_idempotent() {
    let (ledger, _dir) = setup();
    ledger
        .append(
            Category::Earnings,
            &fields(json!({"date": "2024-03-01", "amount": 0.1, "category": "gift", "description": "card"})),
        )
        .unwrap();
    let first = ledger.list(Category::Earnings).unwrap();
    let second = ledger.list(Category::Earnings).unwrap();
    assert_eq!(first, second);
}

#[test]
fn append_refuses_to_overwrite_corrupt_file() {
    let (ledger, _dir) = setup();
    let path = ledger.store().path_for(Category::Expenses);
    std::fs::write(&path, "date,amount,category,description\n2024-01-01\n").unwrap();

    let err = ledger
        .append(
            Category::Expenses,
            &fields(json!({"date": "2024-01-02", "amount": 5, "category": "x", "description": "y"})),
        )
        .unwrap_err();
    assert!(matches!(err, TrackerError::StoreCorrupt { .. }));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "date,amount,category,description\n2024-01-01\n"
    );
}
