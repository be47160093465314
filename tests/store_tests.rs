// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::error::TrackerError;
use fintrack::models::{Amount, Entry, Goal};
use fintrack::schema::Category;
use fintrack::store::Store;
use serde_json::{Map, Value, json};
use tempfile::tempdir;

fn fields(v: Value) -> Map<String, Value> {
    v.as_object().unwrap().clone()
}

#[test]
fn open_initializes_header_only_files() {
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path().join("data")).unwrap();

    let expenses = std::fs::read_to_string(store.path_for(Category::Expenses)).unwrap();
    assert_eq!(expenses, "date,amount,category,description\n");
    let goals = std::fs::read_to_string(store.path_for(Category::Goals)).unwrap();
    assert_eq!(goals, "name,target_amount,description,target_date\n");
    for c in Category::ALL {
        assert!(store.load(c).unwrap().is_empty());
    }
}

#[test]
fn missing_file_loads_empty_and_is_recreated() {
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path()).unwrap();
    let path = store.path_for(Category::Investments);
    std::fs::remove_file(&path).unwrap();

    assert!(store.load(Category::Investments).unwrap().is_empty());
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "date,amount,type,name,notes\n"
    );
}

#[test]
fn save_then_load_keeps_order_and_quoting() {
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path()).unwrap();
    let entries: Vec<Entry> = ["lunch, with team", "bus \"express\"", "rent"]
        .iter()
        .enumerate()
        .map(|(i, desc)| {
            Entry::from_fields(
                Category::Expenses,
                &fields(json!({
                    "date": format!("2024-01-0{}", i + 1),
                    "amount": i * 10,
                    "category": "misc",
                    "description": desc,
                })),
            )
            .unwrap()
        })
        .collect();

    store.save(Category::Expenses, &entries).unwrap();
    let loaded = store.load(Category::Expenses).unwrap();
    assert_eq!(loaded, entries);
}

#[test]
fn legacy_goal_file_maps_notes_to_description() {
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path()).unwrap();
    std::fs::write(
        store.path_for(Category::Goals),
        "name,target_amount,current_amount,target_date,notes\nHouse,300,50,2030-01-01,deposit\n",
    )
    .unwrap();

    let goals = store.load(Category::Goals).unwrap();
    assert_eq!(
        goals,
        vec![Entry::Goal(Goal {
            name: "House".into(),
            target_amount: Amount::new("300"),
            description: Some("deposit".into()),
            target_date: "2030-01-01".into(),
        })]
    );

    // Rewriting drops the legacy layout.
    store.save(Category::Goals, &goals).unwrap();
    assert_eq!(
        std::fs::read_to_string(store.path_for(Category::Goals)).unwrap(),
        "name,target_amount,description,target_date\nHouse,300,deposit,2030-01-01\n"
    );
}

#[test]
fn missing_optional_column_loads_as_none() {
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path()).unwrap();
    std::fs::write(
        store.path_for(Category::Investments),
        "date,amount,type,name\n2024-02-01,250,etf,World\n",
    )
    .unwrap();

    let loaded = store.load(Category::Investments).unwrap();
    match &loaded[0] {
        Entry::Investment(inv) => {
            assert_eq!(inv.kind, "etf");
            assert_eq!(inv.notes, None);
        }
        other => panic!("unexpected entry {:?}", other),
    }
}

#[test]
fn unequal_row_is_corrupt() {
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path()).unwrap();
    let path = store.path_for(Category::Expenses);
    std::fs::write(&path, "date,amount,category,description\n2024-01-01,5\n").unwrap();

    let err = store.load(Category::Expenses).unwrap_err();
    assert!(matches!(err, TrackerError::StoreCorrupt { ref path, .. } if path.ends_with("expenses.csv")));
    assert!(!err.is_client_error());
}

#[test]
fn missing_required_column_is_corrupt() {
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path()).unwrap();
    std::fs::write(store.path_for(Category::Earnings), "foo,bar\n1,2\n").unwrap();

    let err = store.load(Category::Earnings).unwrap_err();
    assert!(err.to_string().contains("missing column 'date'"), "{err}");
}

#[test]
fn zero_byte_file_loads_empty() {
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path()).unwrap();
    std::fs::write(store.path_for(Category::Goals), "").unwrap();
    assert!(store.load(Category::Goals).unwrap().is_empty());
}
