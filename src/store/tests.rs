#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::persist::STORAGE_KEY;
use super::summary::{aggregate, filtered_by_month, months_available};
use super::*;
use crate::models::Category;
use crate::storage::{MemoryStore, SqliteStore};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
}

fn entry(date: &str, amount: &str, category: Category) -> EntryInput {
    EntryInput {
        date: date.into(),
        amount: amount.into(),
        category,
        note: String::new(),
    }
}

fn empty_store() -> ExpenseStore {
    ExpenseStore::open(Box::new(MemoryStore::new()))
}

fn add(store: &mut ExpenseStore, date: &str, amount: &str, category: Category) -> String {
    store
        .add_as_of(&entry(date, amount, category), today())
        .unwrap()
        .id
        .clone()
}

fn expense(id: &str, date: &str, amount: Decimal, category: Category) -> Expense {
    Expense {
        id: id.into(),
        date: date.into(),
        amount,
        category,
        note: String::new(),
    }
}

// ── add / remove ──────────────────────────────────────────────

#[test]
fn test_add_prepends() {
    let mut store = empty_store();
    let first = add(&mut store, "2024-03-01", "5", Category::Dining);
    let second = add(&mut store, "2024-02-01", "7", Category::Travel);

    assert_eq!(store.expenses().len(), 2);
    // Newest insertion first, regardless of date
    assert_eq!(store.expenses()[0].id, second);
    assert_eq!(store.expenses()[1].id, first);
}

#[test]
fn test_add_normalizes_amount_and_note() {
    let mut store = empty_store();
    let mut input = entry("2024-03-01", "12.345", Category::Health);
    input.note = "  pharmacy \n".into();
    let added = store.add_as_of(&input, today()).unwrap();
    assert_eq!(added.amount, dec!(12.35));
    assert_eq!(added.note, "pharmacy");
    assert_eq!(added.category, Category::Health);
}

#[test]
fn test_add_invalid_amount_is_noop() {
    let mut store = empty_store();
    add(&mut store, "2024-03-01", "5", Category::Dining);
    let before = store.expenses().to_vec();

    for bad in ["", "0", "-3", "abc", "0.001"] {
        let result = store.add_as_of(&entry("2024-03-01", bad, Category::Dining), today());
        assert!(result.is_err(), "amount {bad:?} should be rejected");
    }
    assert_eq!(store.expenses(), before.as_slice());
}

#[test]
fn test_add_invalid_date_is_noop() {
    let mut store = empty_store();
    assert_eq!(
        store
            .add_as_of(&entry("", "5", Category::Dining), today())
            .unwrap_err(),
        EntryError::MissingDate
    );
    assert!(store
        .add_as_of(&entry("2024-03-21", "5", Category::Dining), today())
        .is_err());
    assert!(store.expenses().is_empty());
}

#[test]
fn test_remove_is_idempotent() {
    let mut store = empty_store();
    let id = add(&mut store, "2024-03-01", "5", Category::Dining);
    add(&mut store, "2024-03-02", "6", Category::Dining);

    assert!(store.remove(&id));
    assert_eq!(store.expenses().len(), 1);
    assert!(!store.remove(&id));
    assert_eq!(store.expenses().len(), 1);
    assert!(store.get(&id).is_none());
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let mut store = empty_store();
    add(&mut store, "2024-03-01", "5", Category::Dining);
    assert!(!store.remove("does-not-exist"));
    assert_eq!(store.expenses().len(), 1);
}

// ── Persistence ───────────────────────────────────────────────

#[test]
fn test_save_then_load_roundtrip() {
    let expenses = vec![
        expense("b", "2024-03-02", dec!(20.10), Category::Groceries),
        expense("a", "2024-02-28", dec!(3), Category::Other),
    ];
    let mut storage = MemoryStore::new();
    persist::save(&mut storage, &expenses);
    assert_eq!(persist::load(&storage), expenses);
}

#[test]
fn test_load_absent_slot_is_empty() {
    assert!(persist::load(&MemoryStore::new()).is_empty());
}

#[test]
fn test_load_corrupt_slot_is_empty() {
    for raw in ["not json", "{\"id\":1}", "[{\"id\":\"x\"}]", "null"] {
        let storage = MemoryStore::with_item(STORAGE_KEY, raw);
        assert!(persist::load(&storage).is_empty(), "{raw:?}");
    }
}

#[test]
fn test_load_read_error_is_empty() {
    let mut storage = MemoryStore::with_item(STORAGE_KEY, "[]");
    storage.fail_reads = true;
    assert!(persist::load(&storage).is_empty());
}

#[test]
fn test_load_rounds_amounts_to_cents() {
    let raw = r#"[{"id":"x","date":"2024-03-01","amount":1.239,"category":"Dining","note":""}]"#;
    let loaded = persist::load(&MemoryStore::with_item(STORAGE_KEY, raw));
    assert_eq!(loaded[0].amount, dec!(1.24));
}

#[test]
fn test_load_drops_out_of_range_amounts() {
    let raw = r#"[
        {"id":"a","date":"2024-03-01","amount":50000000000000000000000000000,"category":"Dining","note":""},
        {"id":"b","date":"2024-03-02","amount":50000000000000000000000000000,"category":"Dining","note":""},
        {"id":"c","date":"2024-03-03","amount":12.5,"category":"Travel","note":""},
        {"id":"d","date":"2024-03-04","amount":0,"category":"Travel","note":""}
    ]"#;
    let store = ExpenseStore::open(Box::new(MemoryStore::with_item(STORAGE_KEY, raw)));
    let ids: Vec<&str> = store.expenses().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["c"]);

    let summary = store.summary("2024-03");
    assert_eq!(summary.aggregate.total, dec!(12.50));
    assert_eq!(summary.aggregate.share_percent(Category::Travel), dec!(100.0));
}

#[test]
fn test_corrupt_slot_overwritten_on_next_save() {
    let mut storage = MemoryStore::with_item(STORAGE_KEY, "garbage");
    let mut expenses = persist::load(&storage);
    assert!(expenses.is_empty());

    expenses.push(expense("a", "2024-03-01", dec!(1), Category::Dining));
    persist::save(&mut storage, &expenses);
    let raw: serde_json::Value = serde_json::from_str(storage.raw(STORAGE_KEY).unwrap()).unwrap();
    assert_eq!(raw.as_array().unwrap().len(), 1);
}

#[test]
fn test_write_failure_keeps_memory_state() {
    let mut storage = MemoryStore::new();
    storage.fail_writes = true;
    let mut store = ExpenseStore::open(Box::new(storage));
    add(&mut store, "2024-03-01", "5", Category::Dining);
    assert_eq!(store.expenses().len(), 1);
}

#[test]
fn test_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spendtui.db");

    let (kept, removed) = {
        let mut store = ExpenseStore::open(Box::new(SqliteStore::open(&path).unwrap()));
        let kept = add(&mut store, "2024-03-01", "9.99", Category::Utilities);
        let removed = add(&mut store, "2024-03-02", "1", Category::Dining);
        store.remove(&removed);
        (kept, removed)
    };

    let store = ExpenseStore::open(Box::new(SqliteStore::open(&path).unwrap()));
    assert_eq!(store.expenses().len(), 1);
    assert_eq!(store.expenses()[0].id, kept);
    assert_eq!(store.expenses()[0].amount, dec!(9.99));
    assert!(store.get(&removed).is_none());
}

// ── Derivations ───────────────────────────────────────────────

#[test]
fn test_empty_collection_scenario() {
    let store = empty_store();
    assert_eq!(store.months_available("2024-03"), vec!["2024-03".to_string()]);

    let summary = store.summary("2024-03");
    assert_eq!(summary.aggregate.total, Decimal::ZERO);
    assert!(summary.aggregate.by_category.is_empty());
    assert_eq!(summary.aggregate.top_category(), None);
    assert_eq!(summary.count(), 0);
}

#[test]
fn test_three_entries_scenario() {
    let mut store = empty_store();
    add(&mut store, "2024-03-01", "10.00", Category::Groceries);
    add(&mut store, "2024-03-05", "20.00", Category::Groceries);
    add(&mut store, "2024-03-09", "5.00", Category::Dining);

    let agg = store.summary("2024-03").aggregate;
    assert_eq!(agg.total, dec!(35.00));
    assert_eq!(agg.amount_for(Category::Groceries), dec!(30.00));
    assert_eq!(agg.amount_for(Category::Dining), dec!(5.00));
    assert_eq!(agg.by_category.len(), 2);
    assert_eq!(agg.top_category(), Some((Category::Groceries, dec!(30.00))));
}

#[test]
fn test_missing_category_defaults_to_zero() {
    let mut store = empty_store();
    add(&mut store, "2024-03-01", "10", Category::Groceries);
    let agg = store.summary("2024-03").aggregate;
    assert_eq!(agg.amount_for(Category::Travel), Decimal::ZERO);
    assert_eq!(agg.share_percent(Category::Travel), Decimal::ZERO);
    assert_eq!(agg.share_percent(Category::Groceries), dec!(100.0));
}

#[test]
fn test_switching_month_filter() {
    let mut store = empty_store();
    add(&mut store, "2024-02-10", "40", Category::Housing);
    add(&mut store, "2024-03-01", "10", Category::Dining);
    add(&mut store, "2024-03-02", "15", Category::Transport);
    let snapshot = store.expenses().to_vec();

    let march = store.summary("2024-03");
    assert_eq!(march.count(), 2);
    assert_eq!(march.aggregate.total, dec!(25));
    assert_eq!(march.aggregate.top_category(), Some((Category::Transport, dec!(15))));

    let feb = store.summary("2024-02");
    assert_eq!(feb.count(), 1);
    assert_eq!(feb.aggregate.total, dec!(40));
    assert_eq!(feb.aggregate.top_category(), Some((Category::Housing, dec!(40))));

    assert!(store.summary("2024-01").entries.is_empty());
    assert_eq!(store.expenses(), snapshot.as_slice());
}

#[test]
fn test_filtered_keeps_collection_order() {
    let expenses = vec![
        expense("c", "2024-03-03", dec!(1), Category::Dining),
        expense("x", "2024-04-01", dec!(1), Category::Dining),
        expense("a", "2024-03-30", dec!(1), Category::Dining),
        expense("b", "2024-03-01", dec!(1), Category::Dining),
    ];
    let ids: Vec<&str> = filtered_by_month(&expenses, "2024-03")
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[test]
fn test_filtered_skips_malformed_dates() {
    let expenses = vec![
        expense("ok", "2024-03-03", dec!(1), Category::Dining),
        expense("bad", "2024-03", dec!(1), Category::Dining),
    ];
    assert_eq!(filtered_by_month(&expenses, "2024-03").len(), 1);
    assert_eq!(months_available(&expenses, "2030-01"), vec!["2024-03".to_string()]);
}

#[test]
fn test_aggregate_sum_matches_total() {
    let expenses = vec![
        expense("1", "2024-03-01", dec!(0.10), Category::Dining),
        expense("2", "2024-03-02", dec!(0.20), Category::Travel),
        expense("3", "2024-03-03", dec!(19.99), Category::Dining),
        expense("4", "2024-03-04", dec!(1234.56), Category::Housing),
        expense("5", "2024-04-04", dec!(99), Category::Housing),
    ];
    for month in ["2024-03", "2024-04", "2024-05"] {
        let agg = aggregate(&filtered_by_month(&expenses, month));
        let sum: Decimal = agg.by_category.iter().map(|(_, v)| *v).sum();
        assert_eq!(sum, agg.total, "month {month}");
    }
}

#[test]
fn test_by_category_first_encounter_order() {
    let expenses = vec![
        expense("1", "2024-03-01", dec!(1), Category::Travel),
        expense("2", "2024-03-01", dec!(1), Category::Groceries),
        expense("3", "2024-03-01", dec!(1), Category::Travel),
    ];
    let agg = aggregate(&filtered_by_month(&expenses, "2024-03"));
    assert_eq!(
        agg.by_category,
        vec![(Category::Travel, dec!(2)), (Category::Groceries, dec!(1))]
    );
}

#[test]
fn test_top_category_tie_first_encountered_wins() {
    let expenses = vec![
        expense("1", "2024-03-01", dec!(10), Category::Utilities),
        expense("2", "2024-03-01", dec!(10), Category::Groceries),
        expense("3", "2024-03-01", dec!(4), Category::Dining),
    ];
    let agg = aggregate(&filtered_by_month(&expenses, "2024-03"));
    assert_eq!(agg.top_category(), Some((Category::Utilities, dec!(10))));
    let ranked: Vec<Category> = agg.ranked().into_iter().map(|(c, _)| c).collect();
    assert_eq!(
        ranked,
        vec![Category::Utilities, Category::Groceries, Category::Dining]
    );
}

#[test]
fn test_share_percent_rounds() {
    let expenses = vec![
        expense("1", "2024-03-01", dec!(1), Category::Dining),
        expense("2", "2024-03-01", dec!(2), Category::Travel),
    ];
    let agg = aggregate(&filtered_by_month(&expenses, "2024-03"));
    assert_eq!(agg.share_percent(Category::Dining), dec!(33.3));
    assert_eq!(agg.share_percent(Category::Travel), dec!(66.7));
}

#[test]
fn test_months_available_distinct_descending() {
    let expenses = vec![
        expense("1", "2023-12-01", dec!(1), Category::Dining),
        expense("2", "2024-03-01", dec!(1), Category::Dining),
        expense("3", "2023-12-15", dec!(1), Category::Dining),
        expense("4", "2024-01-31", dec!(1), Category::Dining),
    ];
    assert_eq!(
        months_available(&expenses, "2030-01"),
        vec!["2024-03", "2024-01", "2023-12"]
    );
}

// ── Amount range ──────────────────────────────────────────────

#[test]
fn test_add_rejects_amount_above_max() {
    let mut store = empty_store();
    for raw in ["1000000000000000000000000000", "1000000000000", "1e27"] {
        let err = store
            .add_as_of(&entry("2024-03-01", raw, Category::Dining), today())
            .unwrap_err();
        assert!(matches!(err, EntryError::InvalidAmount(_)), "{raw}");
    }
    assert!(store.expenses().is_empty());
}

#[test]
fn test_max_amounts_summarize() {
    let mut store = empty_store();
    for _ in 0..3 {
        add(&mut store, "2024-03-01", "999999999999.99", Category::Dining);
    }
    add(&mut store, "2024-03-01", "999999999999.99", Category::Travel);

    let agg = store.summary("2024-03").aggregate;
    assert_eq!(agg.total, dec!(3999999999999.96));
    assert_eq!(agg.share_percent(Category::Dining), dec!(75.0));
    assert_eq!(agg.share_percent(Category::Travel), dec!(25.0));
    assert_eq!(agg.top_category().unwrap().0, Category::Dining);
}

#[test]
fn test_aggregate_saturates_at_decimal_max() {
    let expenses = vec![
        expense("1", "2024-03-01", Decimal::MAX, Category::Dining),
        expense("2", "2024-03-01", Decimal::MAX, Category::Dining),
    ];
    let agg = aggregate(&filtered_by_month(&expenses, "2024-03"));
    assert_eq!(agg.total, Decimal::MAX);
    assert_eq!(agg.amount_for(Category::Dining), Decimal::MAX);
    assert_eq!(agg.share_percent(Category::Dining), dec!(100.0));
    assert_eq!(agg.share_percent(Category::Travel), Decimal::ZERO);
}
