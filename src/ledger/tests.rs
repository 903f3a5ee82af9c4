#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

use super::*;
use crate::models::{TxnType, MAX_AMOUNT};

fn tx(desc: &str, amount: Decimal, day: u32) -> NewTransaction {
    NewTransaction::new(
        desc,
        amount,
        NaiveDate::from_ymd_opt(2025, 7, day).unwrap(),
        TxnType::Expense,
        Category::Food,
    )
}

fn jul() -> MonthKey {
    MonthKey::new(2025, 7).unwrap()
}

// ── TransactionStore ──────────────────────────────────────────

#[test]
fn test_add_appends_in_order() {
    let mut store = TransactionStore::default();
    store.add(tx("a", dec!(1), 1));
    store.add(tx("b", dec!(2), 2));
    store.add(tx("c", dec!(3), 3));
    let descs: Vec<&str> = store.as_slice().iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descs, ["a", "b", "c"]);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_ids_are_unique_and_never_reused() {
    let mut store = TransactionStore::default();
    let a = store.add(tx("a", dec!(1), 1));
    let b = store.add(tx("b", dec!(1), 1));
    assert_ne!(a, b);
    store.delete(b).unwrap();
    let c = store.add(tx("c", dec!(1), 1));
    assert_ne!(b, c);
    assert_ne!(a, c);
}

#[test]
fn test_update_replaces_in_place() {
    let mut store = TransactionStore::default();
    store.add(tx("a", dec!(1), 1));
    let id = store.add(tx("b", dec!(2), 2));
    store.add(tx("c", dec!(3), 3));

    assert!(store.update(id, tx("B", dec!(20), 2)));
    assert_eq!(store.position(id), Some(1));
    let updated = &store.as_slice()[1];
    assert_eq!(updated.description, "B");
    assert_eq!(updated.amount, dec!(20));
    assert_eq!(updated.id, id);
}

#[test]
fn test_update_unknown_id_is_noop() {
    let mut store = TransactionStore::default();
    store.add(tx("a", dec!(1), 1));
    assert!(!store.update(TransactionId(999), tx("x", dec!(9), 9)));
    assert_eq!(store.len(), 1);
    assert_eq!(store.as_slice()[0].description, "a");
}

#[test]
fn test_delete_shifts_later_entries() {
    let mut store = TransactionStore::default();
    store.add(tx("a", dec!(1), 1));
    let b = store.add(tx("b", dec!(2), 2));
    let c = store.add(tx("c", dec!(3), 3));

    let removed = store.delete(b).unwrap();
    assert_eq!(removed.description, "b");
    assert_eq!(store.position(c), Some(1));
    assert!(store.position(b).is_none());
    assert_eq!(store.len(), 2);
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let mut store = TransactionStore::default();
    store.add(tx("a", dec!(1), 1));
    assert!(store.delete(TransactionId(42)).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_delete_then_readd_does_not_restore_order() {
    let mut store = TransactionStore::default();
    let a = store.add(tx("a", dec!(1), 1));
    store.add(tx("b", dec!(2), 2));
    store.add(tx("c", dec!(3), 3));

    let removed = store.delete(a).unwrap();
    store.add(removed.to_new());

    let descs: Vec<&str> = store.as_slice().iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descs, ["b", "c", "a"]);
}

// ── BudgetTable ───────────────────────────────────────────────

#[test]
fn test_unset_budget_reads_zero() {
    let table = BudgetTable::default();
    assert_eq!(table.get(jul(), Category::Food), Decimal::ZERO);
    assert!(table.month(jul()).is_none());
    assert_eq!(table.iter().count(), 0);
}

#[test]
fn test_set_month_replaces_whole_map() {
    let mut table = BudgetTable::default();
    table.set_month(
        jul(),
        BTreeMap::from([(Category::Food, dec!(100)), (Category::Rent, dec!(500))]),
    );
    table.set_month(jul(), BTreeMap::from([(Category::Travel, dec!(50))]));

    assert_eq!(table.get(jul(), Category::Food), Decimal::ZERO);
    assert_eq!(table.get(jul(), Category::Rent), Decimal::ZERO);
    assert_eq!(table.get(jul(), Category::Travel), dec!(50));
}

#[test]
fn test_set_month_leaves_other_months() {
    let mut table = BudgetTable::default();
    let aug = jul().succ();
    table.set_month(jul(), BTreeMap::from([(Category::Food, dec!(100))]));
    table.set_month(aug, BTreeMap::from([(Category::Food, dec!(200))]));
    table.set_month(jul(), BTreeMap::new());

    assert_eq!(table.get(aug, Category::Food), dec!(200));
    assert_eq!(table.get(jul(), Category::Food), Decimal::ZERO);
}

#[test]
fn test_negative_budget_clamped() {
    let mut table = BudgetTable::default();
    table.set_month(jul(), BTreeMap::from([(Category::Food, dec!(-10))]));
    table.set(jul(), Category::Rent, dec!(-1));
    assert_eq!(table.get(jul(), Category::Food), Decimal::ZERO);
    assert_eq!(table.get(jul(), Category::Rent), Decimal::ZERO);
}

#[test]
fn test_oversized_budget_capped() {
    let mut table = BudgetTable::default();
    table.set(jul(), Category::Food, Decimal::MAX);
    assert_eq!(table.get(jul(), Category::Food), Decimal::from(MAX_AMOUNT));
}

#[test]
fn test_budget_iter_is_ordered() {
    let mut table = BudgetTable::default();
    let jun = MonthKey::new(2025, 6).unwrap();
    table.set_month(
        jul(),
        BTreeMap::from([(Category::Rent, dec!(1)), (Category::Food, dec!(2))]),
    );
    table.set_month(jun, BTreeMap::from([(Category::Travel, dec!(3))]));

    let rows: Vec<(MonthKey, Category)> = table.iter().map(|(m, c, _)| (m, c)).collect();
    assert_eq!(
        rows,
        vec![
            (jun, Category::Travel),
            (jul(), Category::Food),
            (jul(), Category::Rent)
        ]
    );
}

// ── Ledger ────────────────────────────────────────────────────

#[test]
fn test_ledger_mutations_flow_through() {
    let mut ledger = Ledger::new();
    let id = ledger.add_transaction(tx("Lunch", dec!(10), 5));
    assert_eq!(ledger.transactions().len(), 1);

    assert!(ledger.update_transaction(id, tx("Dinner", dec!(25), 5)));
    assert_eq!(ledger.transactions()[0].description, "Dinner");

    ledger.set_budget_month(jul(), BTreeMap::from([(Category::Food, dec!(120))]));
    assert_eq!(ledger.budgets().get(jul(), Category::Food), dec!(120));

    ledger.set_budget(jul(), Category::Rent, dec!(900));
    assert_eq!(ledger.budgets().get(jul(), Category::Food), dec!(120));
    assert_eq!(ledger.budgets().get(jul(), Category::Rent), dec!(900));

    assert!(ledger.delete_transaction(id).is_some());
    assert!(ledger.transactions().is_empty());
    assert!(ledger.delete_transaction(id).is_none());
}
