#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;
use crate::ledger::Ledger;
use crate::models::{Category, MonthKey, NewTransaction};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    let d = |day| NaiveDate::from_ymd_opt(2025, 7, day).unwrap();
    ledger.add_transaction(NewTransaction::new(
        "Salary",
        dec!(5000),
        d(1),
        TxnType::Income,
        Category::Salary,
    ));
    ledger.add_transaction(NewTransaction::new(
        "Dinner",
        dec!(100),
        d(3),
        TxnType::Expense,
        Category::Food,
    ));
    ledger.add_transaction(NewTransaction::new(
        "Snacks",
        dec!(50),
        d(9),
        TxnType::Expense,
        Category::Food,
    ));
    ledger.set_budget(MonthKey::new(2025, 7).unwrap(), Category::Food, dec!(120));
    ledger
}

#[test]
fn test_parse_sources() {
    let (txns, budgets) = parse_sources(&args(&["t.csv"]), "usage").unwrap();
    assert_eq!(txns, PathBuf::from("t.csv"));
    assert!(budgets.is_none());

    let (_, budgets) = parse_sources(&args(&["t.csv", "--budgets", "b.csv"]), "usage").unwrap();
    assert_eq!(budgets, Some(PathBuf::from("b.csv")));
}

#[test]
fn test_parse_sources_errors() {
    let err = parse_sources(&args(&[]), "budgetdash report <file>").unwrap_err();
    assert_eq!(err.to_string(), "Usage: budgetdash report <file>");

    let err = parse_sources(&args(&["t.csv", "--budgets"]), "usage").unwrap_err();
    assert!(err.to_string().contains("--budgets"));
}

#[test]
fn test_unknown_command_errors() {
    let err = as_cli(&args(&["budgetdash", "frobnicate"]), Config::default()).unwrap_err();
    assert_eq!(err.to_string(), "Unknown command: frobnicate");
}

#[test]
fn test_render_report() {
    let view = Dashboard::compute(&sample_ledger());
    let report = render_report(&view, "₹");

    assert!(report.contains("Total Income:   ₹5,000 (1 txns)"));
    assert!(report.contains("Total Expenses: ₹150 (2 txns)"));
    assert!(report.contains("Net Balance:    ₹4,850"));
    assert!(report.contains("Last: Snacks • ₹50 on 09 Jul 2025"));
    assert!(report.contains("Jul 2025 - Food"));
    assert!(report.contains("Jul 2025 - Salary"));
    assert!(report.contains("Jul 2025: Overspent ₹30 in \"Food\" (Spent ₹150, Budget ₹120)"));
}

#[test]
fn test_render_report_empty() {
    let view = Dashboard::compute(&Ledger::new());
    let report = render_report(&view, "$");
    assert!(report.contains("Net Balance:    $0"));
    assert!(report.contains("No spending insights yet. Keep tracking your expenses!"));
    assert!(!report.contains("Monthly Totals"));
}
