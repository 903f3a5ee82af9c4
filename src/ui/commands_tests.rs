#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::config::Config;
use crate::ledger::Ledger;

fn app() -> App {
    let config = Config {
        budget_year: Some(2025),
        ..Config::default()
    };
    App::new(config, Ledger::new())
}

#[test]
fn test_levenshtein() {
    assert_eq!(levenshtein("", ""), 0);
    assert_eq!(levenshtein("budget", "budget"), 0);
    assert_eq!(levenshtein("budgte", "budget"), 2);
    assert_eq!(levenshtein("kitten", "sitting"), 3);
}

#[test]
fn test_unknown_command_suggests() {
    let mut app = app();
    handle_command("insigts", &mut app).unwrap();
    assert_eq!(
        app.status_message,
        "Unknown command: :insigts. Did you mean :insights?"
    );
}

#[test]
fn test_navigation_commands() {
    let mut app = app();
    handle_command("i", &mut app).unwrap();
    assert_eq!(app.screen, Screen::Insights);
    handle_command("transactions", &mut app).unwrap();
    assert_eq!(app.screen, Screen::Transactions);
    handle_command("q", &mut app).unwrap();
    assert!(!app.running);
}

#[test]
fn test_add_inline() {
    let mut app = app();
    handle_command("add 2025-07-03 Team dinner 1,200", &mut app).unwrap();
    let txns = app.ledger.transactions();
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].description, "Team dinner");
    assert_eq!(txns[0].amount, dec!(1200));
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_add_without_args_opens_form() {
    let mut app = app();
    handle_command("add", &mut app).unwrap();
    assert_eq!(app.input_mode, InputMode::Editing);
    assert!(app.ledger.transactions().is_empty());
}

#[test]
fn test_add_inline_bad_date_keeps_form_open() {
    let mut app = app();
    handle_command("add 03-07 Dinner 100", &mut app).unwrap();
    assert!(app.ledger.transactions().is_empty());
    assert_eq!(app.input_mode, InputMode::Editing);
}

#[test]
fn test_month_selects_and_switches_year() {
    let mut app = app();
    handle_command("month Mar 2025", &mut app).unwrap();
    assert_eq!(app.budget_form.month(), MonthKey::new(2025, 3).unwrap());
    assert_eq!(app.screen, Screen::Budgets);

    handle_command("month 2024-11", &mut app).unwrap();
    assert_eq!(app.budget_form.month(), MonthKey::new(2024, 11).unwrap());
    assert_eq!(app.budget_form.months.len(), 12);

    handle_command("month soon", &mut app).unwrap();
    assert_eq!(app.budget_form.month(), MonthKey::new(2024, 11).unwrap());
}

#[test]
fn test_month_rejects_unrepresentable_year() {
    let mut app = app();
    handle_command("month Mar 2025", &mut app).unwrap();
    handle_command("month Dec 2147483647", &mut app).unwrap();
    assert_eq!(app.status_message, "Invalid month. Use e.g. Jul 2025 or 2025-07");
    assert_eq!(app.budget_form.month(), MonthKey::new(2025, 3).unwrap());
}

#[test]
fn test_next_and_prev_month_cross_years() {
    let mut app = app();
    handle_command("month Dec 2025", &mut app).unwrap();
    handle_command("next-month", &mut app).unwrap();
    assert_eq!(app.budget_form.month(), MonthKey::new(2026, 1).unwrap());
    assert_eq!(app.budget_form.months[0], MonthKey::new(2026, 1).unwrap());

    handle_command("prev-month", &mut app).unwrap();
    handle_command("prev-month", &mut app).unwrap();
    assert_eq!(app.budget_form.month(), MonthKey::new(2025, 11).unwrap());
    assert_eq!(app.status_message, "Budget month: Nov 2025");
}

#[test]
fn test_next_month_stops_at_last_year() {
    let mut app = app();
    handle_command("month Dec 9999", &mut app).unwrap();
    handle_command("next-month", &mut app).unwrap();
    assert_eq!(app.budget_form.month(), MonthKey::new(9999, 12).unwrap());
    assert_eq!(app.status_message, "No budget months beyond that year");
}

#[test]
fn test_budget_sets_single_line() {
    let mut app = app();
    handle_command("month Jul 2025", &mut app).unwrap();
    handle_command("budget other 120", &mut app).unwrap();
    handle_command("budget Food 80", &mut app).unwrap();
    // Inline adds take the form's default category
    handle_command("add 2025-07-03 Dinner 150", &mut app).unwrap();

    let jul = MonthKey::new(2025, 7).unwrap();
    assert_eq!(app.ledger.budgets().get(jul, Category::Other), dec!(120));
    assert_eq!(app.ledger.budgets().get(jul, Category::Food), dec!(80));
    assert_eq!(app.budget_form.inputs[6], "120");
    assert_eq!(app.view.insights.len(), 1);
    assert_eq!(app.view.insights[0].category, Category::Other);
    assert!(app.view.insights[0].is_overspent());
}

#[test]
fn test_budget_rejects_bad_input() {
    let mut app = app();
    handle_command("budget Gadgets 10", &mut app).unwrap();
    assert!(app.status_message.starts_with("Unknown category 'Gadgets'"));
    handle_command("budget Food -5", &mut app).unwrap();
    assert_eq!(app.status_message, "Invalid amount: -5");
    handle_command("budget Food 79228162514264337593543950335", &mut app).unwrap();
    assert_eq!(
        app.status_message,
        "Invalid amount: 79228162514264337593543950335"
    );
    assert_eq!(app.ledger.budgets().iter().count(), 0);
}

#[test]
fn test_delete_needs_transactions_screen() {
    let mut app = app();
    handle_command("add 2025-07-03 Dinner 150", &mut app).unwrap();
    app.screen = Screen::Dashboard;
    handle_command("delete", &mut app).unwrap();
    assert_eq!(app.input_mode, InputMode::Normal);

    app.screen = Screen::Transactions;
    handle_command("delete", &mut app).unwrap();
    assert_eq!(app.input_mode, InputMode::Confirm);
}
