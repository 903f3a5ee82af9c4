#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn filled() -> TransactionForm {
    TransactionForm {
        description: "Groceries".into(),
        amount: "82.40".into(),
        date: "2025-07-12".into(),
        ..TransactionForm::new()
    }
}

// ── TransactionForm ───────────────────────────────────────────

#[test]
fn test_defaults_are_expense_and_other() {
    let form = TransactionForm::new();
    assert_eq!(form.txn_type, TxnType::Expense);
    assert_eq!(form.category, Category::Other);
    assert!(form.editing.is_none());
}

#[test]
fn test_submit_builds_transaction() {
    let tx = filled().submit().unwrap();
    assert_eq!(tx.description, "Groceries");
    assert_eq!(tx.amount, dec!(82.40));
    assert_eq!(tx.date, NaiveDate::from_ymd_opt(2025, 7, 12).unwrap());
    assert_eq!(tx.txn_type, TxnType::Expense);
    assert_eq!(tx.category, Category::Other);
}

#[test]
fn test_required_fields_block_submit() {
    let mut form = filled();
    form.description = "  ".into();
    assert_eq!(form.submit(), Err(FormError::Required("Description")));

    let mut form = filled();
    form.amount.clear();
    assert_eq!(form.submit(), Err(FormError::Required("Amount")));

    let mut form = filled();
    form.date.clear();
    assert_eq!(form.submit(), Err(FormError::Required("Date")));
}

#[test]
fn test_bad_date_rejected() {
    let mut form = filled();
    form.date = "12/07/2025".into();
    assert_eq!(
        form.submit(),
        Err(FormError::InvalidDate("12/07/2025".into()))
    );
}

#[test]
fn test_oversized_amount_rejected() {
    let mut form = filled();
    form.amount = "79228162514264337593543950335".into();
    assert_eq!(form.submit(), Err(FormError::AmountTooLarge));

    form.amount = "1,000,000,000,000".into();
    assert_eq!(form.submit().unwrap().amount, dec!(1000000000000));
}

#[test]
fn test_non_numeric_amount_coerces_to_zero() {
    let mut form = filled();
    form.amount = "lots".into();
    assert_eq!(form.submit().unwrap().amount, Decimal::ZERO);
}

#[test]
fn test_typing_goes_to_focused_field() {
    let mut form = TransactionForm::new();
    for c in "Tea".chars() {
        form.push_char(c);
    }
    form.focus_next();
    form.push_char('5');
    form.push_char('0');
    form.pop_char();
    assert_eq!(form.description, "Tea");
    assert_eq!(form.amount, "5");
    assert_eq!(form.focused(), TxnField::Amount);
}

#[test]
fn test_choice_fields_cycle_and_ignore_typing() {
    let mut form = TransactionForm::new();
    form.focus = 3;
    assert_eq!(form.focused(), TxnField::Type);
    form.push_char('x');
    form.cycle(true);
    assert_eq!(form.txn_type, TxnType::Income);

    form.focus_next();
    form.cycle(true);
    assert_eq!(form.category, Category::Food);
    form.cycle(false);
    form.cycle(false);
    assert_eq!(form.category, Category::Travel);
}

#[test]
fn test_focus_wraps() {
    let mut form = TransactionForm::new();
    form.focus_prev();
    assert_eq!(form.focused(), TxnField::Category);
    form.focus_next();
    assert_eq!(form.focused(), TxnField::Description);
}

#[test]
fn test_reset_keeps_text_and_defaults_choices() {
    let mut form = filled();
    form.txn_type = TxnType::Income;
    form.category = Category::Salary;
    form.editing = Some(TransactionId(3));
    form.reset_after_submit();
    assert_eq!(form.description, "Groceries");
    assert_eq!(form.txn_type, TxnType::Expense);
    assert_eq!(form.category, Category::Other);
    assert!(form.editing.is_none());
}

#[test]
fn test_for_edit_prefills() {
    let tx = filled().submit().unwrap();
    let form = TransactionForm::for_edit(TransactionId(9), &tx);
    assert_eq!(form.editing, Some(TransactionId(9)));
    assert_eq!(form.amount, "82.4");
    assert_eq!(form.date, "2025-07-12");
    assert_eq!(form.submit().unwrap(), tx);
}

// ── BudgetForm ────────────────────────────────────────────────

fn jul() -> MonthKey {
    MonthKey::new(2025, 7).unwrap()
}

#[test]
fn test_budget_form_selects_initial_month() {
    let form = BudgetForm::new(2025, jul(), &BudgetTable::default());
    assert_eq!(form.months.len(), 12);
    assert_eq!(form.month(), jul());
    assert!(form.inputs.iter().all(|s| s.is_empty()));
}

#[test]
fn test_budget_form_initial_outside_year_falls_back_to_january() {
    let form = BudgetForm::new(2026, jul(), &BudgetTable::default());
    assert_eq!(form.month().to_string(), "Jan 2026");
}

#[test]
fn test_budget_form_loads_existing_month() {
    let mut table = BudgetTable::default();
    table.set(jul(), Category::Rent, dec!(15000));
    let form = BudgetForm::new(2025, jul(), &table);
    assert_eq!(form.inputs[1], "15000");
    assert_eq!(form.inputs[0], "");
}

#[test]
fn test_budget_form_month_switch_reloads() {
    let mut table = BudgetTable::default();
    table.set(jul().succ(), Category::Food, dec!(300));
    let mut form = BudgetForm::new(2025, jul(), &table);
    form.push_char('9');
    form.select_month(1, &table);
    assert_eq!(form.month().to_string(), "Aug 2025");
    assert_eq!(form.inputs[0], "300");

    form.select_month(-8, &table);
    assert_eq!(form.month().to_string(), "Dec 2025");
}

fn type_line(form: &mut BudgetForm, line: usize, text: &str) {
    form.focus = line;
    for c in text.chars() {
        form.push_char(c);
    }
}

#[test]
fn test_budget_form_map_coerces_and_skips_untouched() {
    let mut form = BudgetForm::new(2025, jul(), &BudgetTable::default());
    type_line(&mut form, 0, "5000");
    type_line(&mut form, 2, "oops");
    let map = form.to_category_map();
    assert_eq!(map.len(), 2);
    assert_eq!(map[&Category::Food], dec!(5000));
    assert_eq!(map[&Category::Salary], Decimal::ZERO);
    assert!(!map.contains_key(&Category::Rent));
}

#[test]
fn test_budget_form_cleared_saved_line_is_zero() {
    let mut table = BudgetTable::default();
    table.set(jul(), Category::Food, dec!(120));
    table.set(jul(), Category::Rent, dec!(900));
    let mut form = BudgetForm::new(2025, jul(), &table);

    form.focus = 0;
    while !form.inputs[0].is_empty() {
        form.pop_char();
    }
    let map = form.to_category_map();
    assert_eq!(map.len(), 2);
    assert_eq!(map[&Category::Food], Decimal::ZERO);
    assert_eq!(map[&Category::Rent], dec!(900));
}

#[test]
fn test_budget_form_reload_forgets_edits() {
    let mut form = BudgetForm::new(2025, jul(), &BudgetTable::default());
    type_line(&mut form, 3, "40");
    form.load(&BudgetTable::default());
    assert!(form.to_category_map().is_empty());
}

#[test]
fn test_budget_form_typing_targets_focus() {
    let mut form = BudgetForm::new(2025, jul(), &BudgetTable::default());
    form.focus_prev();
    assert_eq!(form.focused_category(), Category::Other);
    form.push_char('7');
    form.focus_next();
    assert_eq!(form.focused_category(), Category::Food);
    assert_eq!(form.inputs[6], "7");
}
