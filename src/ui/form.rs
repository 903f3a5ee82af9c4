//! Editable form state for transactions and monthly budgets.
//!
//! The forms hold raw text exactly as typed; conversion to domain values
//! happens on submit.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::ledger::BudgetTable;
use crate::models::{
    coerce_amount, parse_amount, Category, MonthKey, NewTransaction, TransactionId, TxnType,
    MAX_AMOUNT,
};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("Amount must not exceed 1,000,000,000,000")]
    AmountTooLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TxnField {
    Description,
    Amount,
    Date,
    Type,
    Category,
}

impl TxnField {
    pub(crate) fn all() -> &'static [TxnField] {
        &[
            Self::Description,
            Self::Amount,
            Self::Date,
            Self::Type,
            Self::Category,
        ]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Amount => "Amount",
            Self::Date => "Date",
            Self::Type => "Type",
            Self::Category => "Category",
        }
    }

    /// Fields cycled with Left/Right rather than typed into.
    pub(crate) fn is_choice(&self) -> bool {
        matches!(self, Self::Type | Self::Category)
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct TransactionForm {
    pub(crate) description: String,
    pub(crate) amount: String,
    pub(crate) date: String,
    pub(crate) txn_type: TxnType,
    pub(crate) category: Category,
    pub(crate) focus: usize,
    /// Set while editing an existing transaction.
    pub(crate) editing: Option<TransactionId>,
}

impl TransactionForm {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Pre-fill from an existing transaction for editing.
    pub(crate) fn for_edit(id: TransactionId, tx: &NewTransaction) -> Self {
        Self {
            description: tx.description.clone(),
            amount: tx.amount.normalize().to_string(),
            date: tx.date.format(DATE_FORMAT).to_string(),
            txn_type: tx.txn_type,
            category: tx.category,
            focus: 0,
            editing: Some(id),
        }
    }

    pub(crate) fn focused(&self) -> TxnField {
        TxnField::all()[self.focus % TxnField::all().len()]
    }

    pub(crate) fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % TxnField::all().len();
    }

    pub(crate) fn focus_prev(&mut self) {
        let n = TxnField::all().len();
        self.focus = (self.focus + n - 1) % n;
    }

    pub(crate) fn push_char(&mut self, c: char) {
        match self.focused() {
            TxnField::Description => self.description.push(c),
            TxnField::Amount => self.amount.push(c),
            TxnField::Date => self.date.push(c),
            TxnField::Type | TxnField::Category => {}
        }
    }

    pub(crate) fn pop_char(&mut self) {
        match self.focused() {
            TxnField::Description => {
                self.description.pop();
            }
            TxnField::Amount => {
                self.amount.pop();
            }
            TxnField::Date => {
                self.date.pop();
            }
            TxnField::Type | TxnField::Category => {}
        }
    }

    /// Cycle the focused choice field forward (`true`) or backward.
    pub(crate) fn cycle(&mut self, forward: bool) {
        match self.focused() {
            TxnField::Type => self.txn_type = self.txn_type.toggle(),
            TxnField::Category => {
                self.category = if forward {
                    self.category.next()
                } else {
                    self.category.prev()
                }
            }
            _ => {}
        }
    }

    pub(crate) fn value_of(&self, field: TxnField) -> String {
        match field {
            TxnField::Description => self.description.clone(),
            TxnField::Amount => self.amount.clone(),
            TxnField::Date => self.date.clone(),
            TxnField::Type => self.txn_type.to_string(),
            TxnField::Category => self.category.to_string(),
        }
    }

    /// Validate required fields and build the transaction.
    /// A present but non-numeric amount coerces to zero.
    pub(crate) fn submit(&self) -> Result<NewTransaction, FormError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::Required("Description"));
        }
        if self.amount.trim().is_empty() {
            return Err(FormError::Required("Amount"));
        }
        if parse_amount(&self.amount).is_some_and(|a| a > Decimal::from(MAX_AMOUNT)) {
            return Err(FormError::AmountTooLarge);
        }
        let date_str = self.date.trim();
        if date_str.is_empty() {
            return Err(FormError::Required("Date"));
        }
        let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT)
            .map_err(|_| FormError::InvalidDate(date_str.to_string()))?;

        Ok(NewTransaction::new(
            description,
            coerce_amount(&self.amount),
            date,
            self.txn_type,
            self.category,
        ))
    }

    /// State after a successful submit: text fields stay for quick re-entry,
    /// type and category go back to their defaults.
    pub(crate) fn reset_after_submit(&mut self) {
        self.txn_type = TxnType::default();
        self.category = Category::default();
        self.editing = None;
        self.focus = 0;
    }
}

/// One numeric input per category for a selected month.
#[derive(Debug, Clone)]
pub(crate) struct BudgetForm {
    pub(crate) months: Vec<MonthKey>,
    pub(crate) month_index: usize,
    pub(crate) inputs: Vec<String>,
    /// Lines that were loaded from the table or typed into since the last load.
    touched: Vec<bool>,
    pub(crate) focus: usize,
}

impl BudgetForm {
    /// Month choices are the twelve months of `year`; `initial` is selected
    /// when it falls in that year, otherwise January.
    pub(crate) fn new(year: i32, initial: MonthKey, budgets: &BudgetTable) -> Self {
        let months = MonthKey::year_months(year);
        let month_index = months.iter().position(|m| *m == initial).unwrap_or(0);
        let mut form = Self {
            months,
            month_index,
            inputs: vec![String::new(); Category::all().len()],
            touched: vec![false; Category::all().len()],
            focus: 0,
        };
        form.load(budgets);
        form
    }

    pub(crate) fn month(&self) -> MonthKey {
        self.months[self.month_index.min(self.months.len().saturating_sub(1))]
    }

    /// Refill the inputs from the table for the selected month. Unset
    /// categories show as empty.
    pub(crate) fn load(&mut self, budgets: &BudgetTable) {
        let existing = budgets.month(self.month());
        let saved: Vec<Option<Decimal>> = Category::all()
            .iter()
            .map(|cat| existing.and_then(|m| m.get(cat)).copied())
            .collect();
        self.touched = saved.iter().map(Option::is_some).collect();
        self.inputs = saved
            .into_iter()
            .map(|v| v.map(|v| v.normalize().to_string()).unwrap_or_default())
            .collect();
    }

    pub(crate) fn select_month(&mut self, delta: i32, budgets: &BudgetTable) {
        let n = self.months.len() as i32;
        if n == 0 {
            return;
        }
        self.month_index = (self.month_index as i32 + delta).rem_euclid(n) as usize;
        self.load(budgets);
    }

    pub(crate) fn focused_category(&self) -> Category {
        Category::all()[self.focus % Category::all().len()]
    }

    pub(crate) fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Category::all().len();
    }

    pub(crate) fn focus_prev(&mut self) {
        let n = Category::all().len();
        self.focus = (self.focus + n - 1) % n;
    }

    pub(crate) fn push_char(&mut self, c: char) {
        if let Some(input) = self.inputs.get_mut(self.focus) {
            input.push(c);
            self.mark_touched();
        }
    }

    pub(crate) fn pop_char(&mut self) {
        if let Some(input) = self.inputs.get_mut(self.focus) {
            input.pop();
            self.mark_touched();
        }
    }

    fn mark_touched(&mut self) {
        if let Some(flag) = self.touched.get_mut(self.focus) {
            *flag = true;
        }
    }

    /// Saved or edited lines are included; never-touched blanks are left
    /// out. Blank or non-numeric text becomes zero, so clearing a saved
    /// line stores 0 rather than removing it.
    pub(crate) fn to_category_map(&self) -> BTreeMap<Category, Decimal> {
        Category::all()
            .iter()
            .zip(&self.inputs)
            .zip(&self.touched)
            .filter(|(_, touched)| **touched)
            .map(|((cat, raw), _)| (*cat, coerce_amount(raw)))
            .collect()
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
