//! Derived views over a [`Ledger`](crate::ledger::Ledger).
//!
//! Everything here is a pure function of the transaction list and the budget
//! table; callers recompute on every change rather than caching.

mod reconcile;
mod totals;

pub(crate) use reconcile::{
    actual_spend, insights, percent_of, variance_rows, Insight, VarianceRow,
};
pub(crate) use totals::{
    category_totals, monthly_totals, pie_slices, summary, CategoryTotals, MonthlyTotal, Summary,
};

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::ledger::Ledger;
use crate::models::{Category, MonthKey};

/// Every derived view the dashboard shows, computed in one pass.
#[derive(Debug, Clone, Default)]
pub(crate) struct Dashboard {
    pub(crate) summary: Summary,
    pub(crate) categories: CategoryTotals,
    pub(crate) monthly: Vec<MonthlyTotal>,
    pub(crate) variance: Vec<VarianceRow>,
    /// Expense totals per `(month, category)`, the basis for `insights`.
    pub(crate) spending: BTreeMap<(MonthKey, Category), Decimal>,
    pub(crate) insights: Vec<Insight>,
}

impl Dashboard {
    pub(crate) fn compute(ledger: &Ledger) -> Self {
        let txns = ledger.transactions();
        let budgets = ledger.budgets();
        Self {
            summary: summary(txns),
            categories: category_totals(txns),
            monthly: monthly_totals(txns),
            variance: variance_rows(txns, budgets),
            spending: actual_spend(txns),
            insights: insights(txns, budgets),
        }
    }
}
