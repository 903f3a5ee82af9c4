use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{clamp_amount, Category, MonthKey};

/// Per-month, per-category spending limits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BudgetTable {
    months: BTreeMap<MonthKey, BTreeMap<Category, Decimal>>,
}

impl BudgetTable {
    /// Replace the whole category map for `month`. Other months are untouched.
    /// Limits are clamped into `0..=MAX_AMOUNT`.
    pub(crate) fn set_month(&mut self, month: MonthKey, categories: BTreeMap<Category, Decimal>) {
        let clamped = categories
            .into_iter()
            .map(|(cat, amount)| (cat, clamp_amount(amount)))
            .collect();
        self.months.insert(month, clamped);
    }

    /// Set a single line without disturbing the rest of the month.
    pub(crate) fn set(&mut self, month: MonthKey, category: Category, amount: Decimal) {
        self.months
            .entry(month)
            .or_default()
            .insert(category, clamp_amount(amount));
    }

    /// Unset months and categories read as zero.
    pub(crate) fn get(&self, month: MonthKey, category: Category) -> Decimal {
        self.months
            .get(&month)
            .and_then(|cats| cats.get(&category))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub(crate) fn month(&self, month: MonthKey) -> Option<&BTreeMap<Category, Decimal>> {
        self.months.get(&month)
    }

    /// Every budgeted `(month, category, amount)` in month then category order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (MonthKey, Category, Decimal)> + '_ {
        self.months.iter().flat_map(|(month, cats)| {
            cats.iter()
                .map(move |(category, amount)| (*month, *category, *amount))
        })
    }
}
