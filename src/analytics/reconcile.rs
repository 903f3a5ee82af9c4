use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

use crate::ledger::BudgetTable;
use crate::models::{Category, MonthKey, Transaction};
use crate::ui::util::format_amount;

/// Expense totals keyed by `(month, category)`.
pub(crate) fn actual_spend(transactions: &[Transaction]) -> BTreeMap<(MonthKey, Category), Decimal> {
    sum_by_month_category(transactions.iter().filter(|t| t.is_expense()))
}

fn sum_by_month_category<'a>(
    transactions: impl Iterator<Item = &'a Transaction>,
) -> BTreeMap<(MonthKey, Category), Decimal> {
    let mut sums: BTreeMap<_, Decimal> = BTreeMap::new();
    for tx in transactions {
        let sum = sums.entry((tx.month(), tx.category)).or_default();
        *sum = sum.saturating_add(tx.amount);
    }
    sums
}

/// One bar pair of the budget-vs-actual chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VarianceRow {
    pub(crate) month: MonthKey,
    pub(crate) category: Category,
    pub(crate) budgeted: Decimal,
    pub(crate) actual: Decimal,
}

impl VarianceRow {
    /// e.g. `"Jul 2025 - Food"`
    pub(crate) fn key(&self) -> String {
        format!("{} - {}", self.month, self.category)
    }
}

/// Every `(month, category)` that is budgeted or has transactions, sorted by
/// year, month, then category name. Unbudgeted pairs carry `budgeted = 0`.
///
/// `actual` sums transactions of both types, so an Income line under a
/// category shows here even though [`insights`] only counts expenses.
pub(crate) fn variance_rows(transactions: &[Transaction], budgets: &BudgetTable) -> Vec<VarianceRow> {
    let mut pairs: BTreeMap<(MonthKey, Category), (Decimal, Decimal)> = BTreeMap::new();
    for (month, category, amount) in budgets.iter() {
        pairs.entry((month, category)).or_default().0 = amount;
    }
    for ((month, category), total) in sum_by_month_category(transactions.iter()) {
        pairs.entry((month, category)).or_default().1 = total;
    }
    pairs
        .into_iter()
        .map(|((month, category), (budgeted, actual))| VarianceRow {
            month,
            category,
            budgeted,
            actual,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsightKind {
    Overspent { overage: Decimal },
    WithinBudget { percent: Decimal },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Insight {
    pub(crate) kind: InsightKind,
    pub(crate) month: MonthKey,
    pub(crate) category: Category,
    pub(crate) spent: Decimal,
    pub(crate) budgeted: Decimal,
}

impl Insight {
    pub(crate) fn is_overspent(&self) -> bool {
        matches!(self.kind, InsightKind::Overspent { .. })
    }

    pub(crate) fn message(&self, currency: &str) -> String {
        match self.kind {
            InsightKind::Overspent { overage } => format!(
                "{}: Overspent {} in \"{}\" (Spent {}, Budget {})",
                self.month,
                format_amount(overage, currency),
                self.category,
                format_amount(self.spent, currency),
                format_amount(self.budgeted, currency),
            ),
            InsightKind::WithinBudget { percent } => format!(
                "{}: Spent {}% of \"{}\" budget",
                self.month, percent, self.category
            ),
        }
    }
}

/// Compare each budgeted line against its actual spend.
///
/// Only budgeted pairs are visited, so spending with no budget line never
/// produces an insight even though it shows up in [`variance_rows`].
pub(crate) fn insights(transactions: &[Transaction], budgets: &BudgetTable) -> Vec<Insight> {
    let actuals = actual_spend(transactions);
    budgets
        .iter()
        .filter_map(|(month, category, budgeted)| {
            let spent = actuals
                .get(&(month, category))
                .copied()
                .unwrap_or(Decimal::ZERO);
            let kind = if spent > budgeted {
                InsightKind::Overspent {
                    overage: spent - budgeted,
                }
            } else if spent > Decimal::ZERO && budgeted > Decimal::ZERO {
                InsightKind::WithinBudget {
                    percent: percent_of(spent, budgeted),
                }
            } else {
                return None;
            };
            Some(Insight {
                kind,
                month,
                category,
                spent,
                budgeted,
            })
        })
        .collect()
}

/// `round(part / whole * 100)`, halves rounded up. A zero `whole` gives 0
/// and a ratio too large for `Decimal` saturates.
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(whole))
        .unwrap_or(Decimal::MAX)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
