use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{Category, MonthKey, Transaction, TxnType};

/// Per-category sums, split by transaction type.
///
/// Each side lists categories in the order they first appear in the
/// transaction list. Categories with no transactions are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CategoryTotals {
    pub(crate) income: Vec<(Category, Decimal)>,
    pub(crate) expense: Vec<(Category, Decimal)>,
}

impl CategoryTotals {
    pub(crate) fn side(&self, txn_type: TxnType) -> &[(Category, Decimal)] {
        match txn_type {
            TxnType::Income => &self.income,
            TxnType::Expense => &self.expense,
        }
    }
}

pub(crate) fn category_totals(transactions: &[Transaction]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for tx in transactions {
        let side = match tx.txn_type {
            TxnType::Income => &mut totals.income,
            TxnType::Expense => &mut totals.expense,
        };
        match side.iter_mut().find(|(cat, _)| *cat == tx.category) {
            Some((_, sum)) => *sum = sum.saturating_add(tx.amount),
            None => side.push((tx.category, tx.amount)),
        }
    }
    totals
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MonthlyTotal {
    pub(crate) month: MonthKey,
    pub(crate) income: Decimal,
    pub(crate) expense: Decimal,
}

/// One record per month present in the data, oldest first.
pub(crate) fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut grouped: BTreeMap<MonthKey, (Decimal, Decimal)> = BTreeMap::new();
    for tx in transactions {
        let entry = grouped.entry(tx.month()).or_default();
        match tx.txn_type {
            TxnType::Income => entry.0 = entry.0.saturating_add(tx.amount),
            TxnType::Expense => entry.1 = entry.1.saturating_add(tx.amount),
        }
    }
    grouped
        .into_iter()
        .map(|(month, (income, expense))| MonthlyTotal {
            month,
            income,
            expense,
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) total_income: Decimal,
    pub(crate) total_expense: Decimal,
    pub(crate) net_balance: Decimal,
    pub(crate) income_count: usize,
    pub(crate) expense_count: usize,
    pub(crate) most_recent: Option<Transaction>,
}

pub(crate) fn summary(transactions: &[Transaction]) -> Summary {
    let mut s = Summary::default();
    for tx in transactions {
        match tx.txn_type {
            TxnType::Income => {
                s.total_income = s.total_income.saturating_add(tx.amount);
                s.income_count += 1;
            }
            TxnType::Expense => {
                s.total_expense = s.total_expense.saturating_add(tx.amount);
                s.expense_count += 1;
            }
        }
    }
    s.net_balance = s.total_income.saturating_sub(s.total_expense);
    s.most_recent = most_recent(transactions).cloned();
    s
}

/// Latest by date; on equal dates the earlier list entry wins.
pub(crate) fn most_recent(transactions: &[Transaction]) -> Option<&Transaction> {
    transactions
        .iter()
        .fold(None, |best: Option<&Transaction>, tx| match best {
            Some(b) if b.date >= tx.date => Some(b),
            _ => Some(tx),
        })
}

/// One wedge of a category share chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PieSlice {
    pub(crate) label: String,
    pub(crate) value: Decimal,
    /// Set on the neutral slice drawn when there is nothing to show.
    pub(crate) placeholder: bool,
}

pub(crate) const NO_DATA_LABEL: &str = "No Data";

pub(crate) fn pie_slices(totals: &[(Category, Decimal)]) -> Vec<PieSlice> {
    if totals.is_empty() {
        return vec![PieSlice {
            label: NO_DATA_LABEL.to_string(),
            value: Decimal::ONE,
            placeholder: true,
        }];
    }
    totals
        .iter()
        .map(|(cat, value)| PieSlice {
            label: cat.to_string(),
            value: *value,
            placeholder: false,
        })
        .collect()
}
