use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::{Category, MonthKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum TxnType {
    Income,
    #[default]
    Expense,
}

impl TxnType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    pub(crate) fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "income" => Self::Income,
            _ => Self::Expense,
        }
    }

    pub(crate) fn all() -> &'static [TxnType] {
        &[Self::Income, Self::Expense]
    }

    pub(crate) fn toggle(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl std::fmt::Display for TxnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stable identifier handed out by the transaction store. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct TransactionId(pub(crate) u64);

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Largest amount a transaction or budget line may carry. Anything above is
/// stored as this value so running totals stay far inside `Decimal`'s range.
pub(crate) const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Clamp into `0..=MAX_AMOUNT`.
pub(crate) fn clamp_amount(amount: Decimal) -> Decimal {
    amount.clamp(Decimal::ZERO, Decimal::from(MAX_AMOUNT))
}

/// A transaction as entered, before the store assigns it an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NewTransaction {
    pub(crate) description: String,
    pub(crate) amount: Decimal,
    pub(crate) date: NaiveDate,
    pub(crate) txn_type: TxnType,
    pub(crate) category: Category,
}

impl NewTransaction {
    pub(crate) fn new(
        description: impl Into<String>,
        amount: Decimal,
        date: NaiveDate,
        txn_type: TxnType,
        category: Category,
    ) -> Self {
        Self {
            description: description.into(),
            amount: clamp_amount(amount),
            date,
            txn_type,
            category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Transaction {
    pub(crate) id: TransactionId,
    pub(crate) description: String,
    pub(crate) amount: Decimal,
    pub(crate) date: NaiveDate,
    pub(crate) txn_type: TxnType,
    pub(crate) category: Category,
}

impl Transaction {
    pub(crate) fn from_new(id: TransactionId, tx: NewTransaction) -> Self {
        Self {
            id,
            description: tx.description,
            amount: clamp_amount(tx.amount),
            date: tx.date,
            txn_type: tx.txn_type,
            category: tx.category,
        }
    }

    pub(crate) fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    pub(crate) fn is_income(&self) -> bool {
        self.txn_type == TxnType::Income
    }

    pub(crate) fn is_expense(&self) -> bool {
        self.txn_type == TxnType::Expense
    }

    /// The editable fields, used to pre-fill the form on edit.
    pub(crate) fn to_new(&self) -> NewTransaction {
        NewTransaction {
            description: self.description.clone(),
            amount: self.amount,
            date: self.date,
            txn_type: self.txn_type,
            category: self.category,
        }
    }
}

/// Parse free-form user input as a decimal.
///
/// Currency symbols, thousands separators and surrounding whitespace are
/// ignored. `None` when nothing numeric remains.
pub(crate) fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, ',' | '$' | '₹' | '€' | '£'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
}

/// Coerce free-form user input to an amount. Anything that fails to parse
/// is `0`, as are negatives; values above [`MAX_AMOUNT`] are capped.
pub(crate) fn coerce_amount(s: &str) -> Decimal {
    parse_amount(s).map(clamp_amount).unwrap_or(Decimal::ZERO)
}
