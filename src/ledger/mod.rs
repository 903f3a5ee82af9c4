mod budget;
mod store;

pub(crate) use budget::BudgetTable;
pub(crate) use store::TransactionStore;

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{Category, MonthKey, NewTransaction, Transaction, TransactionId};

/// Application state: the transaction list and the budget table.
///
/// All mutation goes through here; every derived view is recomputed from a
/// shared `&Ledger`.
#[derive(Debug, Clone, Default)]
pub(crate) struct Ledger {
    store: TransactionStore,
    budgets: BudgetTable,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        self.store.as_slice()
    }

    pub(crate) fn budgets(&self) -> &BudgetTable {
        &self.budgets
    }

    pub(crate) fn add_transaction(&mut self, tx: NewTransaction) -> TransactionId {
        let id = self.store.add(tx);
        tracing::debug!(%id, count = self.store.len(), "transaction added");
        id
    }

    pub(crate) fn update_transaction(&mut self, id: TransactionId, tx: NewTransaction) -> bool {
        let updated = self.store.update(id, tx);
        if updated {
            tracing::debug!(%id, "transaction updated");
        } else {
            tracing::warn!(%id, "update ignored: no such transaction");
        }
        updated
    }

    pub(crate) fn delete_transaction(&mut self, id: TransactionId) -> Option<Transaction> {
        let removed = self.store.delete(id);
        match &removed {
            Some(_) => tracing::debug!(%id, count = self.store.len(), "transaction deleted"),
            None => tracing::warn!(%id, "delete ignored: no such transaction"),
        }
        removed
    }

    pub(crate) fn set_budget_month(
        &mut self,
        month: MonthKey,
        categories: BTreeMap<Category, Decimal>,
    ) {
        tracing::debug!(month = %month, lines = categories.len(), "budget month saved");
        self.budgets.set_month(month, categories);
    }

    pub(crate) fn set_budget(&mut self, month: MonthKey, category: Category, amount: Decimal) {
        tracing::debug!(month = %month, %category, %amount, "budget line set");
        self.budgets.set(month, category, amount);
    }
}

#[cfg(test)]
mod tests;
