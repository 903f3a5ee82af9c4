use crate::models::{NewTransaction, Transaction, TransactionId};

/// Ordered list of transactions. Order is insertion order; ids are stable
/// across updates and deletes.
#[derive(Debug, Clone, Default)]
pub(crate) struct TransactionStore {
    transactions: Vec<Transaction>,
    next_id: u64,
}

impl TransactionStore {
    /// Append to the end of the list and return the new id.
    pub(crate) fn add(&mut self, tx: NewTransaction) -> TransactionId {
        self.next_id += 1;
        let id = TransactionId(self.next_id);
        self.transactions.push(Transaction::from_new(id, tx));
        id
    }

    /// Replace the transaction with `id` in place. Returns `false` (and does
    /// nothing) when no such transaction exists.
    pub(crate) fn update(&mut self, id: TransactionId, tx: NewTransaction) -> bool {
        match self.transactions.iter_mut().find(|t| t.id == id) {
            Some(slot) => {
                *slot = Transaction::from_new(id, tx);
                true
            }
            None => false,
        }
    }

    /// Remove the transaction with `id`, shifting later entries up.
    pub(crate) fn delete(&mut self, id: TransactionId) -> Option<Transaction> {
        let idx = self.position(id)?;
        Some(self.transactions.remove(idx))
    }

    pub(crate) fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|t| t.id == id)
    }

    pub(crate) fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }
}
