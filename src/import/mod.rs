mod csv_import;

pub(crate) use csv_import::CsvImporter;

use anyhow::Result;
use std::path::Path;

use crate::ledger::Ledger;

/// Build a ledger from a transactions file and an optional budgets file.
pub(crate) fn load_ledger(transactions: &Path, budgets: Option<&Path>) -> Result<Ledger> {
    let mut ledger = Ledger::new();
    for tx in CsvImporter::load_transactions(transactions)? {
        ledger.add_transaction(tx);
    }
    if let Some(path) = budgets {
        for (month, categories) in CsvImporter::load_budgets(path)? {
            ledger.set_budget_month(month, categories);
        }
    }
    Ok(ledger)
}
