use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::path::Path;

use crate::models::{coerce_amount, Category, MonthKey, NewTransaction, TxnType};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"];

/// Column positions resolved from a header row. Matching is
/// case-insensitive; missing optional columns fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TxnColumns {
    description: usize,
    amount: usize,
    date: usize,
    txn_type: Option<usize>,
    category: Option<usize>,
}

impl TxnColumns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let required = |name: &str| {
            find(name).with_context(|| format!("Missing required column '{name}'"))
        };
        Ok(Self {
            description: required("description")?,
            amount: required("amount")?,
            date: required("date")?,
            txn_type: find("type"),
            category: find("category"),
        })
    }
}

pub(crate) struct CsvImporter;

impl CsvImporter {
    /// Read transactions from a `description,amount,date,type,category` file.
    pub(crate) fn load_transactions(path: &Path) -> Result<Vec<NewTransaction>> {
        let rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
        Self::read_transactions(rdr)
    }

    fn read_transactions<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<NewTransaction>> {
        let headers = rdr.headers().context("Failed to read CSV header")?.clone();
        let cols = TxnColumns::from_headers(&headers)?;

        let mut transactions = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            // Header is line 1.
            let line = i + 2;
            let record = result.with_context(|| format!("Line {line}: failed to read record"))?;
            if record.iter().all(|f| f.trim().is_empty()) {
                continue;
            }
            let field = |idx: usize| record.get(idx).unwrap_or("").trim();

            let date_str = field(cols.date);
            let date = parse_date(date_str)
                .with_context(|| format!("Line {line}: could not parse date '{date_str}'"))?;

            transactions.push(NewTransaction::new(
                field(cols.description),
                coerce_amount(field(cols.amount)),
                date,
                cols.txn_type.map(|c| TxnType::parse(field(c))).unwrap_or_default(),
                cols.category.map(|c| Category::parse(field(c))).unwrap_or_default(),
            ));
        }

        tracing::info!(count = transactions.len(), "transactions loaded");
        Ok(transactions)
    }

    /// Read budgets from a `month,category,amount` file, grouped by month.
    /// Repeated `(month, category)` lines: the last one wins.
    pub(crate) fn load_budgets(path: &Path) -> Result<BTreeMap<MonthKey, BTreeMap<Category, Decimal>>> {
        let rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
        Self::read_budgets(rdr)
    }

    fn read_budgets<R: std::io::Read>(
        mut rdr: csv::Reader<R>,
    ) -> Result<BTreeMap<MonthKey, BTreeMap<Category, Decimal>>> {
        let headers = rdr.headers().context("Failed to read CSV header")?.clone();
        let col = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .with_context(|| format!("Missing required column '{name}'"))
        };
        let (month_col, cat_col, amount_col) = (col("month")?, col("category")?, col("amount")?);

        let mut months: BTreeMap<MonthKey, BTreeMap<Category, Decimal>> = BTreeMap::new();
        for (i, result) in rdr.records().enumerate() {
            let line = i + 2;
            let record = result.with_context(|| format!("Line {line}: failed to read record"))?;
            if record.iter().all(|f| f.trim().is_empty()) {
                continue;
            }
            let field = |idx: usize| record.get(idx).unwrap_or("").trim();

            let month_str = field(month_col);
            let month = MonthKey::parse(month_str)
                .with_context(|| format!("Line {line}: could not parse month '{month_str}'"))?;
            months
                .entry(month)
                .or_default()
                .insert(Category::parse(field(cat_col)), coerce_amount(field(amount_col)));
        }

        tracing::info!(months = months.len(), "budgets loaded");
        Ok(months)
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    anyhow::bail!("Could not parse date: {s}")
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;
