use anyhow::Result;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::analytics::Dashboard;
use crate::config::Config;
use crate::models::TxnType;
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], config: Config) -> Result<()> {
    match args[1].as_str() {
        "open" | "o" => cli_open(&args[2..], config),
        "report" | "r" => cli_report(&args[2..], &config),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("budgetdash {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("BudgetDash: personal finance dashboard");
    println!();
    println!("Usage: budgetdash [command]");
    println!();
    println!("Commands:");
    println!("  (none)                          Launch the dashboard with an empty ledger");
    println!("  open <transactions.csv>         Launch the dashboard preloaded from CSV");
    println!("    --budgets <budgets.csv>       Also load monthly budgets");
    println!("  report <transactions.csv>       Print totals, variance and insights");
    println!("    --budgets <budgets.csv>       Also load monthly budgets");
    println!("  --help, -h                      Show this help");
    println!("  --version, -V                   Show version");
    println!();
    println!("CSV headers:");
    println!("  transactions: description,amount,date,type,category");
    println!("  budgets:      month,category,amount");
}

/// Transactions file is the first non-flag argument; `--budgets` is optional.
fn parse_sources(args: &[String], usage: &str) -> Result<(PathBuf, Option<PathBuf>)> {
    let transactions = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("Usage: {usage}"))?;

    let budgets = match args.iter().position(|a| a == "--budgets") {
        Some(i) => Some(
            args.get(i + 1)
                .map(PathBuf::from)
                .ok_or_else(|| anyhow::anyhow!("--budgets needs a file path"))?,
        ),
        None => None,
    };

    Ok((transactions, budgets))
}

fn cli_open(args: &[String], config: Config) -> Result<()> {
    let (transactions, budgets) =
        parse_sources(args, "budgetdash open <transactions.csv> [--budgets <budgets.csv>]")?;
    let ledger = crate::import::load_ledger(&transactions, budgets.as_deref())?;
    super::as_tui(config, ledger)
}

fn cli_report(args: &[String], config: &Config) -> Result<()> {
    let (transactions, budgets) =
        parse_sources(args, "budgetdash report <transactions.csv> [--budgets <budgets.csv>]")?;
    let ledger = crate::import::load_ledger(&transactions, budgets.as_deref())?;
    let view = Dashboard::compute(&ledger);
    print!("{}", render_report(&view, &config.currency_symbol));
    Ok(())
}

/// Plain-text rendering of every derived view.
pub(crate) fn render_report(view: &Dashboard, currency: &str) -> String {
    let money = |v| format_amount(v, currency);
    let s = &view.summary;
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "BudgetDash Report");
    let _ = writeln!(out, "{}", "─".repeat(48));
    let _ = writeln!(out, "  Total Income:   {} ({} txns)", money(s.total_income), s.income_count);
    let _ = writeln!(out, "  Total Expenses: {} ({} txns)", money(s.total_expense), s.expense_count);
    let _ = writeln!(out, "  Net Balance:    {}", money(s.net_balance));
    if let Some(tx) = &s.most_recent {
        let _ = writeln!(
            out,
            "  Last: {} • {} on {}",
            tx.description,
            money(tx.amount),
            tx.date.format("%d %b %Y")
        );
    }

    for side in TxnType::all() {
        let totals = view.categories.side(*side);
        if totals.is_empty() {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{side} by Category:");
        for (cat, amount) in totals {
            let _ = writeln!(out, "  {:<16} {}", cat.as_str(), money(*amount));
        }
    }

    if !view.monthly.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Monthly Totals:");
        let _ = writeln!(out, "  {:<10} {:>16} {:>16}", "Month", "Income", "Expense");
        for m in &view.monthly {
            let _ = writeln!(
                out,
                "  {:<10} {:>16} {:>16}",
                m.month.to_string(),
                money(m.income),
                money(m.expense)
            );
        }
    }

    if !view.variance.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Budget vs Actual:");
        for row in &view.variance {
            let _ = writeln!(
                out,
                "  {:<28} {:>14} {:>14}",
                row.key(),
                money(row.budgeted),
                money(row.actual)
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Insights:");
    if view.insights.is_empty() {
        let _ = writeln!(out, "  {}", crate::ui::screens::insights::EMPTY_INSIGHTS);
    }
    for insight in &view.insights {
        let _ = writeln!(out, "  {}", insight.message(currency));
    }

    out
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
