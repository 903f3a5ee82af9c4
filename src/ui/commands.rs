use std::collections::HashMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use std::str::FromStr;

use super::app::{App, InputMode, Screen};
use crate::models::{Category, MonthKey, MAX_AMOUNT, YEAR_RANGE};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit", cmd_quit, r);
    register_command!("quit", "Quit", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("b", "Go to Budgets", cmd_budgets, r);
    register_command!("budgets", "Go to Budgets", cmd_budgets, r);
    register_command!("i", "Go to Insights", cmd_insights, r);
    register_command!("insights", "Go to Insights", cmd_insights, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add transaction (e.g. :add 2025-07-03 Dinner 100, or :add for the form)",
        cmd_add,
        r
    );
    register_command!("a", "Add transaction", cmd_add, r);
    register_command!("edit", "Edit selected transaction", cmd_edit, r);
    register_command!("delete", "Delete selected transaction", cmd_delete, r);
    register_command!(
        "month",
        "Select budget month (e.g. :month Jul 2025 or :month 2025-07)",
        cmd_month,
        r
    );
    register_command!("m", "Select budget month", cmd_month, r);
    register_command!("next-month", "Next budget month", cmd_next_month, r);
    register_command!("prev-month", "Previous budget month", cmd_prev_month, r);
    register_command!(
        "budget",
        "Set one budget line for the selected month (e.g. :budget Food 5000)",
        cmd_budget,
        r
    );
    register_command!("save", "Save the budget form", cmd_save, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    Ok(())
}

fn cmd_budgets(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Budgets;
    Ok(())
}

fn cmd_insights(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Insights;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

/// Without arguments opens the form. With `<date> <description> <amount>`
/// fills the form and submits it, so the same validation applies.
fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    app.begin_add();
    if args.is_empty() {
        return Ok(());
    }

    let Some((date, rest)) = args.split_once(' ') else {
        app.set_status("Usage: :add <date> <description> <amount>");
        app.input_mode = InputMode::Normal;
        return Ok(());
    };
    // Last token is the amount, everything between is the description
    let Some((description, amount)) = rest.trim().rsplit_once(' ') else {
        app.set_status("Usage: :add <date> <description> <amount>");
        app.input_mode = InputMode::Normal;
        return Ok(());
    };

    app.txn_form.date = date.to_string();
    app.txn_form.description = description.trim().to_string();
    app.txn_form.amount = amount.to_string();
    app.submit_form();
    Ok(())
}

fn cmd_edit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    if app.screen != Screen::Transactions {
        app.set_status("Navigate to Transactions and select one first");
        return Ok(());
    }
    app.begin_edit();
    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App) -> anyhow::Result<()> {
    if app.screen != Screen::Transactions {
        app.set_status("Navigate to Transactions and select one first");
        return Ok(());
    }
    app.request_delete();
    Ok(())
}

fn cmd_month(args: &str, app: &mut App) -> anyhow::Result<()> {
    let Some(month) = MonthKey::parse(args) else {
        app.set_status("Invalid month. Use e.g. Jul 2025 or 2025-07");
        return Ok(());
    };

    app.show_budget_month(month);
    Ok(())
}

/// Unlike `]`, steps past December into the next year.
fn cmd_next_month(_args: &str, app: &mut App) -> anyhow::Result<()> {
    let next = app.budget_form.month().succ();
    step_budget_month(app, next);
    Ok(())
}

fn cmd_prev_month(_args: &str, app: &mut App) -> anyhow::Result<()> {
    let prev = app.budget_form.month().pred();
    step_budget_month(app, prev);
    Ok(())
}

fn step_budget_month(app: &mut App, month: MonthKey) {
    if !YEAR_RANGE.contains(&month.year()) {
        app.set_status("No budget months beyond that year");
        return;
    }
    app.show_budget_month(month);
}

fn cmd_budget(args: &str, app: &mut App) -> anyhow::Result<()> {
    // Last token is the amount, everything before is the category name
    let Some((category_name, amount_str)) = args.rsplit_once(' ') else {
        app.set_status("Usage: :budget <category> <amount>. Example: :budget Food 5000");
        return Ok(());
    };

    let Some(category) = Category::all()
        .iter()
        .copied()
        .find(|c| c.as_str().eq_ignore_ascii_case(category_name.trim()))
    else {
        let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
        app.set_status(format!(
            "Unknown category '{category_name}'. Available: {}",
            names.join(", ")
        ));
        return Ok(());
    };

    let amount = match Decimal::from_str(amount_str) {
        Ok(a) if a >= Decimal::ZERO && a <= Decimal::from(MAX_AMOUNT) => a,
        _ => {
            app.set_status(format!("Invalid amount: {amount_str}"));
            return Ok(());
        }
    };

    let month = app.budget_form.month();
    app.ledger.set_budget(month, category, amount);
    app.budget_form.load(app.ledger.budgets());
    app.refresh();
    app.screen = Screen::Budgets;
    let shown = app.money(amount);
    app.set_status(format!("Budget set: {category} = {shown} for {month}"));
    Ok(())
}

fn cmd_save(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.save_budget();
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
