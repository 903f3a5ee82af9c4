mod analytics;
mod config;
mod import;
mod ledger;
mod models;
mod run;
mod ui;

use anyhow::{Context, Result};
use std::sync::{Mutex, Once};

const LOG_ENV: &str = "BUDGETDASH_LOG";
const LOG_FILE_ENV: &str = "BUDGETDASH_LOG_FILE";

static TRACING_INIT: Once = Once::new();

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let interactive = args.len() == 1 || matches!(args.get(1).map(String::as_str), Some("open" | "o"));
    init_tracing(interactive)?;

    let config = config::Config::load().context("Failed to load configuration")?;

    match args.len() {
        1 => run::as_tui(config, ledger::Ledger::new()),
        2.. => run::as_cli(&args, config),
        _ => {
            eprintln!("Usage: budgetdash [command]");
            Ok(())
        }
    }
}

/// Logs go to stderr for CLI commands. The dashboard owns the terminal, so
/// there they go to `BUDGETDASH_LOG_FILE` when set and nowhere otherwise.
fn init_tracing(interactive: bool) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = || {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("budgetdash=warn"))
    };

    let log_file = match std::env::var_os(LOG_FILE_ENV) {
        Some(path) => Some(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path.to_string_lossy()))?,
        ),
        None => None,
    };

    TRACING_INIT.call_once(|| match (interactive, log_file) {
        (_, Some(file)) => fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        (false, None) => fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init(),
        (true, None) => {}
    });
    Ok(())
}
