use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub(crate) const CONFIG_ENV: &str = "BUDGETDASH_CONFIG";
pub(crate) const CURRENCY_ENV: &str = "BUDGETDASH_CURRENCY";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Display preferences. Nothing here is ledger data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) currency_symbol: String,
    /// Year offered by the budget month selector. Defaults to the current year.
    pub(crate) budget_year: Option<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".into(),
            budget_year: None,
        }
    }
}

impl Config {
    /// Resolve the config file (`BUDGETDASH_CONFIG`, else the platform config
    /// dir), then apply environment overrides.
    pub(crate) fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(default_config_path);
        let mut config = match path {
            Some(p) => Self::from_path(&p)?,
            None => Self::default(),
        };
        if let Ok(symbol) = std::env::var(CURRENCY_ENV) {
            config.currency_symbol = symbol;
        }
        Ok(config)
    }

    /// A missing file yields defaults; an unreadable or malformed one is an error.
    pub(crate) fn from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Clamped into the years a month key can name.
    pub(crate) fn budget_year(&self) -> i32 {
        use crate::models::{MonthKey, YEAR_RANGE};

        self.budget_year
            .unwrap_or_else(|| MonthKey::current().year())
            .clamp(*YEAR_RANGE.start(), *YEAR_RANGE.end())
    }
}

fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "budgetdash", "BudgetDash")
        .map(|dirs| dirs.config_dir().join("config.json"))
}
