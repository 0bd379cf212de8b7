//! Runtime settings for the holiday fetch.
//!
//! Resolution order (later wins): built-in defaults, `.env` / process
//! environment, CLI flags (applied in `app`).

use std::time::Duration;

use crate::error::{AppError, EXIT_USAGE};

pub const DEFAULT_URL: &str = "https://apis.digital.gob.cl/fl/feriados";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

pub const ENV_URL: &str = "FERIADOS_URL";
pub const ENV_TIMEOUT_SECS: &str = "FERIADOS_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Settings {
    /// Defaults overridden by `.env` and the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut settings = Self::default();

        if let Some(url) = lookup(ENV_URL) {
            let url = url.trim();
            if !url.is_empty() {
                settings.url = url.to_string();
            }
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            settings.timeout = parse_timeout_secs(&raw).ok_or_else(|| {
                AppError::new(
                    EXIT_USAGE,
                    format!("Invalid {ENV_TIMEOUT_SECS} '{raw}': expected a positive number of seconds."),
                )
            })?;
        }

        Ok(settings)
    }

    /// Apply CLI overrides on top of the resolved settings.
    pub fn with_overrides(mut self, url: Option<&str>, timeout_secs: Option<u64>) -> Result<Self, AppError> {
        if let Some(url) = url {
            self.url = url.to_string();
        }
        if let Some(secs) = timeout_secs {
            if secs == 0 {
                return Err(AppError::new(EXIT_USAGE, "Timeout must be > 0 seconds."));
            }
            self.timeout = Duration::from_secs(secs);
        }
        Ok(self)
    }
}

fn parse_timeout_secs(raw: &str) -> Option<Duration> {
    let secs = raw.trim().parse::<u64>().ok()?;
    if secs == 0 {
        return None;
    }
    Some(Duration::from_secs(secs))
}
