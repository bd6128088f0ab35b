//! Configuration management for the Elidune catalog

use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

/// Upper bound on the loan period (about a century)
pub const MAX_LOAN_DURATION_DAYS: i64 = 36_500;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoansConfig {
    /// Loan period in days; due date is borrow date plus this
    pub duration_days: i64,
    /// Fine charged per overdue day on return
    pub fine_per_day: Decimal,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UsersConfig {
    pub default_max_borrow_limit: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub loans: LoansConfig,
    #[serde(default)]
    pub users: UsersConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. ELIDUNE__LOANS__FINE_PER_DAY)
            .add_source(
                Environment::with_prefix("ELIDUNE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject loan settings that would break due-date or fine arithmetic
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_LOAN_DURATION_DAYS).contains(&self.loans.duration_days) {
            return Err(ConfigError::Message(format!(
                "loans.duration_days must be between 1 and {}, got {}",
                MAX_LOAN_DURATION_DAYS, self.loans.duration_days
            )));
        }
        if self.loans.fine_per_day.is_sign_negative() {
            return Err(ConfigError::Message(format!(
                "loans.fine_per_day must not be negative, got {}",
                self.loans.fine_per_day
            )));
        }
        Ok(())
    }
}

impl Default for LoansConfig {
    fn default() -> Self {
        Self {
            duration_days: 14,
            fine_per_day: Decimal::ONE,
        }
    }
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            default_max_borrow_limit: 3,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
