//! Environment-driven settings for the demo binary

use std::env;

use crate::error::{AppError, Result};
use crate::pricing::PricingStrategy;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Currency code attached to quoted amounts
    pub currency: String,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Strategy applied to demo quotes
    pub strategy: PricingStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "EUR".to_string(),
            log_level: "info".to_string(),
            strategy: PricingStrategy::Weekday,
        }
    }
}

impl Config {
    /// Load configuration from `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let currency = match lookup("PRICING_CURRENCY") {
            Some(code) => {
                let code = code.trim().to_uppercase();
                if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(AppError::Config(format!(
                        "PRICING_CURRENCY must be a 3-letter code, got '{}'",
                        code
                    )));
                }
                code
            }
            None => defaults.currency,
        };

        let log_level = lookup("PRICING_LOG_LEVEL")
            .map(|level| level.trim().to_lowercase())
            .filter(|level| !level.is_empty())
            .unwrap_or(defaults.log_level);

        let strategy = PricingStrategy::from_optional(lookup("PRICING_STRATEGY").as_deref());

        Ok(Self {
            currency,
            log_level,
            strategy,
        })
    }
}
