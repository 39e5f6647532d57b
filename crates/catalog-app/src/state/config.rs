//! # Configuration State
//!
//! Application configuration resolved at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Explicit values set by the embedder (tests inject here)
//! 2. Environment variables (`MINI_CATALOG_*`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use catalog_data::FetchDelays;

/// Application configuration.
///
/// ## Fields
/// Defaults are suitable for running the app as shipped; the embedding
/// shell or a test harness overrides what it needs.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where the key-value store lives. `None` resolves to the platform
    /// data directory at session init.
    pub data_dir: Option<PathBuf>,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Simulated feed latency profile.
    pub fetch_delays: FetchDelays,
}

impl Default for AppConfig {
    /// Returns the default configuration.
    ///
    /// ## Default Values
    /// - Data dir: platform-resolved at init
    /// - Currency: USD ($), 2 decimals
    /// - Feed latency: the simulated mobile profile
    fn default() -> Self {
        AppConfig {
            data_dir: None,
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            fetch_delays: FetchDelays::simulated(),
        }
    }
}

impl AppConfig {
    /// Creates an AppConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `MINI_CATALOG_DATA_DIR`: Override the storage directory
    /// - `MINI_CATALOG_CURRENCY_SYMBOL`: Override the display symbol
    pub fn from_env() -> Self {
        let mut config = AppConfig::default();

        if let Ok(dir) = std::env::var("MINI_CATALOG_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Ok(symbol) = std::env::var("MINI_CATALOG_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(2999), "$29.99");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
