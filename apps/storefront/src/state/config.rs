//! # Configuration State
//!
//! Storefront settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization, so no lock.

use serde::{Deserialize, Serialize};
use storefront_core::Money;
use tracing::warn;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the header of printed quotes
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Catalog snapshot loaded at startup, if any
    pub catalog_path: Option<String>,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Storefront".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Largest decimal count `format_currency` can render without overflow.
    const MAX_DECIMALS: u8 = 18;

    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`
    /// - `STOREFRONT_CURRENCY_SYMBOL`
    /// - `STOREFRONT_CURRENCY_DECIMALS` (0-18; anything else keeps the default)
    /// - `STOREFRONT_CATALOG_PATH`
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`], reading variables through `lookup`.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("STOREFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("STOREFRONT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("STOREFRONT_CURRENCY_DECIMALS") {
            match raw.trim().parse::<u8>() {
                Ok(decimals) if decimals <= Self::MAX_DECIMALS => {
                    config.currency_decimals = decimals
                }
                _ => warn!(value = %raw, "Ignoring invalid STOREFRONT_CURRENCY_DECIMALS"),
            }
        }

        if let Some(path) = lookup("STOREFRONT_CATALOG_PATH").filter(|p| !p.trim().is_empty()) {
            config.catalog_path = Some(path);
        }

        config
    }

    /// Formats an amount in the smallest currency unit for display.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        let magnitude = cents.unsigned_abs();

        if self.currency_decimals == 0 {
            return format!("{}{}{}", sign, self.currency_symbol, magnitude);
        }

        let scale = 10_u64.pow(u32::from(self.currency_decimals));
        format!(
            "{}{}{}.{:0width$}",
            sign,
            self.currency_symbol,
            magnitude / scale,
            magnitude % scale,
            width = usize::from(self.currency_decimals)
        )
    }

    /// Formats a [`Money`] amount for display.
    pub fn format_money(&self, amount: Money) -> String {
        self.format_currency(amount.cents())
    }
}
