//! # Storefront Library
//!
//! Session and command layer of the storefront. An outer controller layer
//! (routing, views, authentication) calls into [`commands`] with the state
//! from [`state`].
//!
//! ## Module Organization
//! ```text
//! storefront_lib/
//! ├── lib.rs          ◄─── You are here (tracing setup, quote rendering)
//! ├── main.rs         ◄─── `storefront quote` binary
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Catalog handle wrapper
//! │   ├── cart.rs     ◄─── Session cart
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── discount.rs ◄─── Merchant discount commands
//! │   └── item.rs     ◄─── Merchant item commands
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::commands::cart::{get_cart, CartResponse};
use crate::error::{ApiError, ErrorCode};
use crate::state::{CartState, CatalogState, ConfigState};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_core=trace` - Per-line pricing decisions
/// - Default: `info,storefront=debug`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prices a stored session cart against a catalog snapshot.
///
/// `catalog_path` falls back to the configured snapshot when `None`.
pub fn quote_files(
    config: &ConfigState,
    catalog_path: Option<&Path>,
    cart_path: &Path,
) -> Result<String, ApiError> {
    let catalog = match catalog_path {
        Some(path) => CatalogState::new(storefront_catalog::Catalog::load(path)?),
        None if config.catalog_path.is_some() => CatalogState::from_config(config)?,
        None => {
            return Err(ApiError::new(
                ErrorCode::CatalogError,
                "No catalog given and STOREFRONT_CATALOG_PATH is not set",
            ))
        }
    };

    info!(path = %cart_path.display(), "Reading cart");
    let json = fs::read_to_string(cart_path).map_err(|e| {
        ApiError::cart(format!("Failed to read {}: {}", cart_path.display(), e))
    })?;
    let cart = CartState::from_session(&json)?;

    let response = get_cart(&catalog, &cart)?;
    Ok(render_quote(config, &response))
}

/// Renders a priced cart as a plain-text receipt.
///
/// ```text
/// Storefront
/// Rim                    5 x $5.00 (50% off)   $25.00
/// Grips                  4 x $20.00            $80.00
/// Items: 9
/// Savings: $25.00
/// Total: $105.00
/// ```
pub fn render_quote(config: &ConfigState, response: &CartResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", config.store_name);

    for line in &response.lines {
        let unit = config.format_currency(line.effective_unit_price_cents);
        let priced = match line.discount_percentage {
            Some(pct) => format!("{} x {} ({}% off)", line.quantity, unit, pct),
            None => format!("{} x {}", line.quantity, unit),
        };
        let _ = writeln!(
            out,
            "{:<22} {:<21} {}",
            line.name,
            priced,
            config.format_currency(line.subtotal_cents)
        );
    }

    let _ = writeln!(out, "Items: {}", response.total_items);
    if response.discount_applied {
        let _ = writeln!(
            out,
            "Savings: {}",
            config.format_currency(response.savings_cents)
        );
    }
    let _ = write!(out, "Total: {}", config.format_currency(response.total_cents));
    out
}
