//! # Storefront Quote Tool
//!
//! Prices a stored cart against a catalog snapshot.
//!
//! ## Usage
//! ```bash
//! # Explicit catalog
//! cargo run -p storefront -- quote ./catalog.json ./cart.json
//!
//! # Catalog from STOREFRONT_CATALOG_PATH
//! STOREFRONT_CATALOG_PATH=./catalog.json cargo run -p storefront -- quote ./cart.json
//! ```

use std::env;
use std::path::Path;
use std::process::ExitCode;

use storefront_lib::state::ConfigState;
use storefront_lib::{init_tracing, quote_files};

const USAGE: &str = "usage: storefront quote [<catalog.json>] <cart.json>";

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = ConfigState::from_env();

    let (catalog_path, cart_path) = match args.as_slice() {
        [cmd, cart] if cmd == "quote" => (None, Path::new(cart)),
        [cmd, catalog, cart] if cmd == "quote" => (Some(Path::new(catalog)), Path::new(cart)),
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    match quote_files(&config, catalog_path, cart_path) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err.message);
            ExitCode::FAILURE
        }
    }
}
