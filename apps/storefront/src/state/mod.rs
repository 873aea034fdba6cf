//! # State Module
//!
//! State handed to commands. Each command takes only what it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐       │
//! │  │  CatalogState    │  │    CartState     │  │   ConfigState    │       │
//! │  │                  │  │                  │  │                  │       │
//! │  │  Catalog         │  │  Arc<Mutex<      │  │  store_name      │       │
//! │  │  (shared tables) │  │    Cart          │  │  currency        │       │
//! │  │                  │  │  >>  per session │  │  catalog_path    │       │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────┘       │
//! │                                                                         │
//! │  THREAD SAFETY:                                                         │
//! │  • CatalogState: Catalog locks its own tables                           │
//! │  • CartState: Arc<Mutex<T>> for exclusive access                        │
//! │  • ConfigState: read-only after initialization                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::ConfigState;
