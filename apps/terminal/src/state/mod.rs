//! # State Module
//!
//! Application state for the terminal app, split by concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌────────────────┐  ┌──────────────────┐            │
//! │  │   DbState    │  │ InventoryState │  │   ConfigState    │            │
//! │  │              │  │                │  │                  │            │
//! │  │  Database    │  │  Inventory     │  │  admin_names     │            │
//! │  │  (SQLite     │  │  + repository  │  │  scanner_fps     │            │
//! │  │   pool)      │  │  (commit)      │  │  storage_key     │            │
//! │  └──────────────┘  └────────────────┘  └──────────────────┘            │
//! │                                                                         │
//! │  The session (role + screen) lives in `stockscan_core::session`.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod db;
mod inventory;

pub use config::{
    ConfigState, FileConfig, ENV_ADMIN_NAMES, ENV_DB_PATH, ENV_SCANNER_FPS, ENV_STORAGE_KEY,
};
pub use db::DbState;
pub use inventory::InventoryState;
