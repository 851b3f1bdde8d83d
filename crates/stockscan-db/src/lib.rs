//! # stockscan-db: Persistence Layer for Stockscan
//!
//! This crate provides local storage for Stockscan: a SQLite-backed
//! key-value table and the inventory snapshot stored in it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockscan Data Flow                              │
//! │                                                                         │
//! │  Terminal command (scan / list)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stockscan-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────────┐  ┌─────────────┐  │   │
//! │  │   │   Database    │    │   Repositories    │  │ Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│ KeyValueRepository│  │ (embedded)  │  │   │
//! │  │   │  SqlitePool   │    │ InventoryRepo     │  │ 001_kv.sql  │  │   │
//! │  │   └───────────────┘    └───────────────────┘  └─────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  SQLite file in the platform data dir (stockscan.db)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use stockscan_core::INVENTORY_STORAGE_KEY;
//! use stockscan_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./stockscan.db")).await?;
//! let mut inventory = db.inventory(INVENTORY_STORAGE_KEY).load().await?;
//! // ... scan ...
//! db.inventory(INVENTORY_STORAGE_KEY).save(&inventory).await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::inventory::InventoryRepository;
pub use repository::kv::{KeyValueEntry, KeyValueRepository};
