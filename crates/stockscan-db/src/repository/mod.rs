//! # Repository Module
//!
//! Storage repositories for Stockscan.
//!
//! ## Layering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Terminal command                                                       │
//! │       │  db.inventory("inventory").save(&inventory)                     │
//! │       ▼                                                                 │
//! │  InventoryRepository  ── JSON snapshot of the whole collection         │
//! │       │  kv.set("inventory", "[...]")                                   │
//! │       ▼                                                                 │
//! │  KeyValueRepository   ── one row per key in kv_store                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`KeyValueRepository`](kv::KeyValueRepository) - Raw key-value access
//! - [`InventoryRepository`](inventory::InventoryRepository) - Inventory load/save

pub mod inventory;
pub mod kv;
