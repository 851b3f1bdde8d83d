//! # Database State
//!
//! Wraps the `Database` connection for use in commands.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! let repo = db.inventory(&config.storage_key);
//! repo.save(&working).await?;
//! ```

use stockscan_db::{Database, InventoryRepository};

/// Wrapper around `Database` held by the application.
#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }

    /// Inventory repository for `storage_key`.
    pub fn inventory(&self, storage_key: &str) -> InventoryRepository {
        self.db.inventory(storage_key)
    }
}
