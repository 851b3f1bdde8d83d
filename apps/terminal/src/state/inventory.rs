//! # Inventory State
//!
//! The in-memory inventory and the repository it is persisted through.
//!
//! ## Commit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory State Operations                           │
//! │                                                                         │
//! │  working_copy() ──► ScanProcessor mutates the copy                     │
//! │                           │                                             │
//! │                           ▼                                             │
//! │  commit(copy) ──► repo.save(&copy) ──┬── Ok  ──► in-memory = copy      │
//! │                                      └── Err ──► in-memory unchanged   │
//! │                                                                         │
//! │  NOTE: memory and storage never disagree after a failed write.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockscan_core::Inventory;
use stockscan_db::InventoryRepository;
use tracing::info;

use crate::error::AppResult;

/// Current inventory plus its write-through repository.
#[derive(Debug)]
pub struct InventoryState {
    inventory: Inventory,
    repo: InventoryRepository,
}

impl InventoryState {
    /// Restores the inventory from `repo`.
    ///
    /// A malformed snapshot comes back empty; only storage failures error.
    pub async fn load(repo: InventoryRepository) -> AppResult<Self> {
        let inventory = repo.load().await?;
        info!(
            key = %repo.storage_key(),
            items = inventory.len(),
            units = inventory.total_units(),
            "Inventory loaded"
        );
        Ok(InventoryState { inventory, repo })
    }

    /// Current committed inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Copy to run a mutation against.
    pub fn working_copy(&self) -> Inventory {
        self.inventory.clone()
    }

    /// Persists `working` and makes it the current inventory.
    ///
    /// ## Returns
    /// * `Ok(())` - Saved and committed
    /// * `Err(AppError)` - Not saved; the current inventory is unchanged
    pub async fn commit(&mut self, working: Inventory) -> AppResult<()> {
        self.repo.save(&working).await?;
        self.inventory = working;
        Ok(())
    }
}
