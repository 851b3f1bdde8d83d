//! # Inventory Repository
//!
//! Loads and saves the whole inventory as one JSON snapshot.
//!
//! ## Write-Through
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  scan ──► Inventory mutated ──► save(&inventory) ──► kv_store row      │
//! │                                  (full snapshot, overwrites prior)      │
//! │                                                                         │
//! │  startup ──► load() ──► kv_store row                                   │
//! │                  ├── missing ─────────► empty inventory                │
//! │                  ├── malformed ───────► empty inventory (warn!)        │
//! │                  └── valid ───────────► restored inventory             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A malformed snapshot is treated exactly like "no data yet": the caller
//! never sees a parse error. The next successful save overwrites it.

use stockscan_core::Inventory;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use crate::repository::kv::KeyValueRepository;

/// Repository for the inventory snapshot.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    kv: KeyValueRepository,
    storage_key: String,
}

impl InventoryRepository {
    /// Creates a repository reading and writing `storage_key`.
    pub fn new(kv: KeyValueRepository, storage_key: impl Into<String>) -> Self {
        InventoryRepository {
            kv,
            storage_key: storage_key.into(),
        }
    }

    /// Key the snapshot is stored under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Restores the last saved inventory.
    ///
    /// ## Returns
    /// * `Ok(Inventory)` - Restored, or empty if nothing (valid) was saved
    /// * `Err(DbError)` - The store itself could not be read
    pub async fn load(&self) -> DbResult<Inventory> {
        let Some(payload) = self.kv.get(&self.storage_key).await? else {
            debug!(key = %self.storage_key, "No inventory snapshot yet");
            return Ok(Inventory::new());
        };

        match Inventory::from_json(&payload) {
            Ok(inventory) => {
                info!(
                    key = %self.storage_key,
                    items = inventory.len(),
                    "Inventory restored"
                );
                Ok(inventory)
            }
            Err(e) => {
                warn!(
                    key = %self.storage_key,
                    error = %e,
                    "Discarding malformed inventory snapshot"
                );
                Ok(Inventory::new())
            }
        }
    }

    /// Overwrites the stored snapshot with `inventory`.
    pub async fn save(&self, inventory: &Inventory) -> DbResult<()> {
        let payload = inventory
            .to_json()
            .map_err(|e| DbError::Serialization(e.to_string()))?;

        self.kv.set(&self.storage_key, &payload).await?;

        debug!(
            key = %self.storage_key,
            items = inventory.len(),
            "Inventory snapshot saved"
        );
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
