//! # Inventory
//!
//! The ordered collection of [`InventoryItem`]s: the single source of truth
//! for stock levels.
//!
//! ## Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Invariants                                │
//! │                                                                         │
//! │  1. id is unique across all records                                    │
//! │  2. quantity never goes negative (u32, checked arithmetic)             │
//! │  3. insertion order is kept for display only                           │
//! │     lookups are by id, never by position                               │
//! │  4. records are never deleted (zero stock keeps the record)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Format
//! The persisted form is a plain JSON array of items:
//! ```json
//! [{"id":"ABC123","name":"Bolt","quantity":2}]
//! ```
//! A payload that fails to decode, or that breaks an invariant above, is
//! reported as [`CoreError::MalformedSnapshot`].

use serde::Serialize;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::InventoryItem;
use crate::validation::normalize_search_query;

/// Ordered inventory records keyed by decoded code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory { items: Vec::new() }
    }

    /// Builds an inventory from records, rejecting duplicate ids.
    pub fn from_items(items: Vec<InventoryItem>) -> CoreResult<Self> {
        let mut inventory = Inventory::new();
        for item in items {
            if inventory.find_by_id(&item.id).is_some() {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: item.id,
                }
                .into());
            }
            inventory.items.push(item);
        }
        Ok(inventory)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All records in insertion order.
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities.
    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Linear lookup by exact, case-sensitive id.
    ///
    /// The decoded payload is compared verbatim: `"abc123"` does not find
    /// `"ABC123"`.
    pub fn find_by_id(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Returns the record with the given id.
    pub fn get(&self, id: &str) -> Option<&InventoryItem> {
        self.find_by_id(id).map(|index| &self.items[index])
    }

    /// Filters records for the stock list.
    ///
    /// Case-insensitive substring match against name OR id. An empty query
    /// returns every record. Order follows insertion order.
    ///
    /// ## Example
    /// ```rust
    /// use stockscan_core::{Inventory, InventoryItem};
    ///
    /// let inventory = Inventory::from_items(vec![
    ///     InventoryItem::registered("ABC123", "Hex Bolt"),
    ///     InventoryItem::registered("N-7", "Wing Nut"),
    /// ])
    /// .unwrap();
    ///
    /// let hits = inventory.search("BOLT");
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].id, "ABC123");
    /// ```
    pub fn search(&self, query: &str) -> Vec<&InventoryItem> {
        let query = normalize_search_query(query);

        self.items
            .iter()
            .filter(|item| query.is_empty() || item.matches_lowercase(&query))
            .collect()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Appends a new record.
    ///
    /// ## Returns
    /// * `Ok(&InventoryItem)` - The stored record
    /// * `Err(Validation(Duplicate))` - The id is already registered
    pub fn register(&mut self, item: InventoryItem) -> CoreResult<&InventoryItem> {
        if self.find_by_id(&item.id).is_some() {
            return Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: item.id,
            }
            .into());
        }

        self.items.push(item);
        let last = self.items.len() - 1;
        Ok(&self.items[last])
    }

    /// Adds one unit to the record with the given id.
    pub fn increment(&mut self, id: &str) -> CoreResult<&InventoryItem> {
        let index = self
            .find_by_id(id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))?;
        let item = &mut self.items[index];

        item.quantity = item
            .quantity
            .checked_add(1)
            .ok_or_else(|| CoreError::QuantityOverflow(item.id.clone()))?;

        Ok(item)
    }

    /// Takes `quantity` units out of the record with the given id.
    ///
    /// All-or-nothing: if the record holds fewer units than requested the
    /// whole removal is rejected and the record is untouched.
    pub fn remove_units(&mut self, id: &str, quantity: u32) -> CoreResult<&InventoryItem> {
        let index = self
            .find_by_id(id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))?;
        let item = &mut self.items[index];

        if !item.can_remove(quantity) {
            return Err(CoreError::InsufficientStock {
                id: item.id.clone(),
                name: item.name.clone(),
                available: item.quantity,
                requested: i64::from(quantity),
            });
        }

        item.quantity -= quantity;
        Ok(item)
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    /// Encodes the full collection as the persisted JSON array.
    pub fn to_json(&self) -> CoreResult<String> {
        serde_json::to_string(self).map_err(|e| CoreError::MalformedSnapshot(e.to_string()))
    }

    /// Decodes a persisted JSON array.
    ///
    /// ## Returns
    /// * `Ok(Inventory)` - Decoded and invariant-checked
    /// * `Err(MalformedSnapshot)` - Bad JSON, wrong shape, negative or
    ///   fractional quantity, or a duplicate id
    pub fn from_json(payload: &str) -> CoreResult<Self> {
        let items: Vec<InventoryItem> = serde_json::from_str(payload)
            .map_err(|e| CoreError::MalformedSnapshot(e.to_string()))?;

        Inventory::from_items(items).map_err(|e| CoreError::MalformedSnapshot(e.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
