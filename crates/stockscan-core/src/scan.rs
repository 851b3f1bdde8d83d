//! # Scan Processor
//!
//! Turns one decoded code plus a mode into one inventory mutation.
//!
//! ## Add Mode
//! ```text
//! decoded id
//!     │
//!     ▼
//! ┌──────────────┐  found   ┌──────────────────────┐
//! │   lookup     │─────────►│ quantity += 1        │──► Incremented
//! └──────┬───────┘          └──────────────────────┘
//!        │ not found
//!        ▼
//! ┌──────────────┐  name    ┌──────────────────────┐
//! │ ask for name │─────────►│ append {id, name, 1} │──► Registered
//! └──────┬───────┘          └──────────────────────┘
//!        │ cancelled / blank
//!        ▼
//!    Cancelled (no mutation)
//! ```
//!
//! ## Remove Mode
//! ```text
//! decoded id
//!     │
//!     ▼
//! ┌──────────────┐ not found
//! │   lookup     │──────────► Err(ItemNotFound)
//! └──────┬───────┘
//!        │ found
//!        ▼
//! ┌──────────────┐
//! │ ask quantity │  (suggest "1", unparseable → 0)
//! └──────┬───────┘
//!        ├── qty <= 0 ─────────► Cancelled (silent)
//!        ├── qty > stock ──────► Err(InsufficientStock), nothing removed
//!        └── otherwise ────────► quantity -= qty ──► Removed
//! ```
//!
//! Every path is all-or-nothing. The processor does not know about roles;
//! gating add mode is the caller's job.

use std::fmt;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::inventory::Inventory;
use crate::prompt::{Prompt, PromptReply, PromptRequest};
use crate::types::{InventoryItem, ScanMode};
use crate::validation::{parse_quantity_reply, validate_item_id, validate_item_name};

/// Result of a successfully handled scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A known code gained one unit.
    Incremented { item: InventoryItem },

    /// An unknown code was registered with one unit.
    Registered { item: InventoryItem },

    /// Units were taken out of a known code.
    Removed { item: InventoryItem, removed: u32 },

    /// The operator backed out; nothing changed.
    Cancelled,
}

impl ScanOutcome {
    /// Returns true if the inventory changed and must be persisted.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, ScanOutcome::Cancelled)
    }

    /// The affected record, as it is after the scan.
    pub fn item(&self) -> Option<&InventoryItem> {
        match self {
            ScanOutcome::Incremented { item }
            | ScanOutcome::Registered { item }
            | ScanOutcome::Removed { item, .. } => Some(item),
            ScanOutcome::Cancelled => None,
        }
    }
}

impl fmt::Display for ScanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanOutcome::Incremented { item } => write!(
                f,
                "Added 1 to {}. New stock: {}",
                item.name, item.quantity
            ),
            ScanOutcome::Registered { item } => {
                write!(f, "Registered {} with 1 unit.", item.name)
            }
            ScanOutcome::Removed { item, removed } => write!(
                f,
                "Removed {} from {}. Remaining: {}",
                removed, item.name, item.quantity
            ),
            ScanOutcome::Cancelled => f.write_str("Cancelled."),
        }
    }
}

/// Applies scans to an inventory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanProcessor;

impl ScanProcessor {
    /// Handles one decoded code.
    ///
    /// ## Arguments
    /// * `inventory` - Mutated in place on success
    /// * `decoded_id` - QR payload, used verbatim
    /// * `mode` - Add or remove
    /// * `prompt` - Asked at most once
    ///
    /// ## Returns
    /// * `Ok(ScanOutcome)` - What happened (possibly `Cancelled`)
    /// * `Err(ItemNotFound)` - Remove of an unknown code
    /// * `Err(InsufficientStock)` - Remove of more than is held
    /// * `Err(QuantityOverflow)` - Add past the largest quantity
    /// * `Err(Validation(_))` - Empty code or over-long name
    pub fn process<P>(
        inventory: &mut Inventory,
        decoded_id: &str,
        mode: ScanMode,
        prompt: &mut P,
    ) -> CoreResult<ScanOutcome>
    where
        P: Prompt + ?Sized,
    {
        validate_item_id(decoded_id)?;

        match mode {
            ScanMode::Add => Self::add(inventory, decoded_id, prompt),
            ScanMode::Remove => Self::remove(inventory, decoded_id, prompt),
        }
    }

    fn add<P>(inventory: &mut Inventory, id: &str, prompt: &mut P) -> CoreResult<ScanOutcome>
    where
        P: Prompt + ?Sized,
    {
        if inventory.find_by_id(id).is_some() {
            let item = inventory.increment(id)?.clone();
            return Ok(ScanOutcome::Incremented { item });
        }

        let request = PromptRequest::ItemName { id: id.to_string() };
        let name = match prompt.ask(&request) {
            PromptReply::Value(text) => match validate_item_name(&text) {
                Ok(name) => name,
                Err(ValidationError::Required { .. }) => return Ok(ScanOutcome::Cancelled),
                Err(e) => return Err(e.into()),
            },
            PromptReply::Cancelled => return Ok(ScanOutcome::Cancelled),
        };

        let item = inventory
            .register(InventoryItem::registered(id, name))?
            .clone();
        Ok(ScanOutcome::Registered { item })
    }

    fn remove<P>(inventory: &mut Inventory, id: &str, prompt: &mut P) -> CoreResult<ScanOutcome>
    where
        P: Prompt + ?Sized,
    {
        let (name, available) = match inventory.get(id) {
            Some(item) => (item.name.clone(), item.quantity),
            None => return Err(CoreError::ItemNotFound(id.to_string())),
        };

        let requested = match prompt.ask(&PromptRequest::removal(name.clone())) {
            PromptReply::Value(text) => parse_quantity_reply(&text),
            PromptReply::Cancelled => 0,
        };

        if requested <= 0 {
            return Ok(ScanOutcome::Cancelled);
        }

        let removed = match u32::try_from(requested) {
            Ok(quantity) if quantity <= available => quantity,
            _ => {
                return Err(CoreError::InsufficientStock {
                    id: id.to_string(),
                    name,
                    available,
                    requested,
                })
            }
        };

        let item = inventory.remove_units(id, removed)?.clone();
        Ok(ScanOutcome::Removed { item, removed })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
