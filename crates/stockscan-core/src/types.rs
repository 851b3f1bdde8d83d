//! # Domain Types
//!
//! Core domain types used throughout Stockscan.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ InventoryItem   │   │      Role       │   │    ScanMode     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (QR text)   │   │  Unset          │   │  Add            │       │
//! │  │  name           │   │  Admin          │   │  Remove         │       │
//! │  │  quantity (u32) │   │  Staff          │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────┐       │
//! │  │ View: RoleSelect │ Dashboard │ Add │ Remove │ List           │       │
//! │  └─────────────────────────────────────────────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! An item's `id` is the decoded QR payload, used verbatim. There is no
//! generated surrogate key: the code printed on the shelf IS the identity.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Inventory Item
// =============================================================================

/// A tracked stock item.
///
/// Serialized as `{"id": ..., "name": ..., "quantity": ...}`, which is also
/// the persisted snapshot element format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Decoded QR payload. Unique within an inventory.
    pub id: String,

    /// Display name, assigned when the code was first registered.
    pub name: String,

    /// Units on hand. Never negative.
    pub quantity: u32,
}

impl InventoryItem {
    /// Creates a freshly registered item holding a single unit.
    pub fn registered(id: impl Into<String>, name: impl Into<String>) -> Self {
        InventoryItem {
            id: id.into(),
            name: name.into(),
            quantity: 1,
        }
    }

    /// Checks whether `quantity` units can be taken out.
    pub fn can_remove(&self, quantity: u32) -> bool {
        self.quantity >= quantity
    }

    /// Case-insensitive substring match against name or id.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.id.to_lowercase().contains(needle)
    }
}

// =============================================================================
// Role
// =============================================================================

/// Access level of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// No access level selected yet (role-select screen).
    #[default]
    Unset,
    /// Full access: may add stock.
    Admin,
    /// Restricted access: remove and list only.
    Staff,
}

impl Role {
    /// Returns true once an access level has been selected.
    #[inline]
    pub const fn is_set(&self) -> bool {
        !matches!(self, Role::Unset)
    }

    /// Returns true for the admin level.
    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Unset => "none",
            Role::Admin => "admin",
            Role::Staff => "staff",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Scan Mode
// =============================================================================

/// What a scan does to the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// Register a new code or add one unit.
    Add,
    /// Take units out of stock.
    Remove,
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanMode::Add => f.write_str("add"),
            ScanMode::Remove => f.write_str("remove"),
        }
    }
}

// =============================================================================
// View
// =============================================================================

/// Screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Access level chooser, shown while the role is unset.
    RoleSelect,
    /// Action menu.
    #[default]
    Dashboard,
    /// Scanning in add mode.
    Add,
    /// Scanning in remove mode.
    Remove,
    /// Searchable stock list.
    List,
}

impl View {
    /// The scan mode a scanning view runs in, if any.
    pub const fn scan_mode(&self) -> Option<ScanMode> {
        match self {
            View::Add => Some(ScanMode::Add),
            View::Remove => Some(ScanMode::Remove),
            _ => None,
        }
    }
}

impl From<ScanMode> for View {
    fn from(mode: ScanMode) -> Self {
        match mode {
            ScanMode::Add => View::Add,
            ScanMode::Remove => View::Remove,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
