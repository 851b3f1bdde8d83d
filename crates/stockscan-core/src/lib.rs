//! # stockscan-core: Pure Inventory Logic for Stockscan
//!
//! This crate is the **heart** of Stockscan. It contains the inventory
//! mutation rules and the role gating as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockscan Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Terminal (apps/terminal)                        │   │
//! │  │   Role Select ──► Dashboard ──► Add / Remove / List             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ decoded codes, prompt replies          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ stockscan-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ inventory │  │   scan    │  │  access   │  │  session  │  │   │
//! │  │   │ Inventory │  │ Processor │  │   Gate    │  │  Router   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO TERMINAL • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │ snapshot JSON                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                stockscan-db (Persistence Layer)                 │   │
//! │  │                 SQLite key-value store, migrations              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (InventoryItem, Role, ScanMode, View)
//! - [`inventory`] - The ordered item collection and its snapshot format
//! - [`access`] - Admin allow-list (the Access Gate)
//! - [`prompt`] - Operator input suspension point
//! - [`scan`] - The Scan Processor (add/remove rules)
//! - [`session`] - Session role and view routing
//! - [`validation`] - Input validation and quantity parsing
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockscan_core::prompt::ScriptedPrompt;
//! use stockscan_core::scan::{ScanOutcome, ScanProcessor};
//! use stockscan_core::{Inventory, ScanMode};
//!
//! let mut inventory = Inventory::new();
//! let mut prompt = ScriptedPrompt::new(["Bolt"]);
//!
//! let outcome = ScanProcessor::process(&mut inventory, "ABC123", ScanMode::Add, &mut prompt)
//!     .unwrap();
//!
//! assert!(matches!(outcome, ScanOutcome::Registered { .. }));
//! assert_eq!(inventory.get("ABC123").unwrap().quantity, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod access;
pub mod error;
pub mod inventory;
pub mod prompt;
pub mod scan;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use access::AdminAllowList;
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key the inventory snapshot lives under.
pub const INVENTORY_STORAGE_KEY: &str = "inventory";

/// Full names granted admin access when no list is configured.
///
/// Entries are compared after normalization (trimmed, lowercased).
pub const DEFAULT_ADMIN_NAMES: &[&str] = &["Cody Eckhardt"];

/// Suggested reply shown when asking how many units to remove.
pub const DEFAULT_REMOVAL_SUGGESTION: &str = "1";
