//! # Validation Module
//!
//! Input validation utilities for Stockscan.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Code source / console                                        │
//! │  ├── Line framing (one decoded code per line)                          │
//! │  └── Blank line = back                                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Item id and name rules (no length caps)                           │
//! │  └── Removal quantity parsing                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Inventory invariants                                         │
//! │  ├── Unique ids                                                        │
//! │  └── Non-negative quantities                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a decoded code before it is used as an item id.
///
/// The code is NOT trimmed or case-folded: the payload is used verbatim,
/// whatever its length.
///
/// ## Example
/// ```rust
/// use stockscan_core::validation::validate_item_id;
///
/// assert!(validate_item_id("ABC123").is_ok());
/// assert!(validate_item_id("").is_err());
/// ```
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Ok(())
}

/// Normalizes and validates a new item's name.
///
/// ## Rules
/// - Surrounding whitespace is dropped
/// - Must not be empty afterwards
///
/// ## Returns
/// The trimmed name.
///
/// ## Example
/// ```rust
/// use stockscan_core::validation::validate_item_name;
///
/// assert_eq!(validate_item_name("  Bolt ").unwrap(), "Bolt");
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Normalizes a list search query for matching.
///
/// Surrounding whitespace is dropped and the rest is lowercased. An empty
/// result matches everything. Any length is accepted.
pub fn normalize_search_query(query: &str) -> String {
    query.trim().to_lowercase()
}

// =============================================================================
// Quantity Parsing
// =============================================================================

/// Parses an operator's removal quantity reply.
///
/// Reads the leading integer of the reply and ignores whatever follows it:
///
/// ```text
///   "3"      →  3        "  7 units" →  7
///   "2.5"    →  2        "-4"        → -4
///   ""       →  0        "abc"       →  0
/// ```
///
/// Empty or unparseable input yields 0, which the scan processor treats as
/// a cancelled removal. Values beyond `i64` saturate.
pub fn parse_quantity_reply(reply: &str) -> i64 {
    let reply = reply.trim_start();
    let (negative, digits) = match reply.as_bytes().first() {
        Some(b'-') => (true, &reply[1..]),
        Some(b'+') => (false, &reply[1..]),
        _ => (false, reply),
    };

    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }

    if negative {
        -value
    } else {
        value
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
