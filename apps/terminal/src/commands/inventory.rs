//! # Inventory Commands
//!
//! Stock list and search.
//!
//! ```text
//! Current Stock (2 items, 3 units)
//!   Hex Bolt M6                  FAS-001                    2
//!   Wing Nut                     N-7                        1
//! ```

use stockscan_core::InventoryItem;
use tracing::debug;

use crate::state::InventoryState;

/// Shown when nothing matches.
pub const EMPTY_LIST_MESSAGE: &str = "No items found.";

/// Items whose name or id contains `query` (case-insensitive).
///
/// An empty query lists everything in insertion order.
pub fn search_items<'a>(inventory: &'a InventoryState, query: &str) -> Vec<&'a InventoryItem> {
    let items = inventory.inventory().search(query);
    debug!(query = %query, results = items.len(), "search_items command");
    items
}

/// One aligned list row.
pub fn format_row(item: &InventoryItem) -> String {
    format!("  {:<28} {:<24} {:>5}", item.name, item.id, item.quantity)
}

/// Header line with totals for the whole inventory.
pub fn list_header(inventory: &InventoryState) -> String {
    let inventory = inventory.inventory();
    format!(
        "Current Stock ({} items, {} units)",
        inventory.len(),
        inventory.total_units()
    )
}

/// Renders search results, or the empty-list message.
pub fn render_rows(items: &[&InventoryItem]) -> Vec<String> {
    if items.is_empty() {
        return vec![format!("  {}", EMPTY_LIST_MESSAGE)];
    }
    items.iter().map(|item| format_row(item)).collect()
}
