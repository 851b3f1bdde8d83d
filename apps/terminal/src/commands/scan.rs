//! # Scan Command
//!
//! Applies one decoded code to the inventory.
//!
//! ## Scan Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Scan Handling                                        │
//! │                                                                         │
//! │  decoded code                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Add and not admin? ───── yes ─► Unauthorized (AdminRequired)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ScanProcessor::process(working copy, code, mode, prompt)              │
//! │       │                                                                 │
//! │       ├── Err ──────────────────► nothing saved, nothing changed       │
//! │       ├── Cancelled ────────────► nothing saved                        │
//! │       └── mutation ─────────────► InventoryState::commit (save first)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockscan_core::prompt::Prompt;
use stockscan_core::scan::{ScanOutcome, ScanProcessor};
use stockscan_core::session::{DashboardAction, Session};
use stockscan_core::{CoreError, ScanMode};
use tracing::{debug, info};

use crate::error::AppResult;
use crate::state::InventoryState;

/// Handles a code scanned on the add or remove screen.
///
/// Adds are re-checked against the session role here even though the
/// router never opens the add screen for staff.
///
/// ## Returns
/// * `Ok(ScanOutcome)` - Applied and saved, or cancelled
/// * `Err(AppError)` - Refused; inventory and storage unchanged
pub async fn handle_scan<P>(
    session: &Session,
    inventory: &mut InventoryState,
    code: &str,
    mode: ScanMode,
    prompt: &mut P,
) -> AppResult<ScanOutcome>
where
    P: Prompt + ?Sized,
{
    if mode == ScanMode::Add && !session.role().is_admin() {
        return Err(CoreError::AdminRequired {
            action: DashboardAction::AddStock.label().to_string(),
        }
        .into());
    }

    debug!(code = %code, mode = %mode, "Scan received");

    let mut working = inventory.working_copy();
    let outcome = ScanProcessor::process(&mut working, code, mode, prompt)?;

    if outcome.is_mutation() {
        inventory.commit(working).await?;
        if let Some(item) = outcome.item() {
            info!(
                id = %item.id,
                name = %item.name,
                quantity = item.quantity,
                mode = %mode,
                "Inventory updated"
            );
        }
    } else {
        debug!(code = %code, "Scan cancelled");
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockscan_core::prompt::ScriptedPrompt;
    use stockscan_core::Role;
    use stockscan_db::{Database, DbConfig};

    use crate::error::ErrorCode;

    async fn setup() -> (Database, InventoryState) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let state = InventoryState::load(db.inventory("inventory")).await.unwrap();
        (db, state)
    }

    fn logged_in(role: Role) -> Session {
        let mut session = Session::new();
        session.login(role);
        session
    }

    async fn stock_bolts(state: &mut InventoryState, count: usize) {
        let admin = logged_in(Role::Admin);
        let mut prompt = ScriptedPrompt::new(["Bolt"]);
        for _ in 0..count {
            handle_scan(&admin, state, "ABC123", ScanMode::Add, &mut prompt)
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_add_registers_then_increments_and_saves() {
        let (db, mut state) = setup().await;
        let admin = logged_in(Role::Admin);

        let mut prompt = ScriptedPrompt::new(["Bolt"]);
        let first = handle_scan(&admin, &mut state, "ABC123", ScanMode::Add, &mut prompt)
            .await
            .unwrap();
        assert_eq!(first.to_string(), "Registered Bolt with 1 unit.");

        let second = handle_scan(&admin, &mut state, "ABC123", ScanMode::Add, &mut prompt)
            .await
            .unwrap();
        assert_eq!(second.item().unwrap().quantity, 2);

        let stored = db.inventory("inventory").load().await.unwrap();
        assert_eq!(stored.get("ABC123").unwrap().quantity, 2);
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn test_staff_add_is_refused_before_prompting() {
        let (_db, mut state) = setup().await;
        let staff = logged_in(Role::Staff);

        let mut prompt = ScriptedPrompt::new(["Bolt"]);
        let err = handle_scan(&staff, &mut state, "ABC123", ScanMode::Add, &mut prompt)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(err.message, "Add Stock requires admin access");
        assert!(state.inventory().is_empty());
        assert!(prompt.asked().is_empty());
    }

    #[tokio::test]
    async fn test_remove_more_than_stock_changes_nothing() {
        let (db, mut state) = setup().await;
        stock_bolts(&mut state, 2).await;

        let staff = logged_in(Role::Staff);
        let mut prompt = ScriptedPrompt::new(["3"]);
        let err = handle_scan(&staff, &mut state, "ABC123", ScanMode::Remove, &mut prompt)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(state.inventory().get("ABC123").unwrap().quantity, 2);
        let stored = db.inventory("inventory").load().await.unwrap();
        assert_eq!(stored.get("ABC123").unwrap().quantity, 2);
    }

    #[tokio::test]
    async fn test_remove_all_keeps_record() {
        let (db, mut state) = setup().await;
        stock_bolts(&mut state, 2).await;

        let staff = logged_in(Role::Staff);
        let mut prompt = ScriptedPrompt::new(["2"]);
        let outcome = handle_scan(&staff, &mut state, "ABC123", ScanMode::Remove, &mut prompt)
            .await
            .unwrap();

        assert_eq!(outcome.to_string(), "Removed 2 from Bolt. Remaining: 0");
        let stored = db.inventory("inventory").load().await.unwrap();
        assert_eq!(stored.get("ABC123").unwrap().quantity, 0);
    }

    #[tokio::test]
    async fn test_remove_unknown_code() {
        let (_db, mut state) = setup().await;
        let staff = logged_in(Role::Staff);

        let mut prompt = ScriptedPrompt::new(["1"]);
        let err = handle_scan(&staff, &mut state, "NOPE", ScanMode::Remove, &mut prompt)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Item not found in inventory.");
        assert!(prompt.asked().is_empty());
    }

    #[tokio::test]
    async fn test_save_failure_rolls_back_memory() {
        let (db, mut state) = setup().await;
        let admin = logged_in(Role::Admin);
        db.close().await;

        let mut prompt = ScriptedPrompt::new(["Bolt"]);
        let err = handle_scan(&admin, &mut state, "ABC123", ScanMode::Add, &mut prompt)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(state.inventory().is_empty());
    }
}
