//! # Screen Loop
//!
//! Drives the session one operator line at a time.
//!
//! ## Screens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Role Select        Dashboard            Add / Remove       List       │
//! │  ───────────        ─────────            ────────────       ────       │
//! │  1) Admin Access    a) Add Stock (admin) scan> <code>       search>    │
//! │  2) Staff Access    r) Remove Stock      ⏎ = back           ⏎ = back   │
//! │  q) Quit            l) View Inventory                                  │
//! │                     o) Logout                                          │
//! │                     q) Quit                                            │
//! │                                                                         │
//! │  End of input on any screen quits.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The scanner runs only while an Add or Remove screen is open. Prompts
//! opened by a scan read through the scanner's double-fire window.

use std::io::{BufRead, Write};
use std::time::Instant;

use stockscan_core::prompt::{Prompt, PromptReply, PromptRequest};
use stockscan_core::session::{DashboardAction, Session};
use stockscan_core::{AdminAllowList, Inventory, View};
use tracing::{info, warn};

use crate::commands;
use crate::console::Console;
use crate::error::{AppError, AppResult};
use crate::scanner::{CodeScanner, WedgeScanner};
use crate::state::{ConfigState, DbState, InventoryState};

const DASHBOARD_ACTIONS: [DashboardAction; 3] = [
    DashboardAction::AddStock,
    DashboardAction::RemoveStock,
    DashboardAction::ViewInventory,
];

const fn action_key(action: DashboardAction) -> &'static str {
    match action {
        DashboardAction::AddStock => "a",
        DashboardAction::RemoveStock => "r",
        DashboardAction::ViewInventory => "l",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Console prompt used while a scan is being handled.
///
/// A repeat of the code just scanned is a double-fire, not an answer.
struct ScanPrompt<'a, R, W> {
    console: &'a mut Console<R, W>,
    scanner: &'a WedgeScanner,
    clock: fn() -> Instant,
}

impl<R: BufRead, W: Write> Prompt for ScanPrompt<'_, R, W> {
    fn ask(&mut self, request: &PromptRequest) -> PromptReply {
        let scanner = self.scanner;
        let clock = self.clock;
        self.console
            .ask_filtered(request, |line| scanner.is_double_fire(line, clock()))
    }
}

/// The running terminal application.
pub struct App<R, W> {
    console: Console<R, W>,
    session: Session,
    gate: AdminAllowList,
    scanner: WedgeScanner,
    inventory: InventoryState,
    clock: fn() -> Instant,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Restores the inventory and prepares a logged-out session.
    pub async fn open(
        config: &ConfigState,
        db: &DbState,
        console: Console<R, W>,
    ) -> AppResult<Self> {
        let inventory = InventoryState::load(db.inventory(&config.storage_key)).await?;

        Ok(App {
            console,
            session: Session::new(),
            gate: config.allow_list(),
            scanner: WedgeScanner::new(config.scanner()?),
            inventory,
            clock: Instant::now,
        })
    }

    /// Replaces the time source used to stamp scanner reads.
    pub fn with_clock(mut self, clock: fn() -> Instant) -> Self {
        self.clock = clock;
        self
    }

    /// Current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current committed inventory.
    pub fn inventory(&self) -> &Inventory {
        self.inventory.inventory()
    }

    /// Consumes the app and returns the console writer.
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Runs screens until the operator quits or input ends.
    pub async fn run(&mut self) -> AppResult<()> {
        info!(items = self.inventory().len(), "Session started");

        loop {
            let flow = match self.session.screen() {
                View::RoleSelect => self.role_select()?,
                View::Dashboard => self.dashboard()?,
                View::Add | View::Remove => self.scan_screen().await?,
                View::List => self.list_screen()?,
            };

            if flow == Flow::Quit {
                break;
            }
        }

        self.scanner.release();
        info!("Session ended");
        Ok(())
    }

    // =========================================================================
    // Screens
    // =========================================================================

    fn role_select(&mut self) -> AppResult<Flow> {
        self.console.blank()?;
        self.console.say("QR Inventory")?;
        self.console.say("Select your access level")?;
        self.console.say("  1) Admin Access")?;
        self.console.say("  2) Staff Access")?;
        self.console.say("  q) Quit")?;

        let Some(choice) = self.console.ask_line(">")? else {
            return Ok(Flow::Quit);
        };

        let outcome = match choice.trim() {
            "1" => commands::session::login_admin(&mut self.session, &self.gate, &mut self.console)?,
            "2" => commands::session::login_staff(&mut self.session),
            "q" => return Ok(Flow::Quit),
            other => {
                self.console.alert(format!("Unknown choice '{}'", other))?;
                return Ok(Flow::Continue);
            }
        };

        self.console.notify(outcome.to_string())?;
        Ok(Flow::Continue)
    }

    fn dashboard(&mut self) -> AppResult<Flow> {
        self.console.blank()?;
        self.console
            .say(format!("QR Inventory [{}]", self.session.role()))?;
        for action in self.session.dashboard_actions() {
            self.console
                .say(format!("  {}) {}", action_key(action), action.label()))?;
        }
        self.console.say("  o) Logout")?;
        self.console.say("  q) Quit")?;

        let Some(choice) = self.console.ask_line(">")? else {
            return Ok(Flow::Quit);
        };
        let choice = choice.trim();

        match choice {
            "o" => {
                commands::session::logout(&mut self.session);
                self.console.notify("Logged out.")?;
                return Ok(Flow::Continue);
            }
            "q" => return Ok(Flow::Quit),
            _ => {}
        }

        let Some(action) = DASHBOARD_ACTIONS
            .into_iter()
            .find(|action| action_key(*action) == choice)
        else {
            self.console.alert(format!("Unknown choice '{}'", choice))?;
            return Ok(Flow::Continue);
        };

        match self.session.navigate(action.target()) {
            Ok(view) => self.enter(view)?,
            Err(e) => {
                let err = AppError::from(e);
                warn!(code = err.code.as_str(), role = %self.session.role(), "Navigation refused");
                self.console.alert(&err.message)?;
            }
        }

        Ok(Flow::Continue)
    }

    async fn scan_screen(&mut self) -> AppResult<Flow> {
        let Some(mode) = self.session.screen().scan_mode() else {
            self.leave();
            return Ok(Flow::Continue);
        };

        let Some(line) = self.console.ask_line("scan>")? else {
            return Ok(Flow::Quit);
        };
        if line.trim().is_empty() {
            self.leave();
            return Ok(Flow::Continue);
        }

        let code = match self.scanner.decode(&line, (self.clock)()) {
            Ok(Some(code)) => code,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                self.console.alert(&e.message)?;
                return Ok(Flow::Continue);
            }
        };

        let mut prompt = ScanPrompt {
            console: &mut self.console,
            scanner: &self.scanner,
            clock: self.clock,
        };
        let result = commands::scan::handle_scan(
            &self.session,
            &mut self.inventory,
            &code,
            mode,
            &mut prompt,
        )
        .await;

        match result {
            Ok(outcome) => self.console.notify(outcome.to_string())?,
            Err(e) => {
                info!(code = e.code.as_str(), reason = %e.message, "Scan refused");
                self.console.alert(&e.message)?;
            }
        }

        Ok(Flow::Continue)
    }

    fn list_screen(&mut self) -> AppResult<Flow> {
        let Some(query) = self.console.ask_line("search>")? else {
            return Ok(Flow::Quit);
        };
        if query.trim().is_empty() {
            self.session.back();
            return Ok(Flow::Continue);
        }

        self.show_list(&query)?;
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn enter(&mut self, view: View) -> AppResult<()> {
        match view {
            View::Add | View::Remove => {
                self.scanner.start()?;
                self.console.blank()?;
                self.console.say(if view == View::Add {
                    "Scan to Add"
                } else {
                    "Scan to Remove"
                })?;
                self.console.say(format!(
                    "Scanner ready ({} fps). Scan a code, or press Enter to go back.",
                    self.scanner.config().fps()
                ))?;
            }
            View::List => {
                self.console.blank()?;
                self.show_list("")?;
                self.console.say("Type to search, or press Enter to go back.")?;
            }
            View::RoleSelect | View::Dashboard => {}
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.scanner.release();
        self.session.back();
    }

    fn show_list(&mut self, query: &str) -> AppResult<()> {
        let items = commands::inventory::search_items(&self.inventory, query);
        let mut lines = vec![commands::inventory::list_header(&self.inventory)];
        lines.extend(commands::inventory::render_rows(&items));

        for line in lines {
            self.console.say(line)?;
        }
        Ok(())
    }
}

// =============================================================================
// Scripted Sessions
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::Cursor;
    use std::time::Duration;

    use stockscan_core::{InventoryItem, Role, INVENTORY_STORAGE_KEY};
    use stockscan_db::{Database, DbConfig};

    thread_local! {
        static BASE: Instant = Instant::now();
        static TICKS: Cell<u64> = const { Cell::new(0) };
    }

    /// Every read lands one second after the previous one.
    fn ticking() -> Instant {
        let tick = TICKS.with(|t| {
            t.set(t.get() + 1);
            t.get()
        });
        BASE.with(|base| *base + Duration::from_secs(tick))
    }

    /// Every read lands at the same instant.
    fn frozen() -> Instant {
        BASE.with(|base| *base)
    }

    struct Played {
        output: String,
        role: Role,
        inventory: Inventory,
    }

    async fn play(db: &Database, script: &str, clock: fn() -> Instant) -> Played {
        let console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let mut app = App::open(&ConfigState::default(), &DbState::new(db.clone()), console)
            .await
            .unwrap()
            .with_clock(clock);

        app.run().await.unwrap();

        let role = app.session().role();
        let inventory = app.inventory().clone();
        Played {
            output: String::from_utf8(app.into_output()).unwrap(),
            role,
            inventory,
        }
    }

    async fn bolts(db: &Database, quantity: u32) {
        let inventory = Inventory::from_items(vec![InventoryItem {
            id: "ABC123".to_string(),
            name: "Bolt".to_string(),
            quantity,
        }])
        .unwrap();
        db.inventory(INVENTORY_STORAGE_KEY)
            .save(&inventory)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_admin_registers_and_increments() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let script = "1\nCody Eckhardt\na\nABC123\nBolt\nN-7\nWing Nut\nABC123\n\nl\n\nq\n";

        let played = play(&db, script, ticking).await;

        assert_eq!(played.role, Role::Admin);
        assert!(played.output.contains("Logged in as Admin."));
        assert!(played.output.contains("Registered Bolt with 1 unit."));
        assert!(played.output.contains("Registered Wing Nut with 1 unit."));
        assert!(played.output.contains("Added 1 to Bolt. New stock: 2"));
        assert!(played.output.contains("Current Stock (2 items, 3 units)"));

        assert_eq!(played.inventory.get("ABC123").unwrap().quantity, 2);
        assert_eq!(played.inventory.get("N-7").unwrap().quantity, 1);

        let stored = db.inventory(INVENTORY_STORAGE_KEY).load().await.unwrap();
        assert_eq!(stored, played.inventory);
    }

    #[tokio::test]
    async fn test_staff_removes_but_cannot_add() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        bolts(&db, 2).await;
        let script = "2\na\nr\nABC123\n3\nABC123\n2\nZZZ\n\nq\n";

        let played = play(&db, script, ticking).await;

        assert_eq!(played.role, Role::Staff);
        assert!(!played.output.contains("a) Add Stock"));
        assert!(played.output.contains("Add Stock requires admin access"));
        assert!(played
            .output
            .contains("Insufficient stock for Bolt: available 2, requested 3"));
        assert!(played.output.contains("Removed 2 from Bolt. Remaining: 0"));
        assert!(played.output.contains("Item not found in inventory."));

        let stored = db.inventory(INVENTORY_STORAGE_KEY).load().await.unwrap();
        assert_eq!(stored.get("ABC123").unwrap().quantity, 0);
    }

    #[tokio::test]
    async fn test_removal_prompt_defaults_to_one() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        bolts(&db, 2).await;

        let played = play(&db, "2\nr\nABC123\n\n\nq\n", ticking).await;

        assert!(played.output.contains("Removing Bolt. Enter quantity: [1]"));
        assert_eq!(played.inventory.get("ABC123").unwrap().quantity, 1);
    }

    #[tokio::test]
    async fn test_zero_quantity_cancels() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        bolts(&db, 2).await;

        let played = play(&db, "2\nr\nABC123\nabc\n\nq\n", ticking).await;

        assert!(played.output.contains("Cancelled."));
        assert_eq!(played.inventory.get("ABC123").unwrap().quantity, 2);
    }

    #[tokio::test]
    async fn test_unlisted_admin_is_downgraded() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let played = play(&db, "1\nRandom Person\na\nq\n", ticking).await;

        assert_eq!(played.role, Role::Staff);
        assert!(played
            .output
            .contains("'Random Person' is not an authorized admin. Logged in as Staff."));
        assert!(played.output.contains("Add Stock requires admin access"));
    }

    #[tokio::test]
    async fn test_logout_returns_to_role_select() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let played = play(&db, "2\no\nq\n", ticking).await;

        assert_eq!(played.role, Role::Unset);
        assert!(played.output.contains("Logged out."));
        assert_eq!(played.output.matches("Select your access level").count(), 2);
    }

    #[tokio::test]
    async fn test_double_fire_is_dropped() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let script = "1\nCody Eckhardt\na\nABC123\nBolt\nABC123\n\nq\n";

        let played = play(&db, script, frozen).await;

        assert_eq!(played.inventory.get("ABC123").unwrap().quantity, 1);
        assert!(!played.output.contains("Added 1 to Bolt"));
    }

    #[tokio::test]
    async fn test_double_fire_at_quantity_prompt_is_not_an_answer() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        bolts(&db, 5).await;

        let played = play(&db, "2\nr\nABC123\nABC123\n2\n\nq\n", frozen).await;

        assert_eq!(
            played.output.matches("Removing Bolt. Enter quantity: [1]").count(),
            2
        );
        assert!(played.output.contains("Removed 2 from Bolt. Remaining: 3"));
        assert!(!played.output.contains("Item not found"));

        let stored = db.inventory(INVENTORY_STORAGE_KEY).load().await.unwrap();
        assert_eq!(stored.get("ABC123").unwrap().quantity, 3);
    }

    #[tokio::test]
    async fn test_double_fire_at_name_prompt_is_not_a_name() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let script = "1\nCody Eckhardt\na\nNEW-1\nNEW-1\nWidget\n\nq\n";

        let played = play(&db, script, frozen).await;

        assert_eq!(played.output.matches("New item detected (NEW-1)!").count(), 2);
        assert!(played.output.contains("Registered Widget with 1 unit."));
        assert!(!played.output.contains("New item detected (Widget)!"));
        assert_eq!(played.inventory.len(), 1);

        let stored = db.inventory(INVENTORY_STORAGE_KEY).load().await.unwrap();
        assert_eq!(stored.get("NEW-1").unwrap().name, "Widget");
    }

    #[tokio::test]
    async fn test_same_text_after_window_is_an_answer() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let script = "1\nCody Eckhardt\na\nNEW-1\nNEW-1\n\nq\n";

        let played = play(&db, script, ticking).await;

        assert!(played.output.contains("Registered NEW-1 with 1 unit."));
    }

    #[tokio::test]
    async fn test_list_search() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        bolts(&db, 4).await;

        let played = play(&db, "2\nl\nbolt\nnothing\n\nq\n", ticking).await;

        assert_eq!(played.output.matches("ABC123").count(), 2);
        assert!(played.output.contains("No items found."));
    }

    #[tokio::test]
    async fn test_long_name_and_query_are_accepted() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let name = "N".repeat(201);
        let query = "q".repeat(101);
        let script = format!("1\nCody Eckhardt\na\nABC123\n{name}\n\nl\n{query}\n\nq\n");

        let played = play(&db, &script, ticking).await;

        assert_eq!(played.inventory.get("ABC123").unwrap().name, name);
        assert!(played.output.contains(&format!("Registered {name} with 1 unit.")));
        assert!(played.output.contains("No items found."));
    }

    #[tokio::test]
    async fn test_malformed_snapshot_starts_empty_and_is_overwritten() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.kv().set(INVENTORY_STORAGE_KEY, "not json").await.unwrap();

        let played = play(&db, "1\nCody Eckhardt\na\nABC123\nBolt\n\nq\n", ticking).await;

        assert_eq!(played.inventory.len(), 1);
        let stored = db.inventory(INVENTORY_STORAGE_KEY).load().await.unwrap();
        assert_eq!(stored.get("ABC123").unwrap().name, "Bolt");
    }

    #[tokio::test]
    async fn test_end_of_input_quits_anywhere() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert_eq!(play(&db, "", ticking).await.role, Role::Unset);
        assert_eq!(play(&db, "2\nr\n", ticking).await.role, Role::Staff);
    }

    #[tokio::test]
    async fn test_state_survives_restart() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        play(&db, "1\nCody Eckhardt\na\nABC123\nBolt\n\nq\n", ticking).await;
        let second = play(&db, "1\nCody Eckhardt\na\nABC123\n\nq\n", ticking).await;

        assert!(second.output.contains("Added 1 to Bolt. New stock: 2"));
    }
}
