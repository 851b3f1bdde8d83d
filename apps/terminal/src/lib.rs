//! # Stockscan Terminal Library
//!
//! Core library for the Stockscan terminal application.
//!
//! ## Module Organization
//! ```text
//! stockscan_terminal/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── Command line flags
//! ├── app.rs          ◄─── Screen loop
//! ├── console.rs      ◄─── Line I/O + Prompt implementation
//! ├── scanner.rs      ◄─── Keyboard-wedge code scanner
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   ├── inventory.rs◄─── Inventory + write-through commit
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── session.rs  ◄─── Login / logout
//! │   ├── scan.rs     ◄─── Scan handling
//! │   └── inventory.rs◄─── Stock list / search
//! └── error.rs        ◄─── Application error type
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod console;
pub mod error;
pub mod scanner;
pub mod state;

use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use stockscan_db::migrations::migration_status;
use stockscan_db::{Database, DbConfig};
use tracing::{debug, info, info_span, Instrument};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use app::App;
use cli::Cli;
use console::Console;
use error::{AppError, AppResult};
use state::{ConfigState, DbState};

/// Runs the terminal application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: warn, stockscan=info; override with RUST_LOG             │
/// │                                                                         │
/// │  2. Resolve Configuration ────────────────────────────────────────────► │
/// │     • CLI > STOCKSCAN_* env > --config file > defaults                  │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • Run pending migrations                                            │
/// │                                                                         │
/// │  4. Restore Inventory & Run Screens ──────────────────────────────────► │
/// │     • Inside a "session" span carrying a fresh id                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> AppResult<()> {
    init_tracing();

    info!("Starting Stockscan");

    let config = ConfigState::resolve(&cli)?;
    let db_path = config.database_path()?;
    info!(?db_path, "Database path determined");

    let db = Database::new(DbConfig::new(db_path)).await?;
    let (total, applied) = migration_status(db.pool()).await?;
    info!(total, applied, "Database connected and migrations applied");

    let db_state = DbState::new(db);
    let session_id = Uuid::new_v4();

    let result = async {
        let stdin = io::stdin();
        let console = Console::new(stdin.lock(), io::stdout());
        let mut app = App::open(&config, &db_state, console).await?;
        app.run().await
    }
    .instrument(info_span!("session", id = %session_id))
    .await;

    db_state.inner().close().await;
    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockscan=trace` - Show trace for stockscan crates only
/// - Default: WARN, INFO for stockscan crates
///
/// Returns false if a subscriber was already installed.
fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,stockscan=info,sqlx=warn"));

    // Screens go to stdout; logs stay out of their way
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            // Events keep going to the subscriber installed first
            debug!(error = %e, "Tracing subscriber already set");
            false
        }
    }
}

/// Default database file in the platform data directory.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.stockscan.stockscan/stockscan.db`
/// - **Windows**: `%APPDATA%\stockscan\stockscan\data\stockscan.db`
/// - **Linux**: `~/.local/share/stockscan/stockscan.db`
pub fn default_database_path() -> AppResult<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "stockscan", "stockscan")
        .ok_or_else(|| AppError::config("Could not determine app data directory"))?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("stockscan.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_tracing_init_is_reported() {
        init_tracing();
        assert!(!init_tracing());
    }
}
