//! # Stockscan Terminal Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Stockscan Terminal                              │
//! │                                                                         │
//! │  stdin ◄── keyboard-wedge scanner types "<payload>\n"                   │
//! │    │       operator types menu choices and prompt answers               │
//! │    ▼                                                                    │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Application (this crate)                 │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Parses flags, hands off to lib.rs                │  │
//! │  │  lib.rs ─────► Logging, config, database, screen loop           │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │    │                                    │                              │
//! │    ▼                                    ▼                              │
//! │  stdout (screens)             stderr (tracing logs)                    │
//! │                                         │                              │
//! │  ┌──────────────────────────────────────┴───────────────────────────┐  │
//! │  │  SQLite Database: stockscan.db (kv_store, key "inventory")       │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use clap::Parser;
use stockscan_terminal::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match stockscan_terminal::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("stockscan: {}", e);
            ExitCode::FAILURE
        }
    }
}
