//! # Commands Module
//!
//! Operations the screen loop invokes on behalf of the operator.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── session.rs    ◄─── Login (admin gate), logout
//! ├── scan.rs       ◄─── Apply one decoded code to the inventory
//! └── inventory.rs  ◄─── Stock list and search
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Screen loop (app.rs)                                                   │
//! │  ────────────────────                                                   │
//! │  line = console.read_line()                                             │
//! │  code = scanner.decode(line)                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::scan::handle_scan(                                           │
//! │      &session,            ◄── role + screen (mode)                     │
//! │      &mut inventory,      ◄── InventoryState (working copy + commit)   │
//! │      &code,                                                             │
//! │      &mut console,        ◄── Prompt for name / quantity               │
//! │  ) -> AppResult<ScanOutcome>                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  console.notify(outcome) / console.alert(error.message)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs.

pub mod inventory;
pub mod scan;
pub mod session;
