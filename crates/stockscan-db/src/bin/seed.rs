//! # Seed Data Generator
//!
//! Populates a Stockscan database with demo stock for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default dev database
//! cargo run -p stockscan-db --bin seed
//!
//! # Specify database path and storage key
//! cargo run -p stockscan-db --bin seed -- --db ./data/stockscan.db --key inventory
//! ```
//!
//! Item ids look like what a label printer would encode: `{BIN}-{INDEX}`.
//! Quantities cycle through 0..=24 so the list has a few empty shelves.

use std::env;

use stockscan_core::{Inventory, InventoryItem, INVENTORY_STORAGE_KEY};
use stockscan_db::{Database, DbConfig};

/// Storage bins and what sits in them
const BINS: &[(&str, &[&str])] = &[
    (
        "FAS",
        &[
            "Hex Bolt M6",
            "Hex Bolt M8",
            "Wing Nut M6",
            "Flat Washer 8mm",
            "Wood Screw 40mm",
            "Drywall Anchor",
        ],
    ),
    (
        "ELC",
        &[
            "AA Battery",
            "9V Battery",
            "Zip Tie 200mm",
            "Heat Shrink Kit",
            "Wire Nut",
        ],
    ),
    (
        "OFF",
        &[
            "Printer Paper A4",
            "Label Roll 50x25",
            "Marker Black",
            "Packing Tape",
        ],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./stockscan_dev.db");
    let mut storage_key = String::from(INVENTORY_STORAGE_KEY);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--key" | "-k" => {
                if i + 1 < args.len() {
                    storage_key = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockscan Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./stockscan_dev.db)");
                println!("  -k, --key <KEY>    Storage key (default: {})", INVENTORY_STORAGE_KEY);
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Stockscan Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Key:      {}", storage_key);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let repo = db.inventory(storage_key.as_str());
    let existing = repo.load().await?;
    if !existing.is_empty() {
        println!("⚠ Inventory already has {} items", existing.len());
        println!("  Skipping seed to avoid overwriting stock.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let inventory = generate_inventory()?;
    repo.save(&inventory).await?;

    println!(
        "✓ Seeded {} items ({} units)",
        inventory.len(),
        inventory.total_units()
    );

    let hits = inventory.search("bolt");
    println!("  Search 'bolt': {} results", hits.len());

    db.close().await;
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Builds the demo inventory from [`BINS`].
fn generate_inventory() -> Result<Inventory, Box<dyn std::error::Error>> {
    let mut inventory = Inventory::new();
    let mut seed: u32 = 0;

    for (bin, names) in BINS {
        for (index, name) in names.iter().enumerate() {
            let item = InventoryItem {
                id: format!("{}-{:03}", bin, index + 1),
                name: (*name).to_string(),
                quantity: (seed * 7) % 25,
            };
            inventory.register(item)?;
            seed += 1;
        }
    }

    Ok(inventory)
}
