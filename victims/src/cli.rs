//! CLI command implementations.
//!
//! Each command opens the store, runs one operation, and prints the outcome
//! to stdout. Rejections are printed and return `Ok`; only file errors
//! propagate.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::core::listing::render_listing;
use crate::core::record::RecordInput;
use crate::store::{AddOutcome, RemoveOutcome, Store};

/// Open the store at `data_path`, printing a warning if the file is missing.
pub fn open_store(data_path: &Path) -> Result<Store> {
    let store = Store::open(data_path)?;
    if store.file_missing() {
        println!(
            "Warning: {} not found. Starting with empty list.",
            data_path.display()
        );
    }
    Ok(store)
}

/// `victims add`.
pub fn add(data_path: &Path, input: &RecordInput) -> Result<()> {
    let mut store = open_store(data_path)?;
    match store.add(input)? {
        AddOutcome::Added(record) => {
            print_saved(&store);
            println!("✓ Added victim: {record}");
        }
        AddOutcome::Rejected(rejection) => println!("Error: {rejection}"),
    }
    Ok(())
}

/// `victims list`.
pub fn list(data_path: &Path) -> Result<()> {
    let store = open_store(data_path)?;
    debug!(count = store.len(), "listing records");
    for line in render_listing(store.records()) {
        println!("{line}");
    }
    Ok(())
}

/// `victims remove`.
pub fn remove(data_path: &Path, input: &RecordInput) -> Result<()> {
    let mut store = open_store(data_path)?;
    match store.remove(input)? {
        RemoveOutcome::Removed(record) => {
            print_saved(&store);
            println!("✓ Removed victim: {record}");
        }
        RemoveOutcome::Rejected(rejection) => println!("Error: {rejection}"),
    }
    Ok(())
}

fn print_saved(store: &Store) {
    println!("✓ Victims data saved to {}", store.path().display());
}
