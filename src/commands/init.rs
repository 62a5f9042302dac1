use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use issueboard::config::store_path;
use issueboard::SqliteStore;

pub fn run(data_dir: &Path) -> Result<()> {
    if data_dir.is_dir() {
        println!("Already initialized at {}", data_dir.display());
        return Ok(());
    }

    fs::create_dir_all(data_dir).with_context(|| format!("Failed to create {}", data_dir.display()))?;
    SqliteStore::open(&store_path(data_dir))?;

    println!("Initialized issueboard in {}", data_dir.display());
    Ok(())
}
