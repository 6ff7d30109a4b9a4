//! Registry state persistence
//!
//! The registry is kept as pretty-printed JSON so operators can inspect
//! it with ordinary tools.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use chiptable_registry::ChipTable;

/// Load a registry from its state file
pub fn load_table(path: &Path) -> Result<ChipTable> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("cannot read registry state {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("registry state {} is not valid", path.display()))
}

/// Persist a registry to its state file
pub fn save_table(path: &Path, table: &ChipTable) -> Result<()> {
    let json = serde_json::to_string_pretty(table).context("cannot serialize registry state")?;
    fs::write(path, json)
        .with_context(|| format!("cannot write registry state {}", path.display()))
}

/// Persist a freshly deployed registry, refusing to clobber an existing one
pub fn save_new_table(path: &Path, table: &ChipTable) -> Result<()> {
    if path.exists() {
        bail!("registry state {} already exists", path.display());
    }
    save_table(path, table)
}
