//! Deploy a fresh registry

use std::path::Path;

use anyhow::{Context, Result};

use chiptable_core::Identity;
use chiptable_registry::ChipTable;

use crate::state;

/// Create a new registry state file with `owner` and `version`
pub fn run(owner: &str, version: &str, state_path: &Path, assume_yes: bool) -> Result<()> {
    let owner: Identity = owner.parse().context("invalid owner identity")?;
    if owner.is_zero() {
        anyhow::bail!("owner must not be the zero identity");
    }

    println!(
        "\n=== Chip Registry ===\nOwner: {owner}\nVersion: {version}\n"
    );
    super::confirm(assume_yes)?;

    let table = ChipTable::new(owner, version.to_string())?;
    state::save_new_table(state_path, &table)?;

    // Read the file back so the summary reflects what actually landed.
    let deployed = state::load_table(state_path)?;
    tracing::info!(state = %state_path.display(), "registry deployed");
    println!(
        "\n=== Deployed Successfully ===\nState: {}\nOwner: {}\nVersion: {}\n",
        state_path.display(),
        deployed.owner(),
        deployed.registry_version()
    );
    Ok(())
}
