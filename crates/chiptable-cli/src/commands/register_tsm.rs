//! Register a TSM

use std::path::Path;

use anyhow::{Context, Result};

use chiptable_core::Identity;

use crate::state;

/// Register `tsm` under `uri`, calling as `caller`
pub fn run(
    state_path: &Path,
    caller: &str,
    tsm: &str,
    uri: &str,
    assume_yes: bool,
) -> Result<()> {
    let caller: Identity = caller.parse().context("invalid caller identity")?;
    let tsm: Identity = tsm.parse().context("invalid TSM identity")?;

    println!(
        "\n=== Chip Registry ===\nState: {}\nTSM: {tsm}\nURI: {uri}\n",
        state_path.display()
    );
    super::confirm(assume_yes)?;

    let mut table = state::load_table(state_path)?;
    table.register_tsm(caller, tsm, uri.to_string())?;
    state::save_table(state_path, &table)?;

    println!(
        "\n=== TSM Registered Successfully ===\nTSM: {tsm}\nURI: {}\nTotal TSMs: {}\n",
        table.tsm_uri(tsm)?,
        table.total_tsms()
    );
    Ok(())
}
