//! Register chips from a public-key list
//!
//! The key file carries one hex-encoded SEC1 public key per line
//! (compressed or uncompressed, `0x` prefix optional, blank lines
//! skipped). Chip ids are derived locally; raw keys never reach the
//! registry.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{ensure, Context, Result};

use chiptable_core::{chip_id_from_public_key, ChipId, Identity};

use crate::state;

/// Derive the chip ids for every key in a newline-delimited key file
pub fn chip_ids_from_file(path: &Path) -> Result<Vec<ChipId>> {
    let file = File::open(path)
        .with_context(|| format!("cannot open public key file {}", path.display()))?;

    let mut chip_ids = Vec::new();
    for (number, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let digits = line.trim();
        if digits.is_empty() {
            continue;
        }
        let key = hex::decode(digits.strip_prefix("0x").unwrap_or(digits))
            .with_context(|| format!("line {}: not valid hex", number + 1))?;
        let chip_id = chip_id_from_public_key(&key)
            .with_context(|| format!("line {}: not a valid public key", number + 1))?;
        chip_ids.push(chip_id);
    }
    Ok(chip_ids)
}

/// Register every chip in the key file to `tsm`, calling as `caller`
pub fn run(
    state_path: &Path,
    caller: &str,
    tsm: &str,
    public_key_path: &Path,
    assume_yes: bool,
) -> Result<()> {
    let caller: Identity = caller.parse().context("invalid caller identity")?;
    let tsm: Identity = tsm.parse().context("invalid TSM identity")?;
    let chip_ids = chip_ids_from_file(public_key_path)?;

    println!(
        "\n=== Chip Registry ===\nState: {}\nTSM: {tsm}\nNumber of Chips: {}\n",
        state_path.display(),
        chip_ids.len()
    );
    super::confirm(assume_yes)?;

    let mut table = state::load_table(state_path)?;
    table.register_chip_ids(caller, tsm, &chip_ids)?;
    state::save_table(state_path, &table)?;

    // The registry pushes no notifications; re-read the persisted state
    // and confirm every chip actually landed.
    println!("Confirming chips added successfully...");
    let confirmed = state::load_table(state_path)?;
    for chip_id in &chip_ids {
        ensure!(
            confirmed.chip_exists(*chip_id),
            "chip {chip_id} missing after registration"
        );
    }

    tracing::info!(tsm = %tsm, count = chip_ids.len(), "chips registered");
    println!(
        "\n=== Chips Registered Successfully ===\nTSM: {tsm}\nTotal Chips: {}\n",
        chip_ids.len()
    );
    Ok(())
}
