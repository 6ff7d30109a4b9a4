//! Command implementations

pub mod deploy;
pub mod register_chips;
pub mod register_tsm;

use std::io::{self, BufRead, Write};

use anyhow::Result;

/// Wait for the operator to confirm before submitting
pub(crate) fn confirm(assume_yes: bool) -> Result<()> {
    if assume_yes {
        return Ok(());
    }
    print!("** Press enter to confirm **");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
