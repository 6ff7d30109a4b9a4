//! TSM directory operations
//!
//! Registration is owner-gated; everything else here a TSM does to its
//! own record.

use chiptable_core::{Identity, RegistryError, Result};

use crate::table::{ChipTable, TsmRecord};

impl ChipTable {
    /// Register a new TSM under `uri` (owner only)
    pub fn register_tsm(&mut self, caller: Identity, tsm: Identity, uri: String) -> Result<()> {
        self.ensure_owner(caller)?;
        if self.tsm_record(tsm).is_some() {
            return Err(RegistryError::already_exists("TSM already registered"));
        }
        self.insert_tsm(tsm, TsmRecord::new(uri));
        tracing::info!(tsm = %tsm, "TSM registered");
        Ok(())
    }

    /// Delegate the caller's enrollment rights to `operator`
    ///
    /// Last write wins; approving [`Identity::ZERO`] clears the slot.
    /// The caller itself must be a registered TSM.
    pub fn approve(&mut self, caller: Identity, operator: Identity) -> Result<()> {
        let record = self
            .tsm_record_mut(caller)
            .ok_or_else(|| RegistryError::not_found("tsm does not exist"))?;
        record.set_operator(operator);
        tracing::debug!(tsm = %caller, operator = %operator, "TSM operator approved");
        Ok(())
    }

    /// Replace the caller's published URI
    ///
    /// Chips resolve their URI through their owning TSM, so the change
    /// applies retroactively to every chip the caller owns.
    pub fn set_uri(&mut self, caller: Identity, uri: String) -> Result<()> {
        let record = self
            .tsm_record_mut(caller)
            .ok_or_else(|| RegistryError::not_found("tsm does not exist"))?;
        record.set_uri(uri);
        tracing::debug!(tsm = %caller, "TSM uri updated");
        Ok(())
    }

    /// Number of registered TSMs
    pub fn total_tsms(&self) -> usize {
        self.tsm_order().len()
    }

    /// TSM identity by insertion index
    pub fn tsm_by_index(&self, index: usize) -> Result<Identity> {
        self.tsm_order().get(index).copied().ok_or_else(|| {
            RegistryError::out_of_range(format!(
                "tsm index {index} >= count {}",
                self.total_tsms()
            ))
        })
    }

    /// A registered TSM's published URI
    pub fn tsm_uri(&self, tsm: Identity) -> Result<&str> {
        self.tsm_record(tsm)
            .map(TsmRecord::uri)
            .ok_or_else(|| RegistryError::not_found("tsm does not exist"))
    }

    /// A registered TSM's operator, [`Identity::ZERO`] if none approved
    pub fn tsm_operator(&self, tsm: Identity) -> Result<Identity> {
        self.tsm_record(tsm)
            .map(TsmRecord::operator)
            .ok_or_else(|| RegistryError::not_found("tsm does not exist"))
    }
}
