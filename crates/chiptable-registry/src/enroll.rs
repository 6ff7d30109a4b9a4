//! Chip enrollment
//!
//! Three paths with different trust assumptions: the owner enrolls
//! without signatures, the owner enrolls with per-chip consent
//! signatures, and TSMs (or their approved operator) always present
//! consent signatures. All paths validate every element before writing
//! anything, so a failure anywhere leaves the table untouched.

use std::collections::BTreeSet;

use chiptable_attest::{verify_chip_consent, ChipSignature};
use chiptable_core::{ChipId, Identity, RegistryError, Result};

use crate::table::ChipTable;

impl ChipTable {
    /// Owner-trusted batch enrollment, no signatures
    pub fn register_chip_ids(
        &mut self,
        caller: Identity,
        tsm: Identity,
        chip_ids: &[ChipId],
    ) -> Result<()> {
        self.ensure_owner(caller)?;
        self.ensure_tsm_exists(tsm)?;
        self.enroll_batch(tsm, chip_ids, None)
    }

    /// Owner batch enrollment with per-chip consent signatures
    pub fn safe_register_chip_ids(
        &mut self,
        caller: Identity,
        tsm: Identity,
        chip_ids: &[ChipId],
        signatures: &[ChipSignature],
    ) -> Result<()> {
        self.ensure_owner(caller)?;
        self.ensure_tsm_exists(tsm)?;
        self.enroll_batch(tsm, chip_ids, Some(signatures))
    }

    /// Single enrollment by a TSM or its approved operator
    ///
    /// Consent is mandatory on this path; TSMs are not trusted to
    /// self-assert.
    pub fn add_chip_id(
        &mut self,
        caller: Identity,
        tsm: Identity,
        chip_id: ChipId,
        signature: &ChipSignature,
    ) -> Result<()> {
        self.ensure_authorized_for(caller, tsm)?;
        self.enroll_batch(tsm, &[chip_id], Some(std::slice::from_ref(signature)))
    }

    /// Batch enrollment by a TSM or its approved operator
    pub fn add_chip_ids(
        &mut self,
        caller: Identity,
        tsm: Identity,
        chip_ids: &[ChipId],
        signatures: &[ChipSignature],
    ) -> Result<()> {
        self.ensure_authorized_for(caller, tsm)?;
        self.enroll_batch(tsm, chip_ids, Some(signatures))
    }

    /// Whether a chip is enrolled
    pub fn chip_exists(&self, chip_id: ChipId) -> bool {
        self.chips.contains_key(&chip_id)
    }

    /// The chip's owning TSM, [`Identity::ZERO`] if unknown
    pub fn chip_tsm(&self, chip_id: ChipId) -> Identity {
        self.chips.get(&chip_id).copied().unwrap_or(Identity::ZERO)
    }

    /// The chip's effective URI, resolved through its owning TSM
    ///
    /// Not stored per chip: a TSM changing its URI retroactively changes
    /// the URI of every chip it owns.
    pub fn chip_uri(&self, chip_id: ChipId) -> Result<&str> {
        let tsm = self
            .chips
            .get(&chip_id)
            .ok_or_else(|| RegistryError::not_found("chip does not exist"))?;
        // An enrolled chip's TSM is always registered; enrollment checks
        // it and TSM records are never deleted.
        self.tsm_uri(*tsm)
    }

    fn ensure_tsm_exists(&self, tsm: Identity) -> Result<()> {
        if self.tsm_record(tsm).is_none() {
            return Err(RegistryError::not_found("TSM does not exist"));
        }
        Ok(())
    }

    /// Validate every element in input order, then commit all of them.
    ///
    /// The staged set catches duplicates inside the batch itself, so a
    /// failed call never leaves a prefix of the batch behind.
    fn enroll_batch(
        &mut self,
        tsm: Identity,
        chip_ids: &[ChipId],
        signatures: Option<&[ChipSignature]>,
    ) -> Result<()> {
        if let Some(signatures) = signatures {
            if signatures.len() != chip_ids.len() {
                return Err(RegistryError::length_mismatch(format!(
                    "{} chip ids, {} signatures",
                    chip_ids.len(),
                    signatures.len()
                )));
            }
        }

        let mut staged = BTreeSet::new();
        for (index, chip_id) in chip_ids.iter().enumerate() {
            if let Some(signatures) = signatures {
                verify_chip_consent(*chip_id, tsm, &signatures[index])?;
            }
            if self.chips.contains_key(chip_id) || !staged.insert(*chip_id) {
                return Err(RegistryError::already_exists("chip already exists"));
            }
        }

        for chip_id in chip_ids {
            self.chips.insert(*chip_id, tsm);
        }
        tracing::debug!(tsm = %tsm, count = chip_ids.len(), "chips enrolled");
        Ok(())
    }
}
