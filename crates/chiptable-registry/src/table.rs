//! Registry state and ownership

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use chiptable_core::{ChipId, Identity, RegistryError, Result};

/// A registered TSM's directory entry
///
/// Created only by owner registration. The URI and operator are mutable
/// only by the TSM itself; the operator is overwritten on each approval,
/// never accumulated. Records are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsmRecord {
    uri: String,
    operator: Identity,
}

impl TsmRecord {
    pub(crate) fn new(uri: String) -> Self {
        Self {
            uri,
            operator: Identity::ZERO,
        }
    }

    /// The TSM's published endpoint
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The TSM's delegated operator, [`Identity::ZERO`] if none
    pub fn operator(&self) -> Identity {
        self.operator
    }

    pub(crate) fn set_uri(&mut self, uri: String) {
        self.uri = uri;
    }

    pub(crate) fn set_operator(&mut self, operator: Identity) {
        self.operator = operator;
    }
}

/// The chip registry
///
/// Invariants:
/// - `tsm_order` is duplicate-free, append-only, and exactly the key set
///   of `tsms`;
/// - a chip id present in `chips` is never reassigned or removed;
/// - `version` never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipTable {
    owner: Identity,
    version: String,
    tsm_order: Vec<Identity>,
    tsms: BTreeMap<Identity, TsmRecord>,
    pub(crate) chips: BTreeMap<ChipId, Identity>,
}

impl ChipTable {
    /// Create a registry with its initial owner and version string
    ///
    /// Rejects the zero identity as owner; deployment tooling is expected
    /// to validate before calling, this is the backstop.
    pub fn new(initial_owner: Identity, version: String) -> Result<Self> {
        if initial_owner.is_zero() {
            return Err(RegistryError::invalid("owner is the zero identity"));
        }
        Ok(Self {
            owner: initial_owner,
            version,
            tsm_order: Vec::new(),
            tsms: BTreeMap::new(),
            chips: BTreeMap::new(),
        })
    }

    /// The current registry owner
    pub fn owner(&self) -> Identity {
        self.owner
    }

    /// The version string fixed at construction
    pub fn registry_version(&self) -> &str {
        &self.version
    }

    /// Hand the registry to a new owner
    ///
    /// Single-step: there is no pending-acceptance state.
    pub fn transfer_ownership(&mut self, caller: Identity, new_owner: Identity) -> Result<()> {
        self.ensure_owner(caller)?;
        self.owner = new_owner;
        tracing::info!(owner = %new_owner, "registry ownership transferred");
        Ok(())
    }

    pub(crate) fn ensure_owner(&self, caller: Identity) -> Result<()> {
        if caller != self.owner {
            return Err(RegistryError::unauthorized("caller is not the owner"));
        }
        Ok(())
    }

    /// Caller is authorized for `tsm` iff it is the TSM itself or the
    /// TSM's current operator. An unregistered TSM authorizes nobody.
    pub(crate) fn ensure_authorized_for(&self, caller: Identity, tsm: Identity) -> Result<()> {
        let authorized = self
            .tsms
            .get(&tsm)
            .is_some_and(|record| caller == tsm || caller == record.operator());
        if !authorized {
            return Err(RegistryError::unauthorized("caller is not TSM or approved"));
        }
        Ok(())
    }

    pub(crate) fn tsm_order(&self) -> &[Identity] {
        &self.tsm_order
    }

    pub(crate) fn tsm_record(&self, tsm: Identity) -> Option<&TsmRecord> {
        self.tsms.get(&tsm)
    }

    pub(crate) fn tsm_record_mut(&mut self, tsm: Identity) -> Option<&mut TsmRecord> {
        self.tsms.get_mut(&tsm)
    }

    pub(crate) fn insert_tsm(&mut self, tsm: Identity, record: TsmRecord) {
        self.tsm_order.push(tsm);
        self.tsms.insert(tsm, record);
    }
}
