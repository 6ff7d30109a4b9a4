//! Serialized access to a registry
//!
//! [`ChipTable`] itself is lock-free and assumes mutations run to
//! completion with no interleaving, the way a single-writer ledger
//! substrate executes them. Embedded in an ordinary process that
//! guarantee has to come from somewhere; this wrapper provides it with
//! one reader-writer lock. Writers are exclusive, so batch atomicity and
//! the uniqueness invariant hold, and readers only ever observe fully
//! committed state.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::table::ChipTable;

/// A cloneable, thread-safe handle to one registry
#[derive(Debug, Clone)]
pub struct SharedChipTable {
    inner: Arc<RwLock<ChipTable>>,
}

impl SharedChipTable {
    /// Wrap a table for shared access
    pub fn new(table: ChipTable) -> Self {
        Self {
            inner: Arc::new(RwLock::new(table)),
        }
    }

    /// Run a read-only closure against the committed state
    pub fn read<R>(&self, f: impl FnOnce(&ChipTable) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run a mutating closure with exclusive access
    ///
    /// The closure is the whole critical section; a mutation either
    /// completes inside it or returns an error having changed nothing.
    pub fn write<R>(&self, f: impl FnOnce(&mut ChipTable) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Take the table back out, if this is the last handle
    pub fn try_unwrap(self) -> Result<ChipTable, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}
