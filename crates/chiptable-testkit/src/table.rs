//! Pre-built registry states

use chiptable_core::Identity;
use chiptable_registry::ChipTable;

/// A recognizable identity for test callers
///
/// Twenty copies of `tag`, so failures print something readable.
pub fn test_identity(tag: u8) -> Identity {
    Identity::from_bytes([tag; 20])
}

/// A fresh table plus its owner identity
pub fn table_with_owner() -> (ChipTable, Identity) {
    let owner = test_identity(0xA0);
    let table = ChipTable::new(owner, "0.1".to_string()).unwrap();
    (table, owner)
}

/// A table with one registered TSM
///
/// Returns `(table, owner, tsm)`; the TSM is registered under `uri`.
pub fn table_with_tsm(uri: &str) -> (ChipTable, Identity, Identity) {
    let (mut table, owner) = table_with_owner();
    let tsm = test_identity(0xB0);
    table.register_tsm(owner, tsm, uri.to_string()).unwrap();
    (table, owner, tsm)
}
