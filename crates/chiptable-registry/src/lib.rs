//! ChipTable - the chip-to-TSM registry
//!
//! An explicit, passed-around state object binding chip identities to
//! trusted service managers (TSMs) under a single owner:
//!
//! - the owner registers TSMs and may transfer ownership;
//! - a TSM publishes a URI, may delegate to one operator, and enrolls
//!   chips that consented via signature;
//! - enrollment is permanent and exclusive, and batches commit atomically
//!   or not at all.
//!
//! There is no hidden global: every operation takes the table and the
//! caller identity as arguments, which keeps unit tests deterministic.
//! Callers that need cross-thread access wrap the table in
//! [`SharedChipTable`].

#![forbid(unsafe_code)]

pub mod capability;
pub mod directory;
pub mod enroll;
pub mod shared;
pub mod table;

pub use capability::{interface_fingerprint, operation_selector, Selector, REGISTRY_OPERATIONS};
pub use shared::SharedChipTable;
pub use table::{ChipTable, TsmRecord};
