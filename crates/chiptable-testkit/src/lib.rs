//! Test fixtures for the ChipTable workspace
//!
//! Deterministic chip devices (seeded secp256k1 keypairs that can produce
//! consent signatures) and pre-built registry states, so test modules
//! don't each reimplement the same setup.
//!
//! Add to a crate's `Cargo.toml` dev-dependencies:
//! ```toml
//! [dev-dependencies]
//! chiptable-testkit = { path = "../chiptable-testkit" }
//! ```

#![forbid(unsafe_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

pub mod device;
pub mod table;

pub use device::TestDevice;
pub use table::{table_with_owner, table_with_tsm, test_identity};
