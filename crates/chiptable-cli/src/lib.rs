//! Operator tooling for the chip registry
//!
//! Thin wrappers around the registry's public operations: deploy a fresh
//! registry, register TSMs, and register chips from a public-key list.
//! State lives in a JSON file standing in for the ledger substrate; every
//! command loads it, applies one operation, and persists the result.
//!
//! Errors are surfaced verbatim with a non-zero exit; there is no
//! automatic remediation, so a batch that fails (for example on a
//! duplicate chip) leaves the state file exactly as it was.

#![forbid(unsafe_code)]

pub mod commands;
pub mod state;
