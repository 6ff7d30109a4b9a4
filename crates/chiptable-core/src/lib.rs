//! Core types for the ChipTable registry
//!
//! This crate provides the fundamental types shared across the workspace:
//! the [`Identity`] and [`ChipId`] newtypes, the pure key-to-identity
//! derivation scheme, and the unified [`RegistryError`] type.
//!
//! Everything here is stateless; registry state lives in
//! `chiptable-registry`.

#![forbid(unsafe_code)]

pub mod derive;
pub mod error;
pub mod identity;

pub use derive::{chip_id_from_public_key, identity_from_public_key, keccak256};
pub use error::{RegistryError, Result};
pub use identity::{ChipId, Identity};
