//! Identity and chip-id newtypes
//!
//! [`Identity`] is the fixed-width account value callers and TSMs are
//! known by; [`ChipId`] is the wider hash a chip is keyed by in the
//! registry. The two are deliberately distinct types: the only sanctioned
//! bridge between them is [`ChipId::identity`], the named low-order-slice
//! operation the attestation scheme relies on.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::RegistryError;

/// Byte width of an [`Identity`]
pub const IDENTITY_LEN: usize = 20;

/// Byte width of a [`ChipId`]
pub const CHIP_ID_LEN: usize = 32;

fn decode_fixed_hex<const N: usize>(s: &str, what: &str) -> Result<[u8; N], RegistryError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    let mut bytes = [0u8; N];
    if digits.len() != N * 2 {
        return Err(RegistryError::invalid(format!(
            "{what} must be {} hex digits, got {}",
            N * 2,
            digits.len()
        )));
    }
    hex::decode_to_slice(digits, &mut bytes)
        .map_err(|e| RegistryError::invalid(format!("{what} is not valid hex: {e}")))?;
    Ok(bytes)
}

/// Fixed-width value identifying an account or signer
///
/// Derived from a secp256k1 public key (see [`crate::derive`]); the
/// distinguished [`Identity::ZERO`] value means "absent/unset" wherever
/// an operator or chip owner may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity([u8; IDENTITY_LEN]);

impl Identity {
    /// The distinguished absent/unset identity
    pub const ZERO: Identity = Identity([0u8; IDENTITY_LEN]);

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; IDENTITY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; IDENTITY_LEN] {
        &self.0
    }

    /// Whether this is the distinguished zero identity
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Identity {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed_hex::<IDENTITY_LEN>(s, "identity").map(Self)
    }
}

impl From<[u8; IDENTITY_LEN]> for Identity {
    fn from(bytes: [u8; IDENTITY_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Identity> for [u8; IDENTITY_LEN] {
    fn from(identity: Identity) -> Self {
        identity.0
    }
}

/// Fixed-width hash of a chip's public key
///
/// Wider than an [`Identity`]; the chip's permanent key in the registry.
/// Its low-order bytes, interpreted as an identity, equal the identity of
/// the same public key - that relationship is what lets the registry
/// verify chip consent from a recovered signer without ever seeing the
/// raw public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChipId([u8; CHIP_ID_LEN]);

impl ChipId {
    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; CHIP_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; CHIP_ID_LEN] {
        &self.0
    }

    /// The identity embedded in this chip id
    ///
    /// Takes the low-order [`IDENTITY_LEN`] bytes of the hash. For a chip
    /// id derived from a public key this equals
    /// [`crate::derive::identity_from_public_key`] of the same key.
    pub fn identity(&self) -> Identity {
        let mut bytes = [0u8; IDENTITY_LEN];
        bytes.copy_from_slice(&self.0[CHIP_ID_LEN - IDENTITY_LEN..]);
        Identity(bytes)
    }
}

impl fmt::Display for ChipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for ChipId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed_hex::<CHIP_ID_LEN>(s, "chip id").map(Self)
    }
}

impl From<[u8; CHIP_ID_LEN]> for ChipId {
    fn from(bytes: [u8; CHIP_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<ChipId> for [u8; CHIP_ID_LEN] {
    fn from(chip_id: ChipId) -> Self {
        chip_id.0
    }
}

// Both types serialize as 0x-prefixed hex strings so they stay readable
// in persisted registry state and usable as JSON map keys.

macro_rules! hex_string_serde {
    ($ty:ident, $expecting:literal) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct HexVisitor;

                impl Visitor<'_> for HexVisitor {
                    type Value = $ty;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.write_str($expecting)
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                        v.parse().map_err(E::custom)
                    }
                }

                deserializer.deserialize_str(HexVisitor)
            }
        }
    };
}

hex_string_serde!(Identity, "a 0x-prefixed 40-digit hex identity");
hex_string_serde!(ChipId, "a 0x-prefixed 64-digit hex chip id");
