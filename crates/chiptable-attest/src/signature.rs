//! Recoverable chip signatures
//!
//! Wire form is the 65-byte `r(32) || s(32) || v(1)` layout chips emit.
//! The recovery byte `v` is accepted as 0/1 or the legacy 27/28.

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

use chiptable_core::{identity_from_public_key, Identity, RegistryError, Result};

/// Byte length of a chip consent signature
pub const CHIP_SIGNATURE_LEN: usize = 65;

fn invalid() -> RegistryError {
    RegistryError::invalid_signature("chip signature invalid")
}

/// A chip's recoverable consent signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipSignature([u8; CHIP_SIGNATURE_LEN]);

impl ChipSignature {
    /// Create from the 65-byte wire form
    pub fn from_bytes(bytes: [u8; CHIP_SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    /// Create from a byte slice, rejecting wrong lengths
    ///
    /// A wrong-length slice fails with the same error kind as a forged
    /// signature.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != CHIP_SIGNATURE_LEN {
            return Err(invalid());
        }
        let mut sig = [0u8; CHIP_SIGNATURE_LEN];
        sig.copy_from_slice(bytes);
        Ok(Self(sig))
    }

    /// Get the wire-form bytes
    pub fn to_bytes(&self) -> [u8; CHIP_SIGNATURE_LEN] {
        self.0
    }

    fn recovery_id(&self) -> Result<RecoveryId> {
        let v = self.0[CHIP_SIGNATURE_LEN - 1];
        let normalized = match v {
            0 | 1 => v,
            27 | 28 => v - 27,
            _ => return Err(invalid()),
        };
        RecoveryId::from_byte(normalized).ok_or_else(invalid)
    }

    /// Recover the signer identity for a prehashed message
    ///
    /// Every failure mode (bad r/s encoding, bad recovery byte, point
    /// recovery failure) collapses to `InvalidSignature`.
    pub fn recover_signer(&self, digest: &[u8; 32]) -> Result<Identity> {
        let signature =
            Signature::from_slice(&self.0[..CHIP_SIGNATURE_LEN - 1]).map_err(|_| invalid())?;
        let recovery_id = self.recovery_id()?;
        let key = VerifyingKey::recover_from_prehash(digest, &signature, recovery_id)
            .map_err(|_| invalid())?;
        identity_from_public_key(&key.to_sec1_bytes()).map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_length_is_an_invalid_signature() {
        assert!(matches!(
            ChipSignature::from_slice(&[0u8; 64]),
            Err(RegistryError::InvalidSignature { .. })
        ));
        assert!(matches!(
            ChipSignature::from_slice(&[0u8; 66]),
            Err(RegistryError::InvalidSignature { .. })
        ));
    }

    #[test]
    fn bad_recovery_byte_is_rejected() {
        let mut bytes = [0u8; CHIP_SIGNATURE_LEN];
        bytes[CHIP_SIGNATURE_LEN - 1] = 9;
        let signature = ChipSignature::from_bytes(bytes);
        assert!(matches!(
            signature.recover_signer(&[0u8; 32]),
            Err(RegistryError::InvalidSignature { .. })
        ));
    }

    #[test]
    fn zero_r_s_cannot_recover() {
        // r = s = 0 is outside the valid scalar range.
        let mut bytes = [0u8; CHIP_SIGNATURE_LEN];
        bytes[CHIP_SIGNATURE_LEN - 1] = 27;
        let signature = ChipSignature::from_bytes(bytes);
        assert!(matches!(
            signature.recover_signer(&[0x42; 32]),
            Err(RegistryError::InvalidSignature { .. })
        ));
    }
}
