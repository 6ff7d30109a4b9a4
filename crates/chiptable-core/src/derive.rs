//! Pure identity derivation
//!
//! Defines how a chip's secp256k1 public key maps to its [`ChipId`] and
//! [`Identity`]. Both hash the same coordinate material (the SEC1
//! uncompressed encoding with its format-prefix byte stripped) with
//! keccak256; the chip id is the full digest, the identity its low-order
//! 20 bytes. Key-generation tooling, chip-id computation, and attestation
//! all rely on this one convention bit-for-bit.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::PublicKey;
use sha3::{Digest, Keccak256};

use crate::error::{RegistryError, Result};
use crate::identity::{ChipId, Identity};

/// The registry's fixed hash function
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&Keccak256::digest(data));
    digest
}

fn coordinate_digest(sec1: &[u8]) -> Result<[u8; 32]> {
    let key = PublicKey::from_sec1_bytes(sec1)
        .map_err(|_| RegistryError::invalid("malformed SEC1 public key"))?;
    // Normalize to the uncompressed encoding and drop the 0x04 prefix,
    // leaving the 64 coordinate bytes.
    let point = key.to_encoded_point(false);
    Ok(keccak256(&point.as_bytes()[1..]))
}

/// Derive a chip id from a SEC1-encoded public key
///
/// Accepts compressed or uncompressed encodings; both derive the same id.
pub fn chip_id_from_public_key(sec1: &[u8]) -> Result<ChipId> {
    coordinate_digest(sec1).map(ChipId::from_bytes)
}

/// Derive an identity from a SEC1-encoded public key
///
/// Equals `chip_id_from_public_key(sec1)?.identity()` for every valid
/// key.
pub fn identity_from_public_key(sec1: &[u8]) -> Result<Identity> {
    chip_id_from_public_key(sec1).map(|chip_id| chip_id.identity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::SecretKey;
    use proptest::prelude::*;

    fn public_key_for_scalar(scalar: &[u8; 32]) -> Option<Vec<u8>> {
        let key = SecretKey::from_slice(scalar).ok()?;
        Some(key.public_key().to_encoded_point(false).as_bytes().to_vec())
    }

    #[test]
    fn known_scalar_derives_known_identity() {
        // Secret scalar 1 maps to the curve generator; its identity is a
        // fixed, externally checkable value.
        let mut scalar = [0u8; 32];
        scalar[31] = 1;
        let sec1 = public_key_for_scalar(&scalar).unwrap();

        let identity = identity_from_public_key(&sec1).unwrap();
        assert_eq!(
            identity.to_string(),
            "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf"
        );
    }

    #[test]
    fn chip_id_embeds_the_key_identity() {
        let mut scalar = [0u8; 32];
        scalar[31] = 7;
        let sec1 = public_key_for_scalar(&scalar).unwrap();

        let chip_id = chip_id_from_public_key(&sec1).unwrap();
        let identity = identity_from_public_key(&sec1).unwrap();
        assert_eq!(chip_id.identity(), identity);
    }

    #[test]
    fn compressed_and_uncompressed_keys_agree() {
        let mut scalar = [0u8; 32];
        scalar[31] = 42;
        let key = SecretKey::from_slice(&scalar).unwrap();
        let uncompressed = key.public_key().to_encoded_point(false);
        let compressed = key.public_key().to_encoded_point(true);

        assert_eq!(
            chip_id_from_public_key(uncompressed.as_bytes()).unwrap(),
            chip_id_from_public_key(compressed.as_bytes()).unwrap()
        );
    }

    #[test]
    fn malformed_keys_are_rejected() {
        assert!(matches!(
            chip_id_from_public_key(&[0u8; 12]),
            Err(RegistryError::Invalid { .. })
        ));
        // Valid length, point not on the curve.
        assert!(matches!(
            chip_id_from_public_key(&[0xff; 65]),
            Err(RegistryError::Invalid { .. })
        ));
    }

    proptest! {
        #[test]
        fn identity_is_always_the_chip_id_slice(scalar in any::<[u8; 32]>()) {
            if let Some(sec1) = public_key_for_scalar(&scalar) {
                let chip_id = chip_id_from_public_key(&sec1).unwrap();
                let identity = identity_from_public_key(&sec1).unwrap();
                prop_assert_eq!(chip_id.identity(), identity);
            }
        }
    }
}
