//! Deterministic chip device fixtures

use k256::ecdsa::SigningKey;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;

use chiptable_attest::{consent_digest, ChipSignature, CHIP_SIGNATURE_LEN};
use chiptable_core::{chip_id_from_public_key, ChipId, Identity};

/// A simulated chip: a secp256k1 keypair plus its derived registry ids
///
/// Stands in for the physical chip (the signature producer of the real
/// system). The same seed always yields the same device.
pub struct TestDevice {
    signing_key: SigningKey,
    /// The chip's registry key
    pub chip_id: ChipId,
    /// The identity embedded in the chip id
    pub identity: Identity,
}

impl TestDevice {
    /// Create a device from a seed
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let signing_key = SigningKey::random(&mut rng);
        let sec1 = signing_key
            .verifying_key()
            .to_encoded_point(false)
            .as_bytes()
            .to_vec();
        let chip_id = chip_id_from_public_key(&sec1).unwrap();
        let identity = chip_id.identity();
        Self {
            signing_key,
            chip_id,
            identity,
        }
    }

    /// Create `n` distinct devices seeded from `base_seed`
    pub fn batch(base_seed: u64, n: usize) -> Vec<Self> {
        (0..n as u64).map(|i| Self::from_seed(base_seed + i)).collect()
    }

    /// The device's SEC1 uncompressed public key
    ///
    /// What a key-provisioning list would carry, one hex line per chip.
    pub fn public_key(&self) -> Vec<u8> {
        self.signing_key
            .verifying_key()
            .to_encoded_point(false)
            .as_bytes()
            .to_vec()
    }

    /// Sign consent to be managed by `tsm`
    ///
    /// Produces the canonical r||s||v wire signature over the consent
    /// digest, with the legacy 27/28 recovery byte chips emit.
    pub fn consent_signature(&self, tsm: Identity) -> ChipSignature {
        let digest = consent_digest(tsm);
        let (signature, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(&digest)
            .expect("signing a fixed-size digest cannot fail");

        let mut bytes = [0u8; CHIP_SIGNATURE_LEN];
        bytes[..64].copy_from_slice(&signature.to_bytes());
        bytes[64] = recovery_id.to_byte() + 27;
        ChipSignature::from_bytes(bytes)
    }
}
