//! Device attestation for the ChipTable registry
//!
//! Verifies that a presented `(chip id, signature)` pair proves the
//! holder of the chip's private key consents to being managed by a
//! specific TSM. The signer is recovered from the signature and matched
//! against the low-order identity slice of the chip id; the raw public
//! key is never handled here.

#![forbid(unsafe_code)]

pub mod message;
pub mod signature;

use chiptable_core::{ChipId, Identity, RegistryError, Result};

pub use message::consent_digest;
pub use signature::{ChipSignature, CHIP_SIGNATURE_LEN};

/// Verify that a chip consented to management by `tsm`
///
/// Computes the canonical consent digest for `tsm`, recovers the signer
/// identity from the signature, and succeeds iff the recovered identity
/// equals [`ChipId::identity`] of the claimed chip. Malformed signatures
/// fail exactly like forged ones; callers cannot tell the two apart.
pub fn verify_chip_consent(chip_id: ChipId, tsm: Identity, signature: &ChipSignature) -> Result<()> {
    let digest = consent_digest(tsm);
    let recovered = signature.recover_signer(&digest)?;
    if recovered != chip_id.identity() {
        return Err(RegistryError::invalid_signature("chip signature invalid"));
    }
    tracing::debug!(chip = %chip_id, tsm = %tsm, "chip consent verified");
    Ok(())
}
