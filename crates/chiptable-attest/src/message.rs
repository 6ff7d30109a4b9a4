//! Canonical consent message
//!
//! A chip consents to a TSM by signing the keccak256 hash of the TSM's
//! packed identity bytes, wrapped in the signed-message envelope below.
//! The envelope domain-separates consent signatures from anything else
//! the chip's key might sign, so a signature captured elsewhere cannot be
//! replayed as consent.

use chiptable_core::{keccak256, Identity};

/// Domain-separation prefix for the consent envelope
///
/// The trailing `32` is the byte length of the inner hash.
const SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Digest a chip must sign to consent to management by `tsm`
///
/// `keccak256(prefix || keccak256(tsm))`. Signature producers must match
/// this framing exactly; any deviation verifies as a forgery.
pub fn consent_digest(tsm: Identity) -> [u8; 32] {
    let inner = keccak256(tsm.as_bytes());
    let mut framed = Vec::with_capacity(SIGNED_MESSAGE_PREFIX.len() + inner.len());
    framed.extend_from_slice(SIGNED_MESSAGE_PREFIX);
    framed.extend_from_slice(&inner);
    keccak256(&framed)
}
