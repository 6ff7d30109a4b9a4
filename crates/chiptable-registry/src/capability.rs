//! Capability fingerprint
//!
//! Lets an integrator confirm a registry instance exposes exactly the
//! expected operation set with one aggregate check instead of a probe
//! per operation. Each operation's selector is the leading 4 bytes of
//! the keccak256 of its canonical signature string; the fingerprint is
//! the bitwise XOR of all of them.
//!
//! Known limitation, preserved deliberately: XOR is commutative and
//! self-canceling, so the check cannot detect two missing operations
//! whose selectors cancel, or a caller compensating for an unknown half
//! of the set. It is a coarse integrity check, not per-operation
//! introspection.

use once_cell::sync::Lazy;

use chiptable_core::keccak256;

use crate::table::ChipTable;

/// A 4-byte operation selector
pub type Selector = [u8; 4];

/// Canonical signatures of the registry's public operation set
pub const REGISTRY_OPERATIONS: [&str; 15] = [
    "registryVersion()",
    "registerTSM(address,string)",
    "registerChipIds(address,bytes32[])",
    "safeRegisterChipIds(address,bytes32[],bytes[])",
    "totalTSMs()",
    "tsmByIndex(uint256)",
    "tsmUri(address)",
    "tsmSetUri(string)",
    "tsmOperator(address)",
    "approve(address)",
    "addChipId(address,bytes32,bytes)",
    "addChipIds(address,bytes32[],bytes[])",
    "chipTSM(bytes32)",
    "chipUri(bytes32)",
    "chipExists(bytes32)",
];

/// Selector of one operation signature
pub fn operation_selector(signature: &str) -> Selector {
    let digest = keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&digest[..4]);
    selector
}

static AGGREGATE: Lazy<Selector> = Lazy::new(|| {
    REGISTRY_OPERATIONS
        .iter()
        .fold([0u8; 4], |mut acc, signature| {
            for (a, b) in acc.iter_mut().zip(operation_selector(signature)) {
                *a ^= b;
            }
            acc
        })
});

/// The XOR aggregate of every operation selector
pub fn interface_fingerprint() -> Selector {
    *AGGREGATE
}

impl ChipTable {
    /// Whether `candidate` equals the registry's interface fingerprint
    pub fn supports_capability(&self, candidate: Selector) -> bool {
        candidate == interface_fingerprint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_is_the_leading_digest_bytes() {
        let digest = keccak256(b"approve(address)");
        assert_eq!(operation_selector("approve(address)"), digest[..4]);
    }

    #[test]
    fn fingerprint_is_order_independent() {
        let mut reversed = [0u8; 4];
        for signature in REGISTRY_OPERATIONS.iter().rev() {
            for (a, b) in reversed.iter_mut().zip(operation_selector(signature)) {
                *a ^= b;
            }
        }
        assert_eq!(interface_fingerprint(), reversed);
    }

    #[test]
    fn xor_cancellation_hides_paired_omissions() {
        // Dropping one operation and adding it back cancels out; the
        // aggregate cannot see it. This is the documented weakness.
        let selector = operation_selector("chipExists(bytes32)");
        let mut perturbed = interface_fingerprint();
        for (a, b) in perturbed.iter_mut().zip(selector) {
            *a ^= b;
            *a ^= b;
        }
        assert_eq!(perturbed, interface_fingerprint());
    }
}
