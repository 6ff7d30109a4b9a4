//! Consent verification tests.
//!
//! These live as an integration test (rather than an inline `#[cfg(test)]`
//! module) because they rely on `chiptable-testkit`, which itself depends on
//! `chiptable-attest`. Linking them here against the normal library build
//! keeps a single instance of the crate's types in scope.

use chiptable_attest::{verify_chip_consent, ChipSignature, CHIP_SIGNATURE_LEN};
use chiptable_core::{Identity, RegistryError};
use chiptable_testkit::TestDevice;

#[test]
fn valid_consent_verifies() {
    let device = TestDevice::from_seed(1);
    let tsm = Identity::from_bytes([0x11; 20]);
    let signature = device.consent_signature(tsm);

    assert!(verify_chip_consent(device.chip_id, tsm, &signature).is_ok());
}

#[test]
fn consent_is_bound_to_the_tsm() {
    let device = TestDevice::from_seed(2);
    let tsm = Identity::from_bytes([0x11; 20]);
    let other_tsm = Identity::from_bytes([0x22; 20]);
    let signature = device.consent_signature(tsm);

    assert!(matches!(
        verify_chip_consent(device.chip_id, other_tsm, &signature),
        Err(RegistryError::InvalidSignature { .. })
    ));
}

#[test]
fn consent_from_another_key_is_rejected() {
    let device = TestDevice::from_seed(3);
    let impostor = TestDevice::from_seed(4);
    let tsm = Identity::from_bytes([0x11; 20]);
    let signature = impostor.consent_signature(tsm);

    assert!(matches!(
        verify_chip_consent(device.chip_id, tsm, &signature),
        Err(RegistryError::InvalidSignature { .. })
    ));
}

#[test]
fn garbage_signature_fails_like_a_forgery() {
    let device = TestDevice::from_seed(5);
    let tsm = Identity::from_bytes([0x11; 20]);
    let garbage = ChipSignature::from_bytes([0u8; CHIP_SIGNATURE_LEN]);

    assert!(matches!(
        verify_chip_consent(device.chip_id, tsm, &garbage),
        Err(RegistryError::InvalidSignature { .. })
    ));
}
