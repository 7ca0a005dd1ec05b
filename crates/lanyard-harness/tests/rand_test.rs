//! Tests for the secure random byte source.
//!
//! There is no good way to golden-test a DRBG; the suite validates the
//! call contract and non-triviality of the output only.

use lanyard_crypto::{CryptoError, fill_random, random_bytes};

#[test]
fn test_output_is_not_all_zero() {
    let mut buffer = [0u8; 10];
    fill_random(&mut buffer).expect("fill_random");
    assert_ne!(buffer, [0u8; 10], "output must differ from the zeroed seed state");
}

#[test]
fn test_consecutive_outputs_differ() {
    // Probabilistic, not strict: a collision on 10 bytes is 2^-80.
    let first = random_bytes(10).expect("random_bytes");
    let second = random_bytes(10).expect("random_bytes");
    assert_ne!(first, second);
}

#[test]
fn test_requested_length_is_exact() {
    for len in [1, 7, 32, 255, 4096] {
        let out = random_bytes(len).expect("random_bytes");
        assert_eq!(out.len(), len);
    }
}

#[test]
fn test_empty_destination_rejected() {
    let result = fill_random(&mut []);
    assert!(matches!(result, Err(CryptoError::InvalidArgument { .. })));
}

#[test]
fn test_zero_length_request_rejected() {
    let result = random_bytes(0);
    assert!(matches!(result, Err(CryptoError::InvalidArgument { .. })));
}
