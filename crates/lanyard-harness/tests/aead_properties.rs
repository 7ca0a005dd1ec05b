//! Property-based tests for the AEAD engine.
//!
//! proptest sweeps the whole negotiated parameter space - random keys,
//! nonce lengths 7..=13, tag lengths across the valid set, payloads and
//! AAD of varying size - and checks the invariants that hold for every
//! member of it.

use lanyard_crypto::{CryptoError, TagLength, decrypt_message, encrypt_message};
use proptest::prelude::*;

fn tag_length() -> impl Strategy<Value = TagLength> {
    proptest::sample::select(TagLength::ALL.to_vec())
}

fn nonce() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 7..=13)
}

fn aad() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..64)
}

fn plaintext() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 1..256)
}

#[test]
fn prop_round_trip_recovers_plaintext() {
    proptest!(|(
        key in proptest::array::uniform32(any::<u8>()),
        nonce in nonce(),
        aad in aad(),
        plaintext in plaintext(),
        tag_length in tag_length(),
    )| {
        let sealed = encrypt_message(&key, &nonce, &aad, &plaintext, tag_length)
            .expect("valid parameters must seal");

        prop_assert_eq!(sealed.ciphertext.len(), plaintext.len());
        prop_assert_eq!(sealed.tag.len(), tag_length.bytes());

        let recovered = decrypt_message(&key, &nonce, &aad, &sealed.ciphertext, &sealed.tag)
            .expect("honest seal must open");
        prop_assert_eq!(recovered, plaintext);
    });
}

#[test]
fn prop_sealing_is_deterministic() {
    proptest!(|(
        key in proptest::array::uniform32(any::<u8>()),
        nonce in nonce(),
        aad in aad(),
        plaintext in plaintext(),
        tag_length in tag_length(),
    )| {
        let first = encrypt_message(&key, &nonce, &aad, &plaintext, tag_length)
            .expect("valid parameters must seal");
        let second = encrypt_message(&key, &nonce, &aad, &plaintext, tag_length)
            .expect("valid parameters must seal");
        prop_assert_eq!(first, second);
    });
}

#[test]
fn prop_any_flipped_ciphertext_bit_is_rejected() {
    proptest!(|(
        key in proptest::array::uniform32(any::<u8>()),
        nonce in nonce(),
        aad in aad(),
        (plaintext, bit) in plaintext()
            .prop_flat_map(|pt| { let bits = pt.len() * 8; (Just(pt), 0..bits) }),
        tag_length in tag_length(),
    )| {
        let sealed = encrypt_message(&key, &nonce, &aad, &plaintext, tag_length)
            .expect("valid parameters must seal");

        let mut ciphertext = sealed.ciphertext;
        ciphertext[bit / 8] ^= 1 << (bit % 8);

        let result = decrypt_message(&key, &nonce, &aad, &ciphertext, &sealed.tag);
        prop_assert_eq!(result, Err(CryptoError::AuthenticationFailed));
    });
}

#[test]
fn prop_wrong_key_is_rejected() {
    proptest!(|(
        key in proptest::array::uniform32(any::<u8>()),
        other_key in proptest::array::uniform32(any::<u8>()),
        nonce in nonce(),
        plaintext in plaintext(),
    )| {
        prop_assume!(key != other_key);

        let sealed = encrypt_message(&key, &nonce, &[], &plaintext, TagLength::Tag16)
            .expect("valid parameters must seal");

        let result = decrypt_message(&other_key, &nonce, &[], &sealed.ciphertext, &sealed.tag);
        prop_assert_eq!(result, Err(CryptoError::AuthenticationFailed));
    });
}
