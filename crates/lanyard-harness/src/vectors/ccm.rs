//! AES-256-CCM parameter-space cases.
//!
//! CCM output is deterministic but the expected bytes depend on the exact
//! cipher back end, so these cases carry inputs only; the suite derives
//! its oracles from the cipher itself (seal twice and compare, round-trip,
//! corrupt-and-reject) instead of pinning ciphertext bytes.
//!
//! The table sweeps the negotiated parameter space: every nonce length
//! the cipher accepts (7..=13), tag lengths across the valid set, empty
//! and non-empty AAD, and payloads from a single byte up to 64 bytes.

use hex_literal::hex;

/// Inputs for one AEAD seal/open case.
#[derive(Debug, Clone, Copy)]
pub struct SealCase {
    /// Test case identifier.
    pub tc_id: u32,
    /// 32-byte AES-256 key.
    pub key: &'static [u8],
    /// Nonce, 7..=13 bytes.
    pub nonce: &'static [u8],
    /// Associated data; may be empty.
    pub aad: &'static [u8],
    /// Plaintext, non-empty.
    pub plaintext: &'static [u8],
    /// Requested tag length in bytes.
    pub tag_len: usize,
}

/// AEAD cases across the negotiated parameter space.
///
/// Case 1 is the channel's reference shape: 23-byte payload, 13-byte
/// nonce, 8-byte AAD, 8-byte tag.
pub const CCM_CASES: &[SealCase] = &[
    SealCase {
        tc_id: 1,
        key: &hex!("c0c1c2c3c4c5c6c7c8c9cacbcccdcecfd0d1d2d3d4d5d6d7d8d9dadbdcdddedf"),
        nonce: &hex!("00112233445566778899aabbcc"),
        aad: &hex!("0001020304050607"),
        plaintext: &hex!("08090a0b0c0d0e0f101112131415161718191a1b1c1d1e"),
        tag_len: 8,
    },
    SealCase {
        tc_id: 2,
        key: &hex!("2b7e151628aed2a6abf7158809cf4f3c2b7e151628aed2a6abf7158809cf4f3c"),
        nonce: &hex!("101112131415161718191a1b1c"),
        aad: &hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"),
        plaintext: &hex!("202122232425262728292a2b2c2d2e2f3031323334353637"),
        tag_len: 16,
    },
    SealCase {
        tc_id: 3,
        key: &hex!("404142434445464748494a4b4c4d4e4f505152535455565758595a5b5c5d5e5f"),
        nonce: &hex!("101112131415161718191a1b"),
        aad: &[],
        plaintext: &hex!("000102030405060708090a0b0c0d0e0f"),
        tag_len: 16,
    },
    SealCase {
        tc_id: 4,
        key: &hex!("1f1e1d1c1b1a191817161514131211100f0e0d0c0b0a09080706050403020100"),
        nonce: &hex!("76543210fedcba"),
        aad: &hex!("ffeeddccbbaa99887766554433221100"),
        plaintext: &hex!("6bc1bee22e409f96e93d7e117393172aad2b417be66c3710aabbccddeeff0a"),
        tag_len: 4,
    },
    SealCase {
        tc_id: 5,
        key: &hex!("8899aabbccddeeff00112233445566778899aabbccddeeff0011223344556677"),
        nonce: &hex!("f0e0d0c0b0a09080"),
        aad: &hex!("101112131415161718191a1b1c1d1e1f2021222324252627"),
        plaintext: &hex!(
            "000102030405060708090a0b0c0d0e0f"
            "101112131415161718191a1b1c1d1e1f"
            "202122232425262728292a2b2c2d2e2f"
        ),
        tag_len: 10,
    },
    SealCase {
        tc_id: 6,
        key: &hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"),
        nonce: &hex!("deadbeefcafe0102030405"),
        aad: &hex!("ff"),
        plaintext: &hex!("a5"),
        tag_len: 6,
    },
    SealCase {
        tc_id: 7,
        key: &hex!("fedcba9876543210fedcba9876543210fedcba9876543210fedcba9876543210"),
        nonce: &hex!("0102030405060708090a0b0c0d"),
        aad: &[],
        plaintext: &hex!(
            "000102030405060708090a0b0c0d0e0f"
            "101112131415161718191a1b1c1d1e1f"
            "202122232425262728292a2b2c2d2e2f"
            "303132333435363738393a3b3c3d3e3f"
        ),
        tag_len: 14,
    },
    SealCase {
        tc_id: 8,
        key: &hex!("5a5b5c5d5e5f606162636465666768696a6b6c6d6e6f70717273747576777879"),
        nonce: &hex!("9f9e9d9c9b9a999897"),
        aad: &hex!("c0c1c2c3c4c5c6c7c8c9cacbcc"),
        plaintext: &hex!("303132333435363738393a3b3c3d3e3f40414243444546"),
        tag_len: 12,
    },
    SealCase {
        tc_id: 9,
        key: &hex!("7f7e7d7c7b7a797877767574737271706f6e6d6c6b6a69686766656463626160"),
        nonce: &hex!("aabbccddeeff00112233"),
        aad: &hex!("1122334455667788"),
        plaintext: &hex!(
            "909192939495969798999a9b9c9d9e9f"
            "a0a1a2a3a4a5a6a7a8a9aaabacadaeaf"
            "b0"
        ),
        tag_len: 16,
    },
];
