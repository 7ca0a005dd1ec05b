//! Lanyard Cryptographic Primitives
//!
//! This crate is the primitives layer for the Lanyard device-to-device
//! secure channel. It exposes exactly the operations the channel protocol
//! needs - one AEAD cipher (AES-256-CCM), one KDF (HKDF-SHA256), and one
//! secure random byte source - with strict fixed parameter shapes instead
//! of configurable algorithm agility.
//!
//! # Design
//!
//! Every operation is a stateless free function: it validates its inputs,
//! delegates to the trusted back end (RustCrypto ciphers, the OS entropy
//! pool), and returns a `Result`. There is no shared mutable state between
//! calls, so concurrent use on independent buffers needs no locking.
//! A malformed call is rejected as [`CryptoError::InvalidArgument`] before
//! any back end is invoked.
//!
//! # Security Properties
//!
//! - Authenticated encryption: tampering with ciphertext, tag, AAD, key,
//!   or nonce is rejected as [`CryptoError::AuthenticationFailed`], and
//!   the candidate plaintext never escapes on failure
//! - No secret logging: this crate performs no logging at all; key
//!   material stays within the scope of each call and internal scratch
//!   buffers are zeroized on the failure path
//! - Nonce uniqueness per (key, message) is a caller obligation the layer
//!   cannot enforce - see [`aead`]

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod aead;
pub mod error;
pub mod kdf;
pub mod params;
pub mod rand;

pub use aead::{SealedMessage, decrypt_message, encrypt_message};
pub use error::CryptoError;
pub use kdf::{derive_key, derive_key_into};
pub use params::{
    AES256_KEY_LEN, CCM_NONCE_MAX_LEN, CCM_NONCE_MIN_LEN, MAX_OKM_LEN, TagLength,
};
pub use rand::{fill_random, random_bytes};
