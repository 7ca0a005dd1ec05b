//! Authenticated encryption with AES-256-CCM.
//!
//! CCM takes its nonce length (7..=13 bytes) and tag length (even, 4..=16
//! bytes) as type-level parameters of the cipher. The channel negotiates
//! both per call, so [`encrypt_message`] and [`decrypt_message`] validate
//! the runtime lengths and dispatch to the matching monomorphized cipher.
//!
//! # Determinism
//!
//! CCM is deterministic: the same (key, nonce, AAD, plaintext) always
//! produces the same ciphertext and tag. Flipping any single input bit
//! changes the tag unpredictably and decryption rejects the message.
//!
//! # Nonce uniqueness
//!
//! A nonce MUST be unique per (key, message) pair. Reusing a nonce under
//! the same key destroys confidentiality. This layer checks only the nonce
//! *length*; uniqueness is the caller's obligation and cannot be detected
//! here.

use aes::Aes256;
use ccm::{
    Ccm, NonceSize, TagSize,
    aead::{
        AeadInPlace, KeyInit,
        generic_array::{ArrayLength, GenericArray},
    },
    consts::{U4, U6, U7, U8, U9, U10, U11, U12, U13, U14, U16},
};
use zeroize::Zeroize;

use crate::{
    error::CryptoError,
    params::{self, TagLength},
};

/// Output of [`encrypt_message`]: ciphertext plus detached authentication
/// tag.
///
/// The ciphertext is exactly as long as the plaintext (CCM is
/// length-preserving) and the tag is exactly the requested [`TagLength`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedMessage {
    /// Encrypted payload, same length as the plaintext.
    pub ciphertext: Vec<u8>,
    /// Detached authentication tag over ciphertext and AAD.
    pub tag: Vec<u8>,
}

/// Encrypts and authenticates `plaintext` under `key` and `nonce`,
/// additionally authenticating (but not encrypting) `aad`.
///
/// # Errors
///
/// Returns `CryptoError::InvalidArgument` when:
///
/// - `key` is not exactly 32 bytes
/// - `plaintext` is empty
/// - `nonce` length is outside 7..=13 bytes
/// - `plaintext` exceeds the counter space implied by the nonce length
///   (e.g. 2^16 - 1 bytes for a 13-byte nonce)
pub fn encrypt_message(
    key: &[u8],
    nonce: &[u8],
    aad: &[u8],
    plaintext: &[u8],
    tag_length: TagLength,
) -> Result<SealedMessage, CryptoError> {
    params::check_key(key)?;
    params::check_required(plaintext, "plaintext must not be empty")?;

    match nonce.len() {
        7 => seal_with_nonce::<U7>(key, nonce, aad, plaintext, tag_length),
        8 => seal_with_nonce::<U8>(key, nonce, aad, plaintext, tag_length),
        9 => seal_with_nonce::<U9>(key, nonce, aad, plaintext, tag_length),
        10 => seal_with_nonce::<U10>(key, nonce, aad, plaintext, tag_length),
        11 => seal_with_nonce::<U11>(key, nonce, aad, plaintext, tag_length),
        12 => seal_with_nonce::<U12>(key, nonce, aad, plaintext, tag_length),
        13 => seal_with_nonce::<U13>(key, nonce, aad, plaintext, tag_length),
        _ => Err(CryptoError::invalid("nonce length must be 7..=13 bytes")),
    }
}

/// Verifies `tag` over `ciphertext` and `aad`, then decrypts.
///
/// The recovered plaintext is returned only when the tag authenticates;
/// on `AuthenticationFailed` the internal scratch buffer is zeroized, so
/// the candidate plaintext never escapes.
///
/// # Errors
///
/// Returns `CryptoError::InvalidArgument` when:
///
/// - `key` is not exactly 32 bytes
/// - `ciphertext` is empty
/// - `nonce` length is outside 7..=13 bytes
/// - `tag` length is not one of 4, 6, 8, 10, 12, 14, 16
///
/// Returns `CryptoError::AuthenticationFailed` when the tag does not
/// authenticate the ciphertext and AAD under this key and nonce. Treat the
/// message as untrusted and discard it.
pub fn decrypt_message(
    key: &[u8],
    nonce: &[u8],
    aad: &[u8],
    ciphertext: &[u8],
    tag: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    params::check_key(key)?;
    params::check_required(ciphertext, "ciphertext must not be empty")?;
    let tag_length = TagLength::from_bytes(tag.len())?;

    match nonce.len() {
        7 => open_with_nonce::<U7>(key, nonce, aad, ciphertext, tag, tag_length),
        8 => open_with_nonce::<U8>(key, nonce, aad, ciphertext, tag, tag_length),
        9 => open_with_nonce::<U9>(key, nonce, aad, ciphertext, tag, tag_length),
        10 => open_with_nonce::<U10>(key, nonce, aad, ciphertext, tag, tag_length),
        11 => open_with_nonce::<U11>(key, nonce, aad, ciphertext, tag, tag_length),
        12 => open_with_nonce::<U12>(key, nonce, aad, ciphertext, tag, tag_length),
        13 => open_with_nonce::<U13>(key, nonce, aad, ciphertext, tag, tag_length),
        _ => Err(CryptoError::invalid("nonce length must be 7..=13 bytes")),
    }
}

fn seal_with_nonce<N: ArrayLength<u8> + NonceSize>(
    key: &[u8],
    nonce: &[u8],
    aad: &[u8],
    plaintext: &[u8],
    tag_length: TagLength,
) -> Result<SealedMessage, CryptoError> {
    match tag_length {
        TagLength::Tag4 => seal::<U4, N>(key, nonce, aad, plaintext),
        TagLength::Tag6 => seal::<U6, N>(key, nonce, aad, plaintext),
        TagLength::Tag8 => seal::<U8, N>(key, nonce, aad, plaintext),
        TagLength::Tag10 => seal::<U10, N>(key, nonce, aad, plaintext),
        TagLength::Tag12 => seal::<U12, N>(key, nonce, aad, plaintext),
        TagLength::Tag14 => seal::<U14, N>(key, nonce, aad, plaintext),
        TagLength::Tag16 => seal::<U16, N>(key, nonce, aad, plaintext),
    }
}

fn open_with_nonce<N: ArrayLength<u8> + NonceSize>(
    key: &[u8],
    nonce: &[u8],
    aad: &[u8],
    ciphertext: &[u8],
    tag: &[u8],
    tag_length: TagLength,
) -> Result<Vec<u8>, CryptoError> {
    match tag_length {
        TagLength::Tag4 => open::<U4, N>(key, nonce, aad, ciphertext, tag),
        TagLength::Tag6 => open::<U6, N>(key, nonce, aad, ciphertext, tag),
        TagLength::Tag8 => open::<U8, N>(key, nonce, aad, ciphertext, tag),
        TagLength::Tag10 => open::<U10, N>(key, nonce, aad, ciphertext, tag),
        TagLength::Tag12 => open::<U12, N>(key, nonce, aad, ciphertext, tag),
        TagLength::Tag14 => open::<U14, N>(key, nonce, aad, ciphertext, tag),
        TagLength::Tag16 => open::<U16, N>(key, nonce, aad, ciphertext, tag),
    }
}

fn seal<M, N>(
    key: &[u8],
    nonce: &[u8],
    aad: &[u8],
    plaintext: &[u8],
) -> Result<SealedMessage, CryptoError>
where
    M: ArrayLength<u8> + TagSize,
    N: ArrayLength<u8> + NonceSize,
{
    let cipher = Ccm::<Aes256, M, N>::new_from_slice(key)
        .map_err(|_| CryptoError::invalid("key must be exactly 32 bytes"))?;

    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(GenericArray::from_slice(nonce), aad, &mut buffer)
        .map_err(|_| {
            CryptoError::invalid("plaintext or AAD too long for this nonce length")
        })?;

    Ok(SealedMessage { ciphertext: buffer, tag: tag.to_vec() })
}

fn open<M, N>(
    key: &[u8],
    nonce: &[u8],
    aad: &[u8],
    ciphertext: &[u8],
    tag: &[u8],
) -> Result<Vec<u8>, CryptoError>
where
    M: ArrayLength<u8> + TagSize,
    N: ArrayLength<u8> + NonceSize,
{
    let cipher = Ccm::<Aes256, M, N>::new_from_slice(key)
        .map_err(|_| CryptoError::invalid("key must be exactly 32 bytes"))?;

    let mut buffer = ciphertext.to_vec();
    match cipher.decrypt_in_place_detached(
        GenericArray::from_slice(nonce),
        aad,
        &mut buffer,
        GenericArray::from_slice(tag),
    ) {
        Ok(()) => Ok(buffer),
        Err(_) => {
            // The buffer holds an unauthenticated candidate plaintext.
            buffer.zeroize();
            Err(CryptoError::AuthenticationFailed)
        },
    }
}
