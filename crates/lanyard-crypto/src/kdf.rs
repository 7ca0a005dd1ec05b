//! Key derivation with HKDF-SHA256 (RFC 5869 extract-then-expand).
//!
//! Derivation is a pure function of its inputs: identical (IKM, salt,
//! info, length) always yields identical keying material. An absent salt
//! follows the RFC and behaves exactly like an empty one (a zero-filled
//! hash-length block), so `None` and `Some(&[])` derive the same bytes.

use hkdf::Hkdf;
use sha2::Sha256;

use crate::{
    error::CryptoError,
    params::{self, MAX_OKM_LEN},
};

/// Derives keying material into a caller-allocated buffer, filling it
/// exactly.
///
/// `info` binds the derived key to a context (protocol label, role,
/// epoch); it may be empty, but distinct contexts should always pass
/// distinct info so derived keys never collide across uses.
///
/// # Errors
///
/// Returns `CryptoError::InvalidArgument` when `ikm` is empty, `okm` is
/// empty, or `okm` exceeds [`MAX_OKM_LEN`] bytes.
pub fn derive_key_into(
    ikm: &[u8],
    salt: Option<&[u8]>,
    info: &[u8],
    okm: &mut [u8],
) -> Result<(), CryptoError> {
    params::check_required(ikm, "input key material must not be empty")?;
    params::check_required(okm, "output length must be positive")?;
    if okm.len() > MAX_OKM_LEN {
        return Err(CryptoError::invalid("output length exceeds the HKDF-SHA256 limit"));
    }

    let hk = Hkdf::<Sha256>::new(salt, ikm);
    hk.expand(info, okm)
        .map_err(|_| CryptoError::invalid("output length exceeds the HKDF-SHA256 limit"))?;
    Ok(())
}

/// Derives `okm_len` bytes of keying material.
///
/// Allocating convenience over [`derive_key_into`].
///
/// # Errors
///
/// Same contract as [`derive_key_into`].
pub fn derive_key(
    ikm: &[u8],
    salt: Option<&[u8]>,
    info: &[u8],
    okm_len: usize,
) -> Result<Vec<u8>, CryptoError> {
    let mut okm = vec![0u8; okm_len];
    derive_key_into(ikm, salt, info, &mut okm)?;
    Ok(okm)
}
