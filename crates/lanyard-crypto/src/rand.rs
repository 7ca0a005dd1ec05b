//! Secure random bytes from the OS entropy pool.
//!
//! Thin wrapper over `getrandom`. Unlike most of this crate the output is
//! intentionally non-deterministic, so there are no golden vectors;
//! correctness is validated by absence of failure and non-triviality of
//! the output. An entropy-source fault propagates as
//! [`CryptoError::EngineFailure`] rather than being masked with a
//! predictable fill.

use crate::error::CryptoError;

/// Fills a caller-allocated buffer with cryptographically secure random
/// bytes.
///
/// # Errors
///
/// Returns `CryptoError::InvalidArgument` when `buffer` is empty, and
/// `CryptoError::EngineFailure` when the OS entropy source fails.
pub fn fill_random(buffer: &mut [u8]) -> Result<(), CryptoError> {
    if buffer.is_empty() {
        return Err(CryptoError::invalid("destination buffer must not be empty"));
    }

    getrandom::fill(buffer)
        .map_err(|e| CryptoError::EngineFailure { reason: format!("entropy source failed: {e}") })
}

/// Returns `len` cryptographically secure random bytes.
///
/// Allocating convenience over [`fill_random`].
///
/// # Errors
///
/// Same contract as [`fill_random`]; `len == 0` is an invalid argument.
pub fn random_bytes(len: usize) -> Result<Vec<u8>, CryptoError> {
    let mut out = vec![0u8; len];
    fill_random(&mut out)?;
    Ok(out)
}
