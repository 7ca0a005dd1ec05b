//! Parameter shapes and shared precondition checks.
//!
//! Every public operation in this crate validates its inputs here before
//! touching a cryptographic back end. A malformed call is reported as
//! [`CryptoError::InvalidArgument`] and the back end never observes it.

use crate::error::CryptoError;

/// AES-256 key length in bytes.
pub const AES256_KEY_LEN: usize = 32;

/// Shortest CCM nonce the cipher accepts, in bytes.
pub const CCM_NONCE_MIN_LEN: usize = 7;

/// Longest CCM nonce the cipher accepts, in bytes.
pub const CCM_NONCE_MAX_LEN: usize = 13;

/// Upper bound on HKDF-SHA256 output keying material (255 hash blocks,
/// RFC 5869 §2.3).
pub const MAX_OKM_LEN: usize = 255 * 32;

/// Authentication tag length for CCM.
///
/// CCM admits only the even tag lengths between 4 and 16 bytes; anything
/// else (13 included) is rejected at the boundary rather than passed to
/// the cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagLength {
    /// 4-byte tag.
    Tag4,
    /// 6-byte tag.
    Tag6,
    /// 8-byte tag.
    Tag8,
    /// 10-byte tag.
    Tag10,
    /// 12-byte tag.
    Tag12,
    /// 14-byte tag.
    Tag14,
    /// 16-byte tag.
    Tag16,
}

impl TagLength {
    /// All valid tag lengths, shortest first.
    pub const ALL: [Self; 7] =
        [Self::Tag4, Self::Tag6, Self::Tag8, Self::Tag10, Self::Tag12, Self::Tag14, Self::Tag16];

    /// The tag length in bytes.
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Tag4 => 4,
            Self::Tag6 => 6,
            Self::Tag8 => 8,
            Self::Tag10 => 10,
            Self::Tag12 => 12,
            Self::Tag14 => 14,
            Self::Tag16 => 16,
        }
    }

    /// Converts a byte count into a tag length.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidArgument` if `len` is not one of the
    /// valid CCM tag lengths.
    pub const fn from_bytes(len: usize) -> Result<Self, CryptoError> {
        match len {
            4 => Ok(Self::Tag4),
            6 => Ok(Self::Tag6),
            8 => Ok(Self::Tag8),
            10 => Ok(Self::Tag10),
            12 => Ok(Self::Tag12),
            14 => Ok(Self::Tag14),
            16 => Ok(Self::Tag16),
            _ => Err(CryptoError::invalid("tag length must be one of 4, 6, 8, 10, 12, 14, 16")),
        }
    }
}

/// Rejects a key that is not exactly [`AES256_KEY_LEN`] bytes.
pub(crate) const fn check_key(key: &[u8]) -> Result<(), CryptoError> {
    if key.len() != AES256_KEY_LEN {
        return Err(CryptoError::invalid("key must be exactly 32 bytes"));
    }
    Ok(())
}

/// Rejects an empty buffer that the operation requires to be non-empty.
pub(crate) const fn check_required(buf: &[u8], reason: &'static str) -> Result<(), CryptoError> {
    if buf.is_empty() {
        return Err(CryptoError::InvalidArgument { reason });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_tag_lengths_round_trip() {
        for tag_length in TagLength::ALL {
            assert_eq!(TagLength::from_bytes(tag_length.bytes()), Ok(tag_length));
        }
    }

    #[test]
    fn out_of_set_tag_lengths_rejected() {
        for len in [0, 1, 2, 3, 5, 7, 9, 11, 13, 15, 17, 32] {
            assert!(matches!(
                TagLength::from_bytes(len),
                Err(CryptoError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn key_length_is_exact() {
        assert!(check_key(&[0u8; 32]).is_ok());
        assert!(check_key(&[0u8; 16]).is_err());
        assert!(check_key(&[0u8; 33]).is_err());
        assert!(check_key(&[]).is_err());
    }
}
