//! Primitive-layer error types.
//!
//! The two failure tiers are deliberately distinct: [`InvalidArgument`]
//! means the *call* was malformed and must be fixed by the caller, while
//! [`AuthenticationFailed`] means the *message* was rejected and must be
//! discarded. Callers must never treat an authentication failure as
//! retryable or fall back to the unauthenticated bytes.
//!
//! [`InvalidArgument`]: CryptoError::InvalidArgument
//! [`AuthenticationFailed`]: CryptoError::AuthenticationFailed

use thiserror::Error;

/// Errors from primitive operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// A precondition on the call was violated. Detected before any
    /// cryptographic back end is invoked.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Which precondition was violated.
        reason: &'static str,
    },

    /// AEAD tag verification rejected the ciphertext, associated data,
    /// key, or nonce. The message is untrusted and must be discarded.
    #[error("message authentication failed")]
    AuthenticationFailed,

    /// The trusted cryptographic back end reported an unexpected fault
    /// (e.g. OS entropy exhaustion).
    #[error("crypto engine failure: {reason}")]
    EngineFailure {
        /// Description of the back-end fault.
        reason: String,
    },
}

impl CryptoError {
    /// Shorthand for an [`CryptoError::InvalidArgument`] with a static reason.
    pub(crate) const fn invalid(reason: &'static str) -> Self {
        Self::InvalidArgument { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_violated_precondition() {
        let err = CryptoError::invalid("plaintext must not be empty");
        assert_eq!(err.to_string(), "invalid argument: plaintext must not be empty");
    }

    #[test]
    fn auth_failure_is_distinct_from_invalid_argument() {
        assert_ne!(CryptoError::AuthenticationFailed, CryptoError::invalid("x"));
    }
}
