//! Conformance harness for the Lanyard primitives layer.
//!
//! Fixture tables live in [`vectors`]; the integration suite under
//! `tests/` drives `lanyard-crypto` against them and against
//! property-based inputs.
//!
//! # Test strategy
//!
//! - KDF output is pinned to the RFC 5869 Appendix A SHA-256 vectors -
//!   any drift in the extract-or-expand plumbing changes the bytes
//! - AEAD cases cover the full negotiated parameter space (nonce lengths
//!   7..=13, every valid tag length, empty and non-empty AAD) and are
//!   checked for determinism, round-trip, and tamper rejection
//! - The random byte source has no golden vectors; it is validated by
//!   absence of failure and non-triviality only

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod vectors;

pub use vectors::{ccm::SealCase, hkdf::HkdfVector};
