//! Fixture tables for the conformance suite.

pub mod ccm;
pub mod hkdf;
