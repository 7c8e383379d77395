//! Integration test suite.
//!
//! Covers the full declaration-to-record lifecycle and the error paths
//! of both the parser and the wire codec.

pub mod helpers;
pub mod manifest_lifecycle_tests;
