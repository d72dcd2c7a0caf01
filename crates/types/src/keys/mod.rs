// Path: crates/types/src/keys/mod.rs
//! Defines constants for well-known state keys.
//!
//! These constants provide a single source of truth for the key shapes used
//! by the contracts. Using them prevents typos and keeps every module that
//! touches the same state entries consistent.

/// The namespace prefix prepended to every caller-supplied identity suffix.
///
/// The resulting id is a literal concatenation, not a hash: uniqueness of the
/// full id depends entirely on caller-chosen suffix uniqueness.
pub const DID_NAMESPACE_PREFIX: &str = "did:dfi:wmdid:";

/// Length in characters of a hex-encoded evidence key (SHA-256 digest).
pub const EVIDENCE_KEY_HEX_LEN: usize = 64;
