// Path: crates/types/src/codec.rs

//! Defines the canonical JSON codec for all persisted records.
//!
//! This module provides simple wrappers around `serde_json`, which is the
//! wire format of every record this system persists or returns. By
//! centralizing the codec logic here in the base `types` crate, every
//! component uses the exact same encoding for state, so bytes written by one
//! operation always decode in another.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encodes a value into its canonical JSON byte representation.
///
/// Used for all data written to the world-state or returned as a response
/// payload.
pub fn to_json_canonical<T: Serialize>(v: &T) -> Result<Vec<u8>, String> {
    serde_json::to_vec(v).map_err(|e| format!("canonical encode failed: {}", e))
}

/// Decodes a value from its canonical JSON byte representation.
///
/// Fails fast on any decoding error, returning a descriptive string for the
/// caller to map into the error taxonomy at the boundary where the bytes
/// came from (caller input versus stored state).
pub fn from_json_canonical<T: DeserializeOwned>(b: &[u8]) -> Result<T, String> {
    serde_json::from_slice(b).map_err(|e| format!("canonical decode failed: {}", e))
}
