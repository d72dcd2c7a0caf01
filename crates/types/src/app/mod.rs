// Path: crates/types/src/app/mod.rs
//! Record structures persisted to, or assembled from, the world-state.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The open mapping of caller-supplied metadata carried by an identity
/// record. Values are arbitrary JSON (numbers, strings, booleans, nested
/// objects and arrays); shape validation happens at the contract boundary
/// when the caller's JSON is decoded into this type.
pub type AttributeMap = Map<String, Value>;

/// An identity record as persisted to the world-state.
///
/// The serde renames pin the wire-compatible JSON encoding:
/// `{"did", "idType", "idName", "additionalAttributes", "role"}`.
/// Records are write-once; no update or delete operation exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DidRecord {
    /// The full namespaced identifier, `did:dfi:wmdid:` + caller suffix.
    pub did: String,
    /// Free-form descriptive type string.
    #[serde(rename = "idType")]
    pub id_type: String,
    /// Free-form descriptive name string.
    #[serde(rename = "idName")]
    pub id_name: String,
    /// Caller-supplied metadata not otherwise modeled.
    #[serde(rename = "additionalAttributes")]
    pub additional_attributes: AttributeMap,
    /// Free-form role classification. Not enforced by the contracts;
    /// enforcement is an external concern.
    pub role: String,
}

/// One page of identity records plus the cursor to resume the scan.
///
/// Serialized as `{"paginator": string, "records": [...]}`. The paginator is
/// opaque: callers round-trip it verbatim into the next list call, and an
/// empty string marks the start (on input) or exhaustion (on output) of the
/// key space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DidPage {
    /// Opaque resume token for the next page.
    pub paginator: String,
    /// Records in scan order (lexicographic key order).
    pub records: Vec<DidRecord>,
}
