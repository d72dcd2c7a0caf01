// Path: crates/api/src/state/mod.rs
//! Core traits for world-state access.
//!
//! This module defines the interface the contracts use to reach the external
//! ledger's ordered key-value store. The ledger owns consensus, transaction
//! ordering, and persistence; the contracts only see the accessor defined
//! here, one invocation at a time.

use dfi_types::error::StateError;
use std::sync::Arc;

// --- Type Aliases for common state patterns ---
/// An atomically reference-counted, owned key slice.
pub type StateKey = Arc<[u8]>;
/// An atomically reference-counted, owned value slice.
pub type StateVal = Arc<[u8]>;
/// An owned key-value pair from the state, using cheap-to-clone Arcs.
pub type StateKVPair = (StateKey, StateVal);
/// A streaming iterator over key-value pairs from a range scan. It is
/// Send-safe to be moved across threads. `Sync` is omitted as iterators are
/// stateful.
pub type StateScanIter<'a> = Box<dyn Iterator<Item = Result<StateKVPair, StateError>> + Send + 'a>;

mod accessor;

pub use accessor::*;


/// The handle returned by a bounded range scan.
///
/// Holds the entry iterator together with the backend-computed resume token
/// for the page that follows. Dropping the handle releases the underlying
/// scan state; there is no explicit close call to forget, so every exit path
/// (success, decode failure, scan failure) releases the cursor.
pub struct RangeScan<'a> {
    /// The scanned entries, in the store's lexicographic key order, at most
    /// `limit` of them.
    pub entries: StateScanIter<'a>,
    /// Opaque resume token positioned after the last entry this scan will
    /// yield. Empty when the scan exhausted the range.
    pub next_bookmark: String,
}
