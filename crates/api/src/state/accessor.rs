// Path: crates/api/src/state/accessor.rs
//! Defines the `WorldState` trait for ledger key-value operations.

use crate::state::RangeScan;
use dfi_types::error::StateError;

/// A dyn-safe trait over the external ledger's world-state.
///
/// This trait erases the concrete ledger implementation, allowing the
/// contracts to run against the production ledger and against in-memory test
/// stores without change. All methods are synchronous and blocking: each
/// contract operation executes as one unit of work inside a caller-supplied
/// transaction context, and ordering between concurrent invocations is the
/// ledger's concern, not this trait's.
pub trait WorldState: Send + Sync {
    /// Gets a value by key. `Ok(None)` means the key is absent.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError>;

    /// Inserts a key-value pair. Failures are reported, never retried here.
    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError>;

    /// Opens a bounded, bookmark-resumable ordered scan over `[start, end)`.
    ///
    /// An empty `end` means the scan is unbounded above. A non-empty
    /// `bookmark` must be a token previously returned by this store and
    /// overrides `start` as the resume point; an empty bookmark starts from
    /// `start`. At most `limit` entries are yielded.
    fn scan_range(
        &self,
        start: &[u8],
        end: &[u8],
        limit: u32,
        bookmark: &str,
    ) -> Result<RangeScan<'_>, StateError>;

    /// The isolation-scope identifier of the current invocation context
    /// (the channel the transaction executes on). Used to partition the
    /// evidence key space so identical content on different scopes derives
    /// different keys.
    fn scope(&self) -> &str;
}

// Blanket implementation to allow `WorldState` to be used behind a `Box`
// trait object.
impl<T: WorldState + ?Sized> WorldState for Box<T> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        (**self).get(key)
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        (**self).insert(key, value)
    }

    fn scan_range(
        &self,
        start: &[u8],
        end: &[u8],
        limit: u32,
        bookmark: &str,
    ) -> Result<RangeScan<'_>, StateError> {
        (**self).scan_range(start, end, limit, bookmark)
    }

    fn scope(&self) -> &str {
        (**self).scope()
    }
}
