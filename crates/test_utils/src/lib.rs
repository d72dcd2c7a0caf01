// Path: crates/test_utils/src/lib.rs
//! In-memory world-state implementations for testing the dfi contracts.
//!
//! `MemoryLedger` mimics the observable behavior of the production ledger's
//! accessor: lexicographic key order, bounded bookmark-resumable scans, and
//! a per-invocation isolation scope. `FaultyLedger` wraps it to inject
//! backend faults so persistence-error propagation can be exercised.

use dfi_api::state::{RangeScan, WorldState};
use dfi_types::error::StateError;
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

/// A `BTreeMap`-backed world-state with the ordering and pagination
/// semantics of the real ledger.
///
/// Bookmarks are the raw key the next page resumes at (inclusive); callers
/// must treat them as opaque. An empty returned bookmark means the scan
/// exhausted the range.
#[derive(Debug, Clone)]
pub struct MemoryLedger {
    scope: String,
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryLedger {
    /// Creates an empty ledger on the given isolation scope.
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            data: BTreeMap::new(),
        }
    }

    /// Number of keys currently stored. Lets tests assert "no state change"
    /// after a rejected operation.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw access to a stored value, bypassing the accessor trait. Used by
    /// tests to corrupt or inspect state directly.
    pub fn raw_value(&self, key: &[u8]) -> Option<&[u8]> {
        self.data.get(key).map(Vec::as_slice)
    }

    /// Overwrites a value directly, bypassing the accessor trait.
    pub fn set_raw(&mut self, key: &[u8], value: &[u8]) {
        self.data.insert(key.to_vec(), value.to_vec());
    }
}

impl WorldState for MemoryLedger {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        Ok(self.data.get(key).cloned())
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        self.data.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn scan_range(
        &self,
        start: &[u8],
        end: &[u8],
        limit: u32,
        bookmark: &str,
    ) -> Result<RangeScan<'_>, StateError> {
        // A non-empty bookmark overrides `start` as the (inclusive) resume
        // point, matching the production scan contract.
        let lower = if bookmark.is_empty() {
            start.to_vec()
        } else {
            bookmark.as_bytes().to_vec()
        };
        let upper = if end.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end.to_vec())
        };

        let mut range = self.data.range((Bound::Included(lower), upper));
        let mut page: Vec<Result<_, StateError>> = Vec::new();
        let mut next_bookmark = String::new();
        loop {
            match range.next() {
                Some((k, v)) if page.len() < limit as usize => {
                    page.push(Ok((Arc::from(k.as_slice()), Arc::from(v.as_slice()))));
                }
                Some((k, _)) => {
                    // First key beyond the page becomes the resume point.
                    next_bookmark = String::from_utf8_lossy(k).into_owned();
                    break;
                }
                None => break,
            }
        }

        Ok(RangeScan {
            entries: Box::new(page.into_iter()),
            next_bookmark,
        })
    }

    fn scope(&self) -> &str {
        &self.scope
    }
}

/// Which accessor paths of a [`FaultyLedger`] report a backend fault.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaultPlan {
    /// Fail every `get`.
    pub fail_reads: bool,
    /// Fail every `insert`.
    pub fail_writes: bool,
    /// Fail every `scan_range`.
    pub fail_scans: bool,
}

/// A wrapper around [`MemoryLedger`] that injects `StateError`s on demand,
/// for testing that persistence faults propagate unretried and undowngraded.
#[derive(Debug, Clone)]
pub struct FaultyLedger {
    inner: MemoryLedger,
    plan: FaultPlan,
}

impl FaultyLedger {
    /// Wraps an existing ledger with the given fault plan.
    pub fn new(inner: MemoryLedger, plan: FaultPlan) -> Self {
        Self { inner, plan }
    }

    /// The wrapped ledger, for post-fault assertions.
    pub fn inner(&self) -> &MemoryLedger {
        &self.inner
    }
}

impl WorldState for FaultyLedger {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        if self.plan.fail_reads {
            return Err(StateError::Backend("injected read fault".into()));
        }
        self.inner.get(key)
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        if self.plan.fail_writes {
            return Err(StateError::WriteError("injected write fault".into()));
        }
        self.inner.insert(key, value)
    }

    fn scan_range(
        &self,
        start: &[u8],
        end: &[u8],
        limit: u32,
        bookmark: &str,
    ) -> Result<RangeScan<'_>, StateError> {
        if self.plan.fail_scans {
            return Err(StateError::Backend("injected scan fault".into()));
        }
        self.inner.scan_range(start, end, limit, bookmark)
    }

    fn scope(&self) -> &str {
        self.inner.scope()
    }
}
