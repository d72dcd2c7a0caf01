// Path: crates/contracts/src/pagination.rs
//! Bounded, bookmark-resumable page collection over a world-state range
//! scan.
//!
//! This wraps the accessor's scan handle into the cursor protocol the
//! registry's list path speaks: validate the page size, resume from the
//! caller's opaque bookmark, decode every value in scan order, and hand back
//! the records together with the next bookmark. A single malformed record
//! aborts the entire page; there is no partial-page recovery. Pages are not
//! consistent snapshots across calls: concurrent writes between page fetches
//! may be observed or missed depending on the underlying store.

use dfi_api::state::WorldState;
use dfi_types::codec;
use dfi_types::error::{ContractError, StateError};
use serde::de::DeserializeOwned;

/// Collects at most `page_size` decoded records from `[start, end)`,
/// resuming from `bookmark` (empty = start of range).
///
/// The scan handle is a guard: its iterator is dropped on every exit path,
/// including the early returns on scan or decode failure, which releases the
/// underlying cursor state.
pub fn read_page<T: DeserializeOwned>(
    state: &dyn WorldState,
    start: &[u8],
    end: &[u8],
    page_size: i32,
    bookmark: &str,
) -> Result<(Vec<T>, String), ContractError> {
    if page_size <= 0 {
        return Err(ContractError::InvalidArgument(format!(
            "page size must be a positive integer, got {}",
            page_size
        )));
    }

    let scan = state.scan_range(start, end, page_size as u32, bookmark)?;
    let next_bookmark = scan.next_bookmark;

    let mut records = Vec::new();
    for entry in scan.entries {
        let (key, value) = entry?;
        let record = codec::from_json_canonical(&value).map_err(|e| {
            ContractError::Persistence(StateError::Decode(format!(
                "record under key '{}': {}",
                String::from_utf8_lossy(&key),
                e
            )))
        })?;
        records.push(record);
    }

    Ok((records, next_bookmark))
}
