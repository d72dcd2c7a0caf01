// Path: crates/api/src/lib.rs
//! Core traits for the dfi ledger contracts.
//!
//! Two seams are defined here:
//! - `state`: the world-state accessor consumed from the external ledger
//!   (point lookup, point write, bounded bookmark-resumable range scan, and
//!   the isolation scope of the current invocation).
//! - `contract`: the surface a record-store contract exposes to the
//!   invocation-dispatch layer.

pub mod contract;
pub mod state;
