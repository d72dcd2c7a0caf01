// Path: crates/types/src/lib.rs
//! Core data structures for the dfi ledger contracts.
//!
//! This crate is the dependency root of the workspace: it defines the record
//! structs persisted to the world-state, the error taxonomy shared by the
//! accessor and contract layers, the well-known key constants, and the
//! canonical JSON codec. It deliberately carries no I/O.

pub mod app;
pub mod codec;
pub mod error;
pub mod keys;
