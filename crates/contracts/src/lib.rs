// Path: crates/contracts/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo
    )
)]

//! The two ledger-resident record stores and their shared pagination
//! primitive.
//!
//! Both contracts follow one structural pattern: derive the key, check
//! existence where write-once semantics demand it, validate and encode, then
//! write; reads are key lookup, decode, return. Everything runs synchronously
//! against the [`dfi_api::state::WorldState`] accessor supplied per
//! invocation by the dispatch host.

pub mod did;
pub mod evidence;
pub mod pagination;
