// Path: crates/types/src/error/mod.rs
//! Core error types for the dfi ledger contracts.

use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors reported by the world-state accessor.
///
/// These are the faults of the underlying ledger itself: a failed point read
/// or write, a failed range scan, or bytes that the backend could not hand
/// over in the expected shape. Retry policy belongs to the transaction layer
/// above the contracts; nothing here is retried internally.
#[derive(Error, Debug)]
pub enum StateError {
    /// An error occurred in the state backend (read or scan fault).
    #[error("State backend error: {0}")]
    Backend(String),
    /// An error occurred while writing to the state.
    #[error("State write error: {0}")]
    WriteError(String),
    /// The provided value was invalid.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
    /// An error occurred during state deserialization.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ErrorCode for StateError {
    fn code(&self) -> &'static str {
        match self {
            Self::Backend(_) => "STATE_BACKEND_ERROR",
            Self::WriteError(_) => "STATE_WRITE_ERROR",
            Self::InvalidValue(_) => "STATE_INVALID_VALUE",
            Self::Decode(_) => "STATE_DECODE_ERROR",
        }
    }
}

/// Errors surfaced by contract operations to the invocation-dispatch layer.
///
/// Every variant is reported to the caller with a descriptive message; none
/// are swallowed or downgraded. There is no partial success: `create` either
/// fully commits a valid record or makes no write, and `list` either returns
/// a fully decoded page or fails the whole call.
#[derive(Error, Debug)]
pub enum ContractError {
    /// A caller-supplied argument was malformed (bad JSON, non-positive page
    /// size, wrong argument count at the dispatch boundary).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A record with the same identifier already exists; the caller must
    /// choose a new suffix.
    #[error("Record already exists: {0}")]
    AlreadyExists(String),
    /// No record exists under the requested key.
    #[error("Record not found: {0}")]
    NotFound(String),
    /// The underlying store failed on a read, write, or scan. Propagated
    /// verbatim; retrying is the transaction layer's concern.
    #[error("Persistence error: {0}")]
    Persistence(#[from] StateError),
    /// Stored bytes failed to parse as the expected record shape. Treated as
    /// a data-integrity anomaly: the contracts never write malformed records.
    #[error("Stored record is malformed: {0}")]
    Decode(String),
    /// The requested operation name is not part of the contract's closed
    /// operation set.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

impl ErrorCode for ContractError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "CONTRACT_INVALID_ARGUMENT",
            Self::AlreadyExists(_) => "CONTRACT_ALREADY_EXISTS",
            Self::NotFound(_) => "CONTRACT_NOT_FOUND",
            Self::Persistence(_) => "CONTRACT_PERSISTENCE_ERROR",
            Self::Decode(_) => "CONTRACT_DECODE_ERROR",
            Self::Unsupported(_) => "CONTRACT_UNSUPPORTED_OPERATION",
        }
    }
}
