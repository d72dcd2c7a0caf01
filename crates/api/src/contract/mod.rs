// Path: crates/api/src/contract/mod.rs
//! The trait a record-store contract exposes to the invocation-dispatch
//! layer.

use crate::state::WorldState;
use dfi_types::error::ContractError;

/// A ledger-resident contract dispatched by the external invocation layer.
///
/// # Storage Invariant: Namespaced Access
///
/// The dispatch host hands each contract a `WorldState` scoped to that
/// contract's own namespace: the evidence store and the identity registry
/// never observe each other's keys, and a full-range scan inside one
/// contract enumerates only that contract's records. Transaction isolation,
/// conflict detection, and retry around the `invoke` call are the host's
/// concern; contracts hold no state between invocations and no lock across
/// calls.
pub trait LedgerContract: Send + Sync {
    /// A unique, static, lowercase string identifier for the contract. Used
    /// by the dispatch layer to route invocations and as the log target.
    fn id(&self) -> &str;

    /// Handles contract instantiation. The record stores take no
    /// instantiation arguments, so the default rejects any.
    fn init(&self, state: &mut dyn WorldState, args: &[String]) -> Result<(), ContractError> {
        let _ = state;
        if !args.is_empty() {
            return Err(ContractError::InvalidArgument(format!(
                "contract '{}' does not expect instantiation arguments, got {}",
                self.id(),
                args.len()
            )));
        }
        log::info!(target: "contract", "init {}", self.id());
        Ok(())
    }

    /// Handles one dispatched operation and returns the response payload.
    ///
    /// `operation` is parsed into the contract's closed operation set; names
    /// outside that set fail with [`ContractError::Unsupported`], and a
    /// wrong argument count for a known operation fails with
    /// [`ContractError::InvalidArgument`].
    fn invoke(
        &self,
        state: &mut dyn WorldState,
        operation: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError>;
}
