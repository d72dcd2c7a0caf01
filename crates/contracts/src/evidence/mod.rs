// Path: crates/contracts/src/evidence/mod.rs
//! The content-addressed evidence store.
//!
//! Evidence is stored verbatim under the hex SHA-256 of its content
//! concatenated with the invocation's isolation scope. Identical content on
//! the same scope always derives the same key, so `put` is idempotent by
//! construction; content identical across two scopes gets two different
//! keys. Records are never updated or deleted through this contract.

use dfi_api::contract::LedgerContract;
use dfi_api::state::WorldState;
use dfi_types::error::ContractError;
use sha2::{Digest, Sha256};

#[cfg(test)]
mod tests;

const LOG_TARGET: &str = "evidence";

/// The closed set of operations the evidence store dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceOp {
    /// Store content, returning its derived key.
    Put,
    /// Fetch content by key.
    Get,
}

impl EvidenceOp {
    /// Parses a dispatched operation name, rejecting anything outside the
    /// closed set with a typed error.
    pub fn parse(name: &str) -> Result<Self, ContractError> {
        match name {
            "put" => Ok(Self::Put),
            "get" => Ok(Self::Get),
            other => Err(ContractError::Unsupported(format!(
                "evidence store has no operation '{}'",
                other
            ))),
        }
    }
}

/// Derives the content address for a piece of evidence:
/// `hex(SHA-256(content || scope))`.
pub fn derive_evidence_key(content: &[u8], scope: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hasher.update(scope.as_bytes());
    hex::encode(hasher.finalize())
}

/// The evidence store contract. Stateless: every call runs against the
/// accessor it is handed and nothing is cached between invocations.
#[derive(Debug, Clone, Default)]
pub struct EvidenceStore;

impl EvidenceStore {
    /// Creates the contract.
    pub fn new() -> Self {
        Self
    }

    /// Stores `content` under its derived key and returns the key.
    ///
    /// Repeating a put with identical content on the same scope is a no-op
    /// rewrite of identical bytes under the same key.
    pub fn put(
        &self,
        state: &mut dyn WorldState,
        content: &[u8],
    ) -> Result<String, ContractError> {
        let scope = state.scope().to_owned();
        let key = derive_evidence_key(content, &scope);
        log::info!(target: LOG_TARGET, "new evidence on scope '{}'", scope);
        state.insert(key.as_bytes(), content)?;
        Ok(key)
    }

    /// Returns the content previously stored under `key`.
    pub fn get(&self, state: &dyn WorldState, key: &str) -> Result<Vec<u8>, ContractError> {
        state
            .get(key.as_bytes())?
            .ok_or_else(|| ContractError::NotFound(format!("no evidence under key '{}'", key)))
    }
}

impl LedgerContract for EvidenceStore {
    fn id(&self) -> &str {
        "evidence"
    }

    fn invoke(
        &self,
        state: &mut dyn WorldState,
        operation: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        match EvidenceOp::parse(operation)? {
            EvidenceOp::Put => {
                let content = single_arg(args, "the evidence content")?;
                self.put(state, content.as_bytes()).map(String::into_bytes)
            }
            EvidenceOp::Get => {
                let key = single_arg(args, "the evidence hash key")?;
                self.get(state, key)
            }
        }
    }
}

fn single_arg<'a>(args: &'a [String], what: &str) -> Result<&'a str, ContractError> {
    match args {
        [only] => Ok(only),
        _ => Err(ContractError::InvalidArgument(format!(
            "expected exactly one argument ({}), got {}",
            what,
            args.len()
        ))),
    }
}
