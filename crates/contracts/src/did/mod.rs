// Path: crates/contracts/src/did/mod.rs
//! The identity registry.
//!
//! Identities live under namespaced ids built from a fixed literal prefix
//! plus a caller-chosen suffix; collision avoidance relies entirely on
//! caller suffix discipline. Records are write-once: creation fails when the
//! id already exists, and no update or delete operation is exposed.
//! Enumeration goes through the shared pagination primitive in lexicographic
//! key order.

use crate::pagination;
use dfi_api::contract::LedgerContract;
use dfi_api::state::WorldState;
use dfi_types::app::{AttributeMap, DidPage, DidRecord};
use dfi_types::codec;
use dfi_types::error::{ContractError, StateError};
use dfi_types::keys::DID_NAMESPACE_PREFIX;


const LOG_TARGET: &str = "did";

/// The closed set of operations the registry dispatches. Operation names
/// keep the wire spelling the invocation layer already speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryOp {
    /// `CreateDid`: register a new identity record.
    Create,
    /// `QueryDid`: fetch one record by id.
    Get,
    /// `QueryDidWithPagination`: enumerate records page by page.
    List,
}

impl RegistryOp {
    /// Parses a dispatched operation name, rejecting anything outside the
    /// closed set with a typed error.
    pub fn parse(name: &str) -> Result<Self, ContractError> {
        match name {
            "CreateDid" => Ok(Self::Create),
            "QueryDid" => Ok(Self::Get),
            "QueryDidWithPagination" => Ok(Self::List),
            other => Err(ContractError::Unsupported(format!(
                "identity registry has no operation '{}'",
                other
            ))),
        }
    }
}

/// The identity registry contract. Stateless between invocations, like the
/// evidence store.
#[derive(Debug, Clone, Default)]
pub struct DidRegistry;

impl DidRegistry {
    /// Creates the contract.
    pub fn new() -> Self {
        Self
    }

    /// Registers a new identity and returns its full namespaced id.
    ///
    /// Fails with `AlreadyExists` if the id is taken and with
    /// `InvalidArgument` if the suffix is empty or the attributes are not a
    /// JSON object; neither failure writes anything.
    pub fn create(
        &self,
        state: &mut dyn WorldState,
        suffix: &str,
        id_type: &str,
        id_name: &str,
        attributes_json: &str,
        role: &str,
    ) -> Result<String, ContractError> {
        if suffix.is_empty() {
            return Err(ContractError::InvalidArgument(
                "identity suffix must not be empty".to_string(),
            ));
        }
        let did = format!("{}{}", DID_NAMESPACE_PREFIX, suffix);

        if state.get(did.as_bytes())?.is_some() {
            return Err(ContractError::AlreadyExists(format!(
                "identity '{}' already exists",
                did
            )));
        }

        let additional_attributes: AttributeMap =
            serde_json::from_str(attributes_json).map_err(|e| {
                ContractError::InvalidArgument(format!(
                    "additional attributes must be a JSON object: {}",
                    e
                ))
            })?;

        let record = DidRecord {
            did: did.clone(),
            id_type: id_type.to_string(),
            id_name: id_name.to_string(),
            additional_attributes,
            role: role.to_string(),
        };
        let bytes = codec::to_json_canonical(&record)
            .map_err(|e| ContractError::Persistence(StateError::InvalidValue(e)))?;

        state.insert(did.as_bytes(), &bytes)?;
        log::info!(target: LOG_TARGET, "created identity '{}'", did);
        Ok(did)
    }

    /// Returns the decoded record stored under `did`.
    pub fn get(&self, state: &dyn WorldState, did: &str) -> Result<DidRecord, ContractError> {
        let bytes = self.get_raw(state, did)?;
        codec::from_json_canonical(&bytes).map_err(ContractError::Decode)
    }

    /// Returns the stored record bytes verbatim, after a validating decode.
    ///
    /// The dispatch payload for `QueryDid` is the bytes exactly as written
    /// by `create`; decoding first still surfaces corrupt records as a
    /// data-integrity anomaly instead of handing them to the caller.
    pub fn get_raw(&self, state: &dyn WorldState, did: &str) -> Result<Vec<u8>, ContractError> {
        let bytes = state
            .get(did.as_bytes())?
            .ok_or_else(|| ContractError::NotFound(format!("identity '{}' does not exist", did)))?;
        codec::from_json_canonical::<DidRecord>(&bytes).map_err(ContractError::Decode)?;
        Ok(bytes)
    }

    /// Returns one page of the registry in lexicographic key order, plus the
    /// opaque cursor to resume from.
    ///
    /// `bookmark` must be empty (start of the key space) or a paginator
    /// previously returned by this operation. Pages across separate calls
    /// are not a consistent snapshot.
    pub fn list(
        &self,
        state: &dyn WorldState,
        bookmark: &str,
        page_size: i32,
    ) -> Result<DidPage, ContractError> {
        let (records, paginator) =
            pagination::read_page::<DidRecord>(state, b"", b"", page_size, bookmark)?;
        Ok(DidPage { paginator, records })
    }
}

impl LedgerContract for DidRegistry {
    fn id(&self) -> &str {
        "did"
    }

    fn invoke(
        &self,
        state: &mut dyn WorldState,
        operation: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        match RegistryOp::parse(operation)? {
            RegistryOp::Create => match args {
                [suffix, id_type, id_name, attributes_json, role] => self
                    .create(state, suffix, id_type, id_name, attributes_json, role)
                    .map(String::into_bytes),
                _ => Err(wrong_arg_count("CreateDid", 5, args.len())),
            },
            RegistryOp::Get => match args {
                [did] => self.get_raw(state, did),
                _ => Err(wrong_arg_count("QueryDid", 1, args.len())),
            },
            RegistryOp::List => match args {
                [bookmark, page_size] => {
                    let page_size: i32 = page_size.parse().map_err(|_| {
                        ContractError::InvalidArgument(format!(
                            "page size must be a decimal integer, got '{}'",
                            page_size
                        ))
                    })?;
                    let page = self.list(state, bookmark, page_size)?;
                    codec::to_json_canonical(&page)
                        .map_err(|e| ContractError::Persistence(StateError::InvalidValue(e)))
                }
                _ => Err(wrong_arg_count("QueryDidWithPagination", 2, args.len())),
            },
        }
    }
}

fn wrong_arg_count(operation: &str, expected: usize, got: usize) -> ContractError {
    ContractError::InvalidArgument(format!(
        "{} expects {} argument(s), got {}",
        operation, expected, got
    ))
}
