// Path: crates/contracts/src/evidence/tests/mod.rs
use crate::evidence::{derive_evidence_key, EvidenceOp, EvidenceStore};
use dfi_api::contract::LedgerContract;
use dfi_types::error::ContractError;
use dfi_types::keys::EVIDENCE_KEY_HEX_LEN;
use dfi_test_utils::{FaultPlan, FaultyLedger, MemoryLedger};

const CONTENT: &str = "{\"a\":1,\"b\":\"b\"}";

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn put_then_get_round_trips_content() {
    let store = EvidenceStore::new();
    let mut ledger = MemoryLedger::new("channelX");

    let key = store.invoke(&mut ledger, "put", &args(&[CONTENT])).unwrap();
    let key = String::from_utf8(key).unwrap();
    assert_eq!(key.len(), EVIDENCE_KEY_HEX_LEN);
    assert_eq!(key, derive_evidence_key(CONTENT.as_bytes(), "channelX"));

    let payload = store.invoke(&mut ledger, "get", &args(&[&key])).unwrap();
    assert_eq!(payload, CONTENT.as_bytes());
}

#[test]
fn put_is_deterministic_and_idempotent() {
    let store = EvidenceStore::new();
    let mut ledger = MemoryLedger::new("channelX");

    let first = store.put(&mut ledger, CONTENT.as_bytes()).unwrap();
    let second = store.put(&mut ledger, CONTENT.as_bytes()).unwrap();
    assert_eq!(first, second);
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.raw_value(first.as_bytes()), Some(CONTENT.as_bytes()));
}

#[test]
fn different_scopes_derive_different_keys() {
    let store = EvidenceStore::new();
    let mut on_x = MemoryLedger::new("channelX");
    let mut on_y = MemoryLedger::new("channelY");

    let key_x = store.put(&mut on_x, CONTENT.as_bytes()).unwrap();
    let key_y = store.put(&mut on_y, CONTENT.as_bytes()).unwrap();
    assert_ne!(key_x, key_y);
}

#[test]
fn get_of_missing_key_is_not_found() {
    let store = EvidenceStore::new();
    let mut ledger = MemoryLedger::new("channelX");

    let err = store
        .invoke(&mut ledger, "get", &args(&["nonexistent"]))
        .unwrap_err();
    assert!(matches!(err, ContractError::NotFound(_)));
}

#[test]
fn wrong_argument_count_is_rejected() {
    let store = EvidenceStore::new();
    let mut ledger = MemoryLedger::new("channelX");

    let err = store
        .invoke(&mut ledger, "put", &args(&["a", "b"]))
        .unwrap_err();
    assert!(matches!(err, ContractError::InvalidArgument(_)));

    let err = store.invoke(&mut ledger, "get", &args(&[])).unwrap_err();
    assert!(matches!(err, ContractError::InvalidArgument(_)));
    assert!(ledger.is_empty());
}

#[test]
fn unknown_operation_is_rejected_typed() {
    assert!(matches!(
        EvidenceOp::parse("set"),
        Err(ContractError::Unsupported(_))
    ));

    let store = EvidenceStore::new();
    let mut ledger = MemoryLedger::new("channelX");
    let err = store
        .invoke(&mut ledger, "set", &args(&["a", "a"]))
        .unwrap_err();
    assert!(matches!(err, ContractError::Unsupported(_)));
}

#[test]
fn init_rejects_instantiation_arguments() {
    let store = EvidenceStore::new();
    let mut ledger = MemoryLedger::new("channelX");

    assert!(store.init(&mut ledger, &args(&[])).is_ok());
    let err = store
        .init(&mut ledger, &args(&["a", "10", "10"]))
        .unwrap_err();
    assert!(matches!(err, ContractError::InvalidArgument(_)));
}

#[test]
fn write_fault_propagates_as_persistence_error() {
    let store = EvidenceStore::new();
    let plan = FaultPlan {
        fail_writes: true,
        ..Default::default()
    };
    let mut ledger = FaultyLedger::new(MemoryLedger::new("channelX"), plan);

    let err = store.put(&mut ledger, CONTENT.as_bytes()).unwrap_err();
    assert!(matches!(err, ContractError::Persistence(_)));
    assert!(ledger.inner().is_empty());
}

#[test]
fn read_fault_propagates_as_persistence_error() {
    let store = EvidenceStore::new();
    let plan = FaultPlan {
        fail_reads: true,
        ..Default::default()
    };
    let ledger = FaultyLedger::new(MemoryLedger::new("channelX"), plan);

    let err = store.get(&ledger, "deadbeef").unwrap_err();
    assert!(matches!(err, ContractError::Persistence(_)));
}
