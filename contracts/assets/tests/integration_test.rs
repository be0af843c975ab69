//! Full dispatch lifecycle against the in-memory ledger.

use chaincode_assets::AssetsChaincode;
use chaincode_shim::prelude::*;
use testresult::TestResult;

#[test_log::test]
fn asset_lifecycle() -> TestResult {
    let ledger = MemoryLedger::new();

    // Every transaction gets its own stub, the way a validator would
    // hand one out per invocation.
    let init = Stub::new(&ledger, TransactionId::from("tx-0"));
    AssetsChaincode::invoke(&init, "init", &["reset".to_owned()])?;

    let tx1 = Stub::new(&ledger, TransactionId::from("tx-1"));
    AssetsChaincode::invoke(&tx1, "create", &["widget".to_owned(), "blue".to_owned()])?;

    let tx2 = Stub::new(&ledger, TransactionId::from("tx-2"));
    AssetsChaincode::invoke(&tx2, "create", &["widget".to_owned(), "red".to_owned()])?;

    // Same name, different transactions: both assets exist side by side.
    let query = Stub::new(&ledger, TransactionId::from("tx-3"));
    let blue = AssetsChaincode::query(&query, "asset", &["widget-tx-1".to_owned()])?;
    let red = AssetsChaincode::query(&query, "asset", &["widget-tx-2".to_owned()])?;
    assert_eq!(blue, Some(b"blue".to_vec()));
    assert_eq!(red, Some(b"red".to_vec()));

    let mut keys = ledger.stored_keys();
    keys.sort();
    assert_eq!(keys, ["widget-tx-1", "widget-tx-2"]);

    Ok(())
}

#[test_log::test]
fn failed_creation_leaves_no_state_behind() -> TestResult {
    let ledger = MemoryLedger::new();
    ledger.fail_next_puts(1);

    let tx1 = Stub::new(&ledger, TransactionId::from("tx-1"));
    let result =
        AssetsChaincode::invoke(&tx1, "create", &["widget".to_owned(), "blue".to_owned()]);
    assert!(result.is_err());

    // The put was attempted and rejected; nothing is readable afterwards.
    assert_eq!(ledger.put_count(), 1);
    let query = Stub::new(&ledger, TransactionId::from("tx-2"));
    let read = AssetsChaincode::query(&query, "asset", &["widget-tx-1".to_owned()]);
    assert!(matches!(read, Err(ChaincodeError::NotFound("asset"))));

    Ok(())
}
