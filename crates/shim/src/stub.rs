use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ledger::{LedgerError, LedgerState};
use crate::table::TableSchema;

/// Identifier of the transaction an invocation runs under, assigned by
/// the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Per-invocation handle handed to chaincode handlers: the originating
/// transaction id plus the ledger the transaction runs against.
///
/// Chaincode holds no state of its own; the host constructs a fresh stub
/// for every call.
pub struct Stub<'a> {
    ledger: &'a dyn LedgerState,
    tx_id: TransactionId,
}

impl<'a> Stub<'a> {
    pub fn new(ledger: &'a dyn LedgerState, tx_id: TransactionId) -> Self {
        Self { ledger, tx_id }
    }

    pub fn tx_id(&self) -> &TransactionId {
        &self.tx_id
    }

    pub fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        tracing::trace!(tx = %self.tx_id, %key, len = value.len(), "put_state");
        self.ledger.put_state(key, value)
    }

    pub fn get_state(&self, key: &str) -> Result<Vec<u8>, LedgerError> {
        tracing::trace!(tx = %self.tx_id, %key, "get_state");
        self.ledger.get_state(key)
    }

    pub fn create_table(&self, schema: TableSchema) -> Result<(), LedgerError> {
        tracing::trace!(tx = %self.tx_id, table = %schema.name(), "create_table");
        self.ledger.create_table(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryLedger;

    #[test_log::test]
    fn stub_delegates_to_ledger() {
        let ledger = MemoryLedger::new();
        let stub = Stub::new(&ledger, TransactionId::from("tx-1"));

        stub.put_state("greeting", b"hello".to_vec()).unwrap();
        assert_eq!(stub.get_state("greeting").unwrap(), b"hello");
        assert_eq!(stub.tx_id().as_str(), "tx-1");
    }

    #[test_log::test]
    fn missing_key_is_an_error() {
        let ledger = MemoryLedger::new();
        let stub = Stub::new(&ledger, TransactionId::from("tx-2"));

        let result = stub.get_state("never-written");
        assert!(matches!(result, Err(LedgerError::KeyNotFound(_))));
    }
}
