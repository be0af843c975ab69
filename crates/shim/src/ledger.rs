use crate::table::TableSchema;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("missing key: {0}")]
    KeyNotFound(String),
    #[error("table `{0}` already exists")]
    TableExists(String),
    #[error("invalid table definition: {0}")]
    InvalidTable(String),
    #[error("ledger backend failure: {0}")]
    Backend(String),
}

/// State interface the host platform provides to chaincode.
///
/// Implementations own all persistence, consistency and durability
/// guarantees; chaincode performs single synchronous calls and never
/// retries.
pub trait LedgerState {
    /// Store `value` under `key`. Takes `&self` because implementations
    /// handle internal locking for concurrent access.
    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError>;

    /// Fetch the bytes stored under `key`. A key that was never written
    /// is `KeyNotFound`, not an empty payload.
    fn get_state(&self, key: &str) -> Result<Vec<u8>, LedgerError>;

    /// Register a table schema. Registering the same table name twice is
    /// `TableExists`.
    fn create_table(&self, schema: TableSchema) -> Result<(), LedgerError>;
}
