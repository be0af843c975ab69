//! In-memory ledger for test suites.
//!
//! Provides a [`LedgerState`] backed by a hash map with:
//! - Configurable failure injection
//! - Operation recording for assertions
//! - Thread-safe access

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::ledger::{LedgerError, LedgerState};
use crate::table::TableSchema;

/// Reserved prefix the table registry lives under; the NUL bytes keep it
/// outside the key space reachable through `put_state`/`get_state`
/// callers' plain names.
const TABLE_KEY_PREFIX: &str = "\u{0}table\u{0}";

/// Configuration for failure injection.
#[derive(Debug, Clone, Default)]
pub struct FailureConfig {
    /// Fail the next N put operations
    pub fail_next_puts: usize,
    /// Fail the next N get operations
    pub fail_next_gets: usize,
    /// Fail the next N create-table operations
    pub fail_next_create_tables: usize,
    /// Fail only for specific keys
    pub fail_for_keys: Vec<String>,
}

/// Recorded ledger operation.
#[derive(Debug, Clone)]
pub enum LedgerOperation {
    Put { key: String },
    Get { key: String },
    CreateTable { table: String },
}

#[derive(Debug, Default)]
struct MemoryLedgerInner {
    state: HashMap<String, Vec<u8>>,
    operations: Vec<LedgerOperation>,
    failure_config: FailureConfig,
}

/// In-memory [`LedgerState`] implementation.
///
/// Stores state in memory and provides:
/// - Failure injection via `fail_next_*()` / `fail_for_key()`
/// - Operation recording via `operations()` and `operation_count()`
/// - Direct inspection via `stored_state()` and `table()`
///
/// Clones share the same underlying state, so tests can keep a handle
/// for inspection while a stub borrows the ledger.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    inner: Arc<Mutex<MemoryLedgerInner>>,
    put_count: Arc<AtomicUsize>,
    get_count: Arc<AtomicUsize>,
}

impl MemoryLedger {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure failure injection wholesale.
    pub fn configure_failures(&self, config: FailureConfig) {
        let mut inner = self.inner.lock().unwrap();
        inner.failure_config = config;
    }

    /// Fail the next N put operations.
    pub fn fail_next_puts(&self, count: usize) {
        let mut inner = self.inner.lock().unwrap();
        inner.failure_config.fail_next_puts = count;
    }

    /// Fail the next N get operations.
    pub fn fail_next_gets(&self, count: usize) {
        let mut inner = self.inner.lock().unwrap();
        inner.failure_config.fail_next_gets = count;
    }

    /// Fail the next N create-table operations.
    pub fn fail_next_create_tables(&self, count: usize) {
        let mut inner = self.inner.lock().unwrap();
        inner.failure_config.fail_next_create_tables = count;
    }

    /// Add a key that should always fail.
    pub fn fail_for_key(&self, key: impl Into<String>) {
        let mut inner = self.inner.lock().unwrap();
        inner.failure_config.fail_for_keys.push(key.into());
    }

    /// All recorded operations, in call order.
    pub fn operations(&self) -> Vec<LedgerOperation> {
        let inner = self.inner.lock().unwrap();
        inner.operations.clone()
    }

    /// Total recorded operation count.
    pub fn operation_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.operations.len()
    }

    /// Total count of put operations.
    pub fn put_count(&self) -> usize {
        self.put_count.load(Ordering::SeqCst)
    }

    /// Total count of get operations.
    pub fn get_count(&self) -> usize {
        self.get_count.load(Ordering::SeqCst)
    }

    /// Stored bytes for `key`, bypassing failure injection and counters.
    pub fn stored_state(&self, key: &str) -> Option<Vec<u8>> {
        let inner = self.inner.lock().unwrap();
        inner.state.get(key).cloned()
    }

    /// All stored keys, excluding the table registry.
    pub fn stored_keys(&self) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        inner
            .state
            .keys()
            .filter(|k| !k.starts_with(TABLE_KEY_PREFIX))
            .cloned()
            .collect()
    }

    /// Registered schema for `name`, if any.
    pub fn table(&self, name: &str) -> Option<TableSchema> {
        let inner = self.inner.lock().unwrap();
        let bytes = inner.state.get(&table_key(name))?;
        serde_json::from_slice(bytes).ok()
    }

    /// Clear all stored state, tables and recorded operations.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.state.clear();
        inner.operations.clear();
        self.put_count.store(0, Ordering::SeqCst);
        self.get_count.store(0, Ordering::SeqCst);
    }

    /// Pre-populate state without going through `put_state` (no counters,
    /// no failure checks).
    pub fn seed_state(&self, key: impl Into<String>, value: Vec<u8>) {
        let mut inner = self.inner.lock().unwrap();
        inner.state.insert(key.into(), value);
    }

    fn should_fail_for_key(inner: &MemoryLedgerInner, key: &str) -> bool {
        inner
            .failure_config
            .fail_for_keys
            .iter()
            .any(|k| k == key)
    }
}

fn table_key(name: &str) -> String {
    format!("{TABLE_KEY_PREFIX}{name}")
}

impl LedgerState for MemoryLedger {
    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        self.put_count.fetch_add(1, Ordering::SeqCst);

        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(LedgerOperation::Put {
            key: key.to_owned(),
        });

        if Self::should_fail_for_key(&inner, key) {
            return Err(LedgerError::Backend(format!(
                "put failed for key `{key}` (injected)"
            )));
        }
        if inner.failure_config.fail_next_puts > 0 {
            inner.failure_config.fail_next_puts -= 1;
            return Err(LedgerError::Backend("put failed (injected)".to_owned()));
        }

        inner.state.insert(key.to_owned(), value);
        Ok(())
    }

    fn get_state(&self, key: &str) -> Result<Vec<u8>, LedgerError> {
        self.get_count.fetch_add(1, Ordering::SeqCst);

        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(LedgerOperation::Get {
            key: key.to_owned(),
        });

        if Self::should_fail_for_key(&inner, key) {
            return Err(LedgerError::Backend(format!(
                "get failed for key `{key}` (injected)"
            )));
        }
        if inner.failure_config.fail_next_gets > 0 {
            inner.failure_config.fail_next_gets -= 1;
            return Err(LedgerError::Backend("get failed (injected)".to_owned()));
        }

        inner
            .state
            .get(key)
            .cloned()
            .ok_or_else(|| LedgerError::KeyNotFound(key.to_owned()))
    }

    fn create_table(&self, schema: TableSchema) -> Result<(), LedgerError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(LedgerOperation::CreateTable {
            table: schema.name().to_owned(),
        });

        if inner.failure_config.fail_next_create_tables > 0 {
            inner.failure_config.fail_next_create_tables -= 1;
            return Err(LedgerError::Backend(
                "create table failed (injected)".to_owned(),
            ));
        }

        if schema.name().is_empty() {
            return Err(LedgerError::InvalidTable("empty table name".to_owned()));
        }
        if schema.columns().is_empty() {
            return Err(LedgerError::InvalidTable(format!(
                "table `{}` has no columns",
                schema.name()
            )));
        }
        if schema.key_columns().next().is_none() {
            return Err(LedgerError::InvalidTable(format!(
                "table `{}` has no key column",
                schema.name()
            )));
        }

        let key = table_key(schema.name());
        if inner.state.contains_key(&key) {
            return Err(LedgerError::TableExists(schema.name().to_owned()));
        }

        let bytes = serde_json::to_vec(&schema)
            .map_err(|e| LedgerError::Backend(format!("schema encoding failed: {e}")))?;
        inner.state.insert(key, bytes);
        Ok(())
    }
}
