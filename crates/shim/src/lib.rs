//! Interface contract between chaincode programs and their ledger host.
//!
//! A chaincode program is business logic a validator invokes with a
//! function name and a list of string arguments; every effect it has goes
//! through the state interface the host provides. This crate defines that
//! boundary: the [`ledger::LedgerState`] trait a host implements, the
//! per-invocation [`stub::Stub`] handed to handlers, the table schema
//! types, and the [`chaincode::Chaincode`] dispatch contract programs
//! implement. With the `testing` feature it also ships an in-memory
//! ledger with failure injection for test suites.

pub mod chaincode;
pub mod ledger;
#[cfg(any(test, feature = "testing"))]
pub mod memory;
pub mod stub;
pub mod table;

pub mod prelude {
    pub use crate::chaincode::{require_args, Chaincode, ChaincodeError, Response};
    pub use crate::ledger::{LedgerError, LedgerState};
    #[cfg(any(test, feature = "testing"))]
    pub use crate::memory::MemoryLedger;
    pub use crate::stub::{Stub, TransactionId};
    pub use crate::table::{ColumnDefinition, ColumnType, TableSchema};
}
