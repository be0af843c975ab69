use crate::ledger::LedgerError;
use crate::stub::Stub;

#[derive(thiserror::Error, Debug)]
pub enum ChaincodeError {
    /// Argument-count mismatch; `expected` names the arguments the
    /// function takes.
    #[error("incorrect number of arguments: expecting {expected}, got {got}")]
    InvalidArguments { expected: &'static str, got: usize },
    #[error("received unknown function invocation: {0}")]
    UnknownInvocation(String),
    #[error("received unknown function query: {0}")]
    UnknownQuery(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    /// An underlying ledger operation failed. The message carries the
    /// handler's context; the cause stays attached as `source`.
    #[error("{context}")]
    Store {
        context: String,
        #[source]
        source: LedgerError,
    },
}

/// Payload returned by a successful chaincode call; `None` is a call
/// with no return value.
pub type Response = Option<Vec<u8>>;

/// Dispatch contract a chaincode program implements.
///
/// Programs are stateless: all three entry points are associated
/// functions receiving the stub explicitly per call. `invoke` and
/// `query` select a handler by function name and fail with an
/// unknown-function error naming any other string they are handed.
pub trait Chaincode {
    fn init(stub: &Stub<'_>, args: &[String]) -> Result<Response, ChaincodeError>;

    fn invoke(stub: &Stub<'_>, function: &str, args: &[String]) -> Result<Response, ChaincodeError>;

    fn query(stub: &Stub<'_>, function: &str, args: &[String]) -> Result<Response, ChaincodeError>;
}

/// Argument-count guard shared by handlers; `expected` is the human
/// description used in the error, e.g. "asset name and asset data".
pub fn require_args(
    args: &[String],
    count: usize,
    expected: &'static str,
) -> Result<(), ChaincodeError> {
    if args.len() != count {
        return Err(ChaincodeError::InvalidArguments {
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_args_accepts_exact_count() {
        let args = vec!["a".to_owned(), "b".to_owned()];
        assert!(require_args(&args, 2, "name and value").is_ok());
    }

    #[test]
    fn require_args_rejects_wrong_count() {
        let args = vec!["a".to_owned()];
        let err = require_args(&args, 2, "name and value").unwrap_err();
        assert!(matches!(
            err,
            ChaincodeError::InvalidArguments { got: 1, .. }
        ));
        assert_eq!(
            err.to_string(),
            "incorrect number of arguments: expecting name and value, got 1"
        );
    }
}
