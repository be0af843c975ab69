//! Asset chaincode: records opaque payloads under transaction-scoped keys.
//!
//! `create` stores caller data under `name-<txid>`; `asset` reads a
//! stored key back. Everything else the platform does (ordering,
//! endorsement, persistence) happens outside this program.

use chaincode_shim::prelude::*;


pub struct AssetsChaincode;

/// Composite key for a new asset. The transaction id makes keys unique
/// by construction, so creation never overwrites an earlier asset.
fn asset_key(name: &str, stub: &Stub<'_>) -> String {
    format!("{name}-{}", stub.tx_id())
}

impl Chaincode for AssetsChaincode {
    fn init(_stub: &Stub<'_>, args: &[String]) -> Result<Response, ChaincodeError> {
        require_args(args, 1, "a single initialization argument")?;
        Ok(None)
    }

    fn invoke(
        stub: &Stub<'_>,
        function: &str,
        args: &[String],
    ) -> Result<Response, ChaincodeError> {
        tracing::info!(%function, "invoke is running");

        match function {
            "init" => Self::init(stub, args),
            "create" => create_asset(stub, args),
            _ => Err(ChaincodeError::UnknownInvocation(function.to_owned())),
        }
    }

    fn query(stub: &Stub<'_>, function: &str, args: &[String]) -> Result<Response, ChaincodeError> {
        tracing::info!(%function, "query is running");

        match function {
            "asset" => get_asset(stub, args),
            _ => {
                tracing::warn!(%function, "query did not find function");
                Err(ChaincodeError::UnknownQuery(function.to_owned()))
            }
        }
    }
}

fn create_asset(stub: &Stub<'_>, args: &[String]) -> Result<Response, ChaincodeError> {
    require_args(args, 2, "asset name and asset data")?;

    let name = &args[0];
    stub.put_state(&asset_key(name, stub), args[1].as_bytes().to_vec())
        .map_err(|source| ChaincodeError::Store {
            context: format!("failed to create asset `{name}`"),
            source,
        })?;
    Ok(None)
}

/// Fetch an asset by its stored key. Any retrieval failure is a hard
/// not-found; a ledger error never carries bytes.
fn get_asset(stub: &Stub<'_>, args: &[String]) -> Result<Response, ChaincodeError> {
    require_args(args, 1, "asset name")?;

    let bytes = stub
        .get_state(&args[0])
        .map_err(|_| ChaincodeError::NotFound("asset"))?;
    Ok(Some(bytes))
}
