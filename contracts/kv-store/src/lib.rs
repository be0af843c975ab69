//! Key-value chaincode: `write`/`read` over plain names, plus one-off
//! creation of the `user` table.
//!
//! The table is only ever created here; no rows are inserted, updated or
//! queried by this program.

use chaincode_shim::prelude::*;


pub struct KvStoreChaincode;

/// Schema of the `user` table.
fn user_table_schema() -> TableSchema {
    TableSchema::new(
        "user",
        vec![
            ColumnDefinition::new("name", ColumnType::String, true),
            ColumnDefinition::new("age", ColumnType::Int32, false),
            ColumnDefinition::new("gender", ColumnType::Int32, false),
        ],
    )
}

impl Chaincode for KvStoreChaincode {
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
            "write" => write(stub, args),
            "create-table" => create_user_table(stub),
            _ => Err(ChaincodeError::UnknownInvocation(function.to_owned())),
        }
    }

    fn query(stub: &Stub<'_>, function: &str, args: &[String]) -> Result<Response, ChaincodeError> {
        tracing::info!(%function, "query is running");

        match function {
            "read" => read(stub, args),
            _ => {
                tracing::warn!(%function, "query did not find function");
                Err(ChaincodeError::UnknownQuery(function.to_owned()))
            }
        }
    }
}

fn write(stub: &Stub<'_>, args: &[String]) -> Result<Response, ChaincodeError> {
    require_args(args, 2, "name of the variable and value to set")?;

    let name = &args[0];
    // Intentional: the value written is the name itself, not args[1].
    // See DESIGN.md before changing this.
    let value = &args[0];
    stub.put_state(name, value.as_bytes().to_vec())
        .map_err(|source| ChaincodeError::Store {
            context: format!("failed to write `{name}`"),
            source,
        })?;
    Ok(None)
}

fn read(stub: &Stub<'_>, args: &[String]) -> Result<Response, ChaincodeError> {
    require_args(args, 1, "name of the variable to query")?;

    let name = &args[0];
    let bytes = stub
        .get_state(name)
        .map_err(|source| ChaincodeError::Store {
            context: format!("failed to get state for `{name}`"),
            source,
        })?;
    Ok(Some(bytes))
}

/// Create the fixed `user` table. Accepts any argument list; nothing in
/// it is consulted.
fn create_user_table(stub: &Stub<'_>) -> Result<Response, ChaincodeError> {
    stub.create_table(user_table_schema())
        .map_err(|source| ChaincodeError::Store {
            context: "failed to create table".to_owned(),
            source,
        })?;

    tracing::info!("user table created");
    Ok(Some(b"successfully created".to_vec()))
}
