//! Raw transaction data for registry endpoints, checked against the contract ABI.
//!
//! Arguments are passed already top-encoded. The helpers below produce the
//! encodings the registry expects for its non-text arguments.

use serde::Deserialize;
use thiserror::Error;

use crate::text::HASH_WIDTH;

#[derive(Debug, Error)]
pub enum AbiError {
    #[error("no endpoint named `{0}` in the ABI")]
    UnknownEndpoint(String),

    #[error("endpoint `{endpoint}` takes {expected} arguments, got {actual}")]
    ArgumentCount {
        endpoint: String,
        expected: usize,
        actual: usize,
    },

    #[error("malformed ABI: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct ContractAbi {
    #[serde(default)]
    endpoints: Vec<EndpointAbi>,
}

#[derive(Debug, Deserialize)]
struct EndpointAbi {
    name: String,
    #[serde(default)]
    inputs: Vec<InputAbi>,
}

#[derive(Debug, Deserialize)]
struct InputAbi {
    #[serde(default)]
    multi_arg: bool,
}

/// Builds `endpoint@arg1@arg2...` with every argument hex-encoded.
pub fn encode_call(abi_json: &str, endpoint: &str, args: &[Vec<u8>]) -> Result<String, AbiError> {
    let abi: ContractAbi = serde_json::from_str(abi_json)?;
    let endpoint_abi = abi
        .endpoints
        .iter()
        .find(|e| e.name == endpoint)
        .ok_or_else(|| AbiError::UnknownEndpoint(endpoint.to_string()))?;

    let variadic = endpoint_abi.inputs.last().is_some_and(|input| input.multi_arg);
    let expected = endpoint_abi.inputs.len();
    let count_ok = if variadic {
        args.len() + 1 >= expected
    } else {
        args.len() == expected
    };
    if !count_ok {
        return Err(AbiError::ArgumentCount {
            endpoint: endpoint.to_string(),
            expected,
            actual: args.len(),
        });
    }

    let mut data = endpoint.to_string();
    for arg in args {
        data.push('@');
        data.push_str(&hex::encode(arg));
    }
    Ok(data)
}

/// Top-encoding of a `u8`: zero is the empty argument.
pub fn top_encode_u8(value: u8) -> Vec<u8> {
    if value == 0 {
        Vec::new()
    } else {
        vec![value]
    }
}

pub fn top_encode_bool(value: bool) -> Vec<u8> {
    top_encode_u8(value as u8)
}

/// Top-encoding of a list of fixed-width hashes: the items back to back, no length prefix.
pub fn top_encode_hashes(hashes: &[[u8; HASH_WIDTH]]) -> Vec<u8> {
    hashes.concat()
}
