//! Raw transaction hashing.

use alloy::hex;
use alloy::primitives::{keccak256, B256};

use crate::tx::types::DecodeError;

/// Hash a hex-encoded raw (RLP-serialized, signed) transaction.
///
/// Accepts the payload with or without a `0x` prefix and returns the
/// keccak256 digest, which is the transaction hash the network reports
/// once the payload is broadcast.
pub fn raw_tx_hash(raw: &str) -> Result<B256, DecodeError> {
    let bytes = hex::decode(raw).map_err(|e| DecodeError::Hex(format!("'{}': {}", raw, e)))?;
    Ok(keccak256(bytes))
}
