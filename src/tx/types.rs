//! Transaction records and error definitions.

use alloy::consensus::{TxEip1559, TxLegacy};
use alloy::primitives::{Address, Bytes, TxKind, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export the fee schema from the config module to avoid duplication
pub use crate::config::schema::{FeeModel, FeeSettings};

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// Errors that can occur while decoding caller-supplied text.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Recipient address could not be parsed.
    #[error("Invalid recipient address: {0}")]
    Address(String),

    /// Hex payload could not be decoded.
    #[error("Invalid hex payload: {0}")]
    Hex(String),
}

/// An unsigned transaction, ready for a signing collaborator.
///
/// Exactly one fee representation is populated per record; the variant
/// is fixed at construction from the session's [`FeeSettings`] and the
/// two models are never mixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnsignedTransaction {
    /// Fixed-gas-price record. Carries no chain ID; replay protection
    /// for this shape is a signing-time concern.
    Legacy(TxLegacy),

    /// Base-fee/priority-fee record with an embedded chain ID.
    DynamicFee(TxEip1559),
}

impl UnsignedTransaction {
    /// Which fee model this record was built for.
    pub fn fee_model(&self) -> FeeModel {
        match self {
            Self::Legacy(_) => FeeModel::Legacy,
            Self::DynamicFee(_) => FeeModel::DynamicFee,
        }
    }

    /// Sender sequence number, assigned by the caller.
    pub fn nonce(&self) -> u64 {
        match self {
            Self::Legacy(tx) => tx.nonce,
            Self::DynamicFee(tx) => tx.nonce,
        }
    }

    /// Maximum gas units this transaction may consume.
    pub fn gas_limit(&self) -> u64 {
        match self {
            Self::Legacy(tx) => tx.gas_limit,
            Self::DynamicFee(tx) => tx.gas_limit,
        }
    }

    /// Transferred amount in wei.
    pub fn value(&self) -> U256 {
        match self {
            Self::Legacy(tx) => tx.value,
            Self::DynamicFee(tx) => tx.value,
        }
    }

    /// Payload bytes: empty for plain transfers, call data for contract
    /// calls, deployment code for creations.
    pub fn input(&self) -> &Bytes {
        match self {
            Self::Legacy(tx) => &tx.input,
            Self::DynamicFee(tx) => &tx.input,
        }
    }

    /// Call target, or `TxKind::Create` for contract creation.
    pub fn kind(&self) -> TxKind {
        match self {
            Self::Legacy(tx) => tx.to,
            Self::DynamicFee(tx) => tx.to,
        }
    }

    /// Recipient address. Absent for contract creation.
    pub fn to(&self) -> Option<Address> {
        match self.kind() {
            TxKind::Call(address) => Some(address),
            TxKind::Create => None,
        }
    }

    /// Embedded chain ID. Legacy records never carry one.
    pub fn chain_id(&self) -> Option<ChainId> {
        match self {
            Self::Legacy(tx) => tx.chain_id.map(ChainId),
            Self::DynamicFee(tx) => Some(ChainId(tx.chain_id)),
        }
    }

    /// Fixed price per gas unit in wei (legacy records only).
    pub fn gas_price(&self) -> Option<u128> {
        match self {
            Self::Legacy(tx) => Some(tx.gas_price),
            Self::DynamicFee(_) => None,
        }
    }

    /// Total fee cap per gas unit in wei (dynamic-fee records only).
    pub fn max_fee_per_gas(&self) -> Option<u128> {
        match self {
            Self::Legacy(_) => None,
            Self::DynamicFee(tx) => Some(tx.max_fee_per_gas),
        }
    }

    /// Priority fee per gas unit in wei (dynamic-fee records only).
    pub fn max_priority_fee_per_gas(&self) -> Option<u128> {
        match self {
            Self::Legacy(_) => None,
            Self::DynamicFee(tx) => Some(tx.max_priority_fee_per_gas),
        }
    }
}
