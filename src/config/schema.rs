//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! transaction builder. All types derive Serde traits for deserialization
//! from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for transaction construction.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BuilderConfig {
    /// Node endpoint settings (fee-model probe, future reads).
    pub network: NetworkConfig,

    /// Fee settings applied to every built transaction.
    pub fees: FeeSettings,
}

/// Node endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Chain ID (e.g., 1 for Ethereum mainnet, 31337 for local Anvil).
    pub chain_id: u64,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: 1,
            rpc_timeout_secs: 10,
        }
    }
}

/// Which transaction record a builder session emits.
///
/// Resolved once per session, either from config or from
/// [`detect_dynamic_fee_support`](crate::chain::detect::detect_dynamic_fee_support),
/// and never per transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeModel {
    /// Fixed gas price chosen entirely by the sender.
    Legacy,

    /// Base fee plus priority tip, capped by a sender-chosen maximum.
    DynamicFee,
}

/// Fee settings read by the transaction builder.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeeSettings {
    /// Fee model for built transactions.
    pub fee_model: FeeModel,

    /// Priority fee in gwei paid to the block producer (dynamic model only).
    pub tip_gwei: f64,
}

impl Default for FeeSettings {
    fn default() -> Self {
        Self {
            fee_model: FeeModel::Legacy,
            tip_gwei: 2.0,
        }
    }
}
