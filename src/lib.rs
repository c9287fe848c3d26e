//! EVM Unsigned Transaction Construction Library

pub mod chain;
pub mod config;
pub mod tx;
pub mod units;

pub use chain::client::NodeClient;
pub use chain::detect::detect_dynamic_fee_support;
pub use config::schema::{BuilderConfig, FeeModel, FeeSettings, NetworkConfig};
pub use tx::builder::TxBuilder;
pub use tx::types::{ChainId, DecodeError, UnsignedTransaction};
