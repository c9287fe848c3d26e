//! Node RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to a JSON-RPC endpoint
//! - Fetch the latest block header with a bounded read
//! - Handle timeouts and network errors gracefully

use alloy::eips::BlockId;
use alloy::providers::{Provider, ProviderBuilder};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

use crate::config::schema::NetworkConfig;

/// Errors that can occur while querying the node.
#[derive(Debug, Error)]
pub enum ClientError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),
}

/// The header fields the fee-model probe reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    /// Block height.
    pub number: u64,

    /// Protocol base fee. Absent on chains that never activated
    /// dynamic fees.
    pub base_fee_per_gas: Option<u64>,
}

/// Source of latest-block headers.
///
/// Seam between the fee-model probe and the network, so the probe's
/// decision logic is testable without a node.
#[async_trait]
pub trait BlockSource {
    /// Fetch the latest block header.
    async fn latest_header(&self) -> Result<BlockHeader, ClientError>;
}

/// Node RPC client wrapper.
#[derive(Clone)]
pub struct NodeClient {
    provider: Arc<dyn Provider + Send + Sync>,
    config: NetworkConfig,
    timeout_duration: Duration,
}

impl NodeClient {
    /// Create a new node client.
    ///
    /// Connection setup is lazy; an unreachable endpoint surfaces as an
    /// error on the first request, not here.
    pub fn new(config: &NetworkConfig) -> Result<Self, ClientError> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            ClientError::Rpc(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;
        let provider =
            Arc::new(ProviderBuilder::new().connect_http(url)) as Arc<dyn Provider + Send + Sync>;

        tracing::info!(
            rpc_url = %config.rpc_url,
            chain_id = config.chain_id,
            "Node client initialized"
        );

        Ok(Self {
            provider,
            config: config.clone(),
            timeout_duration: Duration::from_secs(config.rpc_timeout_secs),
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }
}

#[async_trait]
impl BlockSource for NodeClient {
    async fn latest_header(&self) -> Result<BlockHeader, ClientError> {
        let fut = self.provider.get_block(BlockId::latest());
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(Some(block))) => Ok(BlockHeader {
                number: block.header.number,
                base_fee_per_gas: block.header.base_fee_per_gas,
            }),
            Ok(Ok(None)) => Err(ClientError::Rpc("No latest block returned".to_string())),
            Ok(Err(e)) => Err(ClientError::Rpc(e.to_string())),
            Err(_) => Err(ClientError::Timeout(self.timeout_duration.as_secs())),
        }
    }
}

impl std::fmt::Debug for NodeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("chain_id", &self.config.chain_id)
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> NetworkConfig {
        NetworkConfig {
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: 31337, // Anvil default
            rpc_timeout_secs: 5,
        }
    }

    #[test]
    fn test_client_creation() {
        // Client creation should succeed even if RPC is unreachable
        let client = NodeClient::new(&test_config()).unwrap();
        assert_eq!(client.config().chain_id, 31337);
        assert_eq!(client.config().rpc_timeout_secs, 5);
    }

    #[test]
    fn test_invalid_rpc_url_is_rejected() {
        let mut config = test_config();
        config.rpc_url = "not a url".to_string();

        let result = NodeClient::new(&config);
        assert!(result.unwrap_err().to_string().contains("Invalid RPC URL"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_reports_rpc_error() {
        let config = NetworkConfig {
            rpc_url: "http://127.0.0.1:1".to_string(),
            chain_id: 31337,
            rpc_timeout_secs: 2,
        };

        let client = NodeClient::new(&config).unwrap();
        let result = client.latest_header().await;
        assert!(matches!(result, Err(ClientError::Rpc(_)) | Err(ClientError::Timeout(_))));
    }
}
