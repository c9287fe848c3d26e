//! Dynamic-fee support detection.

use crate::chain::client::BlockSource;

/// Probe whether the connected network supports dynamic-fee transactions.
///
/// Fetches the latest block header and reports true when it carries a
/// positive base fee. Absent or zero base fees, and any fetch failure,
/// report false: when the probe cannot prove support, callers fall back
/// to legacy transactions, which every network accepts.
///
/// One read per call; callers typically resolve this once per session
/// and cache the result in their fee settings.
pub async fn detect_dynamic_fee_support(source: &impl BlockSource) -> bool {
    match source.latest_header().await {
        Ok(header) => {
            let supported = header.base_fee_per_gas.is_some_and(|base_fee| base_fee > 0);
            tracing::debug!(
                block_number = header.number,
                base_fee = ?header.base_fee_per_gas,
                supported,
                "Probed latest block for dynamic-fee support"
            );
            supported
        }
        Err(e) => {
            tracing::warn!(error = %e, "Could not fetch latest block, assuming legacy fees only");
            false
        }
    }
}
