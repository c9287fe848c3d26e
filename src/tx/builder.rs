//! Unsigned-transaction assembly.
//!
//! # Responsibilities
//! - Build transfer, contract-creation and contract-call transactions
//! - Select the legacy or dynamic-fee record from the session settings
//! - Normalize gwei-denominated prices to wei
//!
//! Nonce assignment, gas estimation, signing and broadcast stay with the
//! surrounding application; every builder method takes their results as
//! plain arguments and performs no I/O.

use alloy::consensus::{TxEip1559, TxLegacy};
use alloy::primitives::{Address, Bytes, TxKind, U256};

use crate::tx::types::{ChainId, DecodeError, FeeModel, FeeSettings, UnsignedTransaction};
use crate::units;

/// Transaction builder bound to one network session.
///
/// Holds the externally-resolved chain ID and fee settings so that
/// concurrent sessions against different networks stay independent.
#[derive(Debug, Clone)]
pub struct TxBuilder {
    chain_id: ChainId,
    fees: FeeSettings,
}

impl TxBuilder {
    /// Create a builder for one chain with resolved fee settings.
    pub fn new(chain_id: ChainId, fees: FeeSettings) -> Self {
        Self { chain_id, fees }
    }

    /// Build a plain value transfer with an exact wei amount.
    ///
    /// # Arguments
    /// * `nonce` - Sender sequence number
    /// * `to` - Recipient address (0x-prefixed hex string)
    /// * `value` - Amount in wei
    /// * `gas_limit` - Maximum gas units
    /// * `price_gwei` - Gas price (legacy) or total fee cap (dynamic) in gwei
    pub fn transfer(
        &self,
        nonce: u64,
        to: &str,
        value: U256,
        gas_limit: u64,
        price_gwei: f64,
    ) -> Result<UnsignedTransaction, DecodeError> {
        let to = decode_address(to)?;
        Ok(self.assemble(nonce, TxKind::Call(to), value, gas_limit, price_gwei, Bytes::new()))
    }

    /// Build a plain value transfer from an ether-denominated amount.
    ///
    /// Convenience wrapper over [`TxBuilder::transfer`]; see
    /// [`units::ether_to_wei`] for the precision contract.
    pub fn transfer_eth(
        &self,
        nonce: u64,
        to: &str,
        amount_eth: f64,
        gas_limit: u64,
        price_gwei: f64,
    ) -> Result<UnsignedTransaction, DecodeError> {
        self.transfer(nonce, to, units::ether_to_wei(amount_eth), gas_limit, price_gwei)
    }

    /// Build a contract call carrying `data`.
    ///
    /// # Arguments
    /// * `value` - Wei sent along with the call (zero for most calls)
    /// * `data` - ABI-encoded call data
    pub fn call(
        &self,
        nonce: u64,
        to: &str,
        value: U256,
        gas_limit: u64,
        price_gwei: f64,
        data: Bytes,
    ) -> Result<UnsignedTransaction, DecodeError> {
        let to = decode_address(to)?;
        Ok(self.assemble(nonce, TxKind::Call(to), value, gas_limit, price_gwei, data))
    }

    /// Build a contract-creation transaction deploying `code`.
    ///
    /// There is no recipient to decode, so this shape cannot fail.
    pub fn contract_creation(
        &self,
        nonce: u64,
        value: U256,
        gas_limit: u64,
        price_gwei: f64,
        code: Bytes,
    ) -> UnsignedTransaction {
        self.assemble(nonce, TxKind::Create, value, gas_limit, price_gwei, code)
    }

    /// The chain this builder stamps into dynamic-fee records.
    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// The fee settings this builder was created with.
    pub fn fee_settings(&self) -> &FeeSettings {
        &self.fees
    }

    /// Assemble one record, branching on the session's fee model.
    ///
    /// Under the dynamic model `price_gwei` becomes the total fee cap and
    /// the configured tip becomes the priority fee; under the legacy model
    /// it becomes the fixed gas price and the tip is ignored.
    fn assemble(
        &self,
        nonce: u64,
        to: TxKind,
        value: U256,
        gas_limit: u64,
        price_gwei: f64,
        input: Bytes,
    ) -> UnsignedTransaction {
        let price_wei = units::gwei_to_wei(price_gwei);

        match self.fees.fee_model {
            FeeModel::DynamicFee => UnsignedTransaction::DynamicFee(TxEip1559 {
                chain_id: self.chain_id.into(),
                nonce,
                gas_limit,
                max_fee_per_gas: price_wei,
                max_priority_fee_per_gas: units::gwei_to_wei(self.fees.tip_gwei),
                to,
                value,
                access_list: Default::default(),
                input,
            }),
            FeeModel::Legacy => UnsignedTransaction::Legacy(TxLegacy {
                chain_id: None,
                nonce,
                gas_price: price_wei,
                gas_limit,
                to,
                value,
                input,
            }),
        }
    }
}

/// Decode a 0x-prefixed hex address.
fn decode_address(to: &str) -> Result<Address, DecodeError> {
    to.parse::<Address>()
        .map_err(|e| DecodeError::Address(format!("'{}': {}", to, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPIENT: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

    fn legacy_builder() -> TxBuilder {
        TxBuilder::new(
            ChainId(1),
            FeeSettings {
                fee_model: FeeModel::Legacy,
                tip_gwei: 1.5,
            },
        )
    }

    fn dynamic_builder() -> TxBuilder {
        TxBuilder::new(
            ChainId(1),
            FeeSettings {
                fee_model: FeeModel::DynamicFee,
                tip_gwei: 1.5,
            },
        )
    }

    fn one_ether() -> U256 {
        U256::from(10).pow(U256::from(18))
    }

    #[test]
    fn test_legacy_transfer_fields() {
        let tx = legacy_builder()
            .transfer(5, RECIPIENT, one_ether(), 21_000, 20.0)
            .unwrap();

        assert_eq!(tx.fee_model(), FeeModel::Legacy);
        assert_eq!(tx.nonce(), 5);
        assert_eq!(tx.to(), Some(RECIPIENT.parse().unwrap()));
        assert_eq!(tx.value(), one_ether());
        assert_eq!(tx.gas_limit(), 21_000);
        assert_eq!(tx.gas_price(), Some(20_000_000_000));
        assert!(tx.input().is_empty());
    }

    #[test]
    fn test_legacy_transfer_embeds_no_chain_id() {
        let tx = legacy_builder()
            .transfer(5, RECIPIENT, one_ether(), 21_000, 20.0)
            .unwrap();

        assert_eq!(tx.chain_id(), None);
        assert_eq!(tx.max_fee_per_gas(), None);
        assert_eq!(tx.max_priority_fee_per_gas(), None);
    }

    #[test]
    fn test_dynamic_transfer_fields() {
        let tx = dynamic_builder()
            .transfer(5, RECIPIENT, one_ether(), 21_000, 20.0)
            .unwrap();

        assert_eq!(tx.fee_model(), FeeModel::DynamicFee);
        assert_eq!(tx.chain_id(), Some(ChainId(1)));
        assert_eq!(tx.max_fee_per_gas(), Some(20_000_000_000));
        assert_eq!(tx.max_priority_fee_per_gas(), Some(1_500_000_000));
        assert_eq!(tx.gas_price(), None);
        assert!(tx.input().is_empty());
    }

    #[test]
    fn test_transfer_eth_converts_amount() {
        let tx = legacy_builder()
            .transfer_eth(0, RECIPIENT, 1.5, 21_000, 20.0)
            .unwrap();

        assert_eq!(tx.value(), U256::from(1_500_000_000_000_000_000u64));
    }

    #[test]
    fn test_call_carries_recipient_and_data() {
        let data = Bytes::from(vec![0xa9, 0x05, 0x9c, 0xbb]);
        let tx = dynamic_builder()
            .call(9, RECIPIENT, U256::ZERO, 60_000, 25.0, data.clone())
            .unwrap();

        assert_eq!(tx.to(), Some(RECIPIENT.parse().unwrap()));
        assert_eq!(tx.input(), &data);
        assert_eq!(tx.value(), U256::ZERO);
    }

    #[test]
    fn test_contract_creation_has_no_recipient() {
        let code = Bytes::from(vec![0x60, 0x80, 0x60, 0x40]);
        let tx = dynamic_builder().contract_creation(0, U256::ZERO, 1_500_000, 25.0, code.clone());

        assert_eq!(tx.kind(), TxKind::Create);
        assert_eq!(tx.to(), None);
        assert_eq!(tx.input(), &code);
    }

    #[test]
    fn test_creation_works_under_both_fee_models() {
        let code = Bytes::from(vec![0x60, 0x80]);

        let legacy = legacy_builder().contract_creation(1, U256::ZERO, 1_500_000, 25.0, code.clone());
        assert_eq!(legacy.fee_model(), FeeModel::Legacy);
        assert_eq!(legacy.to(), None);

        let dynamic = dynamic_builder().contract_creation(1, U256::ZERO, 1_500_000, 25.0, code);
        assert_eq!(dynamic.fee_model(), FeeModel::DynamicFee);
        assert_eq!(dynamic.to(), None);
    }

    #[test]
    fn test_invalid_address_is_rejected() {
        let result = legacy_builder().transfer(0, "not-an-address", U256::ZERO, 21_000, 20.0);
        assert!(matches!(result, Err(DecodeError::Address(_))));

        let result = legacy_builder().transfer(0, "0x1234", U256::ZERO, 21_000, 20.0);
        assert!(matches!(result, Err(DecodeError::Address(_))));
    }

    #[test]
    fn test_address_decoding_ignores_checksum_case() {
        // Decoding is format-only; EIP-55 checksums are not enforced.
        let checksummed = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
        let tx = legacy_builder()
            .transfer(0, checksummed, U256::ZERO, 21_000, 20.0)
            .unwrap();

        assert_eq!(tx.to(), Some(RECIPIENT.parse().unwrap()));
    }

    #[test]
    fn test_identical_inputs_build_identical_records() {
        let builder = dynamic_builder();
        let data = Bytes::from(vec![0x11, 0x22, 0x33]);
        let a = builder
            .call(7, RECIPIENT, one_ether(), 90_000, 30.0, data.clone())
            .unwrap();
        let b = builder.call(7, RECIPIENT, one_ether(), 90_000, 30.0, data).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fractional_price_scales_exactly() {
        let tx = legacy_builder()
            .transfer(0, RECIPIENT, U256::ZERO, 21_000, 0.1)
            .unwrap();
        assert_eq!(tx.gas_price(), Some(100_000_000));
    }

    #[test]
    fn test_builder_exposes_session_context() {
        let builder = dynamic_builder();
        assert_eq!(builder.chain_id(), ChainId(1));
        assert_eq!(builder.fee_settings().fee_model, FeeModel::DynamicFee);
        assert_eq!(builder.fee_settings().tip_gwei, 1.5);
    }
}
