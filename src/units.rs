//! Ether and gwei to wei conversion.
//!
//! # Responsibilities
//! - Scale human-denominated decimal amounts into integer base units
//! - Keep every scaling step in arbitrary-precision space
//!
//! # Precision
//! Amounts enter as `f64`, which carries roughly 15 reliable significant
//! digits. The conversion renders the value through its shortest decimal
//! form and scales that rendering exactly, so any decimal the caller can
//! express in an `f64` survives unchanged. Integrators who need more
//! digits than `f64` can hold should compute wei amounts themselves and
//! use the exact-value builder methods.

use alloy::primitives::utils::{parse_units, Unit};
use alloy::primitives::U256;

/// Convert a decimal amount into base units with `decimals` fractional digits.
///
/// Fractional digits beyond `decimals` are truncated toward zero. Negative
/// and non-finite amounts convert to zero, as do amounts whose scaled value
/// exceeds 256 bits.
pub fn to_base_units(amount: f64, decimals: u8) -> U256 {
    let rendered = truncate_fraction(amount.to_string(), decimals);
    match parse_units(&rendered, decimals) {
        Ok(parsed) if !parsed.is_negative() => parsed.get_absolute(),
        _ => U256::ZERO,
    }
}

/// Convert a gwei amount into wei (9 decimals).
///
/// Used for gas prices, fee caps and priority tips; these fit in `u128`
/// for any price a network would accept.
pub fn gwei_to_wei(amount: f64) -> u128 {
    to_base_units(amount, Unit::GWEI.get()).saturating_to::<u128>()
}

/// Convert an ether amount into wei (18 decimals).
pub fn ether_to_wei(amount: f64) -> U256 {
    to_base_units(amount, Unit::ETHER.get())
}

/// Drop fractional digits past `decimals` so the parse below cannot
/// reject a sub-unit remainder.
fn truncate_fraction(rendered: String, decimals: u8) -> String {
    match rendered.split_once('.') {
        Some((whole, _)) if decimals == 0 => whole.to_string(),
        Some((whole, frac)) if frac.len() > decimals as usize => {
            format!("{}.{}", whole, &frac[..decimals as usize])
        }
        _ => rendered,
    }
}
