//! Fixed-point price formatting.
//!
//! Prices arrive as integers in the currency's smallest denomination and are
//! multiplied by the selected quantity in U256, so wei-scale values survive
//! without precision loss. No float is ever involved.

use crate::resolver::types::CurrencyMetadata;
use primitive_types::U256;
use tracing::warn;

/// Render a raw amount as a fixed-point decimal string using the currency's
/// decimals: `format_units(7_500_000_000_000_000_000, 18) == "7.5"`.
/// Trailing zeros in the fraction are trimmed, keeping at least one digit.
pub fn format_units(amount: U256, decimals: u8) -> String {
    if decimals == 0 {
        return amount.to_string();
    }
    // 10^77 < 2^256 < 10^78; larger exponents cannot be represented.
    if decimals > 77 {
        warn!("currency decimals {} out of range, formatting raw", decimals);
        return amount.to_string();
    }

    let base = U256::from(10u64).pow(U256::from(decimals));
    let integer = amount / base;
    let remainder = amount % base;

    let mut fraction = remainder.to_string();
    while fraction.len() < decimals as usize {
        fraction.insert(0, '0');
    }
    while fraction.len() > 1 && fraction.ends_with('0') {
        fraction.pop();
    }

    format!("{}.{}", integer, fraction)
}

/// Parse the per-unit price of a condition; an unparsable price reads as
/// zero, matching the fail-soft policy of the bound calculator.
pub fn price_per_unit(currency: &CurrencyMetadata) -> U256 {
    let trimmed = currency.price_per_unit.trim();
    if trimmed.is_empty() {
        return U256::zero();
    }
    match U256::from_dec_str(trimmed) {
        Ok(value) => value,
        Err(_) => {
            warn!(
                "unparsable price per unit {:?}, treating as zero",
                currency.price_per_unit
            );
            U256::zero()
        }
    }
}

/// Total price string for the selected quantity, e.g. "7.5 ETH".
pub fn price_to_mint(currency: &CurrencyMetadata, quantity: u64) -> String {
    let unit = price_per_unit(currency);
    let total = match unit.checked_mul(U256::from(quantity)) {
        Some(total) => total,
        None => {
            // 256-bit overflow is unreachable for sane drops; degrade to the
            // per-unit price rather than panicking.
            warn!("price multiplication overflowed U256, showing unit price");
            unit
        }
    };
    format!("{} {}", format_units(total, currency.decimals), currency.symbol)
}
