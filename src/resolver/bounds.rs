//! Quantity-bound calculator.
//!
//! Computes the maximum number of units a wallet may mint right now from the
//! active condition's caps, the allowlist override and the remaining supply.
//! Malformed inputs degrade to the sentinel ceiling instead of propagating a
//! failure; this path never errors.

use crate::resolver::types::{ClaimCondition, ClaimerProof, ProofCap};
use crate::types::QueryState;
use primitive_types::U256;
use tracing::warn;

/// Sentinel ceiling standing in for "effectively unlimited". The UI never
/// needs to distinguish huge from unlimited, so anything at or above this
/// collapses to it.
pub const CLAIM_CEILING: u64 = 1_000_000;

fn ceiling() -> U256 {
    U256::from(CLAIM_CEILING)
}

/// Parse a cap field, substituting the ceiling when the value is missing or
/// malformed. Whitespace-only counts as missing.
fn parse_cap(raw: &str, field: &str) -> U256 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ceiling();
    }
    match U256::from_dec_str(trimmed) {
        Ok(value) => value,
        Err(_) => {
            warn!("unparsable {} {:?}, treating as unlimited", field, raw);
            ceiling()
        }
    }
}

/// Parse a supply counter. `from_dec_str` accepts the empty string as zero,
/// so emptiness is checked explicitly and reads as "value not present".
pub(crate) fn parse_supply(raw: &str) -> Option<U256> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    U256::from_dec_str(trimmed).ok()
}

/// Maximum units the wallet may mint right now.
///
/// The bound starts at min(supply cap, per-wallet cap), an allowlist proof
/// overrides it ("0" meaning unlimited), and unless the drop is an open
/// edition it is clamped to the remaining unclaimed supply. The result is
/// capped at [`CLAIM_CEILING`] so it always fits a plain integer.
pub fn max_claimable(
    active_condition: &QueryState<ClaimCondition>,
    claimer_proof: &QueryState<Option<ClaimerProof>>,
    unclaimed_supply: &QueryState<String>,
    open_edition: bool,
) -> u64 {
    let mut bound = match active_condition.ready() {
        Some(condition) => {
            let supply_cap = parse_cap(&condition.max_claimable_supply, "max claimable supply");
            let wallet_cap = parse_cap(&condition.max_claimable_per_wallet, "per-wallet cap");
            supply_cap.min(wallet_cap)
        }
        // No resolved condition yet: fall back to the conservative sentinel,
        // the eligibility gate keeps the button disabled anyway.
        None => ceiling(),
    };

    if let Some(Some(proof)) = claimer_proof.ready() {
        match proof.cap() {
            Some(ProofCap::Unlimited) => bound = ceiling(),
            Some(ProofCap::Exactly(value)) => bound = value,
            // Unparsable override: keep the cap-derived bound.
            None => {
                if proof.max_claimable.is_some() {
                    warn!("ignoring unparsable claimer-proof override");
                }
            }
        }
    }

    if !open_edition {
        // A loading or failed counter must not clamp the bound to zero.
        if let Some(raw) = unclaimed_supply.ready() {
            match parse_supply(raw) {
                Some(remaining) if remaining < bound => bound = remaining,
                Some(_) => {}
                None => warn!("unparsable unclaimed supply {:?}, skipping clamp", raw),
            }
        }
    }

    if bound >= ceiling() {
        CLAIM_CEILING
    } else {
        bound.as_u64()
    }
}

/// Clamp a user-chosen quantity into `[1, max(1, max_claimable)]`.
/// The widget never displays a quantity below one, even while the bound is
/// zero (the sold-out path owns that UI).
pub fn clamp_quantity(quantity: u64, max_claimable: u64) -> u64 {
    quantity.clamp(1, max_claimable.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::types::CurrencyMetadata;
    use chrono::Utc;

    fn condition(supply_cap: &str, wallet_cap: &str) -> ClaimCondition {
        ClaimCondition {
            start_time: Utc::now(),
            max_claimable_supply: supply_cap.to_string(),
            max_claimable_per_wallet: wallet_cap.to_string(),
            available_supply: "100".to_string(),
            currency: CurrencyMetadata {
                symbol: "ETH".to_string(),
                decimals: 18,
                price_per_unit: "0".to_string(),
            },
        }
    }

    fn no_proof() -> QueryState<Option<ClaimerProof>> {
        QueryState::Ready(None)
    }

    fn proof(value: &str) -> QueryState<Option<ClaimerProof>> {
        QueryState::Ready(Some(ClaimerProof {
            max_claimable: Some(value.to_string()),
        }))
    }

    #[test]
    fn unclaimed_supply_clamps_the_cap_bound() {
        // supply cap 100, per-wallet 5, only 3 unclaimed
        let max = max_claimable(
            &QueryState::Ready(condition("100", "5")),
            &no_proof(),
            &QueryState::Ready("3".to_string()),
            false,
        );
        assert_eq!(max, 3);
    }

    #[test]
    fn per_wallet_cap_wins_when_smaller() {
        let max = max_claimable(
            &QueryState::Ready(condition("100", "5")),
            &no_proof(),
            &QueryState::Ready("50".to_string()),
            false,
        );
        assert_eq!(max, 5);
    }

    #[test]
    fn open_edition_skips_the_unclaimed_clamp() {
        let max = max_claimable(
            &QueryState::Ready(condition("100", "5")),
            &no_proof(),
            &QueryState::Ready("3".to_string()),
            true,
        );
        assert_eq!(max, 5);
    }

    #[test]
    fn proof_zero_grants_the_ceiling() {
        let max = max_claimable(
            &QueryState::Ready(condition("100", "2")),
            &proof("0"),
            &QueryState::Ready("5000000".to_string()),
            false,
        );
        assert_eq!(max, CLAIM_CEILING);
    }

    #[test]
    fn proof_override_beats_the_per_wallet_cap() {
        // per-wallet cap 2, override 5
        let max = max_claimable(
            &QueryState::Ready(condition("100", "2")),
            &proof("5"),
            &QueryState::Ready("50".to_string()),
            false,
        );
        assert_eq!(max, 5);
    }

    #[test]
    fn proof_override_is_still_clamped_by_unclaimed_supply() {
        let max = max_claimable(
            &QueryState::Ready(condition("100", "2")),
            &proof("5"),
            &QueryState::Ready("3".to_string()),
            false,
        );
        assert_eq!(max, 3);
    }

    #[test]
    fn unparsable_proof_is_ignored() {
        let max = max_claimable(
            &QueryState::Ready(condition("100", "2")),
            &proof("abc"),
            &QueryState::Ready("50".to_string()),
            false,
        );
        assert_eq!(max, 2);
    }

    #[test]
    fn malformed_caps_degrade_to_the_ceiling() {
        let max = max_claimable(
            &QueryState::Ready(condition("not-a-number", "")),
            &no_proof(),
            &QueryState::Ready("5000000".to_string()),
            false,
        );
        assert_eq!(max, CLAIM_CEILING);
    }

    #[test]
    fn wei_scale_caps_collapse_to_the_ceiling() {
        let max = max_claimable(
            &QueryState::Ready(condition(
                "115792089237316195423570985008687907853269984665640564039457",
                "115792089237316195423570985008687907853269984665640564039457",
            )),
            &no_proof(),
            &QueryState::Loading,
            false,
        );
        assert_eq!(max, CLAIM_CEILING);
    }

    #[test]
    fn loading_unclaimed_counter_does_not_clamp_to_zero() {
        let max = max_claimable(
            &QueryState::Ready(condition("100", "5")),
            &no_proof(),
            &QueryState::Loading,
            false,
        );
        assert_eq!(max, 5);
    }

    #[test]
    fn result_is_never_above_the_ceiling() {
        for (supply, wallet, unclaimed) in [
            ("0", "0", "0"),
            ("1", "9999999999999999", "42"),
            ("", "", ""),
        ] {
            let max = max_claimable(
                &QueryState::Ready(condition(supply, wallet)),
                &no_proof(),
                &QueryState::Ready(unclaimed.to_string()),
                false,
            );
            assert!(max <= CLAIM_CEILING);
        }
    }

    #[test]
    fn quantity_clamps_into_range() {
        assert_eq!(clamp_quantity(0, 5), 1);
        assert_eq!(clamp_quantity(3, 5), 3);
        assert_eq!(clamp_quantity(9, 5), 5);
        // Zero bound still displays one; the button is disabled elsewhere.
        assert_eq!(clamp_quantity(4, 0), 1);
    }
}
