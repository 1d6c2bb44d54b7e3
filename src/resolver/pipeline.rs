//! The claim-eligibility resolver: a pure projection from the assembled
//! input snapshot to the UI-facing [`ClaimState`].
//!
//! `resolve` holds no state between calls and performs no I/O; the widget
//! engine re-invokes it whenever any watched input changes. Identical inputs
//! always produce an identical state.

use crate::resolver::bounds::{clamp_quantity, max_claimable};
use crate::resolver::messages::parse_ineligibility;
use crate::resolver::price;
use crate::resolver::sale_state::{classify, SaleState};
use crate::resolver::types::{ClaimState, DropInputs};
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

/// Label shown while the eligibility check is still in flight.
pub const CHECKING_ELIGIBILITY: &str = "Checking eligibility...";
/// Terminal fallback label; reaching it with resolved, reason-free inputs is
/// an anomaly the engine logs.
pub const MINTING_NOT_AVAILABLE: &str = "Minting not available";
/// Sold-out label.
pub const SOLD_OUT: &str = "Sold Out";

/// Derive the full UI state for the current snapshot.
#[instrument(skip(inputs, now), fields(quantity = inputs.quantity))]
pub fn resolve(inputs: &DropInputs, now: DateTime<Utc>) -> ClaimState {
    let sale = classify(inputs, now);

    let max = max_claimable(
        &inputs.active_condition,
        &inputs.claimer_proof,
        &inputs.unclaimed_supply,
        inputs.open_edition,
    );
    let quantity = clamp_quantity(inputs.quantity, max);

    // Fail-closed: any loading or errored gate keeps the button unclaimable.
    let can_claim = inputs.active_condition.is_ready()
        && inputs.ineligibility.is_ready()
        && inputs
            .ineligibility
            .ready()
            .map(|reasons| reasons.is_empty())
            .unwrap_or(false)
        && !sale.is_sold_out;

    let is_loading = inputs.active_condition.is_loading()
        || inputs.unclaimed_supply.is_loading()
        || inputs.claimed_supply.is_loading()
        || inputs.contract_metadata.is_loading();
    let button_loading = is_loading || inputs.ineligibility.is_loading();

    let price_to_mint = inputs
        .active_condition
        .ready()
        .map(|condition| price::price_to_mint(&condition.currency, quantity))
        .unwrap_or_default();

    let button_text = button_text(inputs, &sale, can_claim, button_loading, &price_to_mint);

    debug!(
        max_claimable = max,
        can_claim, button_loading, "resolved claim state"
    );

    ClaimState {
        quantity,
        max_claimable: max,
        is_sold_out: sale.is_sold_out,
        can_claim,
        is_loading,
        button_loading,
        button_text,
        price_to_mint,
        drop_not_ready: sale.drop_not_ready,
        drop_starting_soon: sale.drop_starting_soon,
    }
}

/// The button label waterfall. Strict priority order: each case is reached
/// only when all earlier ones are false, and exactly one message is shown.
fn button_text(
    inputs: &DropInputs,
    sale: &SaleState,
    can_claim: bool,
    button_loading: bool,
    formatted_price: &str,
) -> String {
    if sale.is_sold_out {
        return SOLD_OUT.to_string();
    }

    if can_claim {
        let free = inputs
            .active_condition
            .ready()
            .map(|condition| price::price_per_unit(&condition.currency).is_zero())
            .unwrap_or(true);
        if free {
            return "Mint (Free)".to_string();
        }
        return format!("Mint ({})", formatted_price);
    }

    if let Some(reasons) = inputs.ineligibility.ready() {
        if !reasons.is_empty() {
            return parse_ineligibility(reasons, inputs.quantity);
        }
    }

    if button_loading {
        return CHECKING_ELIGIBILITY.to_string();
    }

    MINTING_NOT_AVAILABLE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::types::{ClaimCondition, CurrencyMetadata, IneligibilityReason};
    use crate::types::QueryState;
    use chrono::Duration;

    fn eth(price: &str) -> CurrencyMetadata {
        CurrencyMetadata {
            symbol: "ETH".to_string(),
            decimals: 18,
            price_per_unit: price.to_string(),
        }
    }

    fn live_condition(price: &str) -> ClaimCondition {
        ClaimCondition {
            start_time: Utc::now() - Duration::hours(1),
            max_claimable_supply: "100".to_string(),
            max_claimable_per_wallet: "5".to_string(),
            available_supply: "90".to_string(),
            currency: eth(price),
        }
    }

    fn resolved_inputs(price: &str) -> DropInputs {
        let condition = live_condition(price);
        DropInputs {
            wallet: Some("0xabc".to_string()),
            quantity: 1,
            contract_metadata: QueryState::Ready(Default::default()),
            claim_conditions: QueryState::Ready(vec![condition.clone()]),
            active_condition: QueryState::Ready(condition),
            claimer_proof: QueryState::Ready(None),
            ineligibility: QueryState::Ready(vec![]),
            claimed_supply: QueryState::Ready("10".to_string()),
            unclaimed_supply: QueryState::Ready("90".to_string()),
            open_edition: false,
        }
    }

    #[test]
    fn free_mint_shows_free_label() {
        let state = resolve(&resolved_inputs("0"), Utc::now());
        assert!(state.can_claim);
        assert_eq!(state.button_text, "Mint (Free)");
    }

    #[test]
    fn priced_mint_shows_the_formatted_total() {
        let mut inputs = resolved_inputs("2500000000000000000");
        inputs.quantity = 3;
        let state = resolve(&inputs, Utc::now());
        assert_eq!(state.price_to_mint, "7.5 ETH");
        assert_eq!(state.button_text, "Mint (7.5 ETH)");
    }

    #[test]
    fn sold_out_beats_everything() {
        let mut inputs = resolved_inputs("0");
        if let QueryState::Ready(condition) = &mut inputs.active_condition {
            condition.available_supply = "0".to_string();
        }
        let state = resolve(&inputs, Utc::now());
        assert!(state.is_sold_out);
        assert!(!state.can_claim);
        assert_eq!(state.button_text, SOLD_OUT);
    }

    #[test]
    fn ineligibility_reasons_render_their_message() {
        let mut inputs = resolved_inputs("0");
        inputs.ineligibility =
            QueryState::Ready(vec![IneligibilityReason::AddressNotAllowed]);
        let state = resolve(&inputs, Utc::now());
        assert!(!state.can_claim);
        assert_eq!(state.button_text, "You are not eligible to mint at this time.");
    }

    #[test]
    fn in_flight_eligibility_shows_the_checking_label() {
        let mut inputs = resolved_inputs("0");
        inputs.ineligibility = QueryState::Loading;
        let state = resolve(&inputs, Utc::now());
        assert!(!state.can_claim);
        assert!(state.button_loading);
        assert_eq!(state.button_text, CHECKING_ELIGIBILITY);
    }

    #[test]
    fn failed_eligibility_is_the_terminal_fallback_not_loading() {
        let mut inputs = resolved_inputs("0");
        inputs.ineligibility = QueryState::Failed("eligibility endpoint down".to_string());
        let state = resolve(&inputs, Utc::now());
        assert!(!state.can_claim);
        assert!(!state.button_loading);
        assert_eq!(state.button_text, MINTING_NOT_AVAILABLE);
    }

    #[test]
    fn failed_active_condition_with_schedule_reads_as_starting_soon() {
        let mut inputs = resolved_inputs("0");
        inputs.active_condition = QueryState::Failed("wallet not in any phase".to_string());
        let state = resolve(&inputs, Utc::now());
        assert!(state.drop_starting_soon);
        assert!(!state.can_claim);
    }

    #[test]
    fn empty_schedule_reads_as_not_ready() {
        let mut inputs = resolved_inputs("0");
        inputs.claim_conditions = QueryState::Ready(vec![]);
        let state = resolve(&inputs, Utc::now());
        assert!(state.drop_not_ready);
    }

    #[test]
    fn quantity_is_clamped_to_the_bound() {
        let mut inputs = resolved_inputs("0");
        inputs.quantity = 50; // per-wallet cap is 5
        let state = resolve(&inputs, Utc::now());
        assert_eq!(state.max_claimable, 5);
        assert_eq!(state.quantity, 5);
    }

    #[test]
    fn resolve_is_idempotent() {
        let inputs = resolved_inputs("2500000000000000000");
        let now = Utc::now();
        assert_eq!(resolve(&inputs, now), resolve(&inputs, now));
    }

    #[test]
    fn loading_core_data_forces_loading_flags_and_no_claim() {
        let mut inputs = resolved_inputs("0");
        inputs.active_condition = QueryState::Loading;
        let state = resolve(&inputs, Utc::now());
        assert!(state.is_loading);
        assert!(state.button_loading);
        assert!(!state.can_claim);
    }
}
