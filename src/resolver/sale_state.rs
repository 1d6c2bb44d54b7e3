//! Sale-state classifier: sold-out, not-ready and starting-soon flags.
//!
//! The three flags are consumed in priority order by the presentation layer:
//! not-ready beats starting-soon, which beats the normal mint UI.

use crate::resolver::bounds::parse_supply;
use crate::resolver::types::{ClaimCondition, DropInputs};
use crate::types::QueryState;
use chrono::{DateTime, Utc};
use tracing::warn;

/// Classification of the drop's sale window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaleState {
    /// Nothing left to mint under the active condition
    pub is_sold_out: bool,
    /// Schedule is empty, or no scheduled condition carries any inventory
    pub drop_not_ready: bool,
    /// Schedule exists but nothing is active yet
    pub drop_starting_soon: bool,
}

/// Derive the sale-state flags from the current input snapshot.
pub fn classify(inputs: &DropInputs, now: DateTime<Utc>) -> SaleState {
    SaleState {
        is_sold_out: is_sold_out(inputs),
        drop_not_ready: drop_not_ready(&inputs.claim_conditions),
        drop_starting_soon: drop_starting_soon(
            &inputs.claim_conditions,
            &inputs.active_condition,
            now,
        ),
    }
}

fn has_zero_supply_cap(condition: &ClaimCondition) -> bool {
    matches!(
        parse_supply(&condition.max_claimable_supply),
        Some(cap) if cap.is_zero()
    )
}

/// The drop exists but was never configured with inventory: the schedule is
/// empty or every scheduled condition has a zero max-claimable-supply.
fn drop_not_ready(schedule: &QueryState<Vec<ClaimCondition>>) -> bool {
    match schedule.ready() {
        Some(conditions) => conditions.is_empty() || conditions.iter().all(has_zero_supply_cap),
        None => false,
    }
}

/// A non-empty schedule exists but the active-condition lookup failed, or the
/// active condition has a start time strictly in the future.
fn drop_starting_soon(
    schedule: &QueryState<Vec<ClaimCondition>>,
    active: &QueryState<ClaimCondition>,
    now: DateTime<Utc>,
) -> bool {
    let schedule_pending = matches!(schedule.ready(), Some(conditions) if !conditions.is_empty())
        && active.is_failed();
    let starts_later = matches!(active.ready(), Some(condition) if condition.start_time > now);
    schedule_pending || starts_later
}

/// Sold out iff the active condition resolved with no available supply, or
/// (for non-open editions) the claimed counter has caught up with the total.
///
/// Parse glitches read as "not sold out": blocking a genuine buyer over a
/// malformed counter would be worse than briefly showing a mintable state.
/// This is deliberately the opposite polarity of the fail-closed `can_claim`.
fn is_sold_out(inputs: &DropInputs) -> bool {
    if let Some(condition) = inputs.active_condition.ready() {
        match parse_supply(&condition.available_supply) {
            Some(available) => {
                if available.is_zero() {
                    return true;
                }
            }
            None => warn!(
                "unparsable available supply {:?}, not treating as sold out",
                condition.available_supply
            ),
        }
    }

    if inputs.open_edition {
        // Claimed-vs-total equality is meaningless without a fixed total.
        return false;
    }

    // The fallback needs both counters resolved; a loading counter must never
    // read as zero here.
    match (
        inputs.claimed_supply.ready().and_then(|raw| parse_supply(raw)),
        inputs.unclaimed_supply.ready().and_then(|raw| parse_supply(raw)),
    ) {
        (Some(claimed), Some(unclaimed)) => match claimed.checked_add(unclaimed) {
            Some(total) => claimed == total,
            None => {
                warn!("supply counters overflow U256, not treating as sold out");
                false
            }
        },
        _ => false,
    }
}
