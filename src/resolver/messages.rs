//! Human-readable messages for ineligibility reason codes.
//!
//! Only the first (most relevant) reason is rendered; the upstream
//! eligibility check orders its codes by severity. Messages are never
//! combined with the sold-out or price labels, the button waterfall picks
//! exactly one.

use crate::resolver::types::IneligibilityReason;

/// Map a reason set to the message shown on the mint button.
/// Returns an empty string for an empty set.
pub fn parse_ineligibility(reasons: &[IneligibilityReason], quantity: u64) -> String {
    let Some(reason) = reasons.first() else {
        return String::new();
    };

    match reason {
        IneligibilityReason::Unknown
        | IneligibilityReason::NoActiveClaimPhase
        | IneligibilityReason::NoClaimConditionSet => {
            "This drop is not ready to be minted.".to_string()
        }
        IneligibilityReason::ClaimPhaseNotStarted => {
            "Minting has not started yet. Please check back later.".to_string()
        }
        IneligibilityReason::NotEnoughTokens => {
            "You don't have enough currency to mint.".to_string()
        }
        IneligibilityReason::NotEnoughSupply => {
            "Not enough supply left for that quantity.".to_string()
        }
        IneligibilityReason::AlreadyClaimed => {
            "You have already claimed your allowance.".to_string()
        }
        IneligibilityReason::OverMaxClaimablePerWallet => {
            "That quantity exceeds the per-wallet limit.".to_string()
        }
        IneligibilityReason::NoWallet => "Connect a wallet to mint.".to_string(),
        IneligibilityReason::AddressNotAllowed => {
            if quantity > 1 {
                format!("You are not eligible to mint {} tokens.", quantity)
            } else {
                "You are not eligible to mint at this time.".to_string()
            }
        }
    }
}
