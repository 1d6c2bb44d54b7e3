//! Claim-eligibility resolver - the decision core of the mint widget.
//!
//! A stateless derivation pipeline: raw, partially-unreliable drop data in,
//! a single coherent UI state out. Each submodule owns one concern so the
//! edge cases (open editions, allowlists, sold-out, not-yet-started) stay
//! testable in isolation.

pub mod bounds;
pub mod messages;
pub mod pipeline;
pub mod price;
pub mod sale_state;
pub mod types;

// Re-export the main entry points
pub use bounds::{clamp_quantity, max_claimable, CLAIM_CEILING};
pub use messages::parse_ineligibility;
pub use pipeline::{resolve, CHECKING_ELIGIBILITY, MINTING_NOT_AVAILABLE, SOLD_OUT};
pub use price::{format_units, price_to_mint};
pub use sale_state::{classify, SaleState};
pub use types::{
    ClaimCondition, ClaimState, ClaimerProof, ContractMetadata, CurrencyMetadata, DropInputs,
    IneligibilityReason, ProofCap,
};
