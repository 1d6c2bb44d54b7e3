//! Domain types for the claim-eligibility resolver.
//!
//! Every supply/price quantity arrives from the chain as a decimal string and
//! is parsed into a `U256` at the point of use, never into a float. Fields
//! that may exceed a `u64` stay as raw strings on the input side so a
//! malformed value can degrade locally instead of failing the whole snapshot.

use crate::types::{Address, QueryState};
use chrono::{DateTime, Utc};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Currency a claim condition charges in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyMetadata {
    /// Display symbol, e.g. "ETH"
    pub symbol: String,
    /// Fixed-point decimals of the currency (18 for ETH-like)
    pub decimals: u8,
    /// Price per unit in the currency's smallest denomination, decimal string
    pub price_per_unit: String,
}

/// A time-boxed drop-sale configuration a wallet mints against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimCondition {
    /// When this condition becomes active
    pub start_time: DateTime<Utc>,
    /// Total supply claimable under this condition, decimal string.
    /// Empty or unparsable reads as effectively unlimited.
    pub max_claimable_supply: String,
    /// Per-wallet cap, decimal string, same fallback as the supply cap
    pub max_claimable_per_wallet: String,
    /// Supply still available under this condition, decimal string
    pub available_supply: String,
    /// Currency, price and formatting metadata
    pub currency: CurrencyMetadata,
}

/// Allowlist entry granting a wallet-specific override to the per-wallet cap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimerProof {
    /// Raw override value. Absent means no override. The string "0" is a
    /// reserved sentinel meaning unlimited, not literally zero.
    pub max_claimable: Option<String>,
}

/// Parsed form of a claimer-proof override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofCap {
    /// The "0" sentinel: the snapshot allows unlimited claims for this wallet
    Unlimited,
    /// A concrete per-wallet allowance
    Exactly(U256),
}

impl ClaimerProof {
    /// Parse the override, keeping the sentinel encodings explicit.
    /// Returns `None` both when there is no override and when the override
    /// value is unparsable (an unparsable override is ignored).
    pub fn cap(&self) -> Option<ProofCap> {
        let raw = self.max_claimable.as_deref()?;
        if raw == "0" {
            return Some(ProofCap::Unlimited);
        }
        U256::from_dec_str(raw).ok().map(ProofCap::Exactly)
    }
}

/// Structured code explaining why a wallet currently cannot mint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IneligibilityReason {
    /// The drop has no claim conditions configured at all
    NoClaimConditionSet,
    /// No condition is currently active for this wallet
    NoActiveClaimPhase,
    /// The active condition has a start time in the future
    ClaimPhaseNotStarted,
    /// Requested quantity exceeds the remaining supply
    NotEnoughSupply,
    /// Wallet is not on the allowlist for this condition
    AddressNotAllowed,
    /// Wallet cannot cover the mint price
    NotEnoughTokens,
    /// Wallet already claimed its allowance
    AlreadyClaimed,
    /// Requested quantity exceeds the per-wallet cap
    OverMaxClaimablePerWallet,
    /// No wallet is connected
    NoWallet,
    /// Upstream eligibility check returned an unrecognized code
    Unknown,
}

impl IneligibilityReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            IneligibilityReason::NoClaimConditionSet => "no_claim_condition_set",
            IneligibilityReason::NoActiveClaimPhase => "no_active_claim_phase",
            IneligibilityReason::ClaimPhaseNotStarted => "claim_phase_not_started",
            IneligibilityReason::NotEnoughSupply => "not_enough_supply",
            IneligibilityReason::AddressNotAllowed => "address_not_allowed",
            IneligibilityReason::NotEnoughTokens => "not_enough_tokens",
            IneligibilityReason::AlreadyClaimed => "already_claimed",
            IneligibilityReason::OverMaxClaimablePerWallet => "over_max_claimable_per_wallet",
            IneligibilityReason::NoWallet => "no_wallet",
            IneligibilityReason::Unknown => "unknown",
        }
    }
}

/// Contract-level metadata the widget displays while minting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractMetadata {
    pub name: String,
    pub description: Option<String>,
}

/// The assembled input snapshot the resolver reads.
///
/// Owned and replaced wholesale by the Input Assembler on each refetch; the
/// resolver only ever reads it. Every fetched field is independently
/// loading/ready/failed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DropInputs {
    /// Connected wallet, if any
    pub wallet: Option<Address>,
    /// Quantity currently selected in the UI (clamped by the engine)
    pub quantity: u64,
    /// Contract metadata (name/description); also gates the loading flag
    pub contract_metadata: QueryState<ContractMetadata>,
    /// Full condition schedule, used for readiness/timing checks only
    pub claim_conditions: QueryState<Vec<ClaimCondition>>,
    /// The condition currently active for the connected wallet. Failed when
    /// the wallet is excluded or no condition has started.
    pub active_condition: QueryState<ClaimCondition>,
    /// Allowlist proof for the connected wallet (`None` = not allowlisted)
    pub claimer_proof: QueryState<Option<ClaimerProof>>,
    /// Ineligibility codes for the current (wallet, quantity) pair;
    /// an empty set means eligible
    pub ineligibility: QueryState<Vec<IneligibilityReason>>,
    /// Total tokens already claimed, decimal string
    pub claimed_supply: QueryState<String>,
    /// Total tokens still unclaimed, decimal string
    pub unclaimed_supply: QueryState<String>,
    /// True when the contract is an open edition (shared metadata, no fixed
    /// total-supply concept)
    pub open_edition: bool,
}

impl DropInputs {
    pub fn new() -> Self {
        Self {
            quantity: 1,
            ..Default::default()
        }
    }
}

/// The UI-facing state object the resolver produces.
///
/// A plain value: re-resolving identical inputs yields an identical state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimState {
    /// Selected quantity after clamping
    pub quantity: u64,
    /// Maximum units the wallet may mint right now
    pub max_claimable: u64,
    /// Nothing left to mint under the active condition
    pub is_sold_out: bool,
    /// All gates passed; the mint button may be enabled
    pub can_claim: bool,
    /// Core drop data still in flight
    pub is_loading: bool,
    /// Button shows a spinner (core data or eligibility check in flight)
    pub button_loading: bool,
    /// The single source of truth for the button label
    pub button_text: String,
    /// Total price for the selected quantity, e.g. "7.5 ETH"
    pub price_to_mint: String,
    /// Drop exists but was never configured with inventory
    pub drop_not_ready: bool,
    /// Schedule exists but nothing is active yet
    pub drop_starting_soon: bool,
}
