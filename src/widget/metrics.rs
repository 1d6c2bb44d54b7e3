//! Widget counters for monitoring and debugging.

use serde::Serialize;

/// Counters maintained by the widget engine. Shared behind an
/// `Arc<RwLock<_>>` so the surrounding application can poll them.
#[derive(Debug, Default, Clone, Serialize)]
pub struct WidgetMetrics {
    /// Resolver evaluations performed
    pub evaluations: u64,
    /// States published to the presentation channel
    pub states_published: u64,
    /// Claims handed to the submitter
    pub claims_submitted: u64,
    /// Claims that confirmed
    pub claims_succeeded: u64,
    /// Claims rejected by the wallet or on-chain
    pub claims_failed: u64,
    /// Claims refused locally (state not claimable at submit time)
    pub claims_refused: u64,
    /// Terminal "Minting not available" states with fully resolved inputs;
    /// each one is worth investigating upstream
    pub unavailable_states: u64,
}
