//! Claim submission seam.
//!
//! The widget never signs or sends transactions itself; it hands the
//! (wallet, quantity) pair to a [`ClaimSubmitter`] and forwards the outcome
//! verbatim. The simulated implementation stands in for a real wallet +
//! contract pipeline in demos and tests.

use crate::types::Address;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tracing::info;

/// External collaborator that submits the mint transaction.
#[async_trait]
pub trait ClaimSubmitter: Send + Sync {
    /// Submit a claim for `quantity` units. `Ok` carries an opaque
    /// transaction reference; `Err` carries the collaborator-supplied reason
    /// string, which the widget surfaces without reinterpretation.
    async fn submit_claim(&self, wallet: &Address, quantity: u64) -> Result<String, String>;
}

/// Rand-driven submitter used by the demo binary and integration tests.
pub struct SimulatedSubmitter {
    /// Probability in [0, 1] that a submission confirms
    pub success_rate: f64,
    /// Simulated confirmation latency
    pub latency: Duration,
}

impl SimulatedSubmitter {
    pub fn new(success_rate: f64, latency_ms: u64) -> Self {
        Self {
            success_rate,
            latency: Duration::from_millis(latency_ms),
        }
    }

    /// A submitter that always confirms, for deterministic tests.
    pub fn always_succeeds() -> Self {
        Self::new(1.0, 0)
    }

    /// A submitter that always rejects with a fixed wallet-style reason.
    pub fn always_fails() -> Self {
        Self::new(0.0, 0)
    }
}

#[async_trait]
impl ClaimSubmitter for SimulatedSubmitter {
    async fn submit_claim(&self, wallet: &Address, quantity: u64) -> Result<String, String> {
        tokio::time::sleep(self.latency).await;

        let roll = rand::thread_rng().gen_range(0.0..1.0f64);
        if roll < self.success_rate {
            let tx = format!("0xsim{}{}", quantity, chrono::Utc::now().timestamp_millis());
            info!("simulated claim confirmed for {}: {}", wallet, tx);
            Ok(tx)
        } else {
            Err("execution reverted: !Qty".to_string())
        }
    }
}
