//! Core types shared across the mintgate claim widget.

use serde::{Deserialize, Serialize};

/// A wallet address (kept as a string to stay chain-agnostic)
pub type Address = String;

/// Snapshot of an externally fetched value.
///
/// The Input Assembler refetches each piece of drop data independently, so
/// every input can be in-flight, resolved, or errored at the moment the
/// resolver runs. In-flight and errored are distinct states: loading drives
/// the loading UI, a failure reads as "unavailable", never as eligible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryState<T> {
    /// Fetch is still in flight
    Loading,
    /// Fetch resolved successfully
    Ready(T),
    /// Fetch errored; carries the upstream error text
    Failed(String),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, QueryState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, QueryState::Failed(_))
    }

    /// The resolved value, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            QueryState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Loading
    }
}

/// User-facing notification emitted after a claim submission settles.
///
/// Failure reasons come verbatim from the transaction submitter; this crate
/// does not parse or reinterpret them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Notification {
    /// The mint transaction confirmed; tokens were transferred to the wallet
    MintSucceeded { quantity: u64 },
    /// The mint was rejected on-chain or by the wallet
    MintFailed { reason: String },
}
