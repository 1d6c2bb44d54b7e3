//! mintgate - client-side decision logic for an NFT claim widget.
//!
//! Given on-chain drop configuration (claim conditions, supply counters,
//! per-wallet allowances, allowlist proofs) this crate derives a single
//! coherent UI state: how many tokens a wallet may mint, at what price,
//! whether minting is currently possible, and what message to show when it
//! is not.

pub mod resolver;
pub mod types;
pub mod widget;

// Re-export main types for convenience
pub use resolver::{resolve, ClaimState, DropInputs};
pub use types::{Address, Notification, QueryState};
pub use widget::{ClaimWidget, WidgetEvent};
