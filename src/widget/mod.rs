//! Widget module - the reactive shell around the pure resolver.
//!
//! Consumes events (input refetches, quantity changes, mint intents),
//! republishes the derived claim state, and delegates transaction submission
//! to an external collaborator.

pub mod engine;
pub mod metrics;
pub mod submitter;

// Re-export key components
pub use engine::{ClaimWidget, WidgetEvent};
pub use metrics::WidgetMetrics;
pub use submitter::{ClaimSubmitter, SimulatedSubmitter};
