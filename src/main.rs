//! Demo entry point for the mintgate claim widget.
//!
//! Replays a realistic input sequence against the widget engine: everything
//! loading, then a resolved drop, a quantity change, and a claim submission
//! through a simulated transaction submitter.

use anyhow::Result;
use chrono::{Duration, Utc};
use mintgate::resolver::types::{
    ClaimCondition, ClaimerProof, ContractMetadata, CurrencyMetadata, DropInputs,
};
use mintgate::types::QueryState;
use mintgate::widget::{ClaimWidget, SimulatedSubmitter, WidgetEvent};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Starting mintgate claim widget demo");

    let (event_sender, event_receiver) = mpsc::channel::<WidgetEvent>(64);
    let (state_sender, mut state_receiver) = mpsc::channel(64);
    let (notification_sender, mut notification_receiver) = mpsc::channel(64);

    let submitter = Arc::new(SimulatedSubmitter::new(0.8, 200));
    let widget = ClaimWidget::new(event_receiver, state_sender, notification_sender, submitter);
    let metrics = widget.metrics_handle();

    let widget_handle = tokio::spawn(widget.run());

    // Print every published state as a JSON line, the way a UI would consume it
    let state_printer = tokio::spawn(async move {
        while let Some(state) = state_receiver.recv().await {
            info!("state: {}", serde_json::to_string(&state).unwrap_or_default());
        }
    });

    let notification_printer = tokio::spawn(async move {
        while let Some(notification) = notification_receiver.recv().await {
            info!("notification: {:?}", notification);
        }
    });

    demo_input_sequence(&event_sender).await?;

    // Let in-flight submissions settle
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;

    let snapshot = metrics.read().await.clone();
    info!(
        "demo complete: {} evaluations, {} states published, {} claims submitted",
        snapshot.evaluations, snapshot.states_published, snapshot.claims_submitted
    );

    drop(event_sender);
    widget_handle.abort();
    state_printer.abort();
    notification_printer.abort();

    Ok(())
}

/// Feed the widget the snapshot sequence an Input Assembler would produce.
async fn demo_input_sequence(events: &mpsc::Sender<WidgetEvent>) -> Result<()> {
    // 1. Wallet connected, every fetch still in flight
    let mut inputs = DropInputs::new();
    inputs.wallet = Some("0x1d3adBEEF00aa92F64cabB5a0bbD1CE0dBB11111".to_string());
    events
        .send(WidgetEvent::InputsUpdated(inputs.clone()))
        .await?;

    tokio::time::sleep(std::time::Duration::from_millis(150)).await;

    // 2. Fetches resolved: a live drop priced at 0.05 ETH per unit
    let condition = ClaimCondition {
        start_time: Utc::now() - Duration::hours(2),
        max_claimable_supply: "10000".to_string(),
        max_claimable_per_wallet: "3".to_string(),
        available_supply: "8200".to_string(),
        currency: CurrencyMetadata {
            symbol: "ETH".to_string(),
            decimals: 18,
            price_per_unit: "50000000000000000".to_string(),
        },
    };
    inputs.contract_metadata = QueryState::Ready(ContractMetadata {
        name: "Base Minting Dapp".to_string(),
        description: Some("Demo drop".to_string()),
    });
    inputs.claim_conditions = QueryState::Ready(vec![condition.clone()]);
    inputs.active_condition = QueryState::Ready(condition);
    inputs.claimer_proof = QueryState::Ready(Some(ClaimerProof {
        max_claimable: Some("5".to_string()),
    }));
    inputs.ineligibility = QueryState::Ready(vec![]);
    inputs.claimed_supply = QueryState::Ready("1800".to_string());
    inputs.unclaimed_supply = QueryState::Ready("8200".to_string());
    events
        .send(WidgetEvent::InputsUpdated(inputs.clone()))
        .await?;

    // 3. User bumps the quantity (allowlist override caps it at 5)
    events.send(WidgetEvent::SetQuantity(2)).await?;

    // 4. User presses mint
    events.send(WidgetEvent::SubmitClaim).await?;

    Ok(())
}
