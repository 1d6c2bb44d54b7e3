//! Reactive recomputation loop around the pure resolver.
//!
//! The engine owns the latest input snapshot, re-resolves it on every event
//! and publishes the resulting [`ClaimState`] to the presentation channel.
//! Superseded computations are simply overwritten by the next one
//! (last-write-wins); there is no internal parallelism in the resolve path.

use crate::resolver::types::{ClaimState, DropInputs};
use crate::resolver::{clamp_quantity, resolve, MINTING_NOT_AVAILABLE};
use crate::types::Notification;
use crate::widget::metrics::WidgetMetrics;
use crate::widget::submitter::ClaimSubmitter;
use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::{error, info, warn};

/// Events the widget engine consumes.
#[derive(Debug, Clone)]
pub enum WidgetEvent {
    /// The Input Assembler refetched; replace the whole snapshot
    InputsUpdated(DropInputs),
    /// The user picked a new quantity (clamped before storing)
    SetQuantity(u64),
    /// The user pressed the mint button
    SubmitClaim,
}

/// Channel-driven engine tying the resolver to the presentation layer.
pub struct ClaimWidget {
    event_receiver: mpsc::Receiver<WidgetEvent>,
    state_sender: mpsc::Sender<ClaimState>,
    notification_sender: mpsc::Sender<Notification>,
    submitter: Arc<dyn ClaimSubmitter>,
    inputs: DropInputs,
    metrics: Arc<RwLock<WidgetMetrics>>,
}

impl ClaimWidget {
    pub fn new(
        event_receiver: mpsc::Receiver<WidgetEvent>,
        state_sender: mpsc::Sender<ClaimState>,
        notification_sender: mpsc::Sender<Notification>,
        submitter: Arc<dyn ClaimSubmitter>,
    ) -> Self {
        Self {
            event_receiver,
            state_sender,
            notification_sender,
            submitter,
            inputs: DropInputs::new(),
            metrics: Arc::new(RwLock::new(WidgetMetrics::default())),
        }
    }

    /// Shared metrics handle for the surrounding application.
    pub fn metrics_handle(&self) -> Arc<RwLock<WidgetMetrics>> {
        self.metrics.clone()
    }

    /// Main loop: consume events until the event channel closes, publishing
    /// a fresh state after every one.
    pub async fn run(mut self) {
        info!("ClaimWidget engine is running...");

        // Publish the initial (all-loading) state so the UI has something to
        // render before the first fetch lands.
        self.publish_state().await;

        while let Some(event) = self.event_receiver.recv().await {
            match event {
                WidgetEvent::InputsUpdated(inputs) => {
                    self.inputs = inputs;
                    self.publish_state().await;
                }
                WidgetEvent::SetQuantity(quantity) => {
                    let state = self.resolve_now().await;
                    self.inputs.quantity = clamp_quantity(quantity, state.max_claimable);
                    self.publish_state().await;
                }
                WidgetEvent::SubmitClaim => {
                    self.handle_submit().await;
                }
            }
        }

        info!("ClaimWidget event channel closed. Shutting down.");
    }

    /// Run the pure resolver against the current snapshot.
    async fn resolve_now(&self) -> ClaimState {
        let state = resolve(&self.inputs, Utc::now());
        let mut metrics = self.metrics.write().await;
        metrics.evaluations += 1;
        if state.button_text == MINTING_NOT_AVAILABLE && !state.button_loading {
            // Resolved inputs with no reason and no claim path: upstream
            // data is inconsistent, flag it for investigation.
            warn!("claim state resolved to terminal fallback with no ineligibility reasons");
            metrics.unavailable_states += 1;
        }
        state
    }

    async fn publish_state(&self) {
        let state = self.resolve_now().await;
        if let Err(e) = self.state_sender.send(state).await {
            error!("Failed to publish claim state: {}", e);
            return;
        }
        self.metrics.write().await.states_published += 1;
    }

    /// Hand the claim to the submitter without blocking the event loop; the
    /// outcome arrives on the notification channel.
    async fn handle_submit(&self) {
        let state = self.resolve_now().await;
        if !state.can_claim || state.button_loading {
            warn!(
                "refusing claim submission: can_claim={} button_loading={}",
                state.can_claim, state.button_loading
            );
            self.metrics.write().await.claims_refused += 1;
            return;
        }

        let Some(wallet) = self.inputs.wallet.clone() else {
            warn!("refusing claim submission: no wallet connected");
            self.metrics.write().await.claims_refused += 1;
            return;
        };

        let quantity = state.quantity;
        let submitter = self.submitter.clone();
        let notifications = self.notification_sender.clone();
        let metrics = self.metrics.clone();

        metrics.write().await.claims_submitted += 1;
        info!("submitting claim for {} unit(s) from {}", quantity, wallet);

        tokio::spawn(async move {
            match submitter.submit_claim(&wallet, quantity).await {
                Ok(tx) => {
                    info!("claim confirmed: {}", tx);
                    metrics.write().await.claims_succeeded += 1;
                    if let Err(e) = notifications
                        .send(Notification::MintSucceeded { quantity })
                        .await
                    {
                        error!("Failed to send success notification: {}", e);
                    }
                }
                Err(reason) => {
                    // Surfaced verbatim; this layer never reinterprets it.
                    warn!("claim rejected: {}", reason);
                    metrics.write().await.claims_failed += 1;
                    if let Err(e) = notifications
                        .send(Notification::MintFailed { reason })
                        .await
                    {
                        error!("Failed to send failure notification: {}", e);
                    }
                }
            }
        });
    }
}
