//! Worker task that owns the hosted-API client.
//!
//! Handlers never touch the network directly; they queue requests here. A
//! single consumer drains the channel, so at most one drafting call is in
//! flight at a time. A handler that stops waiting drops its reply slot and
//! the send below goes nowhere.

use tokio::sync::mpsc;

use super::client::GroqClient;
use super::request::{UpstreamRequest, UpstreamStatus};

pub async fn upstream_task(client: GroqClient, mut rx: mpsc::Receiver<UpstreamRequest>) {
    while let Some(request) = rx.recv().await {
        match request {
            UpstreamRequest::Section {
                content,
                response_tx,
            } => {
                let result = client.complete_section(content).await;
                if let Err(ref e) = result {
                    tracing::error!("Drafting call failed: {}", e);
                }
                let _ = response_tx.send(result);
            }
            UpstreamRequest::Status { response_tx } => {
                let _ = response_tx.send(UpstreamStatus {
                    model: client.model().to_string(),
                });
            }
        }
    }
    tracing::info!("Upstream channel closed, worker exiting");
}
