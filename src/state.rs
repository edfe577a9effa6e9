use tokio::sync::mpsc;

use crate::upstream::UpstreamRequest;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Channel to the upstream worker task
    pub upstream_tx: mpsc::Sender<UpstreamRequest>,
}
