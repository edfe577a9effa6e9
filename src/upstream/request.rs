use tokio::sync::oneshot;

use crate::error::SectionError;
use crate::types::ContentBlock;

use super::client::SectionCompletion;

/// Request sent to the upstream worker task
pub enum UpstreamRequest {
    /// Draft a "Proposed Method" section from an assembled multimodal message
    Section {
        content: Vec<ContentBlock>,
        response_tx: oneshot::Sender<Result<SectionCompletion, SectionError>>,
    },
    /// Report the configured upstream model
    Status {
        response_tx: oneshot::Sender<UpstreamStatus>,
    },
}

/// Identity of the configured upstream model
#[derive(Clone, serde::Serialize)]
pub struct UpstreamStatus {
    pub model: String,
}
