use salvo::prelude::*;
use tokio::sync::oneshot;

use crate::upstream::{UpstreamRequest, UpstreamStatus};

use super::helpers::get_state;

/// GET /health - Health check
#[handler]
pub async fn health(res: &mut Response) {
    res.render(Json(serde_json::json!({
        "status": "healthy",
        "service": "methodscribe"
    })));
}

/// GET /v1/models - List the configured upstream model
#[handler]
pub async fn list_models(depot: &mut Depot, res: &mut Response) -> Result<(), StatusError> {
    let state = get_state(depot)?;

    let (response_tx, response_rx) = oneshot::channel();
    state
        .upstream_tx
        .send(UpstreamRequest::Status { response_tx })
        .await
        .map_err(|_| StatusError::internal_server_error())?;

    let status: UpstreamStatus = response_rx
        .await
        .map_err(|_| StatusError::internal_server_error())?;

    res.render(Json(serde_json::json!({
        "object": "list",
        "data": [{
            "id": status.model,
            "object": "model",
            "created": chrono::Utc::now().timestamp(),
            "owned_by": "groq",
            "type": "vlm"
        }]
    })));
    Ok(())
}
