use std::time::Duration;

use salvo::prelude::*;
use tokio::sync::{mpsc, oneshot};
use tokio::time::timeout;

use crate::error::SectionError;
use crate::state::AppState;
use crate::upstream::UpstreamRequest;

pub(crate) fn get_state(depot: &mut Depot) -> Result<&AppState, StatusError> {
    depot
        .obtain::<AppState>()
        .map_err(|_| StatusError::internal_server_error())
}

/// Queue a request for the upstream worker and await its reply.
///
/// `make_request` receives a oneshot sender and returns the UpstreamRequest
/// variant. The outer timeout bounds the whole wait; on expiry the receiver
/// is dropped and the worker's eventual reply is discarded.
pub(crate) async fn send_and_wait<T>(
    tx: &mpsc::Sender<UpstreamRequest>,
    make_request: impl FnOnce(oneshot::Sender<Result<T, SectionError>>) -> UpstreamRequest,
    timeout_duration: Duration,
) -> Result<T, SectionError> {
    let (response_tx, response_rx) = oneshot::channel();
    tx.send(make_request(response_tx))
        .await
        .map_err(|_| SectionError::Internal("upstream worker is gone".to_string()))?;

    match timeout(timeout_duration, response_rx).await {
        Err(_) => Err(SectionError::Timeout),
        Ok(Err(_)) => Err(SectionError::Internal(
            "upstream worker dropped the request".to_string(),
        )),
        Ok(Ok(result)) => result,
    }
}
