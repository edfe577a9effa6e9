use std::time::Duration;

use salvo::prelude::*;

use crate::error::{render_error, SectionError};
use crate::normalize::{self, EncodedImage};
use crate::prompt;
use crate::types::{SectionRequest, SectionResponse};
use crate::upstream::UpstreamRequest;

use super::helpers::{get_state, send_and_wait};

/// Outer bound on one drafting request, on top of the HTTP client timeout
const SECTION_TIMEOUT: Duration = Duration::from_secs(180);
/// Body cap for uploads; generous because diagrams shrink during normalization
const MAX_BODY_SIZE: usize = 32 * 1024 * 1024;

/// POST /v1/sections/method - draft a "Proposed Method" section
#[handler]
pub async fn section_completions(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = get_state(depot)?;

    let request: SectionRequest = match req.parse_json_with_max_size(MAX_BODY_SIZE).await {
        Ok(request) => request,
        Err(e) => {
            tracing::error!("Failed to parse section request: {}", e);
            render_error(
                res,
                &SectionError::InvalidRequest(format!("invalid request body: {e}")),
            );
            return Ok(());
        }
    };

    if let Err(e) = validate(&request) {
        render_error(res, &e);
        return Ok(());
    }

    let images = match normalize_uploads(&request).await {
        Ok(images) => images,
        Err(e) => {
            render_error(res, &e);
            return Ok(());
        }
    };

    tracing::info!(
        "Drafting section: {} chars of domain text, {} diagram(s)",
        request.domain.len(),
        images.len()
    );

    let content = prompt::build_content(&request.domain, &images);

    let completion = match send_and_wait(
        &state.upstream_tx,
        |tx| UpstreamRequest::Section {
            content,
            response_tx: tx,
        },
        SECTION_TIMEOUT,
    )
    .await
    {
        Ok(completion) => completion,
        Err(e) => {
            render_error(res, &e);
            return Ok(());
        }
    };

    res.render(Json(SectionResponse {
        id: format!("sec-{}", uuid::Uuid::new_v4()),
        object: "paper.section".to_string(),
        created: chrono::Utc::now().timestamp(),
        model: completion.model,
        content: completion.content,
        images: images.len(),
        usage: completion.usage,
    }));
    Ok(())
}

/// Reject before any decoding or upstream traffic happens.
fn validate(request: &SectionRequest) -> Result<(), SectionError> {
    if request.images.is_empty() {
        return Err(SectionError::InvalidRequest(
            "at least one architecture diagram is required".to_string(),
        ));
    }
    for upload in &request.images {
        if let Some(name) = upload.filename.as_deref() {
            if !normalize::is_supported_filename(name) {
                return Err(SectionError::InvalidRequest(format!(
                    "unsupported file type: {name} (expected .jpg, .jpeg or .png)"
                )));
            }
        }
    }
    Ok(())
}

async fn normalize_uploads(request: &SectionRequest) -> Result<Vec<EncodedImage>, SectionError> {
    let payloads = request
        .images
        .iter()
        .map(|upload| normalize::decode_upload(&upload.data))
        .collect::<Result<Vec<_>, _>>()?;

    // Decode, resize and re-encode are CPU-bound; run them off the async workers
    tokio::task::spawn_blocking(move || {
        payloads
            .iter()
            .map(|bytes| normalize::encode_image(bytes))
            .collect()
    })
    .await
    .map_err(|e| SectionError::Internal(format!("normalization task failed: {e}")))?
}
