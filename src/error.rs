use salvo::http::StatusCode;
use salvo::prelude::*;
use serde::Serialize;

/// OpenAI-compatible error response envelope
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorDetail {
    pub message: String,
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Failures of the section-drafting pipeline.
///
/// Every variant maps to exactly one HTTP status and one `type` string in
/// the error envelope, so callers branch on the response status instead of
/// scanning the payload for a marker substring.
#[derive(Debug, thiserror::Error)]
pub enum SectionError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("could not decode image: {0}")]
    ImageDecode(String),
    #[error("encoded image is {size} bytes, above the {limit} byte transport limit")]
    ImageTooLarge { size: usize, limit: usize },
    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("failed to reach upstream: {0}")]
    Transport(String),
    #[error("drafting request timed out")]
    Timeout,
    #[error("upstream returned no completion text")]
    EmptyCompletion,
    #[error("internal error: {0}")]
    Internal(String),
}

impl SectionError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::ImageDecode(_) => StatusCode::BAD_REQUEST,
            Self::ImageTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream { .. } | Self::Transport(_) | Self::EmptyCompletion => {
                StatusCode::BAD_GATEWAY
            }
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) | Self::ImageDecode(_) | Self::ImageTooLarge { .. } => {
                "invalid_request_error"
            }
            Self::Upstream { .. } | Self::Transport(_) | Self::EmptyCompletion => "upstream_error",
            Self::Timeout => "timeout_error",
            Self::Internal(_) => "internal_error",
        }
    }

    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::ImageDecode(_) => Some("image_decode"),
            Self::ImageTooLarge { .. } => Some("image_too_large"),
            Self::Transport(_) => Some("connection_failed"),
            Self::EmptyCompletion => Some("empty_completion"),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SectionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Render a standardized error response with proper HTTP status code
pub fn render_error(res: &mut Response, err: &SectionError) {
    res.status_code(err.status());
    res.render(Json(ApiError {
        error: ApiErrorDetail {
            message: err.to_string(),
            r#type: err.error_type().to_string(),
            code: err.code().map(str::to_string),
        },
    }));
}
