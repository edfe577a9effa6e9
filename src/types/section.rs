use serde::{Deserialize, Serialize};

use super::chat::ChatUsage;

#[derive(Debug, Deserialize)]
pub struct SectionRequest {
    /// Free-form description of the paper's subject area. May be empty.
    #[serde(default)]
    pub domain: String,
    /// Architecture diagrams to describe
    pub images: Vec<ImageUpload>,
}

#[derive(Debug, Deserialize)]
pub struct ImageUpload {
    /// Base64-encoded raster image (PNG or JPEG)
    pub data: String,
    /// Original filename, checked against the accepted extensions when given
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SectionResponse {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    /// Generated section text, Markdown with inline LaTeX
    pub content: String,
    /// Number of diagrams embedded in the prompt
    pub images: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<ChatUsage>,
}
