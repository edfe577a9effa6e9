use crate::config::Config;
use crate::error::SectionError;
use crate::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatUsage, ContentBlock,
};

/// Sampling temperature of the drafting call
const TEMPERATURE: f32 = 0.5;
/// Output token budget of the drafting call
const MAX_TOKENS: u32 = 6000;

/// What a successful drafting call produced.
#[derive(Debug)]
pub struct SectionCompletion {
    pub model: String,
    pub content: String,
    pub usage: Option<ChatUsage>,
}

/// Client for the hosted chat-completions endpoint.
pub struct GroqClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GroqClient {
    pub fn new(config: &Config) -> eyre::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One drafting call: a single user message, a single attempt.
    pub async fn complete_section(
        &self,
        content: Vec<ContentBlock>,
    ) -> Result<SectionCompletion, SectionError> {
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(SectionError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(SectionError::EmptyCompletion)?;

        Ok(SectionCompletion {
            model: self.model.clone(),
            content,
            usage: completion.usage,
        })
    }
}
