use std::time::Duration;

/// Default model of the size-constrained drafting variant
pub const DEFAULT_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Configuration from environment
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Load configuration, failing fast when the credential is absent.
    pub fn from_env() -> eyre::Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                eyre::eyre!(
                    "GROQ_API_KEY is not set.\n\
                     Export the API key of your Groq account (or of the gateway \
                     fronting it) before starting the server."
                )
            })?;

        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            api_key,
            base_url: std::env::var("GROQ_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: std::env::var("SCRIBE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            upstream_timeout: Duration::from_secs(
                std::env::var("UPSTREAM_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(120),
            ),
        })
    }
}
