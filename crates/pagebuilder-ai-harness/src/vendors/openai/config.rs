use std::time::Duration;

use crate::errors::HarnessError;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Where and how `OpenAiProvider` connects.
#[derive(Clone, Debug)]
pub struct OpenAiClientConfig {
    pub api_key: String,
    /// Any OpenAI-compatible endpoint. A trailing `/v1` is tolerated.
    pub base_url: String,
    /// Backstop for the whole HTTP exchange; run timeouts are usually shorter.
    pub timeout: Duration,
}

impl OpenAiClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// `OPENAI_API_KEY` (required) and `OPENAI_BASE_URL` (optional).
    pub fn from_env() -> Result<Self, HarnessError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HarnessError> {
        let set = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let api_key = set("OPENAI_API_KEY")
            .ok_or_else(|| HarnessError::Config("OPENAI_API_KEY is not set".into()))?;
        let config = Self::new(api_key);
        Ok(match set("OPENAI_BASE_URL") {
            Some(url) => config.base_url(url),
            None => config,
        })
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn chat_completions_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let base = base.strip_suffix("/v1").unwrap_or(base);
        format!("{base}/v1/chat/completions")
    }
}
