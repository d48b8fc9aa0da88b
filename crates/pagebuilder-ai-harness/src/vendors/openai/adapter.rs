use std::borrow::Cow;

use serde::Deserialize;
use tracing::debug;

use crate::ProviderId;
use crate::content::InputPart;
use crate::errors::{HarnessError, ProviderError};
use crate::model::ResponseFormat;
use crate::provider::{ProviderAdapter, ProviderRequest, ProviderResponse};

use super::config::OpenAiClientConfig;
use super::options::OpenAiRequestOptions;
use super::transport::{
    ChatMessage, ChatRequest, ResponseFormatBody, error_message, parse_chat_completion,
};

pub(crate) const OPENAI_PROVIDER: &str = "openai";

/// Chat Completions client. Any endpoint with the same wire format works
/// through `OpenAiClientConfig::base_url`.
pub struct OpenAiProvider {
    http: reqwest::Client,
    config: OpenAiClientConfig,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiClientConfig) -> Result<Self, HarnessError> {
        if config.api_key.trim().is_empty() {
            return Err(HarnessError::Config("OpenAI api_key is blank".into()));
        }
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| HarnessError::Config(format!("cannot build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self, HarnessError> {
        Self::new(OpenAiClientConfig::from_env()?)
    }

    async fn post(&self, body: &ChatRequest<'_>) -> Result<String, ProviderError> {
        let transport = |what: &str, e: reqwest::Error| {
            ProviderError::transport(OPENAI_PROVIDER, format!("{what}: {e}"))
        };
        let response = self
            .http
            .post(self.config.chat_completions_url())
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| transport("request failed", e))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| transport("reading response body failed", e))?;
        if status.is_success() {
            Ok(text)
        } else {
            Err(ProviderError::provider(
                OPENAI_PROVIDER,
                format!("status {status}: {}", error_message(&text)),
                Some(status.as_u16()),
            ))
        }
    }
}

#[async_trait::async_trait]
impl ProviderAdapter for OpenAiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::new(OPENAI_PROVIDER)
    }

    async fn complete(&self, req: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let options = vendor_options(&req)?;
        let body = build_request_body(&req, &options);
        debug!(
            event = "openai_request",
            domain = "harness",
            run_id = %req.run_id,
            model = body.model,
            json_mode = body.response_format.is_some(),
            "posting chat completion"
        );
        let text = self.post(&body).await?;
        parse_chat_completion(&ProviderId::new(OPENAI_PROVIDER), &text)
    }
}

fn vendor_options(req: &ProviderRequest) -> Result<OpenAiRequestOptions, ProviderError> {
    let Some(value) = req.vendor_options.get(&ProviderId::new(OPENAI_PROVIDER)) else {
        return Ok(OpenAiRequestOptions::default());
    };
    OpenAiRequestOptions::deserialize(value).map_err(|e| {
        ProviderError::protocol(OPENAI_PROVIDER, format!("invalid OpenAI options: {e}"))
    })
}

/// System message (when present) then one user message joining all input parts.
pub(crate) fn build_request_body<'a>(
    req: &'a ProviderRequest,
    options: &'a OpenAiRequestOptions,
) -> ChatRequest<'a> {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = req.system_prompt.as_deref().map(str::trim)
        && !system.is_empty()
    {
        messages.push(ChatMessage {
            role: "system",
            content: Cow::Borrowed(system),
        });
    }
    messages.push(ChatMessage {
        role: "user",
        content: Cow::Owned(user_content(&req.input_parts)),
    });

    ChatRequest {
        model: &req.model.model,
        messages,
        store: options.store.unwrap_or(false),
        temperature: req.options.temperature,
        max_tokens: req.options.max_output_tokens,
        response_format: (req.options.response_format == ResponseFormat::JsonObject)
            .then_some(ResponseFormatBody::JsonObject),
        seed: options.seed,
        user: options.user.as_deref(),
    }
}

fn user_content(parts: &[InputPart]) -> String {
    parts
        .iter()
        .map(|part| match part {
            InputPart::Text(text) => text.as_str(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
