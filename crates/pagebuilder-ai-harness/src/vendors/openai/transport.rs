use serde::{Deserialize, Serialize};

use crate::ProviderId;
use crate::content::{OutputPart, RunOutput, TokenUsage};
use crate::errors::ProviderError;
use crate::provider::{ProviderResponse, ProviderResponseMeta};

/// `POST /v1/chat/completions` body.
#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub store: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormatBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: std::borrow::Cow<'a, str>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ResponseFormatBody {
    JsonObject,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    id: Option<String>,
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<Message>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: Option<String>,
    refusal: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Maps a successful chat-completions body to a provider response.
///
/// A missing or null `content` yields an output with no parts; the caller
/// decides whether an empty answer is an error.
pub(crate) fn parse_chat_completion(
    provider: &ProviderId,
    body: &str,
) -> Result<ProviderResponse, ProviderError> {
    let completion: ChatCompletion = serde_json::from_str(body).map_err(|e| {
        ProviderError::protocol(provider.clone(), format!("invalid chat completion JSON: {e}"))
    })?;
    let Some(choice) = completion.choices.into_iter().next() else {
        return Err(ProviderError::protocol(
            provider.clone(),
            "chat completion contained no choices",
        ));
    };

    let message = choice.message;
    if let Some(refusal) = message.as_ref().and_then(|m| m.refusal.clone()) {
        return Err(ProviderError::provider(
            provider.clone(),
            format!("model refused the request: {refusal}"),
            None,
        ));
    }
    let parts = message
        .and_then(|m| m.content)
        .filter(|text| !text.is_empty())
        .map(|text| vec![OutputPart::Text(text)])
        .unwrap_or_default();

    Ok(ProviderResponse {
        output: RunOutput {
            parts,
            finish_reason: choice.finish_reason,
            usage: completion.usage.map(|u| TokenUsage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            }),
        },
        metadata: ProviderResponseMeta {
            response_id: completion.id,
            model: completion.model,
        },
    })
}

/// Extracts the human-readable message from an error body, falling back to the raw text.
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => "<empty body>".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
