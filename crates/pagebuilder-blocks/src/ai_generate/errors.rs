use pagebuilder_ai_harness::HarnessError;
use pagebuilder_core::DocumentError;

/// Why a generation request produced no blocks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// No authenticated principal; nothing was sent to the model.
    #[error("unauthorized")]
    Unauthorized,
    #[error("prompt is required")]
    EmptyPrompt,
    /// The model answered with empty or non-JSON text.
    #[error("invalid JSON from AI")]
    MalformedResponse { raw: String },
    /// The model answered with JSON lacking a `blocks` array.
    #[error("AI response missing 'blocks' array")]
    MissingBlocksField { raw: String },
    /// The model call itself failed or timed out.
    #[error("AI generation failed: {message}")]
    GenerationServiceError {
        message: String,
        /// Status the provider answered with, if it answered at all.
        upstream_status: Option<u16>,
    },
}

impl GenerationError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized => "Unauthorized",
            Self::EmptyPrompt => "EmptyPrompt",
            Self::MalformedResponse { .. } => "MalformedResponse",
            Self::MissingBlocksField { .. } => "MissingBlocksField",
            Self::GenerationServiceError { .. } => "GenerationServiceError",
        }
    }

    /// HTTP status an endpoint should answer with.
    pub fn status(&self) -> u16 {
        match self {
            Self::Unauthorized => 401,
            Self::EmptyPrompt => 400,
            _ => 500,
        }
    }

    /// Raw model text, for the two response-shape failures.
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::MalformedResponse { raw } | Self::MissingBlocksField { raw } => Some(raw),
            _ => None,
        }
    }

    /// Error body: `{ kind, error, raw?, details?, upstreamStatus? }`.
    pub fn to_payload(&self) -> serde_json::Value {
        let mut payload = serde_json::json!({
            "kind": self.kind(),
            "error": self.to_string(),
        });
        if let Some(raw) = self.raw() {
            payload["raw"] = serde_json::Value::String(raw.to_string());
        }
        if let Self::GenerationServiceError {
            message,
            upstream_status,
        } = self
        {
            payload["error"] = serde_json::Value::String("AI generation failed".into());
            payload["details"] = serde_json::Value::String(message.clone());
            if let Some(status) = upstream_status {
                payload["upstreamStatus"] = serde_json::json!(status);
            }
        }
        payload
    }
}

impl From<HarnessError> for GenerationError {
    fn from(value: HarnessError) -> Self {
        Self::GenerationServiceError {
            message: value.to_string(),
            upstream_status: value.upstream_status(),
        }
    }
}

/// Failure of a generate-and-apply cycle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("document update failed: {0}")]
    Document(#[from] DocumentError),
}
