use std::collections::HashMap;

use crate::content::{InputPart, RunOutput};
use crate::errors::ProviderError;
use crate::model::{ModelRef, ProviderId, RunOptions};

/// Fully validated request handed to a provider adapter.
#[derive(Clone, Debug)]
pub struct ProviderRequest {
    pub run_id: uuid::Uuid,
    pub session_id: uuid::Uuid,
    pub model: ModelRef,
    pub system_prompt: Option<String>,
    pub input_parts: Vec<InputPart>,
    pub options: RunOptions,
    /// Vendor-specific options keyed by provider id, read only by that provider.
    pub vendor_options: HashMap<ProviderId, serde_json::Value>,
}

/// Provider-side metadata about a response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProviderResponseMeta {
    /// Provider request/response id, useful when reporting issues upstream.
    pub response_id: Option<String>,
    /// Model name the provider actually served.
    pub model: Option<String>,
}

/// A complete provider response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProviderResponse {
    pub output: RunOutput,
    pub metadata: ProviderResponseMeta,
}

/// Contract implemented by vendor integrations.
///
/// One call is one attempt: adapters do not retry.
#[async_trait::async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn id(&self) -> ProviderId;

    async fn complete(&self, req: ProviderRequest) -> Result<ProviderResponse, ProviderError>;
}
