use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use pagebuilder_ai_harness::{
    Harness, ProviderAdapter, ProviderError, ProviderId, ProviderRequest, ProviderResponse,
    RunOutput,
};
use pagebuilder_core::{SchemaRegistry, ValidationMode};

use super::config::GenerationConfig;
use super::generator::BlockGenerator;
use crate::catalog::default_registry;

pub(crate) enum Scripted {
    Text(String),
    Error(ProviderError),
}

impl Scripted {
    pub(crate) fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// Answers calls from a script, in order, after one cooperative yield.
#[derive(Clone)]
pub(crate) struct ScriptedProvider {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<ProviderRequest>>>,
}

impl ScriptedProvider {
    pub(crate) fn new(script: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into_iter().collect())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().expect("lock").clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().expect("lock").len()
    }

    /// User text of every recorded request, in call order.
    pub(crate) fn user_messages(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|request| {
                request
                    .input_parts
                    .iter()
                    .filter_map(|part| match part {
                        pagebuilder_ai_harness::InputPart::Text(text) => Some(text.clone()),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl ProviderAdapter for ScriptedProvider {
    fn id(&self) -> ProviderId {
        ProviderId::new("scripted")
    }

    async fn complete(&self, req: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        self.requests.lock().expect("lock").push(req);
        let next = self.script.lock().expect("lock").pop_front();
        tokio::task::yield_now().await;
        match next {
            Some(Scripted::Text(text)) => Ok(ProviderResponse {
                output: RunOutput {
                    finish_reason: Some("stop".into()),
                    ..RunOutput::from_text(text)
                },
                ..ProviderResponse::default()
            }),
            Some(Scripted::Error(err)) => Err(err),
            None => Err(ProviderError::protocol("scripted", "script exhausted")),
        }
    }
}

pub(crate) fn registry() -> Arc<SchemaRegistry> {
    Arc::new(default_registry().expect("catalog"))
}

pub(crate) fn config(validation: ValidationMode) -> GenerationConfig {
    GenerationConfig {
        provider: "scripted".into(),
        model: "scripted-model".into(),
        validation,
        ..GenerationConfig::default()
    }
}

pub(crate) fn generator_with(provider: &ScriptedProvider, validation: ValidationMode) -> BlockGenerator {
    generator_from_config(provider, config(validation))
}

pub(crate) fn generator_from_config(
    provider: &ScriptedProvider,
    config: GenerationConfig,
) -> BlockGenerator {
    let harness = Harness::builder()
        .register_provider(Arc::new(provider.clone()))
        .build()
        .expect("harness");
    BlockGenerator::new(harness, registry(), config).expect("generator")
}
