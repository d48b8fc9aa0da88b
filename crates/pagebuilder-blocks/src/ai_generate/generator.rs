use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use pagebuilder_ai_harness::vendors::openai::{OpenAiRequestOptions, OpenAiRunBuilderExt};
use pagebuilder_ai_harness::{Harness, ModelRef, SessionConfig};
use pagebuilder_core::{BlockInstance, BlockValidator, SchemaRegistry};

use super::config::GenerationConfig;
use super::errors::GenerationError;
use super::prompt::{PromptError, build_system_prompt, build_user_message};

/// Authenticated caller of a generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub name: String,
}

impl Principal {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Request body: `{ "prompt": "...", "currentBlocks": ["Hero", ...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub prompt: String,
    /// Block types already on the page, in order.
    #[serde(default)]
    pub current_blocks: Vec<String>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            current_blocks: Vec::new(),
        }
    }

    pub fn with_current_blocks(mut self, current_blocks: Vec<String>) -> Self {
        self.current_blocks = current_blocks;
        self
    }
}

/// Success body: `{ "blocks": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub blocks: Vec<BlockInstance>,
}

/// Turns a natural-language prompt into validated blocks through one
/// JSON-mode model call.
#[derive(Clone)]
pub struct BlockGenerator {
    harness: Harness,
    registry: Arc<SchemaRegistry>,
    validator: BlockValidator,
    config: GenerationConfig,
    system_prompt: Arc<str>,
}

impl BlockGenerator {
    /// Renders the system prompt once; it only depends on the registry.
    pub fn new(
        harness: Harness,
        registry: Arc<SchemaRegistry>,
        config: GenerationConfig,
    ) -> Result<Self, PromptError> {
        let system_prompt: Arc<str> = build_system_prompt(&registry)?.into();
        let validator = BlockValidator::new(registry.clone(), config.validation);
        Ok(Self {
            harness,
            registry,
            validator,
            config,
            system_prompt,
        })
    }

    pub fn registry(&self) -> &Arc<SchemaRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub async fn generate(
        &self,
        principal: Option<&Principal>,
        request: GenerationRequest,
    ) -> Result<Vec<BlockInstance>, GenerationError> {
        let Some(principal) = principal else {
            warn!(event = "generate.unauthorized", domain = "generation");
            return Err(GenerationError::Unauthorized);
        };
        if request.prompt.trim().is_empty() {
            return Err(GenerationError::EmptyPrompt);
        }

        debug!(
            event = "generate.started",
            domain = "generation",
            principal = principal.name.as_str(),
            model = self.config.model.as_str(),
            context_blocks = request.current_blocks.len()
        );
        let user_message = build_user_message(&request.prompt, &request.current_blocks);
        let mut openai = OpenAiRequestOptions::default().store(false).user(principal.name.as_str());
        if let Some(seed) = self.config.seed {
            openai = openai.seed(seed);
        }
        let output = self
            .harness
            .session(
                SessionConfig::named(principal.name.clone())
                    .with_defaults(self.config.run_defaults()),
            )
            .run(ModelRef::new(
                self.config.provider.as_str(),
                self.config.model.clone(),
            ))
            .system_prompt(&*self.system_prompt)
            .user_text(user_message)
            .openai_options(openai)
            .collect_output()
            .await
            .map_err(|err| {
                warn!(
                    event = "generate.service_failed",
                    domain = "generation",
                    upstream_status = ?err.upstream_status(),
                    error = %err
                );
                GenerationError::from(err)
            })?;

        if output.was_truncated() {
            warn!(
                event = "generate.truncated",
                domain = "generation",
                max_output_tokens = self.config.max_output_tokens
            );
        }

        let candidates = parse_candidates(output.text()).inspect_err(|err| {
            warn!(event = "generate.bad_response", domain = "generation", kind = err.kind());
        })?;
        let outcome = self.validator.filter(candidates);
        if outcome.rejected > 0 {
            warn!(
                event = "generate.candidates_dropped",
                domain = "generation",
                accepted = outcome.accepted.len(),
                rejected = outcome.rejected
            );
        }
        info!(
            event = "generate.completed",
            domain = "generation",
            principal = principal.name.as_str(),
            blocks = outcome.accepted.len()
        );
        Ok(outcome.accepted)
    }
}

/// Extracts the `blocks` array from the model's reply text.
pub(crate) fn parse_candidates(raw: String) -> Result<Vec<Value>, GenerationError> {
    if raw.trim().is_empty() {
        return Err(GenerationError::MalformedResponse { raw });
    }
    let parsed: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(_) => return Err(GenerationError::MalformedResponse { raw }),
    };
    match parsed {
        Value::Object(mut object) => match object.remove("blocks") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(GenerationError::MissingBlocksField { raw }),
        },
        _ => Err(GenerationError::MissingBlocksField { raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai_generate::test_support::{Scripted, ScriptedProvider, generator_with};
    use pagebuilder_ai_harness::{InputPart, ProviderError, ProviderId, ResponseFormat};
    use pagebuilder_core::ValidationMode;
    use serde_json::json;

    fn alice() -> Principal {
        Principal::new("alice")
    }

    #[test]
    fn parse_distinguishes_malformed_from_missing_blocks() {
        assert_eq!(
            parse_candidates("  ".into()),
            Err(GenerationError::MalformedResponse { raw: "  ".into() })
        );
        assert_eq!(
            parse_candidates("Sure! Here".into()),
            Err(GenerationError::MalformedResponse {
                raw: "Sure! Here".into()
            })
        );
        assert_eq!(
            parse_candidates(r#"{"blocks": [{"type": "Hero""#.into()),
            Err(GenerationError::MalformedResponse {
                raw: r#"{"blocks": [{"type": "Hero""#.into()
            })
        );
        assert_eq!(
            parse_candidates(r#"{"items":[]}"#.into()),
            Err(GenerationError::MissingBlocksField {
                raw: r#"{"items":[]}"#.into()
            })
        );
        assert!(matches!(
            parse_candidates(r#"{"blocks":"Hero"}"#.into()),
            Err(GenerationError::MissingBlocksField { .. })
        ));
        assert!(matches!(
            parse_candidates("[1,2]".into()),
            Err(GenerationError::MissingBlocksField { .. })
        ));
        assert_eq!(parse_candidates(r#"{"blocks":[]}"#.into()), Ok(Vec::new()));
    }

    #[test]
    fn request_body_uses_camel_case_and_defaults_context() {
        let request: GenerationRequest =
            serde_json::from_value(json!({ "prompt": "Add pricing" })).expect("request");
        assert_eq!(request, GenerationRequest::new("Add pricing"));

        let request: GenerationRequest = serde_json::from_value(
            json!({ "prompt": "Add pricing", "currentBlocks": ["Hero"] }),
        )
        .expect("request");
        assert_eq!(request.current_blocks, vec!["Hero".to_string()]);
    }

    #[tokio::test]
    async fn keeps_valid_candidates_in_order() {
        let reply = json!({
            "blocks": [
                { "type": "Hero", "props": { "id": "Hero-aaaaaaaa", "title": "Hi" } },
                { "type": "Features" },
                { "type": "CTA", "props": { "id": "CTA-bbbbbbbb" } },
            ]
        });
        let provider = ScriptedProvider::new([Scripted::text(reply.to_string())]);
        let generator = generator_with(&provider, ValidationMode::Lenient);

        let blocks = generator
            .generate(Some(&alice()), GenerationRequest::new("landing page"))
            .await
            .expect("generate");

        let ids: Vec<_> = blocks.iter().filter_map(BlockInstance::id).collect();
        assert_eq!(ids, ["Hero-aaaaaaaa", "CTA-bbbbbbbb"]);
    }

    #[tokio::test]
    async fn sends_one_json_mode_request_with_configured_options() {
        let provider = ScriptedProvider::new([Scripted::text(r#"{"blocks":[]}"#)]);
        let generator = generator_with(&provider, ValidationMode::Lenient);

        let blocks = generator
            .generate(
                Some(&alice()),
                GenerationRequest::new("Add pricing")
                    .with_current_blocks(vec!["Hero".into(), "Features".into()]),
            )
            .await
            .expect("generate");
        assert!(blocks.is_empty());

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.model.model, "scripted-model");
        assert_eq!(request.options.response_format, ResponseFormat::JsonObject);
        assert_eq!(request.options.temperature, Some(0.7));
        assert_eq!(request.options.max_output_tokens, Some(4096));
        assert_eq!(request.options.timeout, Some(std::time::Duration::from_secs(30)));
        assert_eq!(
            request.vendor_options.get(&ProviderId::new("openai")),
            Some(&serde_json::json!({ "store": false, "user": "alice" }))
        );
        assert_eq!(
            request.system_prompt.as_deref(),
            Some(generator.system_prompt())
        );
        assert_eq!(
            request.input_parts,
            vec![InputPart::Text(
                "Add pricing\n\nCurrent page already has these blocks: Hero, Features. \
                 Consider this context when generating new blocks."
                    .into()
            )]
        );
    }

    #[tokio::test]
    async fn missing_principal_or_prompt_never_reaches_the_provider() {
        let provider = ScriptedProvider::new([]);
        let generator = generator_with(&provider, ValidationMode::Lenient);

        let err = generator
            .generate(None, GenerationRequest::new("Add pricing"))
            .await
            .expect_err("no principal");
        assert_eq!(err, GenerationError::Unauthorized);

        let err = generator
            .generate(Some(&alice()), GenerationRequest::new(" \n\t"))
            .await
            .expect_err("blank prompt");
        assert_eq!(err, GenerationError::EmptyPrompt);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn non_json_reply_is_reported_with_raw_text() {
        let provider = ScriptedProvider::new([Scripted::text("Sure, here are your blocks: {not json")]);
        let generator = generator_with(&provider, ValidationMode::Lenient);

        let err = generator
            .generate(Some(&alice()), GenerationRequest::new("hero"))
            .await
            .expect_err("malformed");
        assert_eq!(
            err,
            GenerationError::MalformedResponse {
                raw: "Sure, here are your blocks: {not json".into()
            }
        );
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn empty_reply_is_malformed() {
        let provider = ScriptedProvider::new([Scripted::text("")]);
        let generator = generator_with(&provider, ValidationMode::Lenient);

        let err = generator
            .generate(Some(&alice()), GenerationRequest::new("hero"))
            .await
            .expect_err("empty");
        assert_eq!(err, GenerationError::MalformedResponse { raw: String::new() });
    }

    #[tokio::test]
    async fn provider_failure_becomes_service_error() {
        let provider = ScriptedProvider::new([Scripted::Error(ProviderError::provider(
            "scripted",
            "rate limited",
            Some(429),
        ))]);
        let generator = generator_with(&provider, ValidationMode::Lenient);

        let err = generator
            .generate(Some(&alice()), GenerationRequest::new("hero"))
            .await
            .expect_err("service error");
        assert_eq!(
            err,
            GenerationError::GenerationServiceError {
                message: "provider error (scripted): rate limited".into(),
                upstream_status: Some(429),
            }
        );
        let payload = err.to_payload();
        assert_eq!(payload["details"], "provider error (scripted): rate limited");
        assert_eq!(payload["upstreamStatus"], 429);
    }

    #[tokio::test]
    async fn strict_mode_drops_unregistered_and_nonconforming_blocks() {
        let reply = json!({
            "blocks": [
                { "type": "Marquee", "props": { "id": "Marquee-aaaaaaaa" } },
                { "type": "Hero", "props": { "id": "Hero-bbbbbbbb", "alignment": "right" } },
                { "type": "Hero", "props": { "id": "Hero-cccccccc", "alignment": "left" } },
            ]
        });
        let provider = ScriptedProvider::new([
            Scripted::text(reply.to_string()),
            Scripted::text(reply.to_string()),
        ]);

        let strict = generator_with(&provider, ValidationMode::Strict)
            .generate(Some(&alice()), GenerationRequest::new("hero"))
            .await
            .expect("strict");
        assert_eq!(strict.len(), 1);
        assert_eq!(strict[0].id(), Some("Hero-cccccccc"));

        let lenient = generator_with(&provider, ValidationMode::Lenient)
            .generate(Some(&alice()), GenerationRequest::new("hero"))
            .await
            .expect("lenient");
        assert_eq!(lenient.len(), 3);
    }
}
