use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::content::{InputPart, RunOutput};
use crate::errors::HarnessError;
use crate::harness::HarnessInner;
use crate::model::{ModelRef, ProviderId, ResponseFormat, RunOptions};
use crate::provider::{ProviderRequest, ProviderResponse};

/// One model call, assembled fluently and sent by a `collect_*` method.
pub struct RunBuilder {
    harness: Arc<HarnessInner>,
    session_name: Arc<str>,
    // Session defaults already layered over harness defaults.
    defaults: RunOptions,
    draft: ProviderRequest,
}

impl RunBuilder {
    pub(crate) fn new(
        harness: Arc<HarnessInner>,
        session_id: uuid::Uuid,
        session_name: Arc<str>,
        defaults: RunOptions,
        model: ModelRef,
    ) -> Self {
        Self {
            harness,
            session_name,
            defaults,
            draft: ProviderRequest {
                run_id: uuid::Uuid::new_v4(),
                session_id,
                model,
                system_prompt: None,
                input_parts: Vec::new(),
                options: RunOptions::default(),
                vendor_options: HashMap::new(),
            },
        }
    }

    /// Blank prompts are dropped rather than sent.
    pub fn system_prompt(mut self, text: impl Into<String>) -> Self {
        self.draft.system_prompt = Some(text.into());
        self
    }

    pub fn user_text(mut self, text: impl Into<String>) -> Self {
        self.draft.input_parts.push(InputPart::Text(text.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.draft.options.timeout = Some(timeout);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.draft.options.temperature = Some(temperature);
        self
    }

    pub fn max_output_tokens(mut self, max: u32) -> Self {
        self.draft.options.max_output_tokens = Some(max);
        self
    }

    /// Asks the provider for a single JSON object instead of free text.
    pub fn json_object(mut self) -> Self {
        self.draft.options.response_format = ResponseFormat::JsonObject;
        self
    }

    pub(crate) fn set_vendor_options_json(
        mut self,
        provider: ProviderId,
        value: serde_json::Value,
    ) -> Self {
        self.draft.vendor_options.insert(provider, value);
        self
    }

    #[cfg(test)]
    pub(crate) fn vendor_options_value(&self, provider: &ProviderId) -> Option<&serde_json::Value> {
        self.draft.vendor_options.get(provider)
    }

    /// Runs to completion and returns the full provider response.
    pub async fn collect_response(self) -> Result<ProviderResponse, HarnessError> {
        let harness = self.harness.clone();
        let session_name = self.session_name.clone();
        let request = self.validate_and_build_request()?;
        let provider = harness
            .provider(&request.model.provider)
            .ok_or_else(|| HarnessError::ProviderNotFound {
                provider: request.model.provider.clone(),
            })?;

        let run_id = request.run_id;
        let provider_id = request.model.provider.clone();
        let model_name = request.model.model.clone();
        let timeout = request.options.timeout;
        debug!(
            event = "run_started",
            domain = "harness",
            run_id = %run_id,
            session = %session_name,
            provider = %provider_id,
            model = %model_name,
            "provider call started"
        );

        let started = Instant::now();
        let call = provider.complete(request);
        let result = match timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(
                        event = "run_timed_out",
                        domain = "harness",
                        run_id = %run_id,
                        provider = %provider_id,
                        timeout_ms = limit.as_millis() as u64,
                        "provider call timed out"
                    );
                    return Err(HarnessError::Timeout { after: limit });
                }
            },
            None => call.await,
        };

        match result {
            Ok(response) => {
                debug!(
                    event = "run_completed",
                    domain = "harness",
                    run_id = %run_id,
                    provider = %provider_id,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    finish_reason = response.output.finish_reason.as_deref().unwrap_or(""),
                    "provider call completed"
                );
                Ok(response)
            }
            Err(err) => {
                warn!(
                    event = "run_failed",
                    domain = "harness",
                    run_id = %run_id,
                    provider = %provider_id,
                    error = %err,
                    "provider call failed"
                );
                Err(HarnessError::Provider(err))
            }
        }
    }

    /// Runs to completion and returns the aggregated output.
    pub async fn collect_output(self) -> Result<RunOutput, HarnessError> {
        Ok(self.collect_response().await?.output)
    }

    /// Runs to completion and returns concatenated text output.
    ///
    /// Non-text output parts are ignored.
    pub async fn collect_text(self) -> Result<String, HarnessError> {
        Ok(self.collect_output().await?.text())
    }

    /// Checks the draft and fills unset options from the defaults. Nothing
    /// here touches the network.
    fn validate_and_build_request(self) -> Result<ProviderRequest, HarnessError> {
        let Self {
            defaults,
            mut draft,
            ..
        } = self;
        let invalid = HarnessError::Validation;

        if draft.model.provider.as_str().trim().is_empty() || draft.model.model.trim().is_empty() {
            return Err(invalid(format!(
                "incomplete model reference `{}/{}`",
                draft.model.provider, draft.model.model
            )));
        }
        if draft.input_parts.is_empty() {
            return Err(invalid("run has no user input".into()));
        }
        let blank = draft.input_parts.iter().any(|part| match part {
            InputPart::Text(text) => text.trim().is_empty(),
        });
        if blank {
            return Err(invalid("user input contains a blank part".into()));
        }

        draft.options = draft.options.or(&defaults);
        if draft.options.timeout == Some(Duration::ZERO) {
            return Err(invalid("timeout is zero".into()));
        }
        if let Some(t) = draft.options.temperature
            && !(0.0..=2.0).contains(&t)
        {
            return Err(invalid(format!("temperature {t} is outside 0..=2")));
        }
        draft.system_prompt = draft.system_prompt.filter(|s| !s.trim().is_empty());
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ProviderError, ProviderFailure};
    use crate::provider::{ProviderAdapter, ProviderResponseMeta};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeProvider {
        id: ProviderId,
        calls: Arc<AtomicUsize>,
        last_request: Arc<Mutex<Option<ProviderRequest>>>,
        behavior: FakeProviderBehavior,
    }

    enum FakeProviderBehavior {
        Error(ProviderError),
        Text(&'static str),
        Sleep(Duration),
    }

    impl FakeProvider {
        fn new(behavior: FakeProviderBehavior) -> Self {
            Self {
                id: ProviderId::new("fake"),
                calls: Arc::new(AtomicUsize::new(0)),
                last_request: Arc::new(Mutex::new(None)),
                behavior,
            }
        }
    }

    #[async_trait::async_trait]
    impl ProviderAdapter for FakeProvider {
        fn id(&self) -> ProviderId {
            self.id.clone()
        }

        async fn complete(&self, req: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().expect("lock") = Some(req);
            match &self.behavior {
                FakeProviderBehavior::Error(err) => Err(err.clone()),
                FakeProviderBehavior::Text(text) => Ok(ProviderResponse {
                    output: RunOutput {
                        finish_reason: Some("stop".into()),
                        ..RunOutput::from_text(*text)
                    },
                    metadata: ProviderResponseMeta {
                        response_id: Some("resp_1".into()),
                        model: Some("model-a".into()),
                    },
                }),
                FakeProviderBehavior::Sleep(duration) => {
                    tokio::time::sleep(*duration).await;
                    Ok(ProviderResponse::default())
                }
            }
        }
    }

    fn harness_with_provider(provider: FakeProvider) -> crate::Harness {
        crate::Harness::builder()
            .register_provider(Arc::new(provider))
            .build()
            .expect("build harness")
    }

    fn run_on(harness: &crate::Harness) -> RunBuilder {
        harness
            .session(crate::SessionConfig::named("test"))
            .run(ModelRef::new("fake", "model-a"))
    }

    #[tokio::test]
    async fn validation_rejects_missing_input_without_calling_provider() {
        let provider = FakeProvider::new(FakeProviderBehavior::Text("unused"));
        let calls = provider.calls.clone();
        let harness = harness_with_provider(provider);
        let err = run_on(&harness).collect_output().await;
        assert!(matches!(err, Err(HarnessError::Validation(msg)) if msg.contains("no user input")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn validation_rejects_blank_text_input() {
        let harness = harness_with_provider(FakeProvider::new(FakeProviderBehavior::Text("x")));
        let err = run_on(&harness)
            .user_text("Create a hero section")
            .user_text("   ")
            .collect_output()
            .await;
        assert!(matches!(err, Err(HarnessError::Validation(msg)) if msg.contains("blank part")));
    }

    #[tokio::test]
    async fn validation_rejects_out_of_range_temperature() {
        let harness = harness_with_provider(FakeProvider::new(FakeProviderBehavior::Text("x")));
        let err = run_on(&harness)
            .user_text("hi")
            .temperature(3.5)
            .collect_output()
            .await;
        assert!(matches!(err, Err(HarnessError::Validation(msg)) if msg.contains("temperature")));
    }

    #[tokio::test]
    async fn collects_text_and_forwards_options() {
        let provider = FakeProvider::new(FakeProviderBehavior::Text("{\"blocks\":[]}"));
        let last = provider.last_request.clone();
        let harness = harness_with_provider(provider);
        let text = run_on(&harness)
            .system_prompt("be terse")
            .user_text("hello")
            .temperature(0.7)
            .max_output_tokens(4096)
            .json_object()
            .collect_text()
            .await
            .expect("run");
        assert_eq!(text, "{\"blocks\":[]}");

        let req = last.lock().expect("lock").clone().expect("request recorded");
        assert_eq!(req.system_prompt.as_deref(), Some("be terse"));
        assert_eq!(req.options.temperature, Some(0.7));
        assert_eq!(req.options.max_output_tokens, Some(4096));
        assert_eq!(req.options.response_format, ResponseFormat::JsonObject);
    }

    #[tokio::test]
    async fn blank_system_prompt_is_dropped() {
        let provider = FakeProvider::new(FakeProviderBehavior::Text("ok"));
        let last = provider.last_request.clone();
        let harness = harness_with_provider(provider);
        run_on(&harness)
            .system_prompt("  ")
            .user_text("hello")
            .collect_output()
            .await
            .expect("run");
        let req = last.lock().expect("lock").clone().expect("request recorded");
        assert_eq!(req.system_prompt, None);
    }

    #[tokio::test]
    async fn provider_error_is_surfaced_once() {
        let provider = FakeProvider::new(FakeProviderBehavior::Error(ProviderError::provider(
            "fake",
            "boom",
            Some(500),
        )));
        let calls = provider.calls.clone();
        let harness = harness_with_provider(provider);
        let err = run_on(&harness).user_text("hello").collect_output().await;
        assert!(matches!(
            err,
            Err(HarnessError::Provider(ProviderError {
                failure: ProviderFailure::Rejected { status: Some(500) },
                ..
            }))
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn slow_provider_hits_run_timeout() {
        let harness = harness_with_provider(FakeProvider::new(FakeProviderBehavior::Sleep(
            Duration::from_secs(5),
        )));
        let err = run_on(&harness)
            .user_text("hello")
            .timeout(Duration::from_millis(20))
            .collect_output()
            .await;
        assert!(matches!(err, Err(HarnessError::Timeout { after }) if after == Duration::from_millis(20)));
    }

    #[tokio::test]
    async fn harness_default_timeout_applies_when_run_sets_none() {
        let harness = crate::Harness::builder()
            .register_provider(Arc::new(FakeProvider::new(FakeProviderBehavior::Sleep(
                Duration::from_secs(5),
            ))))
            .default_timeout(Duration::from_millis(20))
            .build()
            .expect("build harness");
        let err = run_on(&harness).user_text("hello").collect_output().await;
        assert!(matches!(err, Err(HarnessError::Timeout { .. })));
    }

    #[tokio::test]
    async fn run_options_win_over_session_and_harness_defaults() {
        let provider = FakeProvider::new(FakeProviderBehavior::Text("ok"));
        let last = provider.last_request.clone();
        let harness = crate::Harness::builder()
            .register_provider(Arc::new(provider))
            .default_options(RunOptions {
                timeout: Some(Duration::from_secs(60)),
                max_output_tokens: Some(1024),
                ..RunOptions::default()
            })
            .build()
            .expect("build harness");
        let session = harness.session(crate::SessionConfig::named("alice").with_defaults(
            RunOptions {
                timeout: Some(Duration::from_secs(30)),
                temperature: Some(0.7),
                response_format: ResponseFormat::JsonObject,
                ..RunOptions::default()
            },
        ));

        session
            .run(ModelRef::new("fake", "model-a"))
            .user_text("hello")
            .temperature(0.2)
            .collect_output()
            .await
            .expect("run");

        let req = last.lock().expect("lock").clone().expect("request recorded");
        assert_eq!(req.options.temperature, Some(0.2));
        assert_eq!(req.options.timeout, Some(Duration::from_secs(30)));
        assert_eq!(req.options.max_output_tokens, Some(1024));
        assert_eq!(req.options.response_format, ResponseFormat::JsonObject);
    }

    #[tokio::test]
    async fn vendor_option_storage_is_preserved() {
        let harness = harness_with_provider(FakeProvider::new(FakeProviderBehavior::Text("x")));
        let builder = run_on(&harness)
            .user_text("Add pricing")
            .set_vendor_options_json(ProviderId::new("fake"), serde_json::json!({"x":1}));

        assert_eq!(
            builder.vendor_options_value(&ProviderId::new("fake")),
            Some(&serde_json::json!({"x":1}))
        );
    }

    #[tokio::test]
    async fn provider_not_found_is_reported_before_any_call() {
        let harness = crate::Harness::builder().build().expect("build harness");
        let err = harness
            .session(crate::SessionConfig::named("s"))
            .run(ModelRef::new("missing", "m"))
            .user_text("hello")
            .collect_output()
            .await;
        assert!(matches!(err, Err(HarnessError::ProviderNotFound { .. })));
    }
}
