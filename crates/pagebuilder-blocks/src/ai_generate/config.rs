use std::time::Duration;

use serde::{Deserialize, Serialize};

use pagebuilder_ai_harness::{ResponseFormat, RunOptions};
use pagebuilder_core::ValidationMode;
use pagebuilder_core::observability::parse_bool_env;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Settings for generation requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Harness provider id the model belongs to.
    pub provider: String,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout_ms: u64,
    pub validation: ValidationMode,
    /// Run whole generate-and-apply cycles one at a time.
    pub serialize_requests: bool,
    /// Sampling seed forwarded to OpenAI models.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_output_tokens: 4096,
            timeout_ms: 30_000,
            validation: ValidationMode::Lenient,
            serialize_requests: true,
            seed: None,
        }
    }
}

impl GenerationConfig {
    /// Defaults overridden by `PAGEBUILDER_MODEL` (or `OPENAI_MODEL`),
    /// `PAGEBUILDER_TIMEOUT_MS`, `PAGEBUILDER_STRICT_VALIDATION`,
    /// `PAGEBUILDER_SERIALIZE_REQUESTS` and `PAGEBUILDER_SEED`. Unparseable
    /// values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(model) = non_empty("PAGEBUILDER_MODEL").or_else(|| non_empty("OPENAI_MODEL")) {
            config.model = model.trim().to_string();
        }
        if let Some(ms) = non_empty("PAGEBUILDER_TIMEOUT_MS").and_then(|v| v.trim().parse().ok()) {
            config.timeout_ms = ms;
        }
        if let Some(strict) = non_empty("PAGEBUILDER_STRICT_VALIDATION").and_then(|v| parse_bool_env(&v)) {
            config.validation = if strict {
                ValidationMode::Strict
            } else {
                ValidationMode::Lenient
            };
        }
        if let Some(serialize) =
            non_empty("PAGEBUILDER_SERIALIZE_REQUESTS").and_then(|v| parse_bool_env(&v))
        {
            config.serialize_requests = serialize;
        }
        if let Some(seed) = non_empty("PAGEBUILDER_SEED").and_then(|v| v.trim().parse().ok()) {
            config.seed = Some(seed);
        }
        config
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Options every generation run starts from.
    pub fn run_defaults(&self) -> RunOptions {
        RunOptions {
            timeout: Some(self.timeout()),
            temperature: Some(self.temperature),
            max_output_tokens: Some(self.max_output_tokens),
            response_format: ResponseFormat::JsonObject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> GenerationConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GenerationConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_match_the_generation_endpoint() {
        let config = from_pairs(&[]);
        assert_eq!(config, GenerationConfig::default());
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_output_tokens, 4096);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.serialize_requests);
    }

    #[test]
    fn pagebuilder_model_wins_over_openai_model() {
        assert_eq!(from_pairs(&[("OPENAI_MODEL", "gpt-4o")]).model, "gpt-4o");
        assert_eq!(
            from_pairs(&[("OPENAI_MODEL", "gpt-4o"), ("PAGEBUILDER_MODEL", "local-7b")]).model,
            "local-7b"
        );
        assert_eq!(from_pairs(&[("OPENAI_MODEL", "  ")]).model, DEFAULT_MODEL);
    }

    #[test]
    fn flags_and_timeout_are_parsed_leniently() {
        let config = from_pairs(&[
            ("PAGEBUILDER_STRICT_VALIDATION", "yes"),
            ("PAGEBUILDER_SERIALIZE_REQUESTS", "off"),
            ("PAGEBUILDER_TIMEOUT_MS", "not-a-number"),
            ("PAGEBUILDER_SEED", " 42 "),
        ]);
        assert_eq!(config.validation, ValidationMode::Strict);
        assert!(!config.serialize_requests);
        assert_eq!(config.timeout_ms, 30_000);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn partial_json_config_fills_defaults() {
        let config: GenerationConfig =
            serde_json::from_str(r#"{"model":"gpt-4.1-mini","validation":"strict"}"#)
                .expect("config");
        assert_eq!(config.model, "gpt-4.1-mini");
        assert_eq!(config.validation, ValidationMode::Strict);
        assert_eq!(config.temperature, 0.7);
    }
}
