use std::sync::Arc;

use crate::harness::HarnessInner;
use crate::model::{ModelRef, RunOptions};
use crate::run::RunBuilder;

/// Name and shared run options for a `Session`.
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    /// Attached to every run log of the session.
    pub name: String,
    /// Applied to runs that leave a field unset; harness defaults fill the rest.
    pub defaults: RunOptions,
}

impl SessionConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            defaults: RunOptions::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: RunOptions) -> Self {
        self.defaults = defaults;
        self
    }
}

/// Runs started from one caller. Nothing is remembered between runs.
#[derive(Clone)]
pub struct Session {
    harness: Arc<HarnessInner>,
    id: uuid::Uuid,
    name: Arc<str>,
    defaults: Arc<RunOptions>,
}

impl Session {
    pub(crate) fn new(harness: Arc<HarnessInner>, config: SessionConfig) -> Self {
        Self {
            harness,
            id: uuid::Uuid::new_v4(),
            name: config.name.into(),
            defaults: Arc::new(config.defaults),
        }
    }

    pub fn id(&self) -> uuid::Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn defaults(&self) -> &RunOptions {
        &self.defaults
    }

    pub fn run(&self, model: ModelRef) -> RunBuilder {
        let defaults = self.defaults.as_ref().clone().or(&self.harness.defaults);
        RunBuilder::new(
            self.harness.clone(),
            self.id,
            self.name.clone(),
            defaults,
            model,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Harness;
    use crate::model::ResponseFormat;
    use std::time::Duration;

    #[test]
    fn session_defaults_layer_over_harness_defaults() {
        let harness = Harness::builder()
            .default_timeout(Duration::from_secs(30))
            .build()
            .expect("harness");
        let session = harness.session(SessionConfig::named("alice").with_defaults(RunOptions {
            temperature: Some(0.7),
            response_format: ResponseFormat::JsonObject,
            ..RunOptions::default()
        }));

        assert_eq!(session.name(), "alice");
        assert_eq!(session.defaults().temperature, Some(0.7));
        assert_ne!(
            session.id(),
            harness.session(SessionConfig::named("alice")).id()
        );
    }
}
