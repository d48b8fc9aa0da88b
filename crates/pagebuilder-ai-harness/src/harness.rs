use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use std::time::Duration;

use crate::errors::HarnessError;
use crate::model::{ProviderId, RunOptions};
use crate::provider::ProviderAdapter;
use crate::session::{Session, SessionConfig};

pub(crate) struct HarnessInner {
    providers: HashMap<ProviderId, Arc<dyn ProviderAdapter>>,
    pub(crate) defaults: RunOptions,
}

impl HarnessInner {
    pub(crate) fn provider(&self, id: &ProviderId) -> Option<Arc<dyn ProviderAdapter>> {
        self.providers.get(id).cloned()
    }
}

/// Registered providers plus the run defaults every session starts from.
/// Clones share both.
#[derive(Clone)]
pub struct Harness {
    pub(crate) inner: Arc<HarnessInner>,
}

impl Harness {
    pub fn builder() -> HarnessBuilder {
        HarnessBuilder::default()
    }

    pub fn session(&self, config: SessionConfig) -> Session {
        Session::new(self.inner.clone(), config)
    }
}

#[derive(Default)]
pub struct HarnessBuilder {
    providers: Vec<Arc<dyn ProviderAdapter>>,
    defaults: RunOptions,
}

impl HarnessBuilder {
    pub fn register_provider(mut self, provider: Arc<dyn ProviderAdapter>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Timeout applied to runs that do not set their own.
    pub fn default_timeout(mut self, timeout: Duration) -> Self {
        self.defaults.timeout = Some(timeout);
        self
    }

    /// Lowest-priority options; session and run options override them.
    pub fn default_options(mut self, defaults: RunOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Fails on a zero default timeout or two adapters with the same id.
    pub fn build(self) -> Result<Harness, HarnessError> {
        if self.defaults.timeout == Some(Duration::ZERO) {
            return Err(HarnessError::Config("default timeout is zero".into()));
        }
        let mut providers: HashMap<ProviderId, Arc<dyn ProviderAdapter>> =
            HashMap::with_capacity(self.providers.len());
        for adapter in self.providers {
            match providers.entry(adapter.id()) {
                Entry::Occupied(slot) => {
                    return Err(HarnessError::Config(format!(
                        "duplicate provider registration: {}",
                        slot.key()
                    )));
                }
                Entry::Vacant(slot) => {
                    slot.insert(adapter);
                }
            }
        }
        Ok(Harness {
            inner: Arc::new(HarnessInner {
                providers,
                defaults: self.defaults,
            }),
        })
    }
}
