use std::fmt;
use std::time::Duration;

use crate::model::ProviderId;

/// What went wrong inside a provider call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderFailure {
    /// The provider answered with an error status or refused the prompt.
    Rejected { status: Option<u16> },
    /// No usable HTTP exchange happened.
    Transport,
    /// The reply was not the JSON the adapter expected.
    Protocol,
}

impl fmt::Display for ProviderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rejected { .. } => "provider error",
            Self::Transport => "transport error",
            Self::Protocol => "protocol error",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{failure} ({provider}): {message}")]
pub struct ProviderError {
    pub provider: ProviderId,
    pub failure: ProviderFailure,
    pub message: String,
}

impl ProviderError {
    fn new(
        provider: impl Into<ProviderId>,
        failure: ProviderFailure,
        message: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            failure,
            message: message.into(),
        }
    }

    pub fn provider(
        provider: impl Into<ProviderId>,
        message: impl Into<String>,
        status: Option<u16>,
    ) -> Self {
        Self::new(provider, ProviderFailure::Rejected { status }, message)
    }

    pub fn transport(provider: impl Into<ProviderId>, message: impl Into<String>) -> Self {
        Self::new(provider, ProviderFailure::Transport, message)
    }

    pub fn protocol(provider: impl Into<ProviderId>, message: impl Into<String>) -> Self {
        Self::new(provider, ProviderFailure::Protocol, message)
    }

    pub fn status_code(&self) -> Option<u16> {
        match self.failure {
            ProviderFailure::Rejected { status } => status,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HarnessError {
    #[error("config error: {0}")]
    Config(String),
    /// Rejected before any provider was called.
    #[error("validation error: {0}")]
    Validation(String),
    #[error("provider not found: {provider}")]
    ProviderNotFound { provider: ProviderId },
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("run timed out after {}ms", after.as_millis())]
    Timeout { after: Duration },
}

impl HarnessError {
    /// HTTP status the provider answered with, when the run got that far.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Provider(err) => err.status_code(),
            _ => None,
        }
    }
}
