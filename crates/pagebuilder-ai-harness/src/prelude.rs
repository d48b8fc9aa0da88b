//! Common imports for typical harness usage.
pub use crate::{
    Harness, HarnessBuilder, HarnessError, InputPart, ModelRef, OutputPart, ProviderAdapter,
    ProviderError, ProviderFailure, ProviderId, ProviderRequest, ProviderResponse, RunBuilder,
    RunOutput, Session, SessionConfig,
};
