//! Single-shot model calls behind a provider-neutral API.
//!
//! A `Harness` holds registered providers and default `RunOptions`. Callers
//! open a `Session` per principal and start one `RunBuilder` per request.
//! Nothing is kept between runs. Vendor-only request fields live under
//! `vendors::*`.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use pagebuilder_ai_harness::prelude::*;
//! use pagebuilder_ai_harness::vendors::openai::{
//!     OpenAiProvider, OpenAiRequestOptions, OpenAiRunBuilderExt,
//! };
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), HarnessError> {
//! let harness = Harness::builder()
//!     .register_provider(Arc::new(OpenAiProvider::from_env()?))
//!     .default_timeout(std::time::Duration::from_secs(30))
//!     .build()?;
//!
//! let reply = harness
//!     .session(SessionConfig::named("alice"))
//!     .run(ModelRef::new("openai", "gpt-4o-mini"))
//!     .system_prompt("Reply with {\"blocks\": [...]} only.")
//!     .user_text("Create a hero section for a coffee shop")
//!     .json_object()
//!     .openai_options(OpenAiRequestOptions::default().user("alice"))
//!     .collect_text()
//!     .await?;
//!
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

pub mod content;
pub mod errors;
pub mod harness;
pub mod model;
pub mod prelude;
pub mod provider;
pub mod run;
pub mod session;
pub mod vendors;

pub use content::{InputPart, OutputPart, RunOutput, TokenUsage};
pub use errors::{HarnessError, ProviderError, ProviderFailure};
pub use harness::{Harness, HarnessBuilder};
pub use model::{ModelRef, ProviderId, ResponseFormat, RunOptions};
pub use provider::{ProviderAdapter, ProviderRequest, ProviderResponse, ProviderResponseMeta};
pub use run::RunBuilder;
pub use session::{Session, SessionConfig};
