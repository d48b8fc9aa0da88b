//! AI block generation: prompt construction, the request handler that turns a
//! prompt into validated blocks, and the pipeline that applies them to a
//! document in two phases.

mod config;
mod errors;
mod generator;
mod pipeline;
mod prompt;
#[cfg(test)]
mod test_support;

pub use config::{DEFAULT_MODEL, GenerationConfig};
pub use errors::{GenerationError, PipelineError};
pub use generator::{BlockGenerator, GenerationRequest, GenerationResponse, Principal};
pub use pipeline::{GenerationOutcome, GenerationPipeline};
pub use prompt::{PromptError, build_system_prompt, build_user_message};
