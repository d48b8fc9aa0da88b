//! Built-in page blocks and AI block generation.
//!
//! [`default_registry`] builds the schema registry for every block the editor
//! offers. [`BlockGenerator`] asks a model for new blocks through the harness;
//! [`GenerationPipeline`] applies them to a live document.

pub mod ai_generate;
pub mod catalog;

pub use ai_generate::{
    BlockGenerator, GenerationConfig, GenerationError, GenerationOutcome, GenerationPipeline,
    GenerationRequest, GenerationResponse, PipelineError, Principal,
};
pub use catalog::{Category, categories, default_registry};
