use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::json;
use tokio::sync::Mutex;
use tracing::info;

use pagebuilder_ai_harness::Harness;
use pagebuilder_ai_harness::vendors::openai::OpenAiProvider;
use pagebuilder_blocks::{
    BlockGenerator, GenerationConfig, GenerationPipeline, PipelineError, Principal, categories,
    default_registry,
};
use pagebuilder_core::{BlockValidator, InMemoryDocument, ValidationMode, describe as describe_schema};

use crate::files::{read_candidates, read_document, write_json};

pub fn describe(show_categories: bool) -> Result<(), Box<dyn Error>> {
    if show_categories {
        return write_json(None, &categories());
    }
    let registry = default_registry()?;
    print!("{}", describe_schema(&registry));
    Ok(())
}

pub fn validate(file: &Path, strict: bool) -> Result<(), Box<dyn Error>> {
    let registry = Arc::new(default_registry()?);
    let validator = BlockValidator::new(registry, validation_mode(strict));
    let outcome = validator.filter(read_candidates(file)?);
    let accepted: Vec<_> = outcome
        .accepted
        .iter()
        .map(|block| json!({ "type": block.block_type, "id": block.id() }))
        .collect();
    write_json(
        None,
        &json!({
            "accepted": accepted,
            "rejected": outcome.rejected,
        }),
    )
}

pub struct GenerateArgs {
    pub prompt: String,
    pub document: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub principal: Option<Principal>,
    pub strict: bool,
    pub blocks_only: bool,
}

pub async fn generate(args: GenerateArgs) -> Result<(), Box<dyn Error>> {
    let mut config = GenerationConfig::from_env();
    if args.strict {
        config.validation = ValidationMode::Strict;
    }
    let registry = Arc::new(default_registry()?);
    let harness = Harness::builder()
        .register_provider(Arc::new(OpenAiProvider::from_env()?))
        .build()?;
    let pipeline = GenerationPipeline::new(BlockGenerator::new(harness, registry.clone(), config)?);

    let page = read_document(args.document.as_deref())?;
    let document = Mutex::new(InMemoryDocument::new(page).with_registry(registry));

    let outcome = match pipeline
        .run(args.principal.as_ref(), &args.prompt, &document)
        .await
    {
        Ok(outcome) => outcome,
        Err(PipelineError::Generation(err)) => {
            eprintln!("{}", serde_json::to_string_pretty(&err.to_payload())?);
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };
    info!(
        event = "cli.generated",
        domain = "cli",
        inserted = outcome.inserted.len(),
        skipped = outcome.report.skipped.len(),
        unreserved = outcome.report.unreserved.len()
    );

    if args.blocks_only {
        return write_json(args.out.as_deref(), &outcome.response());
    }
    let document = document.into_inner().into_document();
    write_json(args.out.as_deref(), &document)
}

fn validation_mode(strict: bool) -> ValidationMode {
    if strict {
        ValidationMode::Strict
    } else {
        ValidationMode::Lenient
    }
}
