//! Generate-and-apply cycle against a shared document.
//!
//! The document lock is never held across the model call. With
//! `serialize_requests` on, a second lock (`gate`) is held for the whole cycle
//! so two prompts cannot interleave their reserve and populate phases, and a
//! later prompt sees the blocks an earlier one inserted as context.

use tokio::sync::Mutex;
use tracing::debug;

use pagebuilder_core::{BlockInstance, DocumentHandle, PopulateReport, reserve};

use super::errors::PipelineError;
use super::generator::{BlockGenerator, GenerationRequest, GenerationResponse, Principal};

/// What a cycle wrote to the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationOutcome {
    /// Blocks as inserted, including any regenerated ids.
    pub inserted: Vec<BlockInstance>,
    pub report: PopulateReport,
}

impl GenerationOutcome {
    /// The inserted blocks as a `{ "blocks": [...] }` body.
    pub fn response(&self) -> GenerationResponse {
        GenerationResponse {
            blocks: self.inserted.clone(),
        }
    }
}

pub struct GenerationPipeline {
    generator: BlockGenerator,
    gate: Option<Mutex<()>>,
}

impl GenerationPipeline {
    pub fn new(generator: BlockGenerator) -> Self {
        let gate = generator.config().serialize_requests.then(|| Mutex::new(()));
        Self { generator, gate }
    }

    pub fn generator(&self) -> &BlockGenerator {
        &self.generator
    }

    pub fn is_serialized(&self) -> bool {
        self.gate.is_some()
    }

    /// On error the document is left as it was.
    pub async fn run<D: DocumentHandle>(
        &self,
        principal: Option<&Principal>,
        prompt: &str,
        document: &Mutex<D>,
    ) -> Result<GenerationOutcome, PipelineError> {
        let _cycle = match &self.gate {
            Some(gate) => Some(gate.lock().await),
            None => None,
        };

        let current_blocks = {
            let doc = document.lock().await;
            block_types(&*doc)
        };
        let request = GenerationRequest::new(prompt).with_current_blocks(current_blocks);
        let blocks = self.generator.generate(principal, request).await?;
        if blocks.is_empty() {
            debug!(event = "pipeline.nothing_to_apply", domain = "generation");
            return Ok(GenerationOutcome::default());
        }

        let reservation = {
            let mut doc = document.lock().await;
            reserve(&mut *doc, blocks)?
        };
        // Let the editor render the placeholders before they are filled in.
        tokio::task::yield_now().await;
        let report = {
            let mut doc = document.lock().await;
            reservation.populate(&mut *doc)
        };

        debug!(
            event = "pipeline.applied",
            domain = "generation",
            base_index = reservation.base_index(),
            populated = report.populated,
            skipped = report.skipped.len(),
            unreserved = report.unreserved.len()
        );
        Ok(GenerationOutcome {
            inserted: reservation.into_blocks(),
            report,
        })
    }
}

fn block_types<D: DocumentHandle + ?Sized>(doc: &D) -> Vec<String> {
    (0..doc.len())
        .filter_map(|index| doc.block_at(index))
        .map(|block| block.block_type.clone())
        .collect()
}
