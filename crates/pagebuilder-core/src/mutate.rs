//! # Two-phase insertion
//!
//! Generated blocks enter a live document in two steps:
//!
//! 1. **Reserve**: read the document length once (`base`), then insert a
//!    placeholder for block `i` at `base + i`, in increasing order. Placeholders
//!    carry the final type and id; other props are whatever the document gives a
//!    fresh block.
//! 2. **Populate**: once every placeholder is in, replace the props at each
//!    reserved index with the block's full props.
//!
//! Between the phases the document is transiently incomplete (right types and
//! ids, default props). Renderers must tolerate that; change detectors must not
//! treat it as final. See [`ContentChangeDetector`](crate::document::ContentChangeDetector).
//!
//! If a reserved slot is gone or holds a different id when populate runs, that
//! block is skipped and its placeholder stays as it is.
//!
//! If the document refuses a placeholder partway through the batch, reserving
//! stops there. The placeholders already in are kept in the reservation so
//! populate still completes them; the refused block and everything after it
//! are reported as unreserved. Only a refusal of the first placeholder fails
//! the reserve phase, and then the document is unchanged.

use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, warn};

use crate::block_id;
use crate::document::{BlockInstance, DocumentError, DocumentHandle, document_ids};

/// Placeholders inserted by [`reserve`], waiting for [`Reservation::populate`].
#[derive(Debug, Clone, PartialEq)]
#[must_use = "reserved placeholders stay incomplete until populate runs"]
pub struct Reservation {
    base_index: usize,
    blocks: Vec<BlockInstance>,
    unreserved: Vec<String>,
}

/// Result of the populate phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulateReport {
    pub populated: usize,
    /// Ids whose slot could not be found; their placeholders remain.
    pub skipped: Vec<String>,
    /// Ids the document refused a placeholder for; they were never inserted.
    pub unreserved: Vec<String>,
}

impl PopulateReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.unreserved.is_empty()
    }
}

impl Reservation {
    pub fn base_index(&self) -> usize {
        self.base_index
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks as they will be written, including any regenerated ids.
    pub fn blocks(&self) -> &[BlockInstance] {
        &self.blocks
    }

    pub fn unreserved(&self) -> &[String] {
        &self.unreserved
    }

    pub fn into_blocks(self) -> Vec<BlockInstance> {
        self.blocks
    }

    /// Replaces each placeholder's props with the full generated props.
    pub fn populate<D: DocumentHandle + ?Sized>(&self, doc: &mut D) -> PopulateReport {
        let mut report = PopulateReport {
            unreserved: self.unreserved.clone(),
            ..PopulateReport::default()
        };
        for (offset, block) in self.blocks.iter().enumerate() {
            let index = self.base_index + offset;
            let id = block.id().unwrap_or_default();
            let slot_matches = doc.block_at(index).and_then(BlockInstance::id) == Some(id);
            if !slot_matches {
                warn!(
                    event = "mutate.populate_skipped",
                    domain = "document",
                    index,
                    block_id = id,
                    reason = "slot_moved"
                );
                report.skipped.push(id.to_string());
                continue;
            }
            match doc.replace_props(index, &block.block_type, block.props.clone()) {
                Ok(()) => report.populated += 1,
                Err(err) => {
                    warn!(
                        event = "mutate.populate_skipped",
                        domain = "document",
                        index,
                        block_id = id,
                        error = %err
                    );
                    report.skipped.push(id.to_string());
                }
            }
        }
        debug!(
            event = "mutate.populated",
            domain = "document",
            base_index = self.base_index,
            populated = report.populated,
            skipped = report.skipped.len()
        );
        report
    }
}

/// Reserve phase. Ids that are malformed, or already exist in the document (or
/// earlier in the batch), are replaced with fresh ones before anything is inserted.
///
/// Errors only when the first placeholder is refused; see the module docs.
pub fn reserve<D: DocumentHandle + ?Sized>(
    doc: &mut D,
    blocks: Vec<BlockInstance>,
) -> Result<Reservation, DocumentError> {
    let base_index = doc.len();
    let mut seen = document_ids(&*doc);
    let mut blocks: Vec<BlockInstance> = blocks
        .into_iter()
        .map(|block| ensure_unique_id(block, &mut seen))
        .collect();

    let mut unreserved = Vec::new();
    for offset in 0..blocks.len() {
        let block = &blocks[offset];
        let id = block.id().unwrap_or_default();
        let Err(err) = doc.insert_placeholder(base_index + offset, &block.block_type, id) else {
            continue;
        };
        if offset == 0 {
            return Err(err);
        }
        unreserved = blocks
            .split_off(offset)
            .iter()
            .map(|block| block.id().unwrap_or_default().to_string())
            .collect();
        warn!(
            event = "mutate.reserve_stopped",
            domain = "document",
            index = base_index + offset,
            error = %err,
            unreserved = ?unreserved
        );
        break;
    }
    debug!(
        event = "mutate.reserved",
        domain = "document",
        base_index,
        count = blocks.len()
    );
    Ok(Reservation {
        base_index,
        blocks,
        unreserved,
    })
}

/// Reserve then populate, with nothing in between.
pub fn apply_generated<D: DocumentHandle + ?Sized>(
    doc: &mut D,
    blocks: Vec<BlockInstance>,
) -> Result<PopulateReport, DocumentError> {
    let reservation = reserve(doc, blocks)?;
    Ok(reservation.populate(doc))
}

fn ensure_unique_id(mut block: BlockInstance, seen: &mut HashSet<String>) -> BlockInstance {
    let current = block.id().filter(|id| !id.is_empty()).map(str::to_string);
    let id = match current {
        Some(id) if !seen.contains(&id) && block_id::is_well_formed(&id, &block.block_type) => id,
        previous => {
            let mut fresh = block_id::generate(&block.block_type);
            while seen.contains(&fresh) {
                fresh = block_id::generate(&block.block_type);
            }
            warn!(
                event = "mutate.id_regenerated",
                domain = "document",
                block_type = block.block_type.as_str(),
                previous = ?previous,
                id = fresh.as_str()
            );
            block
                .props
                .insert("id".to_string(), Value::String(fresh.clone()));
            fresh
        }
    };
    seen.insert(id);
    block
}
