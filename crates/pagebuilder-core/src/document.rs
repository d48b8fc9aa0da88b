//! Page document model and the capability the mutator uses to edit a live document.
//!
//! The editor owns the real document. This crate only touches it through
//! [`DocumentHandle`], which exposes the two sanctioned writes: insert a
//! placeholder and replace a block's props. [`InMemoryDocument`] implements it
//! over a plain [`PageDocument`] the way the editor does (placeholders start
//! from the type's default props).

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::SchemaRegistry;

/// One block on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockInstance {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub props: Map<String, Value>,
}

impl BlockInstance {
    pub fn new(block_type: impl Into<String>, props: Map<String, Value>) -> Self {
        Self {
            block_type: block_type.into(),
            props,
        }
    }

    /// The `props.id` string, if present.
    pub fn id(&self) -> Option<&str> {
        self.props.get("id").and_then(Value::as_str)
    }
}

/// Site-wide settings stored next to the content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootData {
    #[serde(default)]
    pub props: Map<String, Value>,
}

/// A renderable page: root settings plus ordered blocks (top to bottom).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    #[serde(default)]
    pub root: RootData,
    #[serde(default)]
    pub content: Vec<BlockInstance>,
    /// Editor drop zones; carried through untouched.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub zones: Map<String, Value>,
}

impl PageDocument {
    /// Block type of every entry, in order. Used as generation context.
    pub fn block_types(&self) -> Vec<String> {
        self.content.iter().map(|b| b.block_type.clone()).collect()
    }
}

/// Failure of a document capability call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("index {index} out of range for document of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("block id already present in document: {id}")]
    DuplicateId { id: String },
}

/// Capability over a document owned by someone else.
pub trait DocumentHandle {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn block_at(&self, index: usize) -> Option<&BlockInstance>;

    /// Inserts a block of `block_type` carrying `id` at `index`. Other props are
    /// whatever the document fills in for a fresh block.
    fn insert_placeholder(
        &mut self,
        index: usize,
        block_type: &str,
        id: &str,
    ) -> Result<(), DocumentError>;

    /// Replaces type and props of the block at `index`.
    fn replace_props(
        &mut self,
        index: usize,
        block_type: &str,
        props: Map<String, Value>,
    ) -> Result<(), DocumentError>;
}

/// [`DocumentHandle`] over an owned [`PageDocument`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    document: PageDocument,
    registry: Option<Arc<SchemaRegistry>>,
    // Parallel to `document.content`: true while a slot only holds a placeholder.
    reserved: Vec<bool>,
}

impl InMemoryDocument {
    pub fn new(document: PageDocument) -> Self {
        let reserved = vec![false; document.content.len()];
        Self {
            document,
            registry: None,
            reserved,
        }
    }

    /// Placeholders get the registered type's default props, like a fresh block
    /// dropped in from the editor's palette.
    pub fn with_registry(mut self, registry: Arc<SchemaRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn document(&self) -> &PageDocument {
        &self.document
    }

    pub fn into_document(self) -> PageDocument {
        self.document
    }

    /// Number of slots inserted by `insert_placeholder` and not yet replaced.
    pub fn pending_reservations(&self) -> usize {
        self.reserved.iter().filter(|r| **r).count()
    }

    pub fn is_reserved(&self, index: usize) -> bool {
        self.reserved.get(index).copied().unwrap_or(false)
    }

    /// Blocks that are not waiting for their populate step.
    pub fn settled_content(&self) -> Vec<&BlockInstance> {
        self.document
            .content
            .iter()
            .zip(&self.reserved)
            .filter(|(_, reserved)| !**reserved)
            .map(|(block, _)| block)
            .collect()
    }

    /// Manual edit: appends a fully populated block.
    pub fn push(&mut self, block: BlockInstance) {
        self.document.content.push(block);
        self.reserved.push(false);
    }

    /// Manual edit: removes the block at `index`.
    pub fn remove(&mut self, index: usize) -> Option<BlockInstance> {
        if index >= self.document.content.len() {
            return None;
        }
        self.reserved.remove(index);
        Some(self.document.content.remove(index))
    }

    fn contains_id(&self, id: &str) -> bool {
        self.document.content.iter().any(|b| b.id() == Some(id))
    }
}

impl DocumentHandle for InMemoryDocument {
    fn len(&self) -> usize {
        self.document.content.len()
    }

    fn block_at(&self, index: usize) -> Option<&BlockInstance> {
        self.document.content.get(index)
    }

    fn insert_placeholder(
        &mut self,
        index: usize,
        block_type: &str,
        id: &str,
    ) -> Result<(), DocumentError> {
        let len = self.document.content.len();
        if index > len {
            return Err(DocumentError::IndexOutOfRange { index, len });
        }
        if self.contains_id(id) {
            return Err(DocumentError::DuplicateId { id: id.to_string() });
        }
        let mut props = self
            .registry
            .as_ref()
            .and_then(|r| r.lookup(block_type))
            .map(|def| def.default_props.clone())
            .unwrap_or_default();
        props.insert("id".to_string(), Value::String(id.to_string()));
        self.document
            .content
            .insert(index, BlockInstance::new(block_type, props));
        self.reserved.insert(index, true);
        Ok(())
    }

    fn replace_props(
        &mut self,
        index: usize,
        block_type: &str,
        props: Map<String, Value>,
    ) -> Result<(), DocumentError> {
        let len = self.document.content.len();
        let Some(slot) = self.document.content.get_mut(index) else {
            return Err(DocumentError::IndexOutOfRange { index, len });
        };
        slot.block_type = block_type.to_string();
        slot.props = props;
        self.reserved[index] = false;
        Ok(())
    }
}

/// Ids currently present in a document.
pub fn document_ids<D: DocumentHandle + ?Sized>(doc: &D) -> HashSet<String> {
    (0..doc.len())
        .filter_map(|i| doc.block_at(i).and_then(BlockInstance::id).map(str::to_string))
        .collect()
}

/// Reports content changes while ignoring slots still in their reserve phase, so a
/// half-applied batch never shows up as a diff.
#[derive(Debug, Clone)]
pub struct ContentChangeDetector {
    baseline: Vec<BlockInstance>,
}

impl ContentChangeDetector {
    pub fn new(doc: &InMemoryDocument) -> Self {
        Self {
            baseline: settled_snapshot(doc),
        }
    }

    pub fn has_changed(&self, doc: &InMemoryDocument) -> bool {
        settled_snapshot(doc) != self.baseline
    }

    /// Accepts the current settled content as the new baseline.
    pub fn reset(&mut self, doc: &InMemoryDocument) {
        self.baseline = settled_snapshot(doc);
    }
}

fn settled_snapshot(doc: &InMemoryDocument) -> Vec<BlockInstance> {
    doc.settled_content().into_iter().cloned().collect()
}
