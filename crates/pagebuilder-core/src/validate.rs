//! Candidate block validation.
//!
//! The default [`ValidationMode::Lenient`] policy checks structural minimums only:
//! a non-empty `type` string, a non-empty `props` object and a non-empty string
//! `props.id`. It does not check that the type is registered or that props match
//! the field specs; renderers tolerate missing and extra props. Switching to
//! [`ValidationMode::Strict`] changes how much generated output is accepted, so
//! it stays opt-in.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::document::BlockInstance;
use crate::schema::{FieldSpec, Fields, PrimitiveKind, SchemaRegistry};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    #[default]
    Lenient,
    /// Also requires a registered type and props conforming to declared fields.
    Strict,
}

/// Accepted candidates plus how many were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome {
    pub accepted: Vec<BlockInstance>,
    pub rejected: usize,
}

#[derive(Debug, Clone)]
pub struct BlockValidator {
    registry: Arc<SchemaRegistry>,
    mode: ValidationMode,
}

impl BlockValidator {
    pub fn new(registry: Arc<SchemaRegistry>, mode: ValidationMode) -> Self {
        Self { registry, mode }
    }

    pub fn lenient(registry: Arc<SchemaRegistry>) -> Self {
        Self::new(registry, ValidationMode::Lenient)
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn is_valid(&self, candidate: &Value) -> bool {
        if !is_structurally_valid(candidate) {
            return false;
        }
        match self.mode {
            ValidationMode::Lenient => true,
            ValidationMode::Strict => self.conforms(candidate),
        }
    }

    /// Converts a valid candidate into a block. Fields other than `type` and
    /// `props` are dropped.
    pub fn accept(&self, candidate: Value) -> Option<BlockInstance> {
        if !self.is_valid(&candidate) {
            return None;
        }
        let Value::Object(mut object) = candidate else {
            return None;
        };
        let block_type = match object.remove("type") {
            Some(Value::String(s)) => s,
            _ => return None,
        };
        let props = match object.remove("props") {
            Some(Value::Object(props)) => props,
            _ => return None,
        };
        Some(BlockInstance::new(block_type, props))
    }

    /// Keeps valid candidates in their original relative order.
    pub fn filter(&self, candidates: Vec<Value>) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();
        for candidate in candidates {
            match self.accept(candidate) {
                Some(block) => outcome.accepted.push(block),
                None => outcome.rejected += 1,
            }
        }
        outcome
    }

    fn conforms(&self, candidate: &Value) -> bool {
        let Some(block_type) = candidate.get("type").and_then(Value::as_str) else {
            return false;
        };
        let Some(def) = self.registry.lookup(block_type) else {
            debug!(event = "validate.unregistered_type", domain = "schema", block_type);
            return false;
        };
        let Some(props) = candidate.get("props").and_then(Value::as_object) else {
            return false;
        };
        props_conform(&def.fields, props)
    }
}

/// The lenient structural check.
pub fn is_structurally_valid(candidate: &Value) -> bool {
    let has_type = candidate
        .get("type")
        .and_then(Value::as_str)
        .is_some_and(|t| !t.is_empty());
    let Some(props) = candidate.get("props").and_then(Value::as_object) else {
        return false;
    };
    let has_id = props
        .get("id")
        .and_then(Value::as_str)
        .is_some_and(|id| !id.is_empty());
    has_type && !props.is_empty() && has_id
}

fn props_conform(fields: &Fields, props: &Map<String, Value>) -> bool {
    props.iter().all(|(name, value)| match fields.get(name) {
        Some(spec) => value_conforms(spec, value),
        None => true,
    })
}

fn value_conforms(spec: &FieldSpec, value: &Value) -> bool {
    match spec {
        FieldSpec::Primitive { kind } => match kind {
            PrimitiveKind::Text | PrimitiveKind::Textarea => value.is_string(),
            PrimitiveKind::Number => match value {
                Value::Number(_) => true,
                Value::String(s) => s.trim().parse::<f64>().is_ok(),
                _ => false,
            },
        },
        FieldSpec::Enumerated { options, .. } => value
            .as_str()
            .is_some_and(|v| options.iter().any(|o| o.value == v)),
        FieldSpec::Array { item_fields } => value.as_array().is_some_and(|items| {
            items.iter().all(|item| {
                item.as_object()
                    .is_some_and(|item| props_conform(item_fields, item))
            })
        }),
        FieldSpec::Object { sub_fields } => value
            .as_object()
            .is_some_and(|object| props_conform(sub_fields, object)),
        FieldSpec::Custom => true,
    }
}
