//! # Block schema
//!
//! A block type is a named set of typed fields plus the default props an editor
//! uses when a block of that type is first inserted. Field shapes are a closed
//! set ([`FieldSpec`]) so adding a new kind is caught everywhere it matters.
//!
//! ## Nesting
//!
//! The built-in catalog nests at most two levels (an array or object field
//! holding primitive/enumerated sub-fields). The types allow deeper nesting;
//! consumers such as [`describe`] summarize one level and ignore the rest.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod describe;
pub mod registry;

pub use describe::describe;
pub use registry::{SchemaRegistry, SchemaRegistryBuilder};

/// Primitive field kinds edited with a plain input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Text,
    Textarea,
    Number,
}

/// Widget used for an enumerated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceKind {
    Select,
    Radio,
}

/// One allowed value of an enumerated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

impl FieldOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Declared shape of one configurable property of a block type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldSpec {
    Primitive {
        kind: PrimitiveKind,
    },
    Enumerated {
        kind: ChoiceKind,
        options: Vec<FieldOption>,
    },
    /// Homogeneous list of structured items.
    Array {
        item_fields: Fields,
    },
    /// Nested structured value.
    Object {
        sub_fields: Fields,
    },
    /// Opaque value edited by an external widget. Its shape is not declared, so
    /// it is never offered to an automated generator.
    Custom,
}

impl FieldSpec {
    pub fn text() -> Self {
        FieldSpec::Primitive {
            kind: PrimitiveKind::Text,
        }
    }

    pub fn textarea() -> Self {
        FieldSpec::Primitive {
            kind: PrimitiveKind::Textarea,
        }
    }

    pub fn number() -> Self {
        FieldSpec::Primitive {
            kind: PrimitiveKind::Number,
        }
    }

    /// Select field from `(label, value)` pairs.
    pub fn select<L, V>(options: impl IntoIterator<Item = (L, V)>) -> Self
    where
        L: Into<String>,
        V: Into<String>,
    {
        FieldSpec::Enumerated {
            kind: ChoiceKind::Select,
            options: collect_options(options),
        }
    }

    /// Radio field from `(label, value)` pairs.
    pub fn radio<L, V>(options: impl IntoIterator<Item = (L, V)>) -> Self
    where
        L: Into<String>,
        V: Into<String>,
    {
        FieldSpec::Enumerated {
            kind: ChoiceKind::Radio,
            options: collect_options(options),
        }
    }

    pub fn array(item_fields: Fields) -> Self {
        FieldSpec::Array { item_fields }
    }

    pub fn object(sub_fields: Fields) -> Self {
        FieldSpec::Object { sub_fields }
    }

    pub fn custom() -> Self {
        FieldSpec::Custom
    }

    /// Editor kind name (`text`, `select`, `array`, ...).
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldSpec::Primitive { kind } => match kind {
                PrimitiveKind::Text => "text",
                PrimitiveKind::Textarea => "textarea",
                PrimitiveKind::Number => "number",
            },
            FieldSpec::Enumerated { kind, .. } => match kind {
                ChoiceKind::Select => "select",
                ChoiceKind::Radio => "radio",
            },
            FieldSpec::Array { .. } => "array",
            FieldSpec::Object { .. } => "object",
            FieldSpec::Custom => "custom",
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, FieldSpec::Custom)
    }

    /// Allowed option values for enumerated fields.
    pub fn option_values(&self) -> Option<impl Iterator<Item = &str>> {
        match self {
            FieldSpec::Enumerated { options, .. } => {
                Some(options.iter().map(|o| o.value.as_str()))
            }
            _ => None,
        }
    }

    /// Sub-fields of array items or object values.
    pub fn nested_fields(&self) -> Option<&Fields> {
        match self {
            FieldSpec::Array { item_fields } => Some(item_fields),
            FieldSpec::Object { sub_fields } => Some(sub_fields),
            _ => None,
        }
    }
}

fn collect_options<L, V>(options: impl IntoIterator<Item = (L, V)>) -> Vec<FieldOption>
where
    L: Into<String>,
    V: Into<String>,
{
    options
        .into_iter()
        .map(|(label, value)| FieldOption::new(label, value))
        .collect()
}

/// A named field inside a block type or a nested field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// Display label shown in the editor; never part of the prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub spec: FieldSpec,
}

/// Ordered field set. Declaration order is significant for prompts and forms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(Vec<Field>);

impl Fields {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a field. A later field with the same name replaces the earlier
    /// one in place.
    pub fn field(self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.push(Field {
            name: name.into(),
            label: None,
            spec,
        })
    }

    pub fn labeled(self, name: impl Into<String>, label: impl Into<String>, spec: FieldSpec) -> Self {
        self.push(Field {
            name: name.into(),
            label: Some(label.into()),
            spec,
        })
    }

    fn push(mut self, field: Field) -> Self {
        match self.0.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.0.push(field),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.0.iter().find(|f| f.name == name).map(|f| &f.spec)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.0.iter()
    }

    /// Fields a generator may fill (everything except [`FieldSpec::Custom`]).
    pub fn generatable(&self) -> impl Iterator<Item = &Field> {
        self.0.iter().filter(|f| !f.spec.is_custom())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Static definition of one block type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockTypeDefinition {
    pub name: String,
    pub label: String,
    pub fields: Fields,
    #[serde(default)]
    pub default_props: Map<String, Value>,
}

impl BlockTypeDefinition {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            fields: Fields::new(),
            default_props: Map::new(),
        }
    }

    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_defaults(mut self, defaults: Map<String, Value>) -> Self {
        self.default_props = defaults;
        self
    }

    /// Props as a tolerant renderer sees them: defaults first, then the given
    /// props on top. Unknown props are kept.
    pub fn resolve_props(&self, props: &Map<String, Value>) -> Map<String, Value> {
        let mut resolved = self.default_props.clone();
        for (key, value) in props {
            resolved.insert(key.clone(), value.clone());
        }
        resolved
    }
}

/// Registry construction failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("block type name must not be empty")]
    EmptyTypeName,
    #[error("duplicate block type: {name}")]
    DuplicateType { name: String },
    #[error("duplicate option value {value:?} in {block}.{field}")]
    DuplicateOptionValue {
        block: String,
        field: String,
        value: String,
    },
    #[error("default prop {field:?} of {block} has no declared field")]
    UndeclaredDefault { block: String, field: String },
}
