use std::collections::{HashMap, HashSet};

use super::{BlockTypeDefinition, FieldSpec, Fields, SchemaError};

/// Registry: block type name -> definition, in registration order. Immutable once built;
/// share it as `Arc<SchemaRegistry>` with every component that needs lookups.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    types: Vec<BlockTypeDefinition>,
    index: HashMap<String, usize>,
    root: Option<BlockTypeDefinition>,
}

impl SchemaRegistry {
    pub fn builder() -> SchemaRegistryBuilder {
        SchemaRegistryBuilder::default()
    }

    pub fn lookup(&self, name: &str) -> Option<&BlockTypeDefinition> {
        self.index.get(name).map(|&i| &self.types[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All block types in registration order.
    pub fn all_types(&self) -> &[BlockTypeDefinition] {
        &self.types
    }

    /// Site-wide root field set, when one was registered. Not a block type.
    pub fn root(&self) -> Option<&BlockTypeDefinition> {
        self.root.as_ref()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Collects block definitions and validates them on [`build`](SchemaRegistryBuilder::build).
#[derive(Default)]
pub struct SchemaRegistryBuilder {
    types: Vec<BlockTypeDefinition>,
    root: Option<BlockTypeDefinition>,
}

impl SchemaRegistryBuilder {
    pub fn register(mut self, definition: BlockTypeDefinition) -> Self {
        self.types.push(definition);
        self
    }

    pub fn root(mut self, definition: BlockTypeDefinition) -> Self {
        self.root = Some(definition);
        self
    }

    /// Builds the registry, rejecting duplicate type names, duplicate option values and
    /// defaults for undeclared fields.
    pub fn build(self) -> Result<SchemaRegistry, SchemaError> {
        let mut index = HashMap::with_capacity(self.types.len());
        for (i, def) in self.types.iter().enumerate() {
            check_definition(def)?;
            if index.insert(def.name.clone(), i).is_some() {
                return Err(SchemaError::DuplicateType {
                    name: def.name.clone(),
                });
            }
        }
        if let Some(root) = &self.root {
            check_definition(root)?;
        }
        Ok(SchemaRegistry {
            types: self.types,
            index,
            root: self.root,
        })
    }
}

fn check_definition(def: &BlockTypeDefinition) -> Result<(), SchemaError> {
    if def.name.trim().is_empty() {
        return Err(SchemaError::EmptyTypeName);
    }
    check_options(&def.name, &def.fields)?;
    for key in def.default_props.keys() {
        if !def.fields.contains(key) {
            return Err(SchemaError::UndeclaredDefault {
                block: def.name.clone(),
                field: key.clone(),
            });
        }
    }
    Ok(())
}

fn check_options(block: &str, fields: &Fields) -> Result<(), SchemaError> {
    for field in fields.iter() {
        match &field.spec {
            FieldSpec::Enumerated { options, .. } => {
                let mut seen = HashSet::new();
                for option in options {
                    if !seen.insert(option.value.as_str()) {
                        return Err(SchemaError::DuplicateOptionValue {
                            block: block.to_string(),
                            field: field.name.clone(),
                            value: option.value.clone(),
                        });
                    }
                }
            }
            FieldSpec::Array { item_fields: nested } | FieldSpec::Object { sub_fields: nested } => {
                check_options(block, nested)?;
            }
            FieldSpec::Primitive { .. } | FieldSpec::Custom => {}
        }
    }
    Ok(())
}
