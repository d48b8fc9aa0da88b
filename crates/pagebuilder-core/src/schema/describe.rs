//! Plain-text schema description embedded in generation prompts.

use super::{Field, FieldSpec, Fields, SchemaRegistry};

/// Describes every block type and its generatable fields, in registry order.
///
/// ```text
/// ### Hero (Hero Section)
/// Fields:
///   - title: text
///   - alignment: radio [left, center]
/// ```
///
/// Enumerated fields list option values, array/object fields get a one-level
/// shape summary. Custom fields never appear, nested or not. The output only
/// depends on the registry, so it is stable across calls.
pub fn describe(registry: &SchemaRegistry) -> String {
    let mut lines: Vec<String> = Vec::new();

    for block in registry.all_types() {
        lines.push(format!("### {} ({})", block.name, block.label));
        lines.push("Fields:".to_string());
        for field in block.fields.generatable() {
            lines.push(describe_field(field));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

fn describe_field(field: &Field) -> String {
    let mut desc = format!("  - {}: {}", field.name, field.spec.kind_name());
    match &field.spec {
        FieldSpec::Enumerated { options, .. } => {
            let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
            desc.push_str(&format!(" [{}]", values.join(", ")));
        }
        FieldSpec::Array { item_fields } => {
            desc.push_str(&format!(" (array of {{{}}})", shape_summary(item_fields)));
        }
        FieldSpec::Object { sub_fields } => {
            desc.push_str(&format!(" (object {{{}}})", shape_summary(sub_fields)));
        }
        FieldSpec::Primitive { .. } | FieldSpec::Custom => {}
    }
    desc
}

fn shape_summary(fields: &Fields) -> String {
    fields
        .generatable()
        .map(|f| format!("{}:{}", f.name, f.spec.kind_name()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::BlockTypeDefinition;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::builder()
            .register(
                BlockTypeDefinition::new("Hero", "Hero Section").with_fields(
                    Fields::new()
                        .field("title", FieldSpec::text())
                        .field("alignment", FieldSpec::radio([("Left", "left"), ("Center", "center")])),
                ),
            )
            .register(
                BlockTypeDefinition::new("FAQ", "FAQ").with_fields(Fields::new().field(
                    "items",
                    FieldSpec::array(
                        Fields::new()
                            .field("question", FieldSpec::text())
                            .field("answer", FieldSpec::textarea()),
                    ),
                )),
            )
            .register(
                BlockTypeDefinition::new("RichTextBlock", "Rich Text").with_fields(
                    Fields::new()
                        .field("content", FieldSpec::custom())
                        .field("social", FieldSpec::object(
                            Fields::new()
                                .field("github", FieldSpec::text())
                                .field("embed", FieldSpec::custom()),
                        )),
                ),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn describes_blocks_in_registry_order() {
        let expected = "### Hero (Hero Section)\n\
Fields:\n  - title: text\n  - alignment: radio [left, center]\n\n\
### FAQ (FAQ)\n\
Fields:\n  - items: array (array of {question:text, answer:textarea})\n\n\
### RichTextBlock (Rich Text)\n\
Fields:\n  - social: object (object {github:text})\n";
        assert_eq!(describe(&registry()), expected);
    }

    #[test]
    fn custom_fields_never_appear() {
        let text = describe(&registry());
        assert!(!text.contains("content"));
        assert!(!text.contains("embed"));
        assert!(!text.contains("custom"));
    }

    #[test]
    fn output_is_deterministic() {
        let r = registry();
        assert_eq!(describe(&r), describe(&r));
    }
}
