use serde_json::json;

use pagebuilder_core::{BlockTypeDefinition, FieldSpec, Fields};

use super::{Category, SIZES, props};

pub(super) const CATEGORY: Category = Category {
    key: "interactive",
    title: "Interactive",
    components: &["Button", "Accordion", "Tabs"],
};

fn titled_content() -> Fields {
    Fields::new()
        .field("title", FieldSpec::text())
        .field("content", FieldSpec::textarea())
}

pub(super) fn button() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Button", "Button")
        .with_fields(
            Fields::new()
                .field("text", FieldSpec::text())
                .field("href", FieldSpec::text())
                .field(
                    "variant",
                    FieldSpec::select([
                        ("Primary", "primary"),
                        ("Secondary", "secondary"),
                        ("Outline", "outline"),
                        ("Ghost", "ghost"),
                    ]),
                )
                .field("size", FieldSpec::select(SIZES)),
        )
        .with_defaults(props(json!({
            "text": "Click me",
            "href": "#",
            "variant": "primary",
            "size": "medium",
        })))
}

pub(super) fn accordion() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Accordion", "Accordion")
        .with_fields(Fields::new().field("items", FieldSpec::array(titled_content())))
        .with_defaults(props(json!({
            "items": [
                { "title": "Section 1", "content": "Content for section 1 goes here." },
                { "title": "Section 2", "content": "Content for section 2 goes here." },
                { "title": "Section 3", "content": "Content for section 3 goes here." },
            ],
        })))
}

pub(super) fn tabs() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Tabs", "Tabs")
        .with_fields(Fields::new().field("tabs", FieldSpec::array(titled_content())))
        .with_defaults(props(json!({
            "tabs": [
                { "title": "Tab 1", "content": "Content for tab 1" },
                { "title": "Tab 2", "content": "Content for tab 2" },
                { "title": "Tab 3", "content": "Content for tab 3" },
            ],
        })))
}
