use serde_json::json;

use pagebuilder_core::{BlockTypeDefinition, FieldSpec, Fields};

use super::{Category, YES_NO, props};

pub(super) const CATEGORY: Category = Category {
    key: "cards",
    title: "Cards & Blocks",
    components: &["Card", "Alert", "CodeBlock"],
};

pub(super) fn card() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Card", "Card")
        .with_fields(
            Fields::new()
                .field("title", FieldSpec::text())
                .field("description", FieldSpec::textarea())
                .field("imageUrl", FieldSpec::text())
                .field("linkText", FieldSpec::text())
                .field("linkHref", FieldSpec::text()),
        )
        .with_defaults(props(json!({
            "title": "Card Title",
            "description": "This is a card description with some example text.",
            "imageUrl": "https://picsum.photos/400/200",
            "linkText": "Learn more",
            "linkHref": "#",
        })))
}

pub(super) fn code_block() -> BlockTypeDefinition {
    BlockTypeDefinition::new("CodeBlock", "Code Block")
        .with_fields(
            Fields::new()
                .field("code", FieldSpec::textarea())
                .field(
                    "language",
                    FieldSpec::select([
                        ("JavaScript", "javascript"),
                        ("TypeScript", "typescript"),
                        ("Python", "python"),
                        ("HTML", "html"),
                        ("CSS", "css"),
                        ("Bash", "bash"),
                    ]),
                )
                .field("showLineNumbers", FieldSpec::radio(YES_NO)),
        )
        .with_defaults(props(json!({
            "code": "const greeting = \"Hello, World!\";\nconsole.log(greeting);",
            "language": "javascript",
            "showLineNumbers": "true",
        })))
}

pub(super) fn alert() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Alert", "Alert")
        .with_fields(
            Fields::new()
                .field("title", FieldSpec::text())
                .field("message", FieldSpec::textarea())
                .field(
                    "type",
                    FieldSpec::select([
                        ("Info", "info"),
                        ("Success", "success"),
                        ("Warning", "warning"),
                        ("Error", "error"),
                    ]),
                ),
        )
        .with_defaults(props(json!({
            "title": "Information",
            "message": "This is an informational message.",
            "type": "info",
        })))
}
