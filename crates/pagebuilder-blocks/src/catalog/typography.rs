use serde_json::json;

use pagebuilder_core::{BlockTypeDefinition, FieldSpec, Fields};

use super::{ALIGN, Category, SIZES, props};

pub(super) const CATEGORY: Category = Category {
    key: "typography",
    title: "Typography",
    components: &["Heading", "Text", "Badge", "RichTextBlock"],
};

pub(super) fn heading() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Heading", "Heading")
        .with_fields(
            Fields::new()
                .field("text", FieldSpec::text())
                .field(
                    "level",
                    FieldSpec::select([("H1", "h1"), ("H2", "h2"), ("H3", "h3"), ("H4", "h4")]),
                )
                .field("align", FieldSpec::radio(ALIGN)),
        )
        .with_defaults(props(json!({
            "text": "Heading",
            "level": "h2",
            "align": "left",
        })))
}

pub(super) fn text() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Text", "Text")
        .with_fields(
            Fields::new()
                .field("text", FieldSpec::textarea())
                .field("size", FieldSpec::select(SIZES))
                .field("align", FieldSpec::radio(ALIGN)),
        )
        .with_defaults(props(json!({
            "text": "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
            "size": "medium",
            "align": "left",
        })))
}

pub(super) fn badge() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Badge", "Badge")
        .with_fields(
            Fields::new().field("text", FieldSpec::text()).field(
                "variant",
                FieldSpec::select([
                    ("Default", "default"),
                    ("Primary", "primary"),
                    ("Success", "success"),
                    ("Warning", "warning"),
                    ("Error", "error"),
                ]),
            ),
        )
        .with_defaults(props(json!({
            "text": "New",
            "variant": "primary",
        })))
}

/// `content` holds HTML edited through a dedicated widget, so it is custom.
pub(super) fn rich_text_block() -> BlockTypeDefinition {
    BlockTypeDefinition::new("RichTextBlock", "Rich Text")
        .with_fields(
            Fields::new()
                .labeled("content", "Content", FieldSpec::custom())
                .labeled(
                    "maxWidth",
                    "Max Width",
                    FieldSpec::select([
                        ("Small (36rem)", "small"),
                        ("Medium (48rem)", "medium"),
                        ("Large (64rem)", "large"),
                        ("Full Width", "full"),
                    ]),
                )
                .labeled(
                    "padding",
                    "Padding",
                    FieldSpec::select([
                        ("None", "none"),
                        ("Small", "small"),
                        ("Medium", "medium"),
                        ("Large", "large"),
                    ]),
                ),
        )
        .with_defaults(props(json!({
            "content": "<p>Start writing your content here...</p>",
            "maxWidth": "medium",
            "padding": "medium",
        })))
}
