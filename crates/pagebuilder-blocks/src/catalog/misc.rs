use serde_json::json;

use pagebuilder_core::{BlockTypeDefinition, FieldSpec, Fields};

use super::{Category, SIZES, YES_NO, props};

pub(super) const CATEGORY: Category = Category {
    key: "misc",
    title: "Misc",
    components: &["Avatar", "ProgressBar"],
};

pub(super) fn avatar() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Avatar", "Avatar")
        .with_fields(
            Fields::new()
                .field("src", FieldSpec::text())
                .field("name", FieldSpec::text())
                .field("size", FieldSpec::select(SIZES)),
        )
        .with_defaults(props(json!({
            "src": "https://i.pravatar.cc/100",
            "name": "John Doe",
            "size": "medium",
        })))
}

pub(super) fn progress_bar() -> BlockTypeDefinition {
    BlockTypeDefinition::new("ProgressBar", "Progress Bar")
        .with_fields(
            Fields::new()
                .field("value", FieldSpec::number())
                .field("label", FieldSpec::text())
                .field("showValue", FieldSpec::radio(YES_NO))
                .field(
                    "color",
                    FieldSpec::select([
                        ("Primary", "primary"),
                        ("Success", "success"),
                        ("Warning", "warning"),
                        ("Error", "error"),
                    ]),
                ),
        )
        .with_defaults(props(json!({
            "value": 65,
            "label": "Progress",
            "showValue": "true",
            "color": "primary",
        })))
}
