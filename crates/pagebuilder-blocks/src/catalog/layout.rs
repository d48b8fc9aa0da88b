use serde_json::json;

use pagebuilder_core::{BlockTypeDefinition, FieldSpec, Fields};

use super::{COLUMNS, Category, SIZES, props};

pub(super) const CATEGORY: Category = Category {
    key: "layout",
    title: "Layout",
    components: &["Columns", "Spacer", "Divider"],
};

pub(super) fn columns() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Columns", "Columns")
        .with_fields(
            Fields::new()
                .field("columns", FieldSpec::select(COLUMNS))
                .field("gap", FieldSpec::select(SIZES)),
        )
        .with_defaults(props(json!({ "columns": "2", "gap": "medium" })))
}

pub(super) fn spacer() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Spacer", "Spacer")
        .with_fields(Fields::new().field(
            "size",
            FieldSpec::select([
                ("Extra Small", "xs"),
                ("Small", "sm"),
                ("Medium", "md"),
                ("Large", "lg"),
                ("Extra Large", "xl"),
            ]),
        ))
        .with_defaults(props(json!({ "size": "md" })))
}

pub(super) fn divider() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Divider", "Divider")
        .with_fields(
            Fields::new()
                .field(
                    "style",
                    FieldSpec::select([
                        ("Solid", "solid"),
                        ("Dashed", "dashed"),
                        ("Dotted", "dotted"),
                    ]),
                )
                .field(
                    "color",
                    FieldSpec::select([("Light", "light"), ("Medium", "medium"), ("Dark", "dark")]),
                ),
        )
        .with_defaults(props(json!({ "style": "solid", "color": "light" })))
}
