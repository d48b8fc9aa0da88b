use serde_json::json;

use pagebuilder_core::{BlockTypeDefinition, FieldSpec, Fields};

use super::{Category, YES_NO, props};

pub(super) const CATEGORY: Category = Category {
    key: "blog",
    title: "Blog",
    components: &["BlogList"],
};

/// Post listing; the posts themselves come from storage at render time.
pub(super) fn blog_list() -> BlockTypeDefinition {
    BlockTypeDefinition::new("BlogList", "Blog List")
        .with_fields(
            Fields::new()
                .field("title", FieldSpec::text())
                .field("subtitle", FieldSpec::textarea())
                .field("showCategories", FieldSpec::radio(YES_NO))
                .field("showFeatured", FieldSpec::radio(YES_NO))
                .field("postsPerPage", FieldSpec::number())
                .field(
                    "layout",
                    FieldSpec::radio([("Grid", "grid"), ("List", "list")]),
                ),
        )
        .with_defaults(props(json!({
            "title": "Latest Articles",
            "subtitle": "Insights and tutorials from our team",
            "showCategories": "true",
            "showFeatured": "true",
            "postsPerPage": 6,
            "layout": "grid",
        })))
}
