//! Built-in page block catalog.
//!
//! Definitions live next to the other blocks of their editor category; the
//! registration order below is the order the editor and the prompt list them.

mod blog;
mod cards;
mod forms;
mod interactive;
mod layout;
mod media;
mod misc;
mod navigation;
mod root;
mod sections;
mod typography;

use serde_json::{Map, Value};

use pagebuilder_core::{SchemaError, SchemaRegistry};

pub(crate) const ALIGN: [(&str, &str); 3] =
    [("Left", "left"), ("Center", "center"), ("Right", "right")];
pub(crate) const SIZES: [(&str, &str); 3] =
    [("Small", "small"), ("Medium", "medium"), ("Large", "large")];
pub(crate) const COLUMNS: [(&str, &str); 3] =
    [("2 Columns", "2"), ("3 Columns", "3"), ("4 Columns", "4")];
pub(crate) const YES_NO: [(&str, &str); 2] = [("Yes", "true"), ("No", "false")];

/// Object literal to a props map; anything else yields an empty map.
pub(crate) fn props(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Editor palette grouping. Purely presentational; generation ignores it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Category {
    pub key: &'static str,
    pub title: &'static str,
    pub components: &'static [&'static str],
}

/// The editor palette, in display order.
pub fn categories() -> Vec<Category> {
    vec![
        typography::CATEGORY,
        layout::CATEGORY,
        media::CATEGORY,
        interactive::CATEGORY,
        cards::CATEGORY,
        sections::CATEGORY,
        forms::CATEGORY,
        navigation::CATEGORY,
        misc::CATEGORY,
        blog::CATEGORY,
    ]
}

/// Registry with every built-in block type plus the site root fields.
pub fn default_registry() -> Result<SchemaRegistry, SchemaError> {
    SchemaRegistry::builder()
        .root(root::definition())
        .register(typography::heading())
        .register(typography::text())
        .register(interactive::button())
        .register(cards::card())
        .register(sections::hero())
        .register(sections::features())
        .register(sections::testimonials())
        .register(sections::stats())
        .register(sections::pricing())
        .register(sections::team())
        .register(sections::faq())
        .register(sections::cta())
        .register(navigation::footer())
        .register(media::image_block())
        .register(layout::columns())
        .register(layout::spacer())
        .register(layout::divider())
        .register(media::video_embed())
        .register(cards::code_block())
        .register(cards::alert())
        .register(typography::badge())
        .register(misc::avatar())
        .register(misc::progress_bar())
        .register(interactive::accordion())
        .register(interactive::tabs())
        .register(sections::timeline())
        .register(media::gallery())
        .register(forms::newsletter())
        .register(forms::contact_form())
        .register(navigation::social_links())
        .register(navigation::logo_cloud())
        .register(navigation::breadcrumbs())
        .register(blog::blog_list())
        .register(typography::rich_text_block())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagebuilder_core::FieldSpec;

    #[test]
    fn default_registry_builds_with_every_block_type() {
        let registry = default_registry().expect("catalog is valid");
        assert_eq!(registry.len(), 34);
        let names: Vec<&str> = registry.all_types().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(&names[..5], &["Heading", "Text", "Button", "Card", "Hero"]);
        assert_eq!(names.last(), Some(&"RichTextBlock"));
    }

    #[test]
    fn every_category_member_is_registered_exactly_once() {
        let registry = default_registry().expect("catalog is valid");
        let mut listed: Vec<&str> = categories()
            .iter()
            .flat_map(|c| c.components.iter().copied())
            .collect();
        listed.sort_unstable();
        let before = listed.len();
        listed.dedup();
        assert_eq!(before, listed.len(), "a block appears in two categories");
        assert_eq!(listed.len(), registry.len());
        assert!(listed.iter().all(|name| registry.contains(name)));
    }

    #[test]
    fn defaults_only_name_declared_fields() {
        let registry = default_registry().expect("catalog is valid");
        for def in registry.all_types() {
            for key in def.default_props.keys() {
                assert!(def.fields.contains(key), "{}.{key} undeclared", def.name);
            }
        }
    }

    #[test]
    fn rich_text_content_is_the_only_custom_field() {
        let registry = default_registry().expect("catalog is valid");
        let custom: Vec<String> = registry
            .all_types()
            .iter()
            .flat_map(|d| {
                d.fields
                    .iter()
                    .filter(|f| matches!(f.spec, FieldSpec::Custom))
                    .map(move |f| format!("{}.{}", d.name, f.name))
            })
            .collect();
        assert_eq!(custom, vec!["RichTextBlock.content".to_string()]);
    }

    #[test]
    fn root_fields_stay_out_of_block_types() {
        let registry = default_registry().expect("catalog is valid");
        let root = registry.root().expect("root definition");
        assert!(root.fields.contains("navLinks"));
        assert!(!registry.contains(&root.name));
    }
}
