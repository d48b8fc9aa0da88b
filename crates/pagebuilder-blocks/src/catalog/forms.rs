use serde_json::json;

use pagebuilder_core::{BlockTypeDefinition, FieldSpec, Fields};

use super::{Category, props};

pub(super) const CATEGORY: Category = Category {
    key: "forms",
    title: "Forms",
    components: &["Newsletter", "ContactForm"],
};

pub(super) fn newsletter() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Newsletter", "Newsletter")
        .with_fields(
            Fields::new()
                .field("title", FieldSpec::text())
                .field("subtitle", FieldSpec::textarea())
                .field("buttonText", FieldSpec::text())
                .field("placeholder", FieldSpec::text()),
        )
        .with_defaults(props(json!({
            "title": "Subscribe to Our Newsletter",
            "subtitle": "Get the latest news and updates delivered to your inbox.",
            "buttonText": "Subscribe",
            "placeholder": "Enter your email",
        })))
}

pub(super) fn contact_form() -> BlockTypeDefinition {
    BlockTypeDefinition::new("ContactForm", "Contact Form")
        .with_fields(
            Fields::new()
                .field("title", FieldSpec::text())
                .field("subtitle", FieldSpec::textarea())
                .field("buttonText", FieldSpec::text()),
        )
        .with_defaults(props(json!({
            "title": "Get in Touch",
            "subtitle": "We'd love to hear from you. Send us a message!",
            "buttonText": "Send Message",
        })))
}
