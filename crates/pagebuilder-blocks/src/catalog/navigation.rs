use serde_json::json;

use pagebuilder_core::{BlockTypeDefinition, FieldSpec, Fields};

use super::{Category, props};

pub(super) const CATEGORY: Category = Category {
    key: "navigation",
    title: "Navigation & Social",
    components: &["Footer", "SocialLinks", "LogoCloud", "Breadcrumbs"],
};

pub(super) fn footer() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Footer", "Footer")
        .with_fields(
            Fields::new()
                .field("companyName", FieldSpec::text())
                .field("description", FieldSpec::textarea())
                .field(
                    "links",
                    FieldSpec::array(
                        Fields::new()
                            .field("title", FieldSpec::text())
                            .field("items", FieldSpec::textarea()),
                    ),
                )
                .field("copyright", FieldSpec::text()),
        )
        .with_defaults(props(json!({
            "companyName": "Acme Inc",
            "description": "Building amazing products for the modern web.",
            "links": [
                { "title": "Product", "items": "Features\nPricing\nDocumentation\nChangelog" },
                { "title": "Company", "items": "About\nBlog\nCareers\nPress" },
                { "title": "Legal", "items": "Privacy\nTerms\nCookies\nLicenses" },
            ],
            "copyright": "© 2024 Acme Inc. All rights reserved.",
        })))
}

pub(super) fn social_links() -> BlockTypeDefinition {
    let networks = [
        "facebook",
        "twitter",
        "instagram",
        "linkedin",
        "youtube",
        "github",
    ];
    let fields = networks
        .iter()
        .fold(Fields::new(), |fields, network| {
            fields.field(*network, FieldSpec::text())
        });
    BlockTypeDefinition::new("SocialLinks", "Social Links")
        .with_fields(fields)
        .with_defaults(props(json!({
            "facebook": "https://facebook.com",
            "twitter": "https://twitter.com",
            "instagram": "https://instagram.com",
            "linkedin": "https://linkedin.com",
            "youtube": "",
            "github": "https://github.com",
        })))
}

pub(super) fn logo_cloud() -> BlockTypeDefinition {
    let logos: Vec<_> = ["Google", "Microsoft", "Amazon", "Meta", "Apple"]
        .into_iter()
        .map(|name| json!({ "name": name, "url": "" }))
        .collect();
    BlockTypeDefinition::new("LogoCloud", "Logo Cloud")
        .with_fields(
            Fields::new().field("title", FieldSpec::text()).field(
                "logos",
                FieldSpec::array(
                    Fields::new()
                        .field("name", FieldSpec::text())
                        .field("url", FieldSpec::text()),
                ),
            ),
        )
        .with_defaults(props(json!({
            "title": "Trusted by Leading Companies",
            "logos": logos,
        })))
}

pub(super) fn breadcrumbs() -> BlockTypeDefinition {
    BlockTypeDefinition::new("Breadcrumbs", "Breadcrumbs")
        .with_fields(Fields::new().field(
            "items",
            FieldSpec::array(
                Fields::new()
                    .field("label", FieldSpec::text())
                    .field("href", FieldSpec::text()),
            ),
        ))
        .with_defaults(props(json!({
            "items": [
                { "label": "Home", "href": "/" },
                { "label": "Products", "href": "/products" },
                { "label": "Current Page", "href": "" },
            ],
        })))
}
