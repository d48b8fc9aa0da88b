use serde_json::json;

use pagebuilder_core::{BlockTypeDefinition, FieldSpec, Fields};

use super::props;

/// Site-wide settings edited on the page root (header, footer, social links).
pub(super) fn definition() -> BlockTypeDefinition {
    BlockTypeDefinition::new("root", "Site Settings")
        .with_fields(
            Fields::new()
                .labeled("siteName", "Site Name", FieldSpec::text())
                .labeled("logoUrl", "Logo URL (optional)", FieldSpec::text())
                .labeled(
                    "navLinks",
                    "Navigation Links",
                    FieldSpec::array(
                        Fields::new()
                            .field("label", FieldSpec::text())
                            .field("href", FieldSpec::text()),
                    ),
                )
                .labeled("ctaText", "CTA Button Text", FieldSpec::text())
                .labeled("ctaHref", "CTA Button Link", FieldSpec::text())
                .labeled("footerDescription", "Footer Description", FieldSpec::textarea())
                .labeled(
                    "footerLinks",
                    "Footer Link Columns",
                    FieldSpec::array(
                        Fields::new()
                            .field("title", FieldSpec::text())
                            .field("items", FieldSpec::textarea()),
                    ),
                )
                .labeled(
                    "socialLinks",
                    "Social Links",
                    FieldSpec::object(
                        Fields::new()
                            .labeled("facebook", "Facebook URL", FieldSpec::text())
                            .labeled("twitter", "Twitter URL", FieldSpec::text())
                            .labeled("linkedin", "LinkedIn URL", FieldSpec::text())
                            .labeled("github", "GitHub URL", FieldSpec::text()),
                    ),
                )
                .labeled("copyright", "Copyright Text", FieldSpec::text()),
        )
        .with_defaults(props(json!({
            "siteName": "Puck Demo",
            "logoUrl": "",
            "navLinks": [
                { "label": "Home", "href": "/" },
                { "label": "Services", "href": "/services" },
                { "label": "About", "href": "/about" },
                { "label": "Blog", "href": "/blog" },
                { "label": "Contact", "href": "/contact" },
            ],
            "ctaText": "Open Editor",
            "ctaHref": "/editor",
            "footerDescription": "The visual editor for React. Build beautiful pages without writing code.",
            "footerLinks": [
                { "title": "Product", "items": "Features\nPricing\nDemo\nEditor" },
                { "title": "Company", "items": "About\nBlog\nCareers\nContact" },
                { "title": "Resources", "items": "Documentation\nGitHub\nSupport" },
            ],
            "socialLinks": {
                "facebook": "https://facebook.com",
                "twitter": "https://twitter.com",
                "linkedin": "https://linkedin.com",
                "github": "https://github.com/puckeditor/puck",
            },
            "copyright": "© 2024 Puck Editor Demo. All rights reserved.",
        })))
}
