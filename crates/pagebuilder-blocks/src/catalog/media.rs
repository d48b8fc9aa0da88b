use serde_json::json;

use pagebuilder_core::{BlockTypeDefinition, FieldSpec, Fields};

use super::{COLUMNS, Category, props};

pub(super) const CATEGORY: Category = Category {
    key: "media",
    title: "Media",
    components: &["ImageBlock", "VideoEmbed", "Gallery"],
};

pub(super) fn image_block() -> BlockTypeDefinition {
    BlockTypeDefinition::new("ImageBlock", "Image")
        .with_fields(
            Fields::new()
                .field("src", FieldSpec::text())
                .field("alt", FieldSpec::text())
                .field("caption", FieldSpec::text())
                .field(
                    "rounded",
                    FieldSpec::radio([
                        ("None", "none"),
                        ("Small", "small"),
                        ("Large", "large"),
                        ("Full", "full"),
                    ]),
                ),
        )
        .with_defaults(props(json!({
            "src": "https://picsum.photos/800/400",
            "alt": "Image description",
            "caption": "",
            "rounded": "small",
        })))
}

pub(super) fn video_embed() -> BlockTypeDefinition {
    BlockTypeDefinition::new("VideoEmbed", "Video Embed")
        .with_fields(
            Fields::new()
                .field("url", FieldSpec::text())
                .field("title", FieldSpec::text())
                .field(
                    "aspectRatio",
                    FieldSpec::select([("16:9", "16/9"), ("4:3", "4/3"), ("1:1", "1/1")]),
                ),
        )
        .with_defaults(props(json!({
            "url": "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "title": "Video",
            "aspectRatio": "16/9",
        })))
}

pub(super) fn gallery() -> BlockTypeDefinition {
    let images: Vec<_> = (1..=6)
        .map(|n| {
            json!({
                "src": format!("https://picsum.photos/400/300?random={n}"),
                "alt": format!("Gallery image {n}"),
            })
        })
        .collect();
    BlockTypeDefinition::new("Gallery", "Gallery")
        .with_fields(
            Fields::new()
                .field(
                    "images",
                    FieldSpec::array(
                        Fields::new()
                            .field("src", FieldSpec::text())
                            .field("alt", FieldSpec::text()),
                    ),
                )
                .field("columns", FieldSpec::select(COLUMNS)),
        )
        .with_defaults(props(json!({ "images": images, "columns": "3" })))
}
