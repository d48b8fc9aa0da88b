//! Prompt construction for block generation.

use handlebars::Handlebars;
use serde_json::json;

use pagebuilder_core::{SchemaRegistry, describe};

const SYSTEM_TEMPLATE_NAME: &str = "system_prompt";

const SYSTEM_TEMPLATE: &str = r#"You are an AI assistant for a visual page builder (Puck Editor).
Your job is to generate page blocks based on user descriptions.

## Available Block Types

{{schema}}

## Output Format

You MUST return a valid JSON object with this structure:
{
  "blocks": [
    {
      "type": "BlockType",
      "props": {
        "id": "BlockType-a1b2c3d4",
        ... all required props for this block type
      }
    }
  ]
}

## Rules

{{rules}}

## Examples

User: "{{example_prompt}}"
Response:
{{example_response}}"#;

const RULES: [&str; 11] = [
    "Each block MUST have an \"id\" in props. Format: \"{Type}-{random8chars}\" (e.g., \"Hero-a1b2c3d4\")",
    "Use ONLY block types from the list above",
    "Fill ALL fields for each block with meaningful, relevant content",
    "For \"array\" fields, create 2-4 items with realistic content",
    "For \"select\" and \"radio\" fields, use ONLY values from the allowed options list",
    "Return ONLY valid JSON — no markdown, no code fences, no explanations",
    "Generate content that matches the user's language (if the user writes in Russian, generate Russian content)",
    "Be creative with text content — make it specific and engaging, not generic",
    "For image URLs, use https://picsum.photos/WIDTH/HEIGHT?random=N with appropriate sizes",
    "For avatar URLs, use https://i.pravatar.cc/SIZE?img=N",
    "Generate IDs using 8 random alphanumeric characters",
];

pub(crate) const EXAMPLE_PROMPT: &str = "Create a hero section for a coffee shop";

/// The worked example shown to the model, in the exact response shape expected back.
pub(crate) fn example_response() -> serde_json::Value {
    json!({
        "blocks": [
            {
                "type": "Hero",
                "props": {
                    "id": "Hero-kf82nd4s",
                    "title": "Handcrafted Coffee, Made With Love",
                    "subtitle": "Every cup tells a story. Visit our cozy shop and discover your perfect blend.",
                    "primaryButtonText": "View Menu",
                    "primaryButtonHref": "/menu",
                    "secondaryButtonText": "Find Us",
                    "secondaryButtonHref": "/location",
                    "backgroundImage": "",
                    "alignment": "center"
                }
            }
        ]
    })
}

/// Template rendering failure. Only reachable through a broken template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("prompt template error: {0}")]
pub struct PromptError(pub String);

/// Renders the system prompt: preamble, schema description, output format,
/// rules and one worked example. Deterministic for a given registry.
pub fn build_system_prompt(registry: &SchemaRegistry) -> Result<String, PromptError> {
    let mut hb = Handlebars::new();
    hb.set_strict_mode(true);
    hb.register_escape_fn(handlebars::no_escape);
    hb.register_template_string(SYSTEM_TEMPLATE_NAME, SYSTEM_TEMPLATE)
        .map_err(|e| PromptError(e.to_string()))?;

    let example = serde_json::to_string_pretty(&example_response())
        .map_err(|e| PromptError(e.to_string()))?;
    let rules: Vec<String> = RULES
        .iter()
        .enumerate()
        .map(|(i, rule)| format!("{}. {rule}", i + 1))
        .collect();
    let data = json!({
        "schema": describe(registry),
        "rules": rules.join("\n"),
        "example_prompt": EXAMPLE_PROMPT,
        "example_response": example,
    });
    hb.render(SYSTEM_TEMPLATE_NAME, &data)
        .map_err(|e| PromptError(e.to_string()))
}

/// User message: the prompt plus, when the page already has blocks, a
/// sentence listing their types.
pub fn build_user_message(prompt: &str, current_blocks: &[String]) -> String {
    if current_blocks.is_empty() {
        return prompt.to_string();
    }
    format!(
        "{prompt}\n\nCurrent page already has these blocks: {}. Consider this context when generating new blocks.",
        current_blocks.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_registry;

    fn system_prompt() -> String {
        let registry = default_registry().expect("catalog");
        build_system_prompt(&registry).expect("render")
    }

    #[test]
    fn system_prompt_embeds_schema_rules_and_example() {
        let prompt = system_prompt();
        assert!(prompt.starts_with("You are an AI assistant for a visual page builder"));
        assert!(prompt.contains("### Hero (Hero Section)\nFields:\n  - title: text\n"));
        assert!(prompt.contains("  - alignment: radio [left, center]"));
        assert!(prompt.contains("1. Each block MUST have an \"id\" in props."));
        assert!(prompt.contains("\n11. Generate IDs using 8 random alphanumeric characters"));
        assert!(!prompt.contains("content: custom"));
        assert!(!prompt.contains("&quot;"), "template output must not be HTML-escaped");
    }

    #[test]
    fn example_section_is_parseable_response_json() {
        let prompt = system_prompt();
        let (_, tail) = prompt.split_once("Response:\n").expect("example section");
        let parsed: serde_json::Value = serde_json::from_str(tail).expect("example is JSON");
        assert_eq!(parsed, example_response());
    }

    #[test]
    fn system_prompt_is_deterministic() {
        assert_eq!(system_prompt(), system_prompt());
    }

    #[test]
    fn user_message_appends_page_context() {
        assert_eq!(build_user_message("Add pricing", &[]), "Add pricing");
        assert_eq!(
            build_user_message("Add pricing", &["Hero".into(), "Features".into()]),
            "Add pricing\n\nCurrent page already has these blocks: Hero, Features. \
             Consider this context when generating new blocks."
        );
    }
}
