/// One piece of the user message. Parts are joined with newlines.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[non_exhaustive]
pub enum InputPart {
    Text(String),
}

/// One piece of a model reply.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[non_exhaustive]
pub enum OutputPart {
    Text(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize, Default)]
pub struct RunOutput {
    pub parts: Vec<OutputPart>,
    /// As reported by the provider, e.g. `stop` or `length`.
    pub finish_reason: Option<String>,
    pub usage: Option<TokenUsage>,
}

impl RunOutput {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![OutputPart::Text(text.into())],
            ..Self::default()
        }
    }

    /// The reply as one string, parts concatenated.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .map(|part| match part {
                OutputPart::Text(text) => text.as_str(),
            })
            .collect()
    }

    /// True when the provider stopped because it hit the token ceiling.
    pub fn was_truncated(&self) -> bool {
        self.finish_reason.as_deref() == Some("length")
    }
}
