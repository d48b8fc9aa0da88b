//! OpenAI chat-completions provider.
mod adapter;
mod config;
mod options;
mod transport;

pub use adapter::OpenAiProvider;
pub use config::OpenAiClientConfig;
pub use options::OpenAiRequestOptions;

use crate::ProviderId;
use crate::run::RunBuilder;

/// Attaches `OpenAiRequestOptions` to a run. Other providers never see them.
pub trait OpenAiRunBuilderExt {
    fn openai_options(self, options: OpenAiRequestOptions) -> Self;
}

impl OpenAiRunBuilderExt for RunBuilder {
    fn openai_options(self, options: OpenAiRequestOptions) -> Self {
        if options.is_empty() {
            return self;
        }
        match serde_json::to_value(options) {
            Ok(value) => {
                self.set_vendor_options_json(ProviderId::new(adapter::OPENAI_PROVIDER), value)
            }
            Err(_) => self,
        }
    }
}
