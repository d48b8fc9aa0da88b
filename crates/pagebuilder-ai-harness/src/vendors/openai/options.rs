/// Chat-completion fields with no provider-neutral counterpart.
///
/// Unset fields are left out of the request body, except `store`, which the
/// adapter always sends as `false` unless asked otherwise.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OpenAiRequestOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<bool>,
    /// Asks for repeatable sampling; OpenAI treats it as a hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Caller identity forwarded for abuse monitoring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl OpenAiRequestOptions {
    pub fn is_empty(&self) -> bool {
        self.store.is_none() && self.seed.is_none() && self.user.is_none()
    }

    pub fn store(mut self, store: bool) -> Self {
        self.store = Some(store);
        self
    }

    pub fn seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Blank identities are ignored.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        let user = user.into();
        self.user = (!user.trim().is_empty()).then_some(user);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_are_left_out() {
        let options = OpenAiRequestOptions::default().seed(3).user("  ");
        assert_eq!(
            serde_json::to_value(&options).expect("json"),
            serde_json::json!({ "seed": 3 })
        );
        assert!(!options.is_empty());
        assert!(OpenAiRequestOptions::default().user("").is_empty());
    }
}
