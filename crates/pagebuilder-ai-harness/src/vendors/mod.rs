//! Vendor integrations. Each vendor registers one `ProviderAdapter` and may add
//! an extension trait on `RunBuilder` for its own options.
pub mod openai;
