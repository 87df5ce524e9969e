mod error;
mod google;
mod mymemory;
mod orchestrator;

pub use error::{ProviderError, TransportCode, TranslateError};
pub use google::GoogleProvider;
pub use mymemory::MyMemoryProvider;
pub use orchestrator::TranslationOrchestrator;

/// Translation provider interface
#[async_trait::async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` into the language identified by `to`
    async fn translate(&self, text: &str, to: &str) -> Result<String, ProviderError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    pub free_tier_available: bool,
}
