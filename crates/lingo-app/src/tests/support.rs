use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use lingo_core::{HistoryStore, MemoryStore, language};
use lingo_translator::{
    ProviderError, ProviderMetadata, TranslationOrchestrator, TranslationProvider,
};

use crate::session::TranslationSession;

/// Provider that returns a fixed outcome and counts calls
pub struct FakeProvider {
    name: String,
    outcome: Result<String, ProviderError>,
    calls: Arc<AtomicUsize>,
}

#[derive(Clone)]
pub struct CallCount(Arc<AtomicUsize>);

impl CallCount {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl FakeProvider {
    pub fn ok(name: &str, text: &str) -> (Box<dyn TranslationProvider>, CallCount) {
        Self::build(name, Ok(text.to_string()))
    }

    pub fn failing(name: &str, err: ProviderError) -> (Box<dyn TranslationProvider>, CallCount) {
        Self::build(name, Err(err))
    }

    fn build(
        name: &str,
        outcome: Result<String, ProviderError>,
    ) -> (Box<dyn TranslationProvider>, CallCount) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = FakeProvider {
            name: name.to_string(),
            outcome,
            calls: calls.clone(),
        };
        (Box::new(provider), CallCount(calls))
    }
}

#[async_trait]
impl TranslationProvider for FakeProvider {
    async fn translate(&self, _text: &str, _to: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: self.name.clone(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

/// Session over in-memory history, targeting `code`
pub fn session_with(providers: Vec<Box<dyn TranslationProvider>>, code: &str) -> TranslationSession {
    let history = HistoryStore::new(Arc::new(MemoryStore::new()), "recentTranslations", 10);
    let language = language::find(code).unwrap_or_else(language::default_language);
    TranslationSession::new(TranslationOrchestrator::new(providers), history, language)
}
